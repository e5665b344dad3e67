use crate::server::error::AppError;

/// Checks that a string has the rough shape of an email address: one `@`,
/// a non-empty local part, and a domain with at least one dot and a
/// two-letter-or-longer final label. Deliverability is the mail
/// collaborator's problem, not ours.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Unwraps a required request field, turning absence into a 400.
pub fn require_field<T>(value: Option<T>, name: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("missing required field '{}'", name)))
}

/// Returns the email when it is well-formed, otherwise a 400 error.
pub fn require_valid_email(email: &str) -> Result<&str, AppError> {
    if is_valid_email(email) {
        Ok(email)
    } else {
        Err(AppError::BadRequest("Bad Request".to_string()))
    }
}
