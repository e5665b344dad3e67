use crate::server::error::AppError;

/// Parses a record id from its path or body string form.
///
/// Identifier format validation happens before any lookup, so a malformed
/// id is distinguishable from a missing record.
///
/// # Arguments
/// - `value` - The raw id string supplied by the caller
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::UnsupportedId)` - The string is not a well-formed id
pub fn parse_id(value: &str) -> Result<i32, AppError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| AppError::UnsupportedId(format!("'{}' is not a valid id", value)))
}

/// Parses a caller-supplied list of record ids, rejecting the whole request
/// when the list is empty or any element is malformed.
///
/// # Returns
/// - `Ok(Vec<i32>)` - Every id parsed
/// - `Err(AppError::BadRequest)` - The list was empty
/// - `Err(AppError::UnsupportedId)` - An element is not a well-formed id
pub fn parse_ids(values: &[String]) -> Result<Vec<i32>, AppError> {
    if values.is_empty() {
        return Err(AppError::BadRequest("Bad Request".to_string()));
    }

    values.iter().map(|value| parse_id(value)).collect()
}
