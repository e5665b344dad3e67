use serde_json::json;

use crate::server::{config::Config, error::AppError};

/// Sends outbound mail through the configured mail-API collaborator.
///
/// The collaborator is a plain JSON-over-HTTP endpoint; delivery failures
/// surface as errors so the caller never claims success for mail that was
/// not accepted.
#[derive(Clone)]
pub struct MailerService {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    sender: String,
    subject: String,
}

impl MailerService {
    pub fn from_config(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            api_url: config.mail_api_url.clone(),
            api_key: config.mail_api_key.clone(),
            sender: config.mail_sender.clone(),
            subject: config.mail_subject.clone(),
        }
    }

    /// Mails a freshly generated temporary password to a user.
    ///
    /// # Arguments
    /// - `to` - Recipient address
    /// - `password` - The plaintext temporary password
    ///
    /// # Returns
    /// - `Ok(())` - The mail API accepted the message
    /// - `Err(AppError::ReqwestErr)` - Transport failure or non-success status
    pub async fn send_temporary_password(&self, to: &str, password: &str) -> Result<(), AppError> {
        let body = json!({
            "from": self.sender,
            "to": to,
            "subject": self.subject,
            "text": format!("Your temporary password is: {}", password),
        });

        self.client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
