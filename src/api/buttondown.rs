use std::time::Duration;

use anyhow::{bail, Result};
use serde_json::json;

use crate::api::SEND_TIMEOUT_SECS;

const EMAILS_URL: &str = "https://api.buttondown.email/v1/emails";

/// Client for the Buttondown newsletter API.
pub struct ButtondownApi {
    client: reqwest::blocking::Client,
    api_key: String,
}

impl ButtondownApi {
    pub fn new(api_key: &str) -> Result<ButtondownApi> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(SEND_TIMEOUT_SECS))
            .build()?;
        Ok(ButtondownApi {
            client,
            api_key: api_key.to_string(),
        })
    }

    /// Queues one email to the subscriber list. Buttondown reports success
    /// with 2xx; anything at or above 300 is an error.
    pub fn queue_email(&self, subject: &str, body: &str) -> Result<()> {
        let resp = self
            .client
            .post(EMAILS_URL)
            .header("Authorization", format!("Token {}", self.api_key))
            .json(&json!({
                "subject": subject,
                "body": body,
            }))
            .send()?;

        let status = resp.status();
        if status.as_u16() >= 300 {
            let body = resp.text().unwrap_or_default();
            bail!("Buttondown API error: {} {}", status, body);
        }
        Ok(())
    }
}
