use std::time::Duration;

use anyhow::{bail, Result};
use serde_json::json;

use crate::api::SEND_TIMEOUT_SECS;

/// Client for the Telegram Bot sendMessage endpoint.
pub struct TelegramApi {
    client: reqwest::blocking::Client,
    url: String,
    chat_id: String,
}

impl TelegramApi {
    pub fn new(token: &str, chat_id: &str) -> Result<TelegramApi> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(SEND_TIMEOUT_SECS))
            .build()?;
        Ok(TelegramApi {
            client,
            url: format!("https://api.telegram.org/bot{}/sendMessage", token),
            chat_id: chat_id.to_string(),
        })
    }

    /// Sends one HTML-formatted message to the channel. Any non-2xx status
    /// is an error carrying the status and response body.
    pub fn send_message(&self, text: &str) -> Result<()> {
        let resp = self
            .client
            .post(&self.url)
            .json(&json!({
                "chat_id": self.chat_id,
                "text": text,
                "parse_mode": "HTML",
                "disable_web_page_preview": false,
            }))
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            bail!("Telegram API error: {} {}", status, body);
        }
        Ok(())
    }
}
