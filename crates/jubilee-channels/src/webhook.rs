//! Webhook notifier — POST one JSON payload per birthday.
//!
//! Useful for integrating with external systems (Zapier, n8n, custom APIs)
//! that own the actual delivery (email, chat, push).

use async_trait::async_trait;
use jubilee_core::config::WebhookConfig;
use jubilee_core::error::{JubileeError, Result};
use jubilee_core::traits::Notifier;
use jubilee_core::types::{BIRTHDATE_FORMAT, User};

pub struct WebhookNotifier {
    config: WebhookConfig,
    client: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(config: WebhookConfig) -> Self {
        Self { config, client: reqwest::Client::new() }
    }

    /// Outbound payload for one user.
    fn payload(user: &User) -> serde_json::Value {
        serde_json::json!({
            "event": "birthday",
            "user_id": user.id.as_str(),
            "birthdate": user.birthdate.format(BIRTHDATE_FORMAT).to_string(),
        })
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    fn name(&self) -> &str {
        "webhook"
    }

    async fn notify(&self, user: &User) -> Result<()> {
        let mut request = self.client.post(&self.config.url).json(&Self::payload(user));
        if let Some(secret) = &self.config.secret {
            request = request.header("X-Jubilee-Secret", secret);
        }

        let response = request
            .send()
            .await
            .map_err(|e| JubileeError::send_failed(format!("Webhook send failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(JubileeError::send_failed(format!("Webhook {status}: {text}")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_payload_shape() {
        let user = User::new("u-42", NaiveDate::from_ymd_opt(1992, 3, 2).unwrap());
        let payload = WebhookNotifier::payload(&user);
        assert_eq!(payload["event"], "birthday");
        assert_eq!(payload["user_id"], "u-42");
        assert_eq!(payload["birthdate"], "1992-03-02");
    }
}
