//! # Jubilee Channels
//! Notification sender implementations. The dispatcher treats a channel as
//! opaque: it is only ever invoked after a successful sentinel claim.

pub mod console;
pub mod webhook;

use jubilee_core::JubileeConfig;
use jubilee_core::error::{JubileeError, Result};
use jubilee_core::traits::Notifier;

/// Create a notifier from configuration.
pub fn create_notifier(config: &JubileeConfig) -> Result<Box<dyn Notifier>> {
    match config.channel.backend.as_str() {
        "console" => Ok(Box::new(console::ConsoleNotifier::new())),
        "webhook" => {
            let webhook = config.channel.webhook.clone().ok_or_else(|| {
                JubileeError::config("channel.backend = \"webhook\" but [channel.webhook] is missing")
            })?;
            if !webhook.enabled {
                return Err(JubileeError::channel("Webhook channel is disabled"));
            }
            Ok(Box::new(webhook::WebhookNotifier::new(webhook)))
        }
        other => Err(JubileeError::channel(format!("Unknown channel backend: {other}"))),
    }
}
