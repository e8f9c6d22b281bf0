//! Console notifier — prints instead of delivering.
//!
//! Stand-in for a real notification channel; useful for local runs and as
//! the default before a webhook is configured.

use async_trait::async_trait;
use jubilee_core::error::Result;
use jubilee_core::traits::Notifier;
use jubilee_core::types::User;

#[derive(Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    fn name(&self) -> &str {
        "console"
    }

    async fn notify(&self, user: &User) -> Result<()> {
        println!("🎂 Happy birthday, {}!", user.id);
        tracing::info!("Birthday notification printed for {}", user.id);
        Ok(())
    }
}
