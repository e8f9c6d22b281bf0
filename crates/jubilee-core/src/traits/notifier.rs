//! Notification sender contract.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::User;

/// Delivers one birthday notification. Opaque and side-effecting; the
/// dispatcher only invokes it after a successful sentinel claim.
#[async_trait]
pub trait Notifier: Send + Sync {
    fn name(&self) -> &str;

    async fn notify(&self, user: &User) -> Result<()>;
}
