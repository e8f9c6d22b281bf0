//! Sentinel store contract — the dedup ledger.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;

/// Contract over the shared key-value store used as the dedup ledger.
///
/// The store is shared with other applications; callers are responsible
/// for namespacing their keys (see [`crate::sentinel`]).
#[async_trait]
pub trait SentinelStore: Send + Sync {
    fn name(&self) -> &str;

    /// Atomically set `key` to a marker iff no live entry exists, expiring
    /// at `expires_at`. Returns true iff this call performed the set.
    ///
    /// This must be one atomic operation at the store, never a read
    /// followed by a write. An entry whose expiry has passed counts as
    /// absent and may be taken over by the same call.
    async fn try_claim(&self, key: &str, expires_at: DateTime<Utc>) -> Result<bool>;

    /// Whether a live entry exists. Diagnostic only — gating a send on
    /// this instead of [`try_claim`](Self::try_claim)'s return value
    /// reintroduces the time-of-check/time-of-use gap.
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Cheap reachability check, used once at batch start.
    async fn ping(&self) -> Result<()>;
}
