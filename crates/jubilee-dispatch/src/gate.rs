//! Notification gate — the atomic yearly dedup decision.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use jubilee_core::birthday;
use jubilee_core::error::Result;
use jubilee_core::sentinel;
use jubilee_core::traits::SentinelStore;
use jubilee_core::types::User;
use std::sync::Arc;

/// Decides, in one store round trip, whether this caller is responsible
/// for sending a user's notification this year.
///
/// Invariant: the claim's own return value is the only send gate. The
/// claim is recorded before the caller sends; a failure after that point
/// drops the notification, it never duplicates one.
pub struct NotificationGate {
    store: Arc<dyn SentinelStore>,
    namespace: String,
}

impl NotificationGate {
    pub fn new(store: Arc<dyn SentinelStore>, namespace: impl Into<String>) -> Self {
        Self { store, namespace: namespace.into() }
    }

    pub fn store(&self) -> &dyn SentinelStore {
        self.store.as_ref()
    }

    /// Claim the user's slot for the window containing `today`.
    /// True iff this call won the claim and the caller must now send.
    ///
    /// On store failure nothing was recorded; the caller treats the user
    /// as not-yet-processed and a later run retries safely.
    pub async fn admit(&self, user: &User, today: NaiveDate) -> Result<bool> {
        let key = sentinel::key_for(&self.namespace, &user.id, today);
        let expires_at = expiry_instant(birthday::next_anniversary(today, user.birthdate));
        self.store.try_claim(&key, expires_at).await
    }

    /// Peek at whether this window's notification already went out.
    /// Diagnostic/dry-run only — never a basis for sending.
    pub async fn already_sent(&self, user: &User, today: NaiveDate) -> Result<bool> {
        let key = sentinel::key_for(&self.namespace, &user.id, today);
        self.store.exists(&key).await
    }
}

/// Sentinel expiry for a claim: midnight UTC at the start of the next
/// observed anniversary, so the entry dies exactly when the user becomes
/// eligible again.
fn expiry_instant(next_anniversary: NaiveDate) -> DateTime<Utc> {
    next_anniversary.and_time(NaiveTime::MIN).and_utc()
}
