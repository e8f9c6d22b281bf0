//! Batch runner — drains the roster once per scheduling period.

use chrono::NaiveDate;
use futures::StreamExt;
use jubilee_core::birthday;
use jubilee_core::error::Result;
use jubilee_core::traits::{Notifier, RosterProvider, SentinelStore};
use jubilee_core::types::RosterRecord;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::gate::NotificationGate;
use crate::summary::{RunSummary, UserOutcome};

/// Per-run options.
#[derive(Clone)]
pub struct DispatchOptions {
    /// The calendar date this run is anchored at. Normally "today";
    /// overridable for testing and backfills.
    pub today: NaiveDate,
    /// Evaluate matching and the gate peek without sending or claiming.
    pub dry_run: bool,
    /// Max users in flight at once.
    pub concurrency: usize,
    /// Cooperative cancellation: stops pulling new users; users already in
    /// flight finish their claim+send unit.
    pub cancel: CancellationToken,
}

impl DispatchOptions {
    pub fn new(today: NaiveDate) -> Self {
        Self { today, dry_run: false, concurrency: 8, cancel: CancellationToken::new() }
    }
}

/// Drives one batch: roster → birthday match → gate → send.
///
/// Every user is processed independently; a bad record, an unreachable
/// store, or a failed send never aborts the rest of the batch.
pub struct Dispatcher {
    gate: NotificationGate,
    notifier: Arc<dyn Notifier>,
}

impl Dispatcher {
    pub fn new(
        store: Arc<dyn SentinelStore>,
        notifier: Arc<dyn Notifier>,
        namespace: impl Into<String>,
    ) -> Self {
        Self { gate: NotificationGate::new(store, namespace), notifier }
    }

    /// Run one batch over the roster. Errors only when the roster itself
    /// cannot be enumerated; everything else lands in the summary.
    pub async fn run(&self, roster: &dyn RosterProvider, opts: &DispatchOptions) -> Result<RunSummary> {
        if let Err(e) = self.gate.store().ping().await {
            // The store may recover mid-run; the exit policy is summary-based.
            tracing::warn!("Sentinel store unreachable at batch start: {e}");
        }

        let records = roster.records().await?;

        let summary = records
            .take_until(opts.cancel.cancelled())
            .map(|record| self.process(record, opts))
            .buffer_unordered(opts.concurrency.max(1))
            .fold(RunSummary::default(), |mut summary, outcome| async move {
                summary.record(outcome);
                summary
            })
            .await;

        if opts.cancel.is_cancelled() {
            tracing::warn!("Run cancelled; unprocessed users are picked up by the next invocation");
        }
        tracing::info!("Batch complete: {summary}");
        Ok(summary)
    }

    /// One user's whole unit: parse → match → claim → send.
    async fn process(&self, record: Result<RosterRecord>, opts: &DispatchOptions) -> UserOutcome {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Skipping unreadable roster record: {e}");
                return UserOutcome::Malformed;
            }
        };
        let user = match record.parse() {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Skipping record: {e}");
                return UserOutcome::Malformed;
            }
        };

        if !birthday::is_due(opts.today, user.birthdate) {
            return UserOutcome::NotDue;
        }

        if opts.dry_run {
            return match self.gate.already_sent(&user, opts.today).await {
                Ok(true) => UserOutcome::AlreadySent,
                Ok(false) => {
                    tracing::info!("[dry-run] Would notify {}", user.id);
                    UserOutcome::WouldSend
                }
                Err(e) => {
                    tracing::warn!("Store check failed for {}: {e}", user.id);
                    UserOutcome::StoreError
                }
            };
        }

        match self.gate.admit(&user, opts.today).await {
            Ok(true) => match self.notifier.notify(&user).await {
                Ok(()) => {
                    tracing::info!("Notified {}", user.id);
                    UserOutcome::Sent
                }
                Err(e) => {
                    // The claim stands; no in-run retry.
                    tracing::error!("Dropped notification for {}: {e}", user.id);
                    UserOutcome::SendFailed
                }
            },
            Ok(false) => UserOutcome::AlreadySent,
            Err(e) => {
                tracing::warn!("Store unavailable for {}, retrying next run: {e}", user.id);
                UserOutcome::StoreError
            }
        }
    }
}
