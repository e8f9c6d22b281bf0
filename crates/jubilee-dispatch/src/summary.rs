//! Per-run outcome accounting.

use serde::Serialize;

/// What happened to one user during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserOutcome {
    NotDue,
    Sent,
    /// Dry run only: the gate would have admitted this user.
    WouldSend,
    AlreadySent,
    Malformed,
    StoreError,
    SendFailed,
}

/// Aggregate counters for one batch run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub processed: usize,
    pub sent: usize,
    pub would_send: usize,
    pub skipped_not_due: usize,
    pub already_sent: usize,
    pub malformed: usize,
    pub store_errors: usize,
    pub send_failures: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: UserOutcome) {
        self.processed += 1;
        match outcome {
            UserOutcome::NotDue => self.skipped_not_due += 1,
            UserOutcome::Sent => self.sent += 1,
            UserOutcome::WouldSend => self.would_send += 1,
            UserOutcome::AlreadySent => self.already_sent += 1,
            UserOutcome::Malformed => self.malformed += 1,
            UserOutcome::StoreError => self.store_errors += 1,
            UserOutcome::SendFailed => self.send_failures += 1,
        }
    }

    /// A run is fatal when the store failed for every user that got as far
    /// as the gate — nothing was claimed, nothing was sent, and the whole
    /// batch should be retried once the store is back.
    pub fn is_fatal(&self) -> bool {
        self.store_errors > 0
            && self.sent == 0
            && self.would_send == 0
            && self.already_sent == 0
            && self.send_failures == 0
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "processed {}: sent {}, not due {}, already sent {}, malformed {}, store errors {}, send failures {}",
            self.processed,
            self.sent + self.would_send,
            self.skipped_not_due,
            self.already_sent,
            self.malformed,
            self.store_errors,
            self.send_failures,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tallies() {
        let mut summary = RunSummary::default();
        summary.record(UserOutcome::Sent);
        summary.record(UserOutcome::NotDue);
        summary.record(UserOutcome::NotDue);
        summary.record(UserOutcome::AlreadySent);
        assert_eq!(summary.processed, 4);
        assert_eq!(summary.sent, 1);
        assert_eq!(summary.skipped_not_due, 2);
        assert_eq!(summary.already_sent, 1);
        assert!(!summary.is_fatal());
    }

    #[test]
    fn test_all_store_errors_is_fatal() {
        let mut summary = RunSummary::default();
        summary.record(UserOutcome::NotDue);
        summary.record(UserOutcome::StoreError);
        summary.record(UserOutcome::StoreError);
        assert!(summary.is_fatal());
    }

    #[test]
    fn test_partial_store_errors_not_fatal() {
        let mut summary = RunSummary::default();
        summary.record(UserOutcome::Sent);
        summary.record(UserOutcome::StoreError);
        assert!(!summary.is_fatal());
    }

    #[test]
    fn test_display_mentions_counts() {
        let mut summary = RunSummary::default();
        summary.record(UserOutcome::Sent);
        let line = summary.to_string();
        assert!(line.contains("sent 1"));
        assert!(line.contains("processed 1"));
    }
}
