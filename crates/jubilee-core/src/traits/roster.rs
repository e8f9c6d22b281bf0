//! Roster provider contract.

use async_trait::async_trait;
use futures::stream::Stream;

use crate::error::Result;
use crate::types::RosterRecord;

/// Lazy sequence of roster records. Items are per-record results so one
/// unreadable row does not poison the rest of the enumeration.
pub type RosterStream = Box<dyn Stream<Item = Result<RosterRecord>> + Send + Unpin>;

/// Enumerates the current user population: a finite stream, order
/// unspecified, no duplicates. Replaces any notion of scanning a dense
/// integer ID range.
#[async_trait]
pub trait RosterProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn records(&self) -> Result<RosterStream>;
}
