//! In-memory roster, for tests and embedding.

use async_trait::async_trait;
use futures::stream;
use jubilee_core::error::Result;
use jubilee_core::traits::{RosterProvider, RosterStream};
use jubilee_core::types::RosterRecord;

pub struct MemoryRoster {
    records: Vec<RosterRecord>,
}

impl MemoryRoster {
    pub fn new(records: Vec<RosterRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RosterProvider for MemoryRoster {
    fn name(&self) -> &str {
        "memory"
    }

    async fn records(&self) -> Result<RosterStream> {
        let items: Vec<Result<RosterRecord>> =
            self.records.iter().cloned().map(Ok).collect();
        Ok(Box::new(stream::iter(items)))
    }
}
