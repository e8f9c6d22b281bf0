//! # Jubilee Store
//! Sentinel ledger backends — the "already notified this year" markers.

pub mod memory;
pub mod sqlite;

use jubilee_core::JubileeConfig;
use jubilee_core::error::Result;
use jubilee_core::traits::SentinelStore;

/// Create a sentinel store from configuration.
pub fn create_store(config: &JubileeConfig) -> Result<Box<dyn SentinelStore>> {
    match config.store.backend.as_str() {
        "sqlite" => Ok(Box::new(sqlite::SqliteSentinelStore::open(&config.store_path())?)),
        "memory" => Ok(Box::new(memory::MemorySentinelStore::new())),
        other => Err(jubilee_core::JubileeError::store(format!(
            "Unknown store backend: {other}"
        ))),
    }
}
