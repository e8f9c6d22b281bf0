//! # Jubilee Roster
//! User population providers. A roster is a finite stream of records,
//! order unspecified, no duplicates — never a scan over an ID range.

pub mod file;
pub mod memory;

use jubilee_core::JubileeConfig;
use jubilee_core::error::Result;
use jubilee_core::traits::RosterProvider;

/// Create a roster provider from configuration.
pub fn create_roster(config: &JubileeConfig) -> Result<Box<dyn RosterProvider>> {
    match config.roster.backend.as_str() {
        "file" => Ok(Box::new(file::FileRoster::new(config.roster_path()))),
        "memory" => Ok(Box::new(memory::MemoryRoster::new(Vec::new()))),
        other => Err(jubilee_core::JubileeError::roster(format!(
            "Unknown roster backend: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_backend_rejected() {
        let mut config = JubileeConfig::default();
        config.roster.backend = "ldap".into();
        assert!(create_roster(&config).is_err());
    }
}
