//! JSON file roster.
//!
//! The roster file is a JSON array of `{ "id": ..., "birthdate": ... }`
//! records, editable by hand or written by an upstream system.

use async_trait::async_trait;
use futures::stream;
use jubilee_core::error::{JubileeError, Result};
use jubilee_core::traits::{RosterProvider, RosterStream};
use jubilee_core::types::RosterRecord;
use std::collections::HashSet;
use std::path::PathBuf;

pub struct FileRoster {
    path: PathBuf,
}

impl FileRoster {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_records(&self) -> Result<Vec<RosterRecord>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            JubileeError::roster(format!("{}: {e}", self.path.display()))
        })?;
        let records: Vec<RosterRecord> = serde_json::from_str(&content).map_err(|e| {
            JubileeError::roster(format!("{}: {e}", self.path.display()))
        })?;

        // The roster contract promises unique ids; a hand-edited file can
        // break that, so keep the first occurrence and drop the rest.
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(records.len());
        for record in records {
            if seen.insert(record.id.clone()) {
                unique.push(record);
            } else {
                tracing::warn!("Duplicate roster id {:?} ignored", record.id);
            }
        }
        Ok(unique)
    }
}

#[async_trait]
impl RosterProvider for FileRoster {
    fn name(&self) -> &str {
        "file"
    }

    async fn records(&self) -> Result<RosterStream> {
        let items: Vec<Result<RosterRecord>> =
            self.read_records()?.into_iter().map(Ok).collect();
        Ok(Box::new(stream::iter(items)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    fn write_roster(content: &str) -> (tempfile::TempDir, FileRoster) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        std::fs::write(&path, content).unwrap();
        (dir, FileRoster::new(path))
    }

    #[tokio::test]
    async fn test_reads_records() {
        let (_dir, roster) = write_roster(
            r#"[
                {"id": "u-1", "birthdate": "1999-06-21"},
                {"id": "u-2", "birthdate": "1989-01-05"}
            ]"#,
        );
        let records: Vec<_> = roster.records().await.unwrap().collect().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].as_ref().unwrap().id, "u-1");
    }

    #[tokio::test]
    async fn test_duplicate_ids_keep_first() {
        let (_dir, roster) = write_roster(
            r#"[
                {"id": "u-1", "birthdate": "1999-06-21"},
                {"id": "u-1", "birthdate": "1970-01-01"}
            ]"#,
        );
        let records: Vec<_> = roster.records().await.unwrap().collect().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].as_ref().unwrap().birthdate, "1999-06-21");
    }

    #[tokio::test]
    async fn test_missing_file_is_roster_error() {
        let roster = FileRoster::new(PathBuf::from("/nonexistent/roster.json"));
        let err = match roster.records().await {
            Ok(_) => panic!("expected an error"),
            Err(e) => e,
        };
        assert!(matches!(err, JubileeError::Roster(_)));
    }

    #[tokio::test]
    async fn test_invalid_json_is_roster_error() {
        let (_dir, roster) = write_roster("not json");
        let err = match roster.records().await {
            Ok(_) => panic!("expected an error"),
            Err(e) => e,
        };
        assert!(matches!(err, JubileeError::Roster(_)));
    }
}
