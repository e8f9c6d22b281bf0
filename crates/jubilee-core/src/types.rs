//! User and roster record types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{JubileeError, Result};

/// Roster birthdates are stored as `YYYY-MM-DD` strings.
pub const BIRTHDATE_FORMAT: &str = "%Y-%m-%d";

/// Opaque, stable user identifier. The roster owns identity; Jubilee only
/// ever uses it as a key component and a log label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A user with a parsed birthdate. The year component is kept for display
/// but ignored by matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub birthdate: NaiveDate,
}

impl User {
    pub fn new(id: impl Into<UserId>, birthdate: NaiveDate) -> Self {
        Self { id: id.into(), birthdate }
    }
}

/// Raw roster row as the provider hands it over. Birthdate stays a string
/// until the dispatch boundary so a bad row becomes a per-user error
/// instead of a crash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRecord {
    pub id: String,
    pub birthdate: String,
}

impl RosterRecord {
    pub fn new(id: impl Into<String>, birthdate: impl Into<String>) -> Self {
        Self { id: id.into(), birthdate: birthdate.into() }
    }

    /// Parse into a [`User`], surfacing bad dates as `MalformedRecord`.
    pub fn parse(&self) -> Result<User> {
        let birthdate = NaiveDate::parse_from_str(&self.birthdate, BIRTHDATE_FORMAT)
            .map_err(|e| {
                JubileeError::malformed(format!(
                    "user {}: birthdate {:?}: {e}",
                    self.id, self.birthdate
                ))
            })?;
        Ok(User::new(self.id.as_str(), birthdate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_parse() {
        let rec = RosterRecord::new("u-42", "1992-03-02");
        let user = rec.parse().unwrap();
        assert_eq!(user.id.as_str(), "u-42");
        assert_eq!(user.birthdate, NaiveDate::from_ymd_opt(1992, 3, 2).unwrap());
    }

    #[test]
    fn test_record_parse_rejects_bad_dates() {
        for bad in ["1999", "03/02/1992", "1992-13-01", ""] {
            let err = RosterRecord::new("u-1", bad).parse().unwrap_err();
            assert!(matches!(err, JubileeError::MalformedRecord(_)), "{bad}");
        }
    }

    #[test]
    fn test_user_id_json_roundtrip() {
        let id = UserId::new("u-7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"u-7\"");
        let parsed: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
