//! Sentinel key derivation.
//!
//! The shared store is co-tenant with other applications, so every key is
//! prefixed with a configurable namespace. The eligibility year is part of
//! the key: two dispatch attempts for the same user in the same window
//! always derive the same key, and next year's window is a different key.

use chrono::{Datelike, NaiveDate};

use crate::types::UserId;

/// Key for a user's sent-marker in a given eligibility year.
pub fn sentinel_key(namespace: &str, user: &UserId, year: i32) -> String {
    format!("{namespace}:sent:{user}:{year}")
}

/// Key for the eligibility window containing `today`.
pub fn key_for(namespace: &str, user: &UserId, today: NaiveDate) -> String {
    sentinel_key(namespace, user, today.year())
}
