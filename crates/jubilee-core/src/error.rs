//! Unified error types for Jubilee.

use thiserror::Error;

/// Result type alias using JubileeError.
pub type Result<T> = std::result::Result<T, JubileeError>;

#[derive(Error, Debug)]
pub enum JubileeError {
    // Sentinel store errors
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Store error: {0}")]
    Store(String),

    // Roster errors
    #[error("Roster error: {0}")]
    Roster(String),

    #[error("Malformed roster record: {0}")]
    MalformedRecord(String),

    // Channel errors
    #[error("Channel error: {0}")]
    Channel(String),

    #[error("Send failed: {0}")]
    SendFailed(String),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl JubileeError {
    pub fn store_unavailable(msg: impl Into<String>) -> Self {
        Self::StoreUnavailable(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    pub fn roster(msg: impl Into<String>) -> Self {
        Self::Roster(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedRecord(msg.into())
    }

    pub fn channel(msg: impl Into<String>) -> Self {
        Self::Channel(msg.into())
    }

    pub fn send_failed(msg: impl Into<String>) -> Self {
        Self::SendFailed(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for errors that must never be treated as "already sent":
    /// the claim was not recorded and a later run may retry safely.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = JubileeError::StoreUnavailable("connection refused".into());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_error_constructors() {
        let e1 = JubileeError::store_unavailable("test");
        assert!(matches!(e1, JubileeError::StoreUnavailable(_)));

        let e2 = JubileeError::malformed("test");
        assert!(matches!(e2, JubileeError::MalformedRecord(_)));

        let e3 = JubileeError::send_failed("test");
        assert!(matches!(e3, JubileeError::SendFailed(_)));

        let e4 = JubileeError::config("test");
        assert!(matches!(e4, JubileeError::Config(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: JubileeError = io_err.into();
        assert!(matches!(err, JubileeError::Io(_)));
    }

    #[test]
    fn test_retryable() {
        assert!(JubileeError::store_unavailable("down").is_retryable());
        assert!(!JubileeError::send_failed("smtp 550").is_retryable());
    }
}
