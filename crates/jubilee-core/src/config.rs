//! Configuration — `~/.jubilee/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{JubileeError, Result};

/// Top-level Jubilee configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JubileeConfig {
    /// Key prefix in the shared store, isolating this app from co-tenants.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub roster: RosterConfig,

    #[serde(default)]
    pub channel: ChannelConfig,

    #[serde(default)]
    pub dispatch: DispatchConfig,
}

fn default_namespace() -> String {
    "jubilee".into()
}

impl Default for JubileeConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            store: StoreConfig::default(),
            roster: RosterConfig::default(),
            channel: ChannelConfig::default(),
            dispatch: DispatchConfig::default(),
        }
    }
}

/// Sentinel store backend selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// "sqlite" or "memory".
    #[serde(default = "default_store_backend")]
    pub backend: String,
    /// Path to the shared database file (sqlite backend).
    pub path: Option<PathBuf>,
}

fn default_store_backend() -> String {
    "sqlite".into()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { backend: default_store_backend(), path: None }
    }
}

/// Roster backend selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    /// "file" (JSON array of records) or "memory".
    #[serde(default = "default_roster_backend")]
    pub backend: String,
    pub path: Option<PathBuf>,
}

fn default_roster_backend() -> String {
    "file".into()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self { backend: default_roster_backend(), path: None }
    }
}

/// Notification channel selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// "console" or "webhook".
    #[serde(default = "default_channel_backend")]
    pub backend: String,
    pub webhook: Option<WebhookConfig>,
}

fn default_channel_backend() -> String {
    "console".into()
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self { backend: default_channel_backend(), webhook: None }
    }
}

/// Outbound webhook channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    pub url: String,
    /// Optional shared secret, sent as the `X-Jubilee-Secret` header.
    pub secret: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

/// Batch dispatch tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Max users processed concurrently.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    /// Optional wall-clock budget for a run; the batch stops pulling new
    /// users once exceeded.
    pub deadline_secs: Option<u64>,
}

fn default_concurrency() -> usize {
    8
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self { concurrency: default_concurrency(), deadline_secs: None }
    }
}

impl JubileeConfig {
    /// Jubilee home directory (`~/.jubilee`).
    pub fn home_dir() -> PathBuf {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".jubilee")
    }

    /// Default config file path.
    pub fn default_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Load from the default path, falling back to defaults when the file
    /// does not exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            JubileeError::ConfigNotFound(format!("{}: {e}", path.display()))
        })?;
        toml::from_str(&content)
            .map_err(|e| JubileeError::config(format!("{}: {e}", path.display())))
    }

    /// Persist to the default path, creating `~/.jubilee` if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| JubileeError::config(format!("serialize: {e}")))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Sentinel database path: configured, or `~/.jubilee/sentinels.db`.
    pub fn store_path(&self) -> PathBuf {
        self.store
            .path
            .clone()
            .unwrap_or_else(|| Self::home_dir().join("sentinels.db"))
    }

    /// Roster file path: configured, or `~/.jubilee/roster.json`.
    pub fn roster_path(&self) -> PathBuf {
        self.roster
            .path
            .clone()
            .unwrap_or_else(|| Self::home_dir().join("roster.json"))
    }
}
