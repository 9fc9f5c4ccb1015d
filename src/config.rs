//! Configuration management.
//!
//! `CuratorConfig` is deserialized from an optional `config/curator.*` file
//! layered with `CURATOR_`-prefixed environment variables, so deployments can
//! override single values without a file edit
//! (e.g. `CURATOR_NOTIFICATION__SENDER=curator@archive.example.org`).

use serde::{Deserialize, Serialize};

/// Top-level configuration for the curation core.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CuratorConfig {
    pub archive: ArchiveConfig,
    pub notification: NotificationConfig,
}

/// Settings for the archive collaborator's polling loop. The core services
/// assume polling has already converged; these knobs belong to the facade
/// implementation driving that loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    pub endpoint: String,
    pub poll_interval_secs: u64,
    pub poll_attempts: u32,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080/archive".to_string(),
            poll_interval_secs: 5,
            poll_attempts: 60,
        }
    }
}

/// Settings for outbound notification email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Sender address placed on status report emails.
    pub sender: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            sender: "curator@localhost".to_string(),
        }
    }
}

impl CuratorConfig {
    /// Load configuration from the optional config file plus environment
    /// overrides, falling back to defaults for anything unset.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("config/curator").required(false))
            .add_source(
                config::Environment::with_prefix("CURATOR")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
