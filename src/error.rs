//! Top-level error type aggregating the per-module error enums.

use crate::archive::ArchiveError;
use crate::services::activity_aggregator::ActivityError;
use crate::services::map_builder::MapError;
use crate::services::notification_pipeline::NotificationError;

#[derive(Debug, thiserror::Error)]
pub enum CuratorError {
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Notification(#[from] NotificationError),

    #[error(transparent)]
    Activity(#[from] ActivityError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, CuratorError>;
