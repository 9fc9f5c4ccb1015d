#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

//! # Curator Core
//!
//! Reconciliation core for an archival curation service: reconstructs the
//! object graph under a deposited project or collection, reconciles it
//! against an eventually consistent archive, and produces hierarchical
//! status reports, deposit activity feeds, and ingest notification emails.
//!
//! ## Overview
//!
//! Archive deposits are asynchronous: a deposit call is accepted immediately
//! and polled to completion by the archive collaborator. By the time the
//! services in this crate run, polling is assumed to have converged — they
//! are read-only, single-pass, and tolerate the archive's remaining
//! inconsistency windows (objects deposited but not yet indexed, partial
//! failures among children) instead of retrying.
//!
//! ## Module Organization
//!
//! - [`models`] - Business objects, deposit records, map nodes, activities
//! - [`archive`] - Query facade and relationship resolver contracts
//! - [`notification`] - Email, user lookup, and templating contracts
//! - [`services`] - Map generation, serialization, notification pipeline,
//!   activity aggregation
//! - [`ingest`] - Read-only ingest workflow state snapshot
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging setup
//! - [`error`] - Top-level error aggregation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use curator_core::models::{BusinessObjectKind, BusinessObjectRef};
//! use curator_core::services::BusinessObjectMapService;
//! use std::collections::HashMap;
//!
//! # async fn example(
//! #     archive: std::sync::Arc<dyn curator_core::archive::ArchiveService>,
//! #     resolver: std::sync::Arc<dyn curator_core::archive::RelationshipResolver>,
//! # ) -> Result<(), Box<dyn std::error::Error>> {
//! let service = BusinessObjectMapService::new(archive, resolver);
//! let root = BusinessObjectRef::new("collection:1", BusinessObjectKind::Collection);
//! let map = service.generate_map(&root, &HashMap::new(), true).await?;
//! println!("{} objects reconciled", map.node_count());
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod config;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod models;
pub mod notification;
pub mod services;

pub use config::{ArchiveConfig, CuratorConfig, NotificationConfig};
pub use error::{CuratorError, Result};
pub use ingest::IngestStatus;
pub use models::{
    Activity, ActivityType, ArchiveDepositInfo, BusinessObjectKind, BusinessObjectMap,
    BusinessObjectRef, DepositStatus, Person,
};
pub use services::{
    ActivityService, BusinessObjectMapService, IngestNotificationPipeline, MapError,
    NotificationError,
};
