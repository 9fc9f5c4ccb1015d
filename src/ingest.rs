//! Read-only view of ingest workflow state.
//!
//! The ingest workflow engine owns the mutable state container; what it hands
//! the notification pipeline is this immutable snapshot taken when the ingest
//! reached its notification step.

use crate::models::BusinessObjectRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Snapshot of one ingest run, keyed by its deposit id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestStatus {
    /// Identifier of the ingest deposit this status describes.
    pub deposit_id: String,
    /// Identifier of the user who started the ingest.
    pub user_id: String,
    /// Top-level business object of the ingested package.
    pub root: BusinessObjectRef,
    /// Ingest-assigned local identifiers, keyed by business object id. Values
    /// keep the order the ingest process assigned them.
    pub alternate_ids: HashMap<String, Vec<String>>,
    /// When the ingest run started.
    pub started_at: Option<DateTime<Utc>>,
}

impl IngestStatus {
    pub fn new(
        deposit_id: impl Into<String>,
        user_id: impl Into<String>,
        root: BusinessObjectRef,
    ) -> Self {
        Self {
            deposit_id: deposit_id.into(),
            user_id: user_id.into(),
            root,
            alternate_ids: HashMap::new(),
            started_at: None,
        }
    }

    pub fn with_alternate_ids(mut self, object_id: impl Into<String>, ids: Vec<String>) -> Self {
        self.alternate_ids.insert(object_id.into(), ids);
        self
    }

    pub fn with_started_at(mut self, started_at: DateTime<Utc>) -> Self {
        self.started_at = Some(started_at);
        self
    }
}
