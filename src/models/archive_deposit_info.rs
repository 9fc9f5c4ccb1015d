//! Deposit status records as reported by the archival storage backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a deposit attempt for a business object.
///
/// Deposits are asynchronous: a deposit call is accepted immediately and the
/// status transitions to `Deposited` or `Failed` only after the archive
/// collaborator has polled the deposit to completion. Both `Deposited` and
/// `Failed` are terminal; `Failed` is a normal state rendered in status
/// reports, never an error by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DepositStatus {
    Pending,
    Deposited,
    Failed,
}

impl DepositStatus {
    /// Whether this status will no longer change without a new deposit attempt.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DepositStatus::Deposited | DepositStatus::Failed)
    }
}

impl fmt::Display for DepositStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepositStatus::Pending => write!(f, "PENDING"),
            DepositStatus::Deposited => write!(f, "DEPOSITED"),
            DepositStatus::Failed => write!(f, "FAILED"),
        }
    }
}

/// One deposit attempt for a business object, as recorded by the archive.
///
/// The archive returns these newest-first; readers interested in the current
/// state of an object take the first entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveDepositInfo {
    /// Business identifier of the deposited object.
    pub object_id: String,
    /// Archive-assigned identifier for this deposit attempt, used for retrieval.
    pub deposit_id: String,
    /// Status of this attempt at the time of the query.
    pub status: DepositStatus,
    /// When the deposit completed; `None` while pending or when the archive
    /// has not recorded a completion time.
    pub deposit_date: Option<DateTime<Utc>>,
}
