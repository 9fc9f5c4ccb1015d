//! # Archive Collaborator Contracts
//!
//! Narrow trait contracts for the archival storage backend and the
//! relationship index materialized at deposit time. The reconciliation
//! services in this crate only read through these seams; concrete
//! implementations (HTTP facade, search index client) live outside the core
//! and are swapped for in-memory fakes in tests.
//!
//! Deposits are asynchronous and eventually consistent: an accepted deposit
//! may not be indexed yet. Polling a deposit to a consistent state is the
//! facade implementation's responsibility — callers of these traits assume
//! polling has already happened and perform no waiting or retry of their own.

use crate::models::{
    ArchiveDepositInfo, BusinessObjectKind, Collection, DataFile, DataItem, DepositStatus,
    MetadataFile, Project, SearchResult,
};
use async_trait::async_trait;

/// Relation kinds the resolver distinguishes, per parent object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    SubCollection,
    DataItem,
    MetadataFile,
    DataFile,
}

impl RelationshipKind {
    /// The kind of business object found on the child end of this relation.
    pub fn child_kind(&self) -> BusinessObjectKind {
        match self {
            RelationshipKind::SubCollection => BusinessObjectKind::Collection,
            RelationshipKind::DataItem => BusinessObjectKind::DataItem,
            RelationshipKind::MetadataFile => BusinessObjectKind::MetadataFile,
            RelationshipKind::DataFile => BusinessObjectKind::DataFile,
        }
    }
}

/// Traversal policy: which relation kinds count as "children" for each
/// business object type. Relation kinds are visited in this order; within a
/// kind, children keep resolver-enumeration order.
pub fn child_relationships(kind: BusinessObjectKind) -> &'static [RelationshipKind] {
    match kind {
        BusinessObjectKind::Project => &[RelationshipKind::SubCollection],
        BusinessObjectKind::Collection => &[
            RelationshipKind::SubCollection,
            RelationshipKind::DataItem,
            RelationshipKind::MetadataFile,
        ],
        BusinessObjectKind::DataItem => &[RelationshipKind::DataFile],
        BusinessObjectKind::MetadataFile | BusinessObjectKind::DataFile => &[],
    }
}

/// Error types for archive collaborator calls.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("Archive query failed for object {object_id}: {message}")]
    Query { object_id: String, message: String },

    #[error("Archive retrieval failed for deposit {deposit_id}: {message}")]
    Retrieval { deposit_id: String, message: String },

    #[error("Relationship lookup failed for object {object_id}: {message}")]
    Relationship { object_id: String, message: String },
}

/// Query facade over archival storage.
///
/// `list_deposit_info` returns deposit attempts newest-first; the first entry
/// is the most recent attempt and carries the object's current status. The
/// `retrieve_*` calls fetch the deposited representation for a completed
/// deposit and may legitimately come back empty during the archive's
/// inconsistency window even when the status says `DEPOSITED`.
#[async_trait]
pub trait ArchiveService: Send + Sync {
    async fn list_deposit_info(
        &self,
        object_id: &str,
        status: Option<DepositStatus>,
    ) -> Result<Vec<ArchiveDepositInfo>, ArchiveError>;

    async fn retrieve_project(&self, deposit_id: &str)
        -> Result<SearchResult<Project>, ArchiveError>;

    async fn retrieve_collection(
        &self,
        deposit_id: &str,
    ) -> Result<SearchResult<Collection>, ArchiveError>;

    async fn retrieve_data_item(
        &self,
        deposit_id: &str,
    ) -> Result<SearchResult<DataItem>, ArchiveError>;

    async fn retrieve_metadata_file(
        &self,
        deposit_id: &str,
    ) -> Result<SearchResult<MetadataFile>, ArchiveError>;

    async fn retrieve_data_file(
        &self,
        deposit_id: &str,
    ) -> Result<SearchResult<DataFile>, ArchiveError>;
}

/// Parent/child/membership relationships materialized at deposit time.
#[async_trait]
pub trait RelationshipResolver: Send + Sync {
    /// Child object ids of `object_id` for the given relation kind, in the
    /// order the relationships were materialized. An object with no deposit
    /// record has no materialized relationships and yields an empty list.
    async fn child_ids(
        &self,
        object_id: &str,
        kind: RelationshipKind,
    ) -> Result<Vec<String>, ArchiveError>;
}
