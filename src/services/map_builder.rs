//! # Business Object Map Generation
//!
//! Reconstructs the full object graph under a root business object against an
//! archival backend that may report partial or delayed state, producing a
//! [`BusinessObjectMap`] status tree.
//!
//! ## Traversal
//!
//! Depth-first from the root. For each object: read the most recent deposit
//! record, retrieve the deposited representation when the status allows it,
//! attach ingest-supplied alternate ids, then recurse into children in
//! resolver-enumeration order. The relationship data is assumed acyclic, but
//! a visited set drops repeated ids so malformed data cannot recurse forever.
//!
//! ## Consistency semantics
//!
//! - No deposit record at all: fatal in strict mode
//!   ([`MapError::ObjectNotInArchive`], no partial map), an unknown-status
//!   node otherwise.
//! - `DEPOSITED` status with unretrievable content: the node keeps its status
//!   and loses only the display fields. This is the archive's known
//!   inconsistency window, logged and tolerated.
//! - `FAILED` is a normal terminal state rendered in the tree, never an error.
//!
//! Polling deposits to completion is the archive collaborator's job; this
//! service is a read-only single pass with no waiting and no shared state
//! between calls.

use crate::archive::{child_relationships, ArchiveError, ArchiveService, RelationshipResolver};
use crate::models::{
    synthetic_id, BusinessObjectKind, BusinessObjectMap, BusinessObjectRef, DepositStatus,
};
use futures::future::BoxFuture;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Error types for map generation.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Business object {object_id} has no deposit record in the archive")]
    ObjectNotInArchive { object_id: String },

    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

/// Service that generates business object maps from archive state.
#[derive(Clone)]
pub struct BusinessObjectMapService {
    archive: Arc<dyn ArchiveService>,
    resolver: Arc<dyn RelationshipResolver>,
}

impl BusinessObjectMapService {
    pub fn new(archive: Arc<dyn ArchiveService>, resolver: Arc<dyn RelationshipResolver>) -> Self {
        Self { archive, resolver }
    }

    /// Generate the status map for the graph reachable from `root`.
    ///
    /// `alternate_ids` maps business object ids to ingest-assigned local
    /// identifiers, attached verbatim to the matching nodes. With `strict`
    /// set, any reachable object with no deposit record at all (the root
    /// included) fails the whole call; otherwise such objects become nodes
    /// with an absent status.
    pub async fn generate_map(
        &self,
        root: &BusinessObjectRef,
        alternate_ids: &HashMap<String, Vec<String>>,
        strict: bool,
    ) -> Result<BusinessObjectMap, MapError> {
        info!(root_id = %root.id, kind = root.kind.display_name(), strict, "generating business object map");
        let mut visited = HashSet::new();
        let map = self
            .build_node(root.clone(), alternate_ids, strict, &mut visited)
            .await?;
        info!(root_id = %map.id, nodes = map.node_count(), "business object map generated");
        Ok(map)
    }

    fn build_node<'a>(
        &'a self,
        object: BusinessObjectRef,
        alternate_ids: &'a HashMap<String, Vec<String>>,
        strict: bool,
        visited: &'a mut HashSet<String>,
    ) -> BoxFuture<'a, Result<BusinessObjectMap, MapError>> {
        Box::pin(async move {
            let object_id = if object.id.is_empty() {
                synthetic_id()
            } else {
                object.id
            };
            visited.insert(object_id.clone());

            let infos = self.archive.list_deposit_info(&object_id, None).await?;
            let mut node = match infos.first() {
                None if strict => {
                    return Err(MapError::ObjectNotInArchive {
                        object_id: object_id.clone(),
                    });
                }
                None => {
                    debug!(object_id = %object_id, "no deposit record, emitting unknown-status node");
                    BusinessObjectMap::new(&object_id)
                }
                Some(info) => {
                    let mut node =
                        BusinessObjectMap::new(&object_id).with_status(info.status);
                    if info.status == DepositStatus::Deposited {
                        match self.retrieve_display_fields(object.kind, &info.deposit_id).await {
                            Ok(Some((name, object_type))) => {
                                node.name = Some(name);
                                node.object_type = Some(object_type);
                            }
                            Ok(None) => {
                                warn!(
                                    object_id = %object_id,
                                    deposit_id = %info.deposit_id,
                                    "deposit reported DEPOSITED but content is not retrievable yet"
                                );
                            }
                            Err(error) => {
                                warn!(
                                    object_id = %object_id,
                                    deposit_id = %info.deposit_id,
                                    error = %error,
                                    "content retrieval failed for DEPOSITED object"
                                );
                            }
                        }
                    }
                    node
                }
            };

            if let Some(ids) = alternate_ids.get(&object_id) {
                node.alternate_ids = ids.clone();
            }

            for kind in child_relationships(object.kind) {
                let child_ids = self.resolver.child_ids(&object_id, *kind).await?;
                for child_id in child_ids {
                    if visited.contains(&child_id) {
                        warn!(
                            object_id = %object_id,
                            child_id = %child_id,
                            "relationship cycle detected, dropping repeated edge"
                        );
                        continue;
                    }
                    let child_ref = BusinessObjectRef::new(child_id, kind.child_kind());
                    let child = self
                        .build_node(child_ref, alternate_ids, strict, visited)
                        .await?;
                    node.children.push(child);
                }
            }

            Ok(node)
        })
    }

    /// Retrieve the display name and type for a deposited object of the
    /// given kind. `Ok(None)` means the archive index has not caught up with
    /// the deposit yet.
    async fn retrieve_display_fields(
        &self,
        kind: BusinessObjectKind,
        deposit_id: &str,
    ) -> Result<Option<(String, String)>, ArchiveError> {
        let type_name = kind.display_name().to_string();
        let fields = match kind {
            BusinessObjectKind::Project => self
                .archive
                .retrieve_project(deposit_id)
                .await?
                .into_first()
                .map(|project| (project.name, type_name)),
            BusinessObjectKind::Collection => self
                .archive
                .retrieve_collection(deposit_id)
                .await?
                .into_first()
                .map(|collection| (collection.title, type_name)),
            BusinessObjectKind::DataItem => self
                .archive
                .retrieve_data_item(deposit_id)
                .await?
                .into_first()
                .map(|item| (item.name, type_name)),
            BusinessObjectKind::MetadataFile => self
                .archive
                .retrieve_metadata_file(deposit_id)
                .await?
                .into_first()
                .map(|file| (file.name, type_name)),
            BusinessObjectKind::DataFile => self
                .archive
                .retrieve_data_file(deposit_id)
                .await?
                .into_first()
                .map(|file| (file.name, type_name)),
        };
        Ok(fields)
    }
}
