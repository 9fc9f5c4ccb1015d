//! The hierarchical status report node produced by map generation.

use crate::models::archive_deposit_info::DepositStatus;
use serde::{Deserialize, Serialize};

/// One node of a business object map: the reconciled deposit state of a
/// single business object plus its children in discovery order.
///
/// Equality is structural and recursive, which is what tests and callers
/// compare against manually constructed expected trees.
///
/// Invariant: `deposit_status` reflects the most recent deposit attempt for
/// `id`. When the archive claims `DEPOSITED` but the content cannot be
/// retrieved, the node keeps the status while `name` and `object_type` stay
/// `None` — status known, content not yet retrievable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessObjectMap {
    /// Canonical identifier, or a synthetic id when none has been assigned.
    pub id: String,
    /// Display name from the deposited representation, absent when the
    /// content could not be retrieved.
    pub name: Option<String>,
    /// Display type from the deposited representation's class, absent when
    /// the content could not be retrieved.
    pub object_type: Option<String>,
    /// Most recent deposit status; `None` when the archive has no record of
    /// this object.
    pub deposit_status: Option<DepositStatus>,
    /// Ingest-supplied alternate/local identifiers, in map order.
    pub alternate_ids: Vec<String>,
    /// Child nodes in resolver-enumeration order. No cross-sibling sorting is
    /// ever applied.
    pub children: Vec<BusinessObjectMap>,
}

impl BusinessObjectMap {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            object_type: None,
            deposit_status: None,
            alternate_ids: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_object_type(mut self, object_type: impl Into<String>) -> Self {
        self.object_type = Some(object_type.into());
        self
    }

    pub fn with_status(mut self, status: DepositStatus) -> Self {
        self.deposit_status = Some(status);
        self
    }

    pub fn with_alternate_id(mut self, alternate_id: impl Into<String>) -> Self {
        self.alternate_ids.push(alternate_id.into());
        self
    }

    pub fn with_child(mut self, child: BusinessObjectMap) -> Self {
        self.children.push(child);
        self
    }

    /// Total number of nodes in this subtree, including self.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(BusinessObjectMap::node_count)
            .sum::<usize>()
    }
}
