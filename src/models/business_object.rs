//! Business object types tracked through deposit into archival storage.
//!
//! These are the deposited representations handed back by the archive query
//! facade, plus the lightweight reference type callers use to name a traversal
//! root before its content has been retrieved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The class of a business object, which governs how the map builder
/// retrieves its deposited representation and which relation kinds count as
/// its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessObjectKind {
    Project,
    Collection,
    DataItem,
    MetadataFile,
    DataFile,
}

impl BusinessObjectKind {
    /// Display string used for the `type` field of map nodes and reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            BusinessObjectKind::Project => "Project",
            BusinessObjectKind::Collection => "Collection",
            BusinessObjectKind::DataItem => "DataItem",
            BusinessObjectKind::MetadataFile => "MetadataFile",
            BusinessObjectKind::DataFile => "DataFile",
        }
    }
}

/// Reference to a business object by identifier and kind.
///
/// This is all the map builder needs to start a traversal; everything else is
/// reconciled from the archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessObjectRef {
    pub id: String,
    pub kind: BusinessObjectKind,
}

impl BusinessObjectRef {
    pub fn new(id: impl Into<String>, kind: BusinessObjectKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }
}

/// Synthetic identifier for a business object that has no canonical
/// identifier assigned yet.
pub fn synthetic_id() -> String {
    format!("urn:uuid:{}", Uuid::new_v4())
}

/// A registered user acting as depositor or notification recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl Person {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Deposited representation of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
}

/// Deposited representation of a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub title: String,
    pub depositor: Person,
    pub deposit_date: Option<DateTime<Utc>>,
}

/// Deposited representation of a data item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataItem {
    pub id: String,
    pub name: String,
    pub depositor: Person,
    pub deposit_date: Option<DateTime<Utc>>,
}

/// Deposited representation of a metadata file attached to a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataFile {
    pub id: String,
    pub name: String,
    pub format: Option<String>,
}

/// Deposited representation of a data file contained in a data item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataFile {
    pub id: String,
    pub name: String,
}

/// Result of an archive retrieval call: zero or one match plus the total
/// number of hits the archive index reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<T> {
    pub matches: Vec<T>,
    pub total: u64,
}

impl<T> SearchResult<T> {
    pub fn empty() -> Self {
        Self {
            matches: Vec::new(),
            total: 0,
        }
    }

    pub fn of(item: T) -> Self {
        Self {
            matches: vec![item],
            total: 1,
        }
    }

    /// Consume the result, yielding the single match if one exists.
    pub fn into_first(self) -> Option<T> {
        self.matches.into_iter().next()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
