//! Data model for deposit reconciliation and activity reporting.

pub mod activity;
pub mod archive_deposit_info;
pub mod business_object;
pub mod business_object_map;

pub use activity::{Activity, ActivityType};
pub use archive_deposit_info::{ArchiveDepositInfo, DepositStatus};
pub use business_object::{
    synthetic_id, BusinessObjectKind, BusinessObjectRef, Collection, DataFile, DataItem,
    MetadataFile, Person, Project, SearchResult,
};
pub use business_object_map::BusinessObjectMap;
