//! Aggregated deposit activity events for a collection.

use crate::models::business_object::Person;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of deposit activity being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    CollectionDeposit,
    DataItemDeposit,
}

/// One aggregated activity event: `count` deposits of `activity_type` by
/// `actor` on `date`.
///
/// `date` is day-granularity and nullable — deposits whose completion time is
/// unknown aggregate into a distinct null-date group. Immutable once built.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub actor: Person,
    pub activity_type: ActivityType,
    pub count: usize,
    pub date: Option<NaiveDate>,
    /// Human-readable summary. Excluded from equality.
    pub description: Option<String>,
}

// Equality ignores the description: two activities that aggregate the same
// deposits are the same event regardless of how they were phrased.
impl PartialEq for Activity {
    fn eq(&self, other: &Self) -> bool {
        self.actor == other.actor
            && self.activity_type == other.activity_type
            && self.count == other.count
            && self.date == other.date
    }
}

impl Activity {
    pub fn collection_deposit(actor: Person, date: Option<NaiveDate>) -> Self {
        let description = format!("{} deposited a collection", actor.name);
        Self {
            actor,
            activity_type: ActivityType::CollectionDeposit,
            count: 1,
            date,
            description: Some(description),
        }
    }

    pub fn data_item_deposit(actor: Person, count: usize, date: Option<NaiveDate>) -> Self {
        let noun = if count == 1 { "data item" } else { "data items" };
        let description = format!("{} deposited {count} {noun}", actor.name);
        Self {
            actor,
            activity_type: ActivityType::DataItemDeposit,
            count,
            date,
            description: Some(description),
        }
    }
}
