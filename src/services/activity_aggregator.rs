//! # Deposit Activity Aggregation
//!
//! Turns a collection's deposit history into a reverse-chronological list of
//! [`Activity`] events: one event for the collection's own deposit, and one
//! event per (depositing actor, calendar day) group of contained data items.
//! Deposits with no recorded completion time aggregate into a distinct
//! null-date group placed last regardless of other ordering.
//!
//! Same-day ordering between different actors is deliberately unspecified;
//! callers may only rely on same-day groups being adjacent and ahead of
//! earlier days.

use crate::archive::{ArchiveError, ArchiveService, RelationshipKind, RelationshipResolver};
use crate::models::{Activity, Collection, DepositStatus, Person};
use chrono::{DateTime, NaiveDate, Utc};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Error types for activity aggregation.
#[derive(Debug, thiserror::Error)]
pub enum ActivityError {
    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

/// Per-day, per-actor accumulator for data item deposits.
///
/// Keys are calendar days with `None` as a distinct bucket for deposits whose
/// completion time is unknown. Each bucket tracks one count per actor plus
/// the latest full timestamp seen that day (`None` for the null bucket, where
/// no real date exists).
#[derive(Debug, Default)]
pub struct DataItemCompressionGroup {
    buckets: HashMap<Option<NaiveDate>, DayBucket>,
}

#[derive(Debug, Default)]
struct DayBucket {
    actor_counts: HashMap<String, (Person, usize)>,
    last_deposit: Option<DateTime<Utc>>,
}

impl DataItemCompressionGroup {
    /// Accumulator seeded with one (possibly null) day bucket.
    pub fn new(initial_date: Option<NaiveDate>) -> Self {
        let mut group = Self::default();
        group.buckets.insert(initial_date, DayBucket::default());
        group
    }

    /// Record one deposit by `actor` at `deposited_at`, bucketed by calendar
    /// day. A missing timestamp lands in the null bucket.
    pub fn add_deposit(&mut self, actor: Person, deposited_at: Option<DateTime<Utc>>) {
        let bucket = self
            .buckets
            .entry(deposited_at.map(|t| t.date_naive()))
            .or_default();
        bucket.actor_counts.entry(actor.id.clone()).or_insert((actor, 0)).1 += 1;
        if let Some(timestamp) = deposited_at {
            bucket.last_deposit = Some(match bucket.last_deposit {
                Some(existing) if existing > timestamp => existing,
                _ => timestamp,
            });
        }
    }

    /// Distinct day buckets seen so far; the null key counts as one bucket.
    pub fn all_deposit_dates(&self) -> Vec<Option<NaiveDate>> {
        self.buckets.keys().copied().collect()
    }

    /// Total deposits across all actors on the given day.
    pub fn daily_deposit_count(&self, date: Option<NaiveDate>) -> usize {
        self.buckets
            .get(&date)
            .map(|bucket| bucket.actor_counts.values().map(|(_, count)| count).sum())
            .unwrap_or(0)
    }

    /// Latest full timestamp recorded for the given day; `None` for the null
    /// bucket or an unknown day.
    pub fn last_deposit_date(&self, date: Option<NaiveDate>) -> Option<DateTime<Utc>> {
        self.buckets.get(&date).and_then(|bucket| bucket.last_deposit)
    }

    /// Drain the accumulator into one activity per (day, actor) group.
    /// Same-day groups come out adjacent; cross-actor order within a day is
    /// unspecified.
    pub fn into_activities(self) -> Vec<Activity> {
        let mut activities: Vec<Activity> = self
            .buckets
            .into_iter()
            .flat_map(|(date, bucket)| {
                bucket
                    .actor_counts
                    .into_values()
                    .map(move |(actor, count)| Activity::data_item_deposit(actor, count, date))
            })
            .collect();
        sort_reverse_chronological(&mut activities);
        activities
    }
}

/// Sort most-recent-first with null dates last. The sort is stable so
/// same-day groups stay adjacent.
fn sort_reverse_chronological(activities: &mut [Activity]) {
    activities.sort_by(|a, b| match (a.date, b.date) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(left), Some(right)) => right.cmp(&left),
    });
}

/// Read path that aggregates deposit activity for a collection.
#[derive(Clone)]
pub struct ActivityService {
    archive: Arc<dyn ArchiveService>,
    resolver: Arc<dyn RelationshipResolver>,
}

impl ActivityService {
    pub fn new(archive: Arc<dyn ArchiveService>, resolver: Arc<dyn RelationshipResolver>) -> Self {
        Self { archive, resolver }
    }

    /// Aggregate the deposit history of `collection` into activity events,
    /// most recent first, null-date groups last.
    ///
    /// Data items with no deposit record are skipped — only deposits the
    /// archive acknowledges appear in the feed.
    pub async fn retrieve_activities_for_collection_by_date(
        &self,
        collection: &Collection,
    ) -> Result<Vec<Activity>, ActivityError> {
        debug!(collection_id = %collection.id, "aggregating deposit activity");

        let mut activities = vec![Activity::collection_deposit(
            collection.depositor.clone(),
            collection.deposit_date.map(|t| t.date_naive()),
        )];

        let item_ids = self
            .resolver
            .child_ids(&collection.id, RelationshipKind::DataItem)
            .await?;
        let mut group = DataItemCompressionGroup::default();
        for item_id in item_ids {
            let infos = self
                .archive
                .list_deposit_info(&item_id, Some(DepositStatus::Deposited))
                .await?;
            let Some(info) = infos.first() else {
                debug!(item_id = %item_id, "data item has no acknowledged deposit, skipping");
                continue;
            };
            match self.archive.retrieve_data_item(&info.deposit_id).await?.into_first() {
                Some(item) => group.add_deposit(item.depositor, item.deposit_date),
                None => {
                    warn!(
                        item_id = %item_id,
                        deposit_id = %info.deposit_id,
                        "deposited data item is not retrievable, skipping"
                    );
                }
            }
        }
        activities.extend(group.into_activities());
        sort_reverse_chronological(&mut activities);

        info!(
            collection_id = %collection.id,
            activities = activities.len(),
            "deposit activity aggregated"
        );
        Ok(activities)
    }
}
