//! Shared in-memory fakes for the archive, resolver, and notification
//! collaborators. Each fake is a plain data container behind the trait seam,
//! so tests can script exactly the archive state a scenario needs.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use curator_core::archive::{
    ArchiveError, ArchiveService, RelationshipKind, RelationshipResolver,
};
use curator_core::models::{
    ArchiveDepositInfo, Collection, DataFile, DataItem, DepositStatus, MetadataFile, Person,
    Project, SearchResult,
};
use curator_core::notification::{
    Notification, NotificationSendError, NotificationService, TemplateContext, TemplateEngine,
    TemplateError, UserLookupError, UserService,
};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub fn person(id: &str, name: &str) -> Person {
    Person::new(id, name, format!("{id}@example.org"))
}

/// Scriptable archive: deposit records per object id (newest first) plus
/// deposited representations keyed by deposit id.
#[derive(Default)]
pub struct InMemoryArchive {
    deposits: HashMap<String, Vec<ArchiveDepositInfo>>,
    projects: HashMap<String, Project>,
    collections: HashMap<String, Collection>,
    data_items: HashMap<String, DataItem>,
    metadata_files: HashMap<String, MetadataFile>,
    data_files: HashMap<String, DataFile>,
    broken_deposits: HashSet<String>,
}

impl InMemoryArchive {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, object_id: &str, status: DepositStatus, date: Option<DateTime<Utc>>) -> String {
        let deposit_id = format!("dep:{}:{}", object_id, self.deposits.get(object_id).map_or(0, Vec::len));
        // Newest first, matching the facade contract.
        self.deposits.entry(object_id.to_string()).or_default().insert(
            0,
            ArchiveDepositInfo {
                object_id: object_id.to_string(),
                deposit_id: deposit_id.clone(),
                status,
                deposit_date: date,
            },
        );
        deposit_id
    }

    /// Record a deposit attempt with no retrievable representation
    /// (PENDING/FAILED attempts, or DEPOSITED inside the inconsistency window).
    pub fn with_status(mut self, object_id: &str, status: DepositStatus) -> Self {
        self.record(object_id, status, None);
        self
    }

    pub fn with_project(mut self, project: Project) -> Self {
        let deposit_id = self.record(&project.id, DepositStatus::Deposited, None);
        self.projects.insert(deposit_id, project);
        self
    }

    pub fn with_collection(mut self, collection: Collection) -> Self {
        let deposit_id = self.record(
            &collection.id,
            DepositStatus::Deposited,
            collection.deposit_date,
        );
        self.collections.insert(deposit_id, collection);
        self
    }

    pub fn with_data_item(mut self, item: DataItem) -> Self {
        let deposit_id = self.record(&item.id, DepositStatus::Deposited, item.deposit_date);
        self.data_items.insert(deposit_id, item);
        self
    }

    pub fn with_metadata_file(mut self, file: MetadataFile) -> Self {
        let deposit_id = self.record(&file.id, DepositStatus::Deposited, None);
        self.metadata_files.insert(deposit_id, file);
        self
    }

    pub fn with_data_file(mut self, file: DataFile) -> Self {
        let deposit_id = self.record(&file.id, DepositStatus::Deposited, None);
        self.data_files.insert(deposit_id, file);
        self
    }

    /// Make every retrieval for this object's deposits fail, while its
    /// deposit records stay visible.
    pub fn with_broken_retrieval(mut self, object_id: &str) -> Self {
        for info in self.deposits.get(object_id).into_iter().flatten() {
            self.broken_deposits.insert(info.deposit_id.clone());
        }
        self
    }

    fn check_broken(&self, deposit_id: &str) -> Result<(), ArchiveError> {
        if self.broken_deposits.contains(deposit_id) {
            return Err(ArchiveError::Retrieval {
                deposit_id: deposit_id.to_string(),
                message: "simulated retrieval failure".to_string(),
            });
        }
        Ok(())
    }

    fn lookup<T: Clone>(
        &self,
        store: &HashMap<String, T>,
        deposit_id: &str,
    ) -> Result<SearchResult<T>, ArchiveError> {
        self.check_broken(deposit_id)?;
        Ok(store
            .get(deposit_id)
            .cloned()
            .map_or_else(SearchResult::empty, SearchResult::of))
    }
}

#[async_trait]
impl ArchiveService for InMemoryArchive {
    async fn list_deposit_info(
        &self,
        object_id: &str,
        status: Option<DepositStatus>,
    ) -> Result<Vec<ArchiveDepositInfo>, ArchiveError> {
        Ok(self
            .deposits
            .get(object_id)
            .into_iter()
            .flatten()
            .filter(|info| status.map_or(true, |wanted| info.status == wanted))
            .cloned()
            .collect())
    }

    async fn retrieve_project(
        &self,
        deposit_id: &str,
    ) -> Result<SearchResult<Project>, ArchiveError> {
        self.lookup(&self.projects, deposit_id)
    }

    async fn retrieve_collection(
        &self,
        deposit_id: &str,
    ) -> Result<SearchResult<Collection>, ArchiveError> {
        self.lookup(&self.collections, deposit_id)
    }

    async fn retrieve_data_item(
        &self,
        deposit_id: &str,
    ) -> Result<SearchResult<DataItem>, ArchiveError> {
        self.lookup(&self.data_items, deposit_id)
    }

    async fn retrieve_metadata_file(
        &self,
        deposit_id: &str,
    ) -> Result<SearchResult<MetadataFile>, ArchiveError> {
        self.lookup(&self.metadata_files, deposit_id)
    }

    async fn retrieve_data_file(
        &self,
        deposit_id: &str,
    ) -> Result<SearchResult<DataFile>, ArchiveError> {
        self.lookup(&self.data_files, deposit_id)
    }
}

/// Scriptable relationship index: ordered child ids per (parent, kind).
#[derive(Default)]
pub struct InMemoryResolver {
    children: HashMap<(String, RelationshipKind), Vec<String>>,
}

impl InMemoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_children(mut self, parent: &str, kind: RelationshipKind, ids: &[&str]) -> Self {
        self.children.insert(
            (parent.to_string(), kind),
            ids.iter().map(|id| (*id).to_string()).collect(),
        );
        self
    }
}

#[async_trait]
impl RelationshipResolver for InMemoryResolver {
    async fn child_ids(
        &self,
        object_id: &str,
        kind: RelationshipKind,
    ) -> Result<Vec<String>, ArchiveError> {
        Ok(self
            .children
            .get(&(object_id.to_string(), kind))
            .cloned()
            .unwrap_or_default())
    }
}

/// Notification fake that records every send.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<Notification>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl NotificationService for RecordingNotifier {
    async fn send(&self, notification: Notification) -> Result<(), NotificationSendError> {
        if self.fail {
            return Err(NotificationSendError::Transport(
                "simulated smtp outage".to_string(),
            ));
        }
        self.sent.lock().unwrap().push(notification);
        Ok(())
    }
}

/// User lookup fake over a fixed set of people.
#[derive(Default)]
pub struct InMemoryUserService {
    people: HashMap<String, Person>,
}

impl InMemoryUserService {
    pub fn with_person(mut self, person: Person) -> Self {
        self.people.insert(person.id.clone(), person);
        self
    }
}

#[async_trait]
impl UserService for InMemoryUserService {
    async fn find_person(&self, user_id: &str) -> Result<Option<Person>, UserLookupError> {
        Ok(self.people.get(user_id).cloned())
    }
}

/// Template engine fake: replaces `{key}` placeholders from the context.
pub struct StaticTemplateEngine;

impl TemplateEngine for StaticTemplateEngine {
    fn render(&self, template: &str, context: &TemplateContext) -> Result<String, TemplateError> {
        let mut rendered = template.to_string();
        for (key, value) in context.iter() {
            let text = match value.as_str() {
                Some(s) => s.to_string(),
                None => value.to_string(),
            };
            rendered = rendered.replace(&format!("{{{key}}}"), &text);
        }
        Ok(rendered)
    }
}
