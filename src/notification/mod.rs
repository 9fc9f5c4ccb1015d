//! # Notification Collaborator Contracts
//!
//! Email delivery, user lookup, and message templating seams used by the
//! ingest notification pipeline. Transport (SMTP), identity storage, and
//! template syntax all live behind these traits; the pipeline only composes
//! them.

use crate::models::Person;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// A named attachment carried by a notification email.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailAttachment {
    pub filename: String,
    pub mime_type: String,
    pub body: Vec<u8>,
}

/// An outbound notification email, fully composed and ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub recipients: Vec<String>,
    pub sender: String,
    pub subject: String,
    pub body: String,
    pub attachments: Vec<EmailAttachment>,
}

/// Subject and body templates for one notification message, rendered per
/// deposit through a [`TemplateEngine`].
#[derive(Debug, Clone, PartialEq)]
pub struct EmailTemplate {
    pub subject: String,
    pub body: String,
}

/// Rendering context handed to the template engine.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    values: HashMap<String, Value>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}

/// Error types for notification delivery.
#[derive(Debug, thiserror::Error)]
pub enum NotificationSendError {
    #[error("Notification transport failure: {0}")]
    Transport(String),
}

/// Error types for user lookup.
#[derive(Debug, thiserror::Error)]
pub enum UserLookupError {
    #[error("User lookup failed for {user_id}: {message}")]
    Lookup { user_id: String, message: String },
}

/// Error types for template rendering.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template rendering failed: {message}")]
    Render { message: String },
}

/// Outbound email delivery. Implementations own transport concerns
/// (connections, timeouts); this layer applies no retry.
#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn send(&self, notification: Notification) -> Result<(), NotificationSendError>;
}

/// Lookup of registered users by identifier.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn find_person(&self, user_id: &str) -> Result<Option<Person>, UserLookupError>;
}

/// Message template rendering. Synchronous: template expansion is pure
/// string work over an already-built context.
pub trait TemplateEngine: Send + Sync {
    fn render(&self, template: &str, context: &TemplateContext) -> Result<String, TemplateError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_context_round_trip() {
        let mut context = TemplateContext::new();
        context.insert("deposit_id", "dep:9");
        context.insert("item_count", 4);
        assert_eq!(context.get("deposit_id"), Some(&Value::from("dep:9")));
        assert_eq!(context.get("item_count"), Some(&Value::from(4)));
        assert!(context.get("missing").is_none());
        assert_eq!(context.iter().count(), 2);
    }
}
