//! # Ingest Notification Pipeline
//!
//! Orchestrates "generate map → serialize to two formats → attach to an email
//! → send" when an ingest run reaches its notification step.
//!
//! All five collaborators (notification service, user service, template
//! engine, email template, map service) must be wired before `execute` runs;
//! a missing one is a deployment defect surfaced as
//! [`NotificationError::Configuration`] before any side effect. Exactly one
//! send is performed per invocation, and send failures propagate unchanged —
//! job-level retry belongs to the workflow engine driving the pipeline, which
//! also guarantees at-most-once invocation per deposit id.

use crate::config::NotificationConfig;
use crate::ingest::IngestStatus;
use crate::notification::{
    EmailAttachment, EmailTemplate, Notification, NotificationSendError, NotificationService,
    TemplateContext, TemplateEngine, TemplateError, UserLookupError, UserService,
};
use crate::services::map_builder::{BusinessObjectMapService, MapError};
use crate::services::map_serializer::{write_html_map, write_xml_map};
use std::io;
use std::sync::Arc;
use tracing::{debug, info};

/// Error types for notification pipeline execution.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("Notification pipeline is not configured: {missing} is unset")]
    Configuration { missing: &'static str },

    #[error("Depositor {user_id} is not a registered user")]
    UnknownDepositor { user_id: String },

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    User(#[from] UserLookupError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Report serialization failed: {0}")]
    Serialization(#[from] io::Error),

    #[error(transparent)]
    Send(#[from] NotificationSendError),
}

/// Pipeline that emails the deposit status report for a completed ingest.
///
/// Collaborators are attached with the `with_*` builders; `execute` validates
/// that all of them are present before doing any work.
#[derive(Default)]
pub struct IngestNotificationPipeline {
    config: NotificationConfig,
    notifications: Option<Arc<dyn NotificationService>>,
    users: Option<Arc<dyn UserService>>,
    templates: Option<Arc<dyn TemplateEngine>>,
    email_template: Option<EmailTemplate>,
    maps: Option<Arc<BusinessObjectMapService>>,
}

impl IngestNotificationPipeline {
    pub fn new(config: NotificationConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn with_notification_service(mut self, service: Arc<dyn NotificationService>) -> Self {
        self.notifications = Some(service);
        self
    }

    pub fn with_user_service(mut self, service: Arc<dyn UserService>) -> Self {
        self.users = Some(service);
        self
    }

    pub fn with_template_engine(mut self, engine: Arc<dyn TemplateEngine>) -> Self {
        self.templates = Some(engine);
        self
    }

    pub fn with_email_template(mut self, template: EmailTemplate) -> Self {
        self.email_template = Some(template);
        self
    }

    pub fn with_map_service(mut self, service: Arc<BusinessObjectMapService>) -> Self {
        self.maps = Some(service);
        self
    }

    /// Generate the status report for `status`, attach its XML and HTML
    /// renditions, and send one notification email to the depositor.
    pub async fn execute(
        &self,
        deposit_id: &str,
        status: &IngestStatus,
    ) -> Result<(), NotificationError> {
        let notifications = Self::required(&self.notifications, "notification service")?;
        let users = Self::required(&self.users, "user service")?;
        let templates = Self::required(&self.templates, "template engine")?;
        let email_template = Self::required(&self.email_template, "email template")?;
        let maps = Self::required(&self.maps, "business object map service")?;

        info!(deposit_id, root_id = %status.root.id, "executing ingest notification");

        // Non-strict so a partially failed ingest still produces a report;
        // failed nodes are rendered, not fatal.
        let map = maps
            .generate_map(&status.root, &status.alternate_ids, false)
            .await?;
        let root_name = map.name.clone().unwrap_or_else(|| map.id.clone());

        let mut xml = Vec::new();
        write_xml_map(&map, &mut xml)?;
        let mut html = Vec::new();
        write_html_map(&map, &mut html)?;
        let attachments = vec![
            EmailAttachment {
                filename: format!("{deposit_id}-{root_name}.xml"),
                mime_type: "application/xml".to_string(),
                body: xml,
            },
            EmailAttachment {
                filename: format!("{deposit_id}-{root_name}.html"),
                mime_type: "text/html".to_string(),
                body: html,
            },
        ];

        let depositor = users.find_person(&status.user_id).await?.ok_or_else(|| {
            NotificationError::UnknownDepositor {
                user_id: status.user_id.clone(),
            }
        })?;

        let mut context = TemplateContext::new();
        context.insert("deposit_id", deposit_id);
        context.insert("root_name", root_name.as_str());
        context.insert("depositor_name", depositor.name.as_str());
        context.insert("node_count", map.node_count());
        if let Some(started_at) = status.started_at {
            context.insert("started_at", started_at.to_rfc3339());
        }

        let subject = templates.render(&email_template.subject, &context)?;
        let body = templates.render(&email_template.body, &context)?;
        debug!(deposit_id, recipient = %depositor.email, "sending status report email");

        notifications
            .send(Notification {
                recipients: vec![depositor.email],
                sender: self.config.sender.clone(),
                subject,
                body,
                attachments,
            })
            .await?;
        info!(deposit_id, "ingest notification sent");
        Ok(())
    }

    fn required<'a, T>(
        slot: &'a Option<T>,
        missing: &'static str,
    ) -> Result<&'a T, NotificationError> {
        slot.as_ref()
            .ok_or(NotificationError::Configuration { missing })
    }
}
