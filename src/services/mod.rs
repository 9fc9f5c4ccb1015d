//! Core reconciliation and reporting services.

pub mod activity_aggregator;
pub mod map_builder;
pub mod map_serializer;
pub mod notification_pipeline;

pub use activity_aggregator::{ActivityError, ActivityService, DataItemCompressionGroup};
pub use map_builder::{BusinessObjectMapService, MapError};
pub use map_serializer::{write_html_map, write_xml_map};
pub use notification_pipeline::{IngestNotificationPipeline, NotificationError};
