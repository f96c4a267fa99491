use crate::{
    dto::{LocalizedText, NotificationCategory, NotificationType},
    repository,
};
use serde::Serialize;
use time::OffsetDateTime;

///
/// Payload pushed over the live channel. Unlike the read model it
/// carries every locale variant, so a connected client can render
/// immediately in its session locale without a follow-up fetch.
///
#[derive(Debug, Clone, Serialize)]
pub struct PushNotification {
    pub id: String,
    pub category: NotificationCategory,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub reference_id: String,
    pub title: LocalizedText,
    pub message: LocalizedText,
    pub link: Option<String>,
    pub metadata: Option<bson::Document>,
    pub created_at: OffsetDateTime,
}

impl From<repository::Notification> for PushNotification {
    fn from(record: repository::Notification) -> Self {
        Self {
            id: record.id.to_hex(),
            category: record.category,
            notification_type: record.notification_type,
            reference_id: record.reference_id,
            title: record.title,
            message: record.message,
            link: record.link,
            metadata: record.metadata,
            created_at: record.created_at,
        }
    }
}
