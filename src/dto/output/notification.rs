use crate::{
    dto::{Locale, NotificationCategory, NotificationType},
    repository,
};
use serde::Serialize;
use time::OffsetDateTime;

///
/// Read model returned to the UI. Title and message are resolved
/// against the reading user's current preferred locale, so a later
/// locale change affects how stored notifications render.
///
#[derive(Debug, Serialize)]
pub struct Notification {
    pub id: String,
    pub category: NotificationCategory,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub reference_id: String,
    pub title: String,
    pub message: String,
    pub link: Option<String>,
    pub metadata: Option<bson::Document>,
    pub read: bool,
    pub created_at: OffsetDateTime,
}

impl Notification {
    pub fn resolve(record: repository::Notification, locale: Locale) -> Self {
        let title = record.title.resolve(locale).to_string();
        let message = record.message.resolve(locale).to_string();

        Self {
            id: record.id.to_hex(),
            category: record.category,
            notification_type: record.notification_type,
            reference_id: record.reference_id,
            title,
            message,
            link: record.link,
            metadata: record.metadata,
            read: record.read,
            created_at: record.created_at,
        }
    }
}
