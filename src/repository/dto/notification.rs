use crate::dto::{LocalizedText, NotificationCategory, NotificationType};
use bson::oid::ObjectId;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: ObjectId,
    pub recipient_user_id: Uuid,
    pub category: NotificationCategory,
    pub notification_type: NotificationType,
    pub reference_id: String,
    pub title: LocalizedText,
    pub message: LocalizedText,
    pub link: Option<String>,
    pub metadata: Option<bson::Document>,
    pub actor_user_id: Option<Uuid>,
    pub read: bool,
    pub created_at: OffsetDateTime,
}
