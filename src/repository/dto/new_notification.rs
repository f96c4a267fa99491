use crate::dto::{LocalizedText, NotificationCategory, NotificationType};
use bson::oid::ObjectId;
use uuid::Uuid;

///
/// Fully built notification ready for persistence. `id` is generated
/// by the builder so the publish step can reference the notification
/// before (or while) the insert completes.
///
#[derive(Debug)]
pub struct NewNotification {
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
}
