use crate::{
    dto::{LocalizedText, NotificationCategory},
    repository::{NewNotification, Notification},
};
use bson::{oid::ObjectId, DateTime};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct NotificationInsertEntity {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub recipient_user_id: bson::Uuid,
    pub category: String,
    #[serde(rename = "type")]
    pub notification_type: String,
    pub reference_id: String,
    pub title: LocalizedText,
    pub message: LocalizedText,
    pub link: Option<String>,
    pub metadata: Option<bson::Document>,
    pub actor_user_id: Option<bson::Uuid>,
    pub read: bool,
    pub created_at: DateTime,
}

impl NotificationInsertEntity {
    pub fn new(notification: NewNotification, created_at: DateTime) -> Self {
        Self {
            id: notification.id,
            recipient_user_id: notification.recipient_user_id.into(),
            category: notification.category.as_ref().to_string(),
            notification_type: notification.notification_type.to_string(),
            reference_id: notification.reference_id,
            title: notification.title,
            message: notification.message,
            link: notification.link,
            metadata: notification.metadata,
            actor_user_id: notification.actor_user_id.map(bson::Uuid::from),
            read: false,
            created_at,
        }
    }
}

impl From<NotificationInsertEntity> for Notification {
    fn from(entity: NotificationInsertEntity) -> Self {
        Self {
            id: entity.id,
            recipient_user_id: entity.recipient_user_id.into(),
            category: NotificationCategory::parse_or_system(&entity.category),
            // a default variant exists so this cannot fail
            notification_type: entity
                .notification_type
                .parse()
                .unwrap_or_else(|_| unreachable!()),
            reference_id: entity.reference_id,
            title: entity.title,
            message: entity.message,
            link: entity.link,
            metadata: entity.metadata,
            actor_user_id: entity.actor_user_id.map(Uuid::from),
            read: entity.read,
            created_at: OffsetDateTime::from(entity.created_at),
        }
    }
}
