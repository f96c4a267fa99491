use crate::{
    dto::{LocalizedText, NotificationCategory},
    repository::Notification,
};
use bson::{oid::ObjectId, DateTime};
use serde::Deserialize;
use time::OffsetDateTime;

#[derive(Debug, Deserialize)]
pub struct NotificationFindEntity {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub recipient_user_id: bson::Uuid,
    pub category: String,
    #[serde(rename = "type")]
    pub notification_type: String,
    pub reference_id: String,
    pub title: LocalizedText,
    pub message: LocalizedText,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub metadata: Option<bson::Document>,
    #[serde(default)]
    pub actor_user_id: Option<bson::Uuid>,
    pub read: bool,
    pub created_at: DateTime,
}

impl From<NotificationFindEntity> for Notification {
    fn from(entity: NotificationFindEntity) -> Self {
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
            actor_user_id: entity.actor_user_id.map(uuid::Uuid::from),
            read: entity.read,
            created_at: OffsetDateTime::from(entity.created_at),
        }
    }
}
