use super::{
    dto::Notification,
    entity::{NotificationFindEntity, NotificationInsertEntity},
    Error, NewNotification, NotificationsRepository,
};
use axum::async_trait;
use bson::{doc, oid::ObjectId, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{options::IndexOptions, Collection, Database, IndexModel};
use time::OffsetDateTime;
use uuid::Uuid;

const NOTIFICATIONS: &str = "notifications";
const INDEX_NAME_RECIPIENT_CREATED_AT: &str = "index_recipient_user_id_created_at";

pub struct NotificationsRepositoryImpl {
    database: Database,
}

impl NotificationsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        database.create_collection(NOTIFICATIONS).await?;

        let collection = database.collection(NOTIFICATIONS);
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_RECIPIENT_CREATED_AT.to_string()) {
            Self::create_recipient_created_at_index(&collection).await?;
            tracing::debug!("created index {NOTIFICATIONS}.{INDEX_NAME_RECIPIENT_CREATED_AT}");
        }

        Ok(Self { database })
    }

    async fn create_recipient_created_at_index(
        collection: &Collection<Document>,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! {
                "recipient_user_id": 1,
                "created_at": -1,
            })
            .options(
                IndexOptions::builder()
                    .name(INDEX_NAME_RECIPIENT_CREATED_AT.to_string())
                    .build(),
            )
            .build();

        collection.create_index(index).await?;

        Ok(())
    }
}

#[async_trait]
impl NotificationsRepository for NotificationsRepositoryImpl {
    async fn insert(&self, notification: NewNotification) -> Result<Notification, Error> {
        // created_at goes through bson::DateTime so the value
        // returned to the caller matches the stored precision
        let created_at = DateTime::from(OffsetDateTime::now_utc());
        let insert_entity = NotificationInsertEntity::new(notification, created_at);

        self.database
            .collection::<NotificationInsertEntity>(NOTIFICATIONS)
            .insert_one(&insert_entity)
            .await?;

        Ok(Notification::from(insert_entity))
    }

    async fn find_many_recent(
        &self,
        user_id: Uuid,
        limit: u32,
    ) -> Result<Vec<Notification>, Error> {
        let user_id = bson::Uuid::from(user_id);

        let notifications = self
            .database
            .collection::<NotificationFindEntity>(NOTIFICATIONS)
            .find(doc! {
                "recipient_user_id": user_id,
            })
            .sort(doc! {
                "created_at": -1,
            })
            .limit(limit as i64)
            .await?
            .map_ok(Notification::from)
            .try_collect()
            .await?;

        Ok(notifications)
    }

    async fn update_read(&self, id: ObjectId, user_id: Uuid) -> Result<bool, Error> {
        let user_id = bson::Uuid::from(user_id);

        let update_result = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .update_one(
                doc! {
                    "_id": id,
                    "recipient_user_id": user_id,
                },
                doc! {
                    "$set": {
                        "read": true,
                    }
                },
            )
            .await?;

        // modified_count, so both an ownership mismatch and an
        // already read notification report "no change"
        Ok(update_result.modified_count == 1)
    }

    async fn update_all_read(&self, user_id: Uuid) -> Result<u64, Error> {
        let user_id = bson::Uuid::from(user_id);

        let update_result = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .update_many(
                doc! {
                    "recipient_user_id": user_id,
                    "read": false,
                },
                doc! {
                    "$set": {
                        "read": true,
                    }
                },
            )
            .await?;

        Ok(update_result.modified_count)
    }
}
