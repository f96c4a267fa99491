use super::{entity::UserFindEntity, Error, UsersRepository};
use crate::dto::{Locale, UserRole};
use axum::async_trait;
use bson::doc;
use futures_util::TryStreamExt;
use mongodb::Database;
use uuid::Uuid;

const USERS: &str = "users";

pub struct UsersRepositoryImpl {
    database: Database,
}

impl UsersRepositoryImpl {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl UsersRepository for UsersRepositoryImpl {
    async fn exists(&self, user_id: Uuid) -> Result<bool, Error> {
        let user_id = bson::Uuid::from(user_id);

        let user = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find_one(doc! {
                "_id": user_id,
                "deleted": { "$ne": true },
            })
            .projection(doc! { "_id": 1 })
            .await?;

        Ok(user.is_some())
    }

    async fn find_ids_by_role(&self, role: UserRole) -> Result<Vec<Uuid>, Error> {
        let users: Vec<UserFindEntity> = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find(doc! {
                "role": role.as_ref(),
                "deleted": { "$ne": true },
            })
            .projection(doc! { "_id": 1 })
            .await?
            .try_collect()
            .await?;

        Ok(users.into_iter().map(|user| user.id.into()).collect())
    }

    async fn find_all_ids(&self) -> Result<Vec<Uuid>, Error> {
        let users: Vec<UserFindEntity> = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find(doc! {
                "deleted": { "$ne": true },
            })
            .projection(doc! { "_id": 1 })
            .await?
            .try_collect()
            .await?;

        Ok(users.into_iter().map(|user| user.id.into()).collect())
    }

    async fn find_locale(&self, user_id: Uuid) -> Result<Option<Locale>, Error> {
        let user_id = bson::Uuid::from(user_id);

        let user = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find_one(doc! {
                "_id": user_id,
                "deleted": { "$ne": true },
            })
            .projection(doc! { "_id": 1, "locale": 1 })
            .await?;

        let locale = user.and_then(|user| {
            user.locale
                .map(|locale| Locale::parse_or_default(&locale))
        });

        Ok(locale)
    }
}
