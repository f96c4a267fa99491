use super::{dto::Notification, error::Error, NewNotification};
use axum::async_trait;
use bson::oid::ObjectId;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsRepository: Send + Sync {
    ///
    /// Inserts one notification document. `created_at` is assigned
    /// here, at insert time. The write is atomic; a failure affects
    /// only this one recipient's record.
    ///
    async fn insert(&self, notification: NewNotification) -> Result<Notification, Error>;

    ///
    /// Finds the user's most recent notifications,
    /// sorted descending by creation date.
    ///
    async fn find_many_recent(
        &self,
        user_id: Uuid,
        limit: u32,
    ) -> Result<Vec<Notification>, Error>;

    ///
    /// Sets read = true on a single notification.
    ///
    /// ### Returns
    /// - false when no unread notification with `id` belongs to
    /// `user_id` (ownership mismatch and repeated calls included)
    ///
    async fn update_read(&self, id: ObjectId, user_id: Uuid) -> Result<bool, Error>;

    ///
    /// Sets read = true on every unread notification of the user.
    ///
    /// ### Returns
    /// Number of modified documents; an immediate second call
    /// modifies 0.
    ///
    async fn update_all_read(&self, user_id: Uuid) -> Result<u64, Error>;
}
