use crate::{
    dto::{input, output, UserRole},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsService: Send + Sync {
    ///
    /// Send one notification to one user. The push attempt is
    /// awaited, but only persistence decides the returned result.
    ///
    /// ### Returns
    /// ID of created notification
    ///
    /// ### Errors
    /// - [Error::RecipientNotFound] when no live user has `user_id`
    /// - [Error::Validation] when the primary locale title or
    /// message is empty
    ///
    async fn send_to_user(
        &self,
        user_id: Uuid,
        notification: input::Notification,
    ) -> Result<output::NotificationId, Error>;

    ///
    /// Fan a notification out to an explicit list of users. Unknown
    /// ids become failed entries in the report; one recipient's
    /// persistence failure never aborts the remaining recipients.
    /// Push attempts are dispatched without being awaited.
    ///
    /// Never fails; partial failure is expressed through the report.
    ///
    async fn send_to_users(
        &self,
        user_ids: Vec<Uuid>,
        notification: input::Notification,
    ) -> output::SendReport;

    ///
    /// Fan a notification out to every live user holding `role`.
    /// Zero holders yields an unsuccessful report with no results.
    ///
    async fn send_to_role(
        &self,
        role: UserRole,
        notification: input::Notification,
    ) -> output::SendReport;

    ///
    /// Fan a notification out to every live user.
    ///
    async fn send_to_all(&self, notification: input::Notification) -> output::SendReport;

    ///
    /// Find the user's most recent notifications, title and message
    /// resolved against the user's current preferred locale.
    ///
    async fn find_recent_notifications(
        &self,
        user_id: Uuid,
        limit: u32,
    ) -> Result<Vec<output::Notification>, Error>;

    ///
    /// Mark one notification as read.
    ///
    /// ### Returns
    /// false when the notification is not owned by the user or was
    /// already read
    ///
    async fn mark_read(&self, id: ObjectId, user_id: Uuid) -> Result<bool, Error>;

    ///
    /// Mark every unread notification of the user as read.
    ///
    /// ### Returns
    /// Number of notifications flipped; repeating the call flips 0.
    ///
    async fn mark_all_read(&self, user_id: Uuid) -> Result<u64, Error>;
}
