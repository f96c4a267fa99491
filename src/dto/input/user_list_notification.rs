use super::Notification;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct UserListNotification {
    pub user_ids: Vec<Uuid>,
    #[serde(flatten)]
    pub notification: Notification,
}
