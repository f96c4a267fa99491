use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct PushConnection {
    pub user_id: Uuid,
}
