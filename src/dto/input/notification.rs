use crate::dto::{LocalizedText, NotificationType};
use serde::Deserialize;
use uuid::Uuid;

///
/// Event data behind a single logical notification, shared by every
/// targeting mode. Recipients are carried separately.
///
#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub reference_id: String,
    pub title: LocalizedText,
    pub message: LocalizedText,
    pub link: Option<String>,
    pub metadata: Option<bson::Document>,
    pub actor_user_id: Option<Uuid>,
}

impl Notification {
    ///
    /// The primary locale variants are the only mandatory content.
    /// Everything else either has a default or is optional.
    ///
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.en.is_empty() {
            return Err("title.en must not be empty");
        }
        if self.message.en.is_empty() {
            return Err("message.en must not be empty");
        }

        Ok(())
    }
}
