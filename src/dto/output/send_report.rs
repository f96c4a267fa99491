use serde::Serialize;
use uuid::Uuid;

///
/// Aggregated outcome of a batch send. `success` follows the
/// configured success policy; callers interested in completeness
/// must inspect `results` rather than trust the flag alone.
///
#[derive(Debug, Serialize)]
pub struct SendReport {
    pub success: bool,
    pub results: Vec<SendOutcome>,
}

#[derive(Debug, Serialize)]
pub struct SendOutcome {
    pub recipient_id: Uuid,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SendOutcome {
    pub fn delivered(recipient_id: Uuid, notification_id: String) -> Self {
        Self {
            recipient_id,
            success: true,
            notification_id: Some(notification_id),
            error: None,
        }
    }

    pub fn failed(recipient_id: Uuid, error: impl Into<String>) -> Self {
        Self {
            recipient_id,
            success: false,
            notification_id: None,
            error: Some(error.into()),
        }
    }
}
