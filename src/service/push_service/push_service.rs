use crate::dto::output;
use axum::{async_trait, extract::ws::WebSocket};
use uuid::Uuid;

///
/// Best-effort live delivery channel. Notifications are durable the
/// moment they are stored; everything here is an optimization for
/// connected clients and is allowed to fail quietly.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PushService: Send + Sync {
    ///
    /// Pushes a notification to the user's live connections.
    /// Failure (no connection, closed channel) is logged here and
    /// never reported to the caller; the stored notification stays
    /// retrievable either way.
    ///
    async fn publish(&self, user_id: Uuid, notification: output::PushNotification);

    ///
    /// Attaches a websocket client to the user's live channel and
    /// drives it until the client disconnects.
    ///
    async fn handle_client(&self, user_id: Uuid, websocket: WebSocket);

    ///
    /// Drops every live channel, disconnecting all clients.
    ///
    async fn close_all(&self);
}
