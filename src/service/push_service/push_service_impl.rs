use super::{dto::Message, PushService, PushServiceConfig};
use crate::dto::output;
use axum::{
    async_trait,
    extract::ws::{self, WebSocket},
};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

pub struct PushServiceImpl {
    config: PushServiceConfig,
    users_connections: RwLock<HashMap<Uuid, broadcast::Sender<Arc<Message>>>>,
}

impl PushServiceImpl {
    pub fn new(config: PushServiceConfig) -> Self {
        Self {
            config,
            users_connections: RwLock::new(HashMap::new()),
        }
    }

    async fn forward_messages(mut rx: broadcast::Receiver<Arc<Message>>, mut websocket: WebSocket) {
        loop {
            tokio::select! {
                message = rx.recv() => match message {
                    Ok(message) => {
                        let frame = ws::Message::Text(message.payload.clone());
                        if websocket.send(frame).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "client lagging, push messages dropped");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                },
                incoming = websocket.recv() => match incoming {
                    None | Some(Err(_)) | Some(Ok(ws::Message::Close(_))) => break,
                    Some(Ok(_)) => {}
                },
            }
        }
    }
}

#[async_trait]
impl PushService for PushServiceImpl {
    async fn publish(&self, user_id: Uuid, notification: output::PushNotification) {
        let payload = match serde_json::to_string(&notification) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!(%user_id, %err, "failed to encode push payload");
                return;
            }
        };

        let connections = self.users_connections.read().await;
        let Some(tx) = connections.get(&user_id) else {
            tracing::debug!(%user_id, "no live connection, skipping push");
            return;
        };

        match tx.send(Arc::new(Message { payload })) {
            Ok(receivers) => {
                tracing::info!(%user_id, receivers, id = %notification.id, "queued push message");
            }
            Err(_) => {
                tracing::debug!(%user_id, "live channel closed, skipping push");
            }
        }
    }

    async fn handle_client(&self, user_id: Uuid, websocket: WebSocket) {
        let rx = {
            let mut connections = self.users_connections.write().await;
            let tx = connections
                .entry(user_id)
                .or_insert_with(|| broadcast::channel(self.config.connection_buffer_size).0);
            tx.subscribe()
        };
        tracing::info!(%user_id, "websocket client connected");

        Self::forward_messages(rx, websocket).await;

        // last receiver gone, drop the channel
        let mut connections = self.users_connections.write().await;
        if let Some(tx) = connections.get(&user_id) {
            if tx.receiver_count() == 0 {
                connections.remove(&user_id);
            }
        }
        tracing::info!(%user_id, "websocket client disconnected");
    }

    async fn close_all(&self) {
        let mut connections = self.users_connections.write().await;
        let count = connections.len();
        connections.clear();

        tracing::info!(count, "closed all live channels");
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dto::{LocalizedText, NotificationCategory, NotificationType};
    use serde_json::Value;
    use std::time::Duration;
    use time::OffsetDateTime;

    fn create_service() -> PushServiceImpl {
        PushServiceImpl::new(PushServiceConfig {
            connection_buffer_size: 8,
        })
    }

    fn create_notification() -> output::PushNotification {
        output::PushNotification {
            id: "65f2a5c2e3b25b8f1d9a0001".to_string(),
            category: NotificationCategory::Reservation,
            notification_type: NotificationType::ReservationApproved,
            reference_id: "res_1".to_string(),
            title: LocalizedText {
                en: "Reservation approved".to_string(),
                es: "Reserva aprobada".to_string(),
                fr: "Réservation approuvée".to_string(),
            },
            message: LocalizedText {
                en: "See you at the court".to_string(),
                es: String::new(),
                fr: String::new(),
            },
            link: None,
            metadata: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[tokio::test]
    async fn publish_connected_channel_received_payload() {
        let service = create_service();
        let user_id = Uuid::new_v4();

        // simulate connection
        let (tx, mut rx) = broadcast::channel(8);
        let mut lock = service.users_connections.write().await;
        lock.insert(user_id, tx);
        drop(lock);

        service.publish(user_id, create_notification()).await;

        let message = tokio::time::timeout(Duration::from_millis(100), rx.recv())
            .await
            .unwrap()
            .unwrap();

        let payload = serde_json::from_str::<Value>(&message.payload).unwrap();
        assert_eq!(payload["title"]["es"], "Reserva aprobada");
        assert_eq!(payload["type"], "reservation_approved");
    }

    #[tokio::test]
    async fn publish_other_user_channel_not_touched() {
        let service = create_service();
        let user_id = Uuid::new_v4();
        let other_user_id = Uuid::new_v4();

        let (tx, mut rx) = broadcast::channel(8);
        let mut lock = service.users_connections.write().await;
        lock.insert(other_user_id, tx);
        drop(lock);

        service.publish(user_id, create_notification()).await;

        let message = tokio::time::timeout(Duration::from_millis(100), rx.recv()).await;

        assert!(message.is_err());
    }

    #[tokio::test]
    async fn publish_without_connection_does_not_panic() {
        let service = create_service();

        service.publish(Uuid::new_v4(), create_notification()).await;
    }

    #[tokio::test]
    async fn publish_closed_channel_swallowed() {
        let service = create_service();
        let user_id = Uuid::new_v4();

        let (tx, rx) = broadcast::channel(8);
        drop(rx);
        let mut lock = service.users_connections.write().await;
        lock.insert(user_id, tx);
        drop(lock);

        service.publish(user_id, create_notification()).await;
    }

    #[tokio::test]
    async fn close_all_drops_channels() {
        let service = create_service();
        let user_id = Uuid::new_v4();

        let (tx, mut rx) = broadcast::channel(8);
        let mut lock = service.users_connections.write().await;
        lock.insert(user_id, tx);
        drop(lock);

        service.close_all().await;

        let message = tokio::time::timeout(Duration::from_millis(100), rx.recv())
            .await
            .unwrap();

        assert!(matches!(
            message,
            Err(broadcast::error::RecvError::Closed)
        ));
    }
}
