use crate::{
    application::ApplicationState,
    dto::{input, output, UserRole},
    error::Error,
    service::{notifications_service::NotificationsService, push_service::PushService},
};
use axum::{
    extract::{Path, Query, State, WebSocketUpgrade},
    http::StatusCode,
    response::Response,
    routing::{get, post, put},
    Json, Router,
};
use bson::oid::ObjectId;
use std::sync::Arc;
use uuid::Uuid;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/api/v1/notifications/user/:user_id", post(send_to_user))
        .route("/api/v1/notifications/users", post(send_to_users))
        .route("/api/v1/notifications/role/:role", post(send_to_role))
        .route("/api/v1/notifications/broadcast", post(send_to_all))
        .route(
            "/api/v1/users/:user_id/notifications",
            get(find_recent_notifications),
        )
        .route(
            "/api/v1/users/:user_id/notifications/:id/read",
            put(mark_read),
        )
        .route(
            "/api/v1/users/:user_id/notifications/read",
            put(mark_all_read),
        )
        .route("/ws/v1", get(push_connect))
}

async fn send_to_user(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    Path(user_id): Path<Uuid>,
    Json(notification): Json<input::Notification>,
) -> Result<(StatusCode, Json<output::NotificationId>), Error> {
    let notification_id = notifications_service
        .send_to_user(user_id, notification)
        .await?;

    Ok((StatusCode::CREATED, Json(notification_id)))
}

async fn send_to_users(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    Json(payload): Json<input::UserListNotification>,
) -> Result<Json<output::SendReport>, Error> {
    payload.notification.validate().map_err(Error::Validation)?;

    let report = notifications_service
        .send_to_users(payload.user_ids, payload.notification)
        .await;

    Ok(Json(report))
}

async fn send_to_role(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    Path(role): Path<UserRole>,
    Json(notification): Json<input::Notification>,
) -> Result<Json<output::SendReport>, Error> {
    notification.validate().map_err(Error::Validation)?;

    let report = notifications_service.send_to_role(role, notification).await;

    Ok(Json(report))
}

async fn send_to_all(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    Json(notification): Json<input::Notification>,
) -> Result<Json<output::SendReport>, Error> {
    notification.validate().map_err(Error::Validation)?;

    let report = notifications_service.send_to_all(notification).await;

    Ok(Json(report))
}

async fn find_recent_notifications(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<input::RecentQuery>,
) -> Result<Json<Vec<output::Notification>>, Error> {
    let notifications = notifications_service
        .find_recent_notifications(user_id, query.limit)
        .await?;

    Ok(Json(notifications))
}

async fn mark_read(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    Path((user_id, id)): Path<(Uuid, String)>,
) -> Result<Json<output::ReadUpdated>, Error> {
    let id = ObjectId::parse_str(&id).map_err(|_| Error::Validation("invalid notification id"))?;

    let updated = notifications_service.mark_read(id, user_id).await?;

    Ok(Json(output::ReadUpdated { updated }))
}

async fn mark_all_read(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<output::AllReadUpdated>, Error> {
    let updated_count = notifications_service.mark_all_read(user_id).await?;

    Ok(Json(output::AllReadUpdated { updated_count }))
}

async fn push_connect(
    State(push_service): State<Arc<dyn PushService>>,
    Query(connection): Query<input::PushConnection>,
    websocket_upgrade: WebSocketUpgrade,
) -> Response {
    websocket_upgrade.on_upgrade(move |websocket| async move {
        push_service
            .handle_client(connection.user_id, websocket)
            .await;
    })
}
