use super::ApplicationEnv;
use crate::{
    repository::{NotificationsRepositoryImpl, UsersRepositoryImpl},
    service::{
        notifications_service::{
            NotificationsService, NotificationsServiceConfig, NotificationsServiceImpl,
        },
        push_service::{PushService, PushServiceConfig, PushServiceImpl},
        recipients_service::RecipientsServiceImpl,
    },
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub notifications_service: Arc<dyn NotificationsService>,
    pub push_service: Arc<dyn PushService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
    pub push_service: Arc<dyn PushService>,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let notifications_repository = NotificationsRepositoryImpl::new(db.clone()).await?;
    let notifications_repository = Arc::new(notifications_repository);
    let users_repository = UsersRepositoryImpl::new(db);
    let users_repository = Arc::new(users_repository);

    tracing::info!("creating services");
    let recipients_service = RecipientsServiceImpl::new(users_repository.clone());
    let recipients_service = Arc::new(recipients_service);

    let config = PushServiceConfig {
        connection_buffer_size: env.push_connection_buffer_size,
    };
    let push_service: Arc<dyn PushService> = Arc::new(PushServiceImpl::new(config));

    let config = NotificationsServiceConfig {
        success_policy: env.send_success_policy,
    };
    let notifications_service = NotificationsServiceImpl::new(
        config,
        recipients_service,
        push_service.clone(),
        notifications_repository,
        users_repository,
    );
    let notifications_service = Arc::new(notifications_service);

    Ok((
        ApplicationState {
            notifications_service,
            push_service: push_service.clone(),
        },
        ApplicationStateToClose {
            db_client,
            push_service,
        },
    ))
}
