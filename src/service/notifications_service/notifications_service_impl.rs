use super::{NotificationsService, NotificationsServiceConfig, SuccessPolicy};
use crate::{
    dto::{input, output, UserRole},
    error::Error,
    repository::{self, NotificationsRepository, UsersRepository},
    service::{
        push_service::PushService,
        recipients_service::{RecipientTarget, RecipientsService},
    },
};
use axum::async_trait;
use bson::oid::ObjectId;
use futures_util::future::join_all;
use std::{collections::HashSet, sync::Arc};
use uuid::Uuid;

pub struct NotificationsServiceImpl {
    config: NotificationsServiceConfig,
    recipients_service: Arc<dyn RecipientsService>,
    push_service: Arc<dyn PushService>,
    notifications_repository: Arc<dyn NotificationsRepository>,
    users_repository: Arc<dyn UsersRepository>,
}

impl NotificationsServiceImpl {
    pub fn new(
        config: NotificationsServiceConfig,
        recipients_service: Arc<dyn RecipientsService>,
        push_service: Arc<dyn PushService>,
        notifications_repository: Arc<dyn NotificationsRepository>,
        users_repository: Arc<dyn UsersRepository>,
    ) -> Self {
        Self {
            config,
            recipients_service,
            push_service,
            notifications_repository,
            users_repository,
        }
    }

    ///
    /// Verifies the claimed actor against the user directory.
    /// A ghost actor (or a directory failure) downgrades the field
    /// to None instead of blocking the send.
    ///
    async fn resolve_actor(&self, actor_user_id: Option<Uuid>) -> Option<Uuid> {
        let user_id = actor_user_id?;

        match self.users_repository.exists(user_id).await {
            Ok(true) => Some(user_id),
            Ok(false) => {
                tracing::warn!(%user_id, "actor does not exist, storing without actor");
                None
            }
            Err(err) => {
                tracing::warn!(%user_id, %err, "failed to verify actor, storing without actor");
                None
            }
        }
    }

    fn build_record(
        recipient_user_id: Uuid,
        notification: &input::Notification,
        actor_user_id: Option<Uuid>,
    ) -> repository::NewNotification {
        repository::NewNotification {
            id: ObjectId::new(),
            recipient_user_id,
            category: notification.notification_type.category(),
            notification_type: notification.notification_type.clone(),
            reference_id: notification.reference_id.clone(),
            title: notification.title.clone(),
            message: notification.message.clone(),
            link: notification.link.clone(),
            metadata: notification.metadata.clone(),
            actor_user_id,
        }
    }

    ///
    /// Stores one recipient's record and dispatches the push attempt.
    /// A persistence failure is contained to this recipient.
    ///
    async fn deliver(
        &self,
        recipient_user_id: Uuid,
        notification: &input::Notification,
        actor_user_id: Option<Uuid>,
    ) -> output::SendOutcome {
        let record = Self::build_record(recipient_user_id, notification, actor_user_id);

        match self.notifications_repository.insert(record).await {
            Ok(stored) => {
                let id = stored.id.to_hex();
                self.dispatch_push(stored);
                output::SendOutcome::delivered(recipient_user_id, id)
            }
            Err(err) => {
                tracing::warn!(%recipient_user_id, %err, "failed to store notification");
                output::SendOutcome::failed(recipient_user_id, err.to_string())
            }
        }
    }

    ///
    /// Fires the push attempt without awaiting it. Durability is
    /// already settled by the time this runs.
    ///
    fn dispatch_push(&self, stored: repository::Notification) {
        let push_service = self.push_service.clone();
        let user_id = stored.recipient_user_id;

        tokio::spawn(async move {
            push_service.publish(user_id, stored.into()).await;
        });
    }

    async fn fan_out(
        &self,
        recipients: Vec<Uuid>,
        notification: input::Notification,
    ) -> output::SendReport {
        let actor_user_id = self.resolve_actor(notification.actor_user_id).await;

        let notification = &notification;
        let outcomes = join_all(
            recipients
                .into_iter()
                .map(|user_id| async move { self.deliver(user_id, notification, actor_user_id).await }),
        )
        .await;

        self.report(outcomes)
    }

    fn report(&self, results: Vec<output::SendOutcome>) -> output::SendReport {
        let success = match self.config.success_policy {
            SuccessPolicy::AnySuccess => results.iter().any(|outcome| outcome.success),
            SuccessPolicy::AllSuccess => {
                !results.is_empty() && results.iter().all(|outcome| outcome.success)
            }
        };

        output::SendReport { success, results }
    }

    fn empty_report() -> output::SendReport {
        output::SendReport {
            success: false,
            results: Vec::new(),
        }
    }
}

#[async_trait]
impl NotificationsService for NotificationsServiceImpl {
    async fn send_to_user(
        &self,
        user_id: Uuid,
        notification: input::Notification,
    ) -> Result<output::NotificationId, Error> {
        tracing::info!(
            %user_id,
            notification_type = %notification.notification_type,
            "sending notification to user"
        );

        notification.validate().map_err(Error::Validation)?;

        let resolution = self
            .recipients_service
            .resolve(RecipientTarget::SingleUser(user_id))
            .await?;
        if resolution.valid.is_empty() {
            return Err(Error::RecipientNotFound);
        }

        let actor_user_id = self.resolve_actor(notification.actor_user_id).await;
        let record = Self::build_record(user_id, &notification, actor_user_id);
        let stored = self.notifications_repository.insert(record).await?;
        let id = stored.id.to_hex();

        self.push_service.publish(user_id, stored.into()).await;

        Ok(output::NotificationId { id })
    }

    async fn send_to_users(
        &self,
        user_ids: Vec<Uuid>,
        notification: input::Notification,
    ) -> output::SendReport {
        tracing::info!(
            recipients = user_ids.len(),
            notification_type = %notification.notification_type,
            "sending notification to user list"
        );

        let resolution = match self
            .recipients_service
            .resolve(RecipientTarget::UserList(user_ids.clone()))
            .await
        {
            Ok(resolution) => resolution,
            Err(err) => {
                tracing::warn!(%err, "failed to resolve recipients");
                return Self::empty_report();
            }
        };

        let actor_user_id = self.resolve_actor(notification.actor_user_id).await;

        // report entries keep the caller's ordering
        let unknown = resolution.unknown.into_iter().collect::<HashSet<_>>();
        let unknown = &unknown;
        let notification = &notification;
        let outcomes = join_all(user_ids.into_iter().map(|user_id| async move {
            match unknown.contains(&user_id) {
                true => output::SendOutcome::failed(user_id, "recipient not found"),
                false => self.deliver(user_id, notification, actor_user_id).await,
            }
        }))
        .await;

        self.report(outcomes)
    }

    async fn send_to_role(
        &self,
        role: UserRole,
        notification: input::Notification,
    ) -> output::SendReport {
        tracing::info!(
            role = role.as_ref(),
            notification_type = %notification.notification_type,
            "sending notification to role"
        );

        let resolution = match self
            .recipients_service
            .resolve(RecipientTarget::AllOfRole(role))
            .await
        {
            Ok(resolution) => resolution,
            Err(err) => {
                tracing::warn!(%err, "failed to resolve recipients");
                return Self::empty_report();
            }
        };

        self.fan_out(resolution.valid, notification).await
    }

    async fn send_to_all(&self, notification: input::Notification) -> output::SendReport {
        tracing::info!(
            notification_type = %notification.notification_type,
            "sending notification to all users"
        );

        let resolution = match self
            .recipients_service
            .resolve(RecipientTarget::AllUsers)
            .await
        {
            Ok(resolution) => resolution,
            Err(err) => {
                tracing::warn!(%err, "failed to resolve recipients");
                return Self::empty_report();
            }
        };

        self.fan_out(resolution.valid, notification).await
    }

    async fn find_recent_notifications(
        &self,
        user_id: Uuid,
        limit: u32,
    ) -> Result<Vec<output::Notification>, Error> {
        tracing::info!(%user_id, limit, "finding recent notifications");

        let locale = self
            .users_repository
            .find_locale(user_id)
            .await?
            .unwrap_or_default();
        let records = self
            .notifications_repository
            .find_many_recent(user_id, limit)
            .await?;

        let notifications = records
            .into_iter()
            .map(|record| output::Notification::resolve(record, locale))
            .collect();

        Ok(notifications)
    }

    async fn mark_read(&self, id: ObjectId, user_id: Uuid) -> Result<bool, Error> {
        tracing::info!(%id, %user_id, "marking notification as read");

        let updated = self.notifications_repository.update_read(id, user_id).await?;

        Ok(updated)
    }

    async fn mark_all_read(&self, user_id: Uuid) -> Result<u64, Error> {
        tracing::info!(%user_id, "marking all notifications as read");

        let updated_count = self.notifications_repository.update_all_read(user_id).await?;

        Ok(updated_count)
    }
}
