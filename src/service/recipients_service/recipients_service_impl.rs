use super::{RecipientTarget, RecipientsService, Resolution};
use crate::{error::Error, repository::UsersRepository};
use axum::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct RecipientsServiceImpl {
    users_repository: Arc<dyn UsersRepository>,
}

impl RecipientsServiceImpl {
    pub fn new(users_repository: Arc<dyn UsersRepository>) -> Self {
        Self { users_repository }
    }

    async fn resolve_list(&self, user_ids: Vec<Uuid>) -> Result<Resolution, Error> {
        let mut resolution = Resolution::default();

        for user_id in user_ids {
            match self.users_repository.exists(user_id).await? {
                true => resolution.valid.push(user_id),
                false => resolution.unknown.push(user_id),
            }
        }

        Ok(resolution)
    }
}

#[async_trait]
impl RecipientsService for RecipientsServiceImpl {
    async fn resolve(&self, target: RecipientTarget) -> Result<Resolution, Error> {
        let resolution = match target {
            RecipientTarget::SingleUser(user_id) => self.resolve_list(vec![user_id]).await?,
            RecipientTarget::UserList(user_ids) => self.resolve_list(user_ids).await?,
            RecipientTarget::AllOfRole(role) => Resolution {
                valid: self.users_repository.find_ids_by_role(role).await?,
                unknown: Vec::new(),
            },
            RecipientTarget::AllUsers => Resolution {
                valid: self.users_repository.find_all_ids().await?,
                unknown: Vec::new(),
            },
        };

        tracing::debug!(
            valid = resolution.valid.len(),
            unknown = resolution.unknown.len(),
            "resolved recipients",
        );

        Ok(resolution)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{dto::UserRole, repository::MockUsersRepository};
    use mockall::predicate::eq;

    #[tokio::test]
    async fn resolve_single_user_exists() {
        let user_id = Uuid::from_u128(48190238120);

        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_exists()
            .with(eq(user_id))
            .return_once(|_| Ok(true));
        let service = RecipientsServiceImpl::new(Arc::new(users_repository));

        let resolution = service
            .resolve(RecipientTarget::SingleUser(user_id))
            .await
            .unwrap();

        assert_eq!(resolution.valid, vec![user_id]);
        assert!(resolution.unknown.is_empty());
    }

    #[tokio::test]
    async fn resolve_single_user_unknown() {
        let user_id = Uuid::from_u128(48190238120);

        let mut users_repository = MockUsersRepository::new();
        users_repository.expect_exists().return_once(|_| Ok(false));
        let service = RecipientsServiceImpl::new(Arc::new(users_repository));

        let resolution = service
            .resolve(RecipientTarget::SingleUser(user_id))
            .await
            .unwrap();

        assert!(resolution.valid.is_empty());
        assert_eq!(resolution.unknown, vec![user_id]);
    }

    #[tokio::test]
    async fn resolve_user_list_preserves_order_and_reports_unknown() {
        let valid_a = Uuid::from_u128(1);
        let ghost = Uuid::from_u128(2);
        let valid_b = Uuid::from_u128(3);

        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_exists()
            .returning(move |user_id| Ok(user_id != ghost));
        let service = RecipientsServiceImpl::new(Arc::new(users_repository));

        let resolution = service
            .resolve(RecipientTarget::UserList(vec![valid_a, ghost, valid_b]))
            .await
            .unwrap();

        assert_eq!(resolution.valid, vec![valid_a, valid_b]);
        assert_eq!(resolution.unknown, vec![ghost]);
    }

    #[tokio::test]
    async fn resolve_role_expansion() {
        let admin_ids = vec![Uuid::from_u128(1), Uuid::from_u128(2)];
        let admin_ids_clone = admin_ids.clone();

        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_find_ids_by_role()
            .with(eq(UserRole::Admin))
            .return_once(move |_| Ok(admin_ids_clone));
        let service = RecipientsServiceImpl::new(Arc::new(users_repository));

        let resolution = service
            .resolve(RecipientTarget::AllOfRole(UserRole::Admin))
            .await
            .unwrap();

        assert_eq!(resolution.valid, admin_ids);
        assert!(resolution.unknown.is_empty());
    }

    #[tokio::test]
    async fn resolve_role_expansion_empty_is_valid() {
        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_find_ids_by_role()
            .return_once(|_| Ok(Vec::new()));
        let service = RecipientsServiceImpl::new(Arc::new(users_repository));

        let resolution = service
            .resolve(RecipientTarget::AllOfRole(UserRole::Admin))
            .await
            .unwrap();

        assert_eq!(resolution, Resolution::default());
    }

    #[tokio::test]
    async fn resolve_all_users() {
        let ids = vec![Uuid::from_u128(1), Uuid::from_u128(2), Uuid::from_u128(3)];
        let ids_clone = ids.clone();

        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_find_all_ids()
            .return_once(move || Ok(ids_clone));
        let service = RecipientsServiceImpl::new(Arc::new(users_repository));

        let resolution = service.resolve(RecipientTarget::AllUsers).await.unwrap();

        assert_eq!(resolution.valid, ids);
    }
}
