use super::error::Error;
use crate::dto::{Locale, UserRole};
use axum::async_trait;
use uuid::Uuid;

///
/// Read-only view of the product's user directory. This subsystem
/// never mutates users; soft-deleted users are invisible through
/// every operation here.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    ///
    /// Existence probe for a live user.
    ///
    async fn exists(&self, user_id: Uuid) -> Result<bool, Error>;

    ///
    /// Ids of every live user holding `role`.
    /// An empty result is valid.
    ///
    async fn find_ids_by_role(&self, role: UserRole) -> Result<Vec<Uuid>, Error>;

    ///
    /// Ids of every live user.
    ///
    async fn find_all_ids(&self) -> Result<Vec<Uuid>, Error>;

    ///
    /// The user's current preferred locale.
    ///
    /// ### Returns
    /// None when the user does not exist or never picked a locale
    ///
    async fn find_locale(&self, user_id: Uuid) -> Result<Option<Locale>, Error>;
}
