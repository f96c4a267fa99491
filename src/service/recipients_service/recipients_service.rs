use super::{RecipientTarget, Resolution};
use crate::error::Error;
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipientsService: Send + Sync {
    ///
    /// Expands a targeting directive into ids of existing, live
    /// users. Unknown ids in a [RecipientTarget::UserList] are
    /// reported through [Resolution::unknown]; they are expected
    /// data, never an error. An empty resolution is valid.
    ///
    /// ### Errors
    /// - [Error::Database] when the user directory is unreachable
    ///
    async fn resolve(&self, target: RecipientTarget) -> Result<Resolution, Error>;
}
