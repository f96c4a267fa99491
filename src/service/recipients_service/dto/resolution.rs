use uuid::Uuid;

///
/// Concrete recipient set behind a targeting directive. `unknown`
/// can only be populated by [super::RecipientTarget::UserList];
/// role and broadcast expansions query live users by construction.
///
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    pub valid: Vec<Uuid>,
    pub unknown: Vec<Uuid>,
}
