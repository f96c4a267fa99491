use crate::dto::UserRole;
use uuid::Uuid;

///
/// Targeting directive of a send operation.
///
#[derive(Debug, Clone)]
pub enum RecipientTarget {
    SingleUser(Uuid),
    UserList(Vec<Uuid>),
    AllOfRole(UserRole),
    AllUsers,
}
