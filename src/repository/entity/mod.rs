mod notification_find_entity;
mod notification_insert_entity;
mod user_find_entity;

pub use notification_find_entity::*;
pub use notification_insert_entity::*;
pub use user_find_entity::*;
