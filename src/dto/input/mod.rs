mod notification;
mod push_connection;
mod recent_query;
mod user_list_notification;

pub use notification::*;
pub use push_connection::*;
pub use recent_query::*;
pub use user_list_notification::*;
