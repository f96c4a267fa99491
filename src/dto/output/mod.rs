mod notification;
mod notification_id;
mod push_notification;
mod read_updated;
mod send_report;

pub use notification::*;
pub use notification_id::*;
pub use push_notification::*;
pub use read_updated::*;
pub use send_report::*;
