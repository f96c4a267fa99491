//!
//! Module with all dtos that are passed between server and users
//!

pub mod input;
pub mod output;

mod locale;
mod localized_text;
mod notification_category;
mod notification_type;
mod user_role;

pub use locale::*;
pub use localized_text::*;
pub use notification_category::*;
pub use notification_type::*;
pub use user_role::*;
