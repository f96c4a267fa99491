mod message;
mod push_service_config;

pub use message::*;
pub use push_service_config::*;
