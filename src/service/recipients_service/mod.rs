mod dto;
mod recipients_service;
mod recipients_service_impl;

pub use dto::*;
pub use recipients_service::*;
pub use recipients_service_impl::*;
