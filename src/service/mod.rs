pub mod notifications_service;
pub mod push_service;
pub mod recipients_service;
