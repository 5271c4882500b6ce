mod dto;
mod error;
mod push_connection;
mod push_listener_service;

pub use dto::PushListenerConfig;
pub use push_listener_service::*;
