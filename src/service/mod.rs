pub mod notifications_feed_service;
pub mod notifications_store_service;
pub mod push_listener_service;
