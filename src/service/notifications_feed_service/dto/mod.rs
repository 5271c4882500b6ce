mod notifications_feed_service_config;

pub use notifications_feed_service_config::*;
