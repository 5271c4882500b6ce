mod join_frame;
mod push_event_frame;
mod push_listener_config;

pub use join_frame::*;
pub use push_event_frame::*;
pub use push_listener_config::*;
