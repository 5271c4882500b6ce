use std::time::Duration;

pub struct PushListenerConfig {
    pub url: String,
    pub recipient: String,
    pub reconnect_interval: Duration,
}
