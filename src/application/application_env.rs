use anyhow::anyhow;
use std::time::Duration;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub api_url: String,
    pub ws_url: String,

    pub recipient: String,
    pub fetch_limit: u32,
    pub reconnect_interval: Duration,

    /// [None] when the dashboard runs logged out
    pub bearer_token: Option<String>,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("ADMIN_NOTIFIER_FEED_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("ADMIN_NOTIFIER_FEED_LOG_FILENAME")?;
        let api_url = Self::env_var("ADMIN_NOTIFIER_FEED_API_URL")?;
        let ws_url = Self::env_var("ADMIN_NOTIFIER_FEED_WS_URL")?;
        let recipient = Self::env_var("ADMIN_NOTIFIER_FEED_RECIPIENT")?;
        let fetch_limit = Self::env_var("ADMIN_NOTIFIER_FEED_FETCH_LIMIT")?.parse()?;
        let reconnect_interval_seconds =
            Self::env_var("ADMIN_NOTIFIER_FEED_RECONNECT_INTERVAL_SECONDS")?.parse()?;
        let reconnect_interval = Duration::from_secs(reconnect_interval_seconds);
        let bearer_token = std::env::var("ADMIN_NOTIFIER_FEED_BEARER_TOKEN").ok();

        Ok(Self {
            log_directory,
            log_filename,
            api_url,
            ws_url,
            recipient,
            fetch_limit,
            reconnect_interval,
            bearer_token,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
