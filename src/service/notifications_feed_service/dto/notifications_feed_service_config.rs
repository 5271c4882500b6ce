pub struct NotificationsFeedServiceConfig {
    pub recipient: String,
    pub fetch_limit: u32,
}
