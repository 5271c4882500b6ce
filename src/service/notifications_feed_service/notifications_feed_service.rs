use crate::dto::output;
use async_trait::async_trait;
use tokio::sync::watch;

///
/// Entry point of the notification feed for the rest of the dashboard.
///
/// Notifications are an auxiliary feature. Nothing here returns an error
/// to the caller; backend failures are logged and the feed degrades to
/// showing what it already has.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsFeedService: Send + Sync {
    ///
    /// Pull the most recent notifications and merge them into the feed.
    ///
    /// Skipped when no admin session is active.
    /// A failed pull leaves the feed untouched.
    ///
    async fn refresh(&self);

    ///
    /// Mark a notification as read, locally first,
    /// then confirm with the backend.
    ///
    /// A failed confirmation keeps the local read state;
    /// the next refresh reconciles with the backend.
    ///
    /// ### Returns
    /// whether the feed contained the notification
    ///
    async fn mark_read(&self, id: &str) -> bool;

    async fn snapshot(&self) -> output::FeedSnapshot;

    fn subscribe(&self) -> watch::Receiver<output::FeedSnapshot>;
}
