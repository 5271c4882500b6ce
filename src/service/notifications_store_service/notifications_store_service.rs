use crate::dto::{input, output};
use async_trait::async_trait;
use tokio::sync::watch;

///
/// Ordered in-memory collection of notifications for the current session.
///
/// The feed is newest first. Records are unique by id and a read flag
/// never reverts to unread. Both producers (fetch and push) funnel
/// through this service, so their interleaving cannot lose updates.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsStoreService: Send + Sync {
    ///
    /// Merge fetched records into the feed.
    ///
    /// Records already present keep their position and their read flag
    /// can only be raised, never cleared. Unseen records are appended
    /// in incoming order, so records pushed before the fetch resolved
    /// stay at the head. An empty input is valid and changes nothing.
    ///
    async fn seed(&self, records: Vec<input::Notification>);

    ///
    /// Insert a single record at the head of the feed,
    /// regardless of its timestamp.
    ///
    /// ### Returns
    /// false when a record with the same id is already present;
    /// the existing record keeps its position
    ///
    async fn prepend(&self, record: input::Notification) -> bool;

    ///
    /// Set the read flag of a single record. Idempotent.
    ///
    /// ### Returns
    /// whether a matching record was found
    ///
    async fn mark_read(&self, id: &str) -> bool;

    async fn snapshot(&self) -> output::FeedSnapshot;

    ///
    /// Channel carrying a fresh [output::FeedSnapshot]
    /// after every feed mutation.
    ///
    fn subscribe(&self) -> watch::Receiver<output::FeedSnapshot>;
}
