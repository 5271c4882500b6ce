use super::NotificationsStoreService;
use crate::dto::{input, output};
use async_trait::async_trait;
use tokio::sync::{watch, Mutex};

pub struct NotificationsStoreServiceImpl {
    records: Mutex<Vec<input::Notification>>,
    snapshot_tx: watch::Sender<output::FeedSnapshot>,
}

impl NotificationsStoreServiceImpl {
    pub fn new() -> Self {
        let records = Mutex::new(Vec::new());
        let (snapshot_tx, _) = watch::channel(output::FeedSnapshot::default());

        Self {
            records,
            snapshot_tx,
        }
    }

    fn create_snapshot(records: &[input::Notification]) -> output::FeedSnapshot {
        let notifications = records
            .iter()
            .map(output::FeedNotification::from)
            .collect::<Vec<_>>();
        let unread_count = notifications
            .iter()
            .filter(|notification| !notification.is_read)
            .count();

        output::FeedSnapshot {
            notifications,
            unread_count,
        }
    }

    fn publish(&self, records: &[input::Notification]) {
        self.snapshot_tx.send_replace(Self::create_snapshot(records));
    }
}

#[async_trait]
impl NotificationsStoreService for NotificationsStoreServiceImpl {
    async fn seed(&self, incoming: Vec<input::Notification>) {
        tracing::debug!(count = incoming.len(), "merging fetched notifications");

        let mut records = self.records.lock().await;
        for incoming_record in incoming {
            match records
                .iter_mut()
                .find(|record| record.id == incoming_record.id)
            {
                // Read flag can only be raised by a merge
                Some(existing) => existing.is_read |= incoming_record.is_read,
                None => records.push(incoming_record),
            }
        }

        self.publish(&records);
    }

    async fn prepend(&self, record: input::Notification) -> bool {
        let mut records = self.records.lock().await;

        if records.iter().any(|existing| existing.id == record.id) {
            tracing::debug!(id = record.id.as_str(), "duplicate notification ignored");
            return false;
        }

        tracing::debug!(id = record.id.as_str(), "prepending notification");
        records.insert(0, record);
        self.publish(&records);

        true
    }

    async fn mark_read(&self, id: &str) -> bool {
        let mut records = self.records.lock().await;

        let found = match records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.is_read = true;
                true
            }
            None => {
                tracing::debug!(id, "notification not present in feed");
                false
            }
        };

        if found {
            self.publish(&records);
        }

        found
    }

    async fn snapshot(&self) -> output::FeedSnapshot {
        let records = self.records.lock().await;

        Self::create_snapshot(&records)
    }

    fn subscribe(&self) -> watch::Receiver<output::FeedSnapshot> {
        self.snapshot_tx.subscribe()
    }
}
