use super::{NotificationsFeedService, NotificationsFeedServiceConfig};
use crate::{
    auth::CredentialsProvider,
    dto::output,
    repository::NotificationsRepository,
    service::notifications_store_service::NotificationsStoreService,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;

pub struct NotificationsFeedServiceImpl {
    config: NotificationsFeedServiceConfig,
    credentials_provider: Arc<dyn CredentialsProvider>,
    repository: Arc<dyn NotificationsRepository>,
    store_service: Arc<dyn NotificationsStoreService>,
}

impl NotificationsFeedServiceImpl {
    pub fn new(
        config: NotificationsFeedServiceConfig,
        credentials_provider: Arc<dyn CredentialsProvider>,
        repository: Arc<dyn NotificationsRepository>,
        store_service: Arc<dyn NotificationsStoreService>,
    ) -> Self {
        Self {
            config,
            credentials_provider,
            repository,
            store_service,
        }
    }
}

#[async_trait]
impl NotificationsFeedService for NotificationsFeedServiceImpl {
    #[tracing::instrument(name = "Feed Refresh", skip_all)]
    async fn refresh(&self) {
        let Some(token) = self.credentials_provider.bearer_token() else {
            tracing::trace!("no admin session, skipping refresh");
            return;
        };

        tracing::debug!("refreshing notification feed");
        match self
            .repository
            .find_recent(&token, &self.config.recipient, self.config.fetch_limit)
            .await
        {
            Ok(notifications) => {
                tracing::debug!(count = notifications.len(), "fetched notifications");
                self.store_service.seed(notifications).await;
            }
            Err(err) => tracing::warn!(%err, "failed to fetch notifications"),
        }
    }

    #[tracing::instrument(name = "Mark Read", skip_all, fields(id))]
    async fn mark_read(&self, id: &str) -> bool {
        // Optimistic: the UI reflects the read state before the backend confirms
        let found = self.store_service.mark_read(id).await;
        if !found {
            return false;
        }

        let Some(token) = self.credentials_provider.bearer_token() else {
            tracing::trace!("no admin session, read state kept local");
            return true;
        };

        match self
            .repository
            .update_read(&token, &self.config.recipient, id)
            .await
        {
            Ok(()) => tracing::debug!("read state confirmed"),
            // Local state is kept; the next refresh reconciles with the backend
            Err(err) => tracing::warn!(%err, "failed to confirm read state"),
        }

        true
    }

    async fn snapshot(&self) -> output::FeedSnapshot {
        self.store_service.snapshot().await
    }

    fn subscribe(&self) -> watch::Receiver<output::FeedSnapshot> {
        self.store_service.subscribe()
    }
}
