use super::{dto::PushListenerConfig, push_connection::PushConnection};
use crate::{
    auth::CredentialsProvider,
    service::{
        notifications_feed_service::NotificationsFeedService,
        notifications_store_service::NotificationsStoreService,
    },
};
use futures::StreamExt;
use std::sync::Arc;
use tokio::{sync::watch, task::JoinHandle, time::sleep};
use tokio_tungstenite::connect_async;

///
/// Owner of the push channel lifecycle.
///
/// Keeps a connection open for as long as an admin session exists,
/// reconnects after a fixed interval when the connection drops and
/// refreshes the feed after every successful connect, so records
/// missed while disconnected are reconciled.
///
pub struct PushListenerService {
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl PushListenerService {
    pub fn new(
        config: PushListenerConfig,
        credentials_provider: Arc<dyn CredentialsProvider>,
        feed_service: Arc<dyn NotificationsFeedService>,
        store_service: Arc<dyn NotificationsStoreService>,
    ) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let listener = PushListener {
            config,
            credentials_provider,
            feed_service,
            store_service,
            shutdown_rx,
        };
        let handle = tokio::spawn(listener.run());

        Self {
            shutdown_tx,
            handle,
        }
    }

    ///
    /// Closes the connection and stops reconnecting.
    /// Must be called before the owning context is dropped,
    /// otherwise the connection task leaks across navigation.
    ///
    pub async fn close(self) {
        tracing::info!("closing push listener");

        let _ = self.shutdown_tx.send(true);
        match self.handle.await {
            Ok(()) => tracing::info!("push listener closed"),
            Err(err) => tracing::error!(%err, "push listener task failed"),
        }
    }
}

struct PushListener {
    config: PushListenerConfig,
    credentials_provider: Arc<dyn CredentialsProvider>,
    feed_service: Arc<dyn NotificationsFeedService>,
    store_service: Arc<dyn NotificationsStoreService>,
    shutdown_rx: watch::Receiver<bool>,
}

impl PushListener {
    #[tracing::instrument(name = "Push Listener", skip_all)]
    async fn run(mut self) {
        while !*self.shutdown_rx.borrow() {
            match self.credentials_provider.bearer_token() {
                Some(token) => self.run_connection(&token).await,
                None => tracing::trace!("no admin session, push listener idle"),
            }

            if !self.sleep_before_retry().await {
                break;
            }
        }

        tracing::info!("push listener stopped");
    }

    async fn run_connection(&mut self, token: &str) {
        let url = format!("{}?token={}", self.config.url, token);

        tracing::debug!("connecting to push channel");
        let (websocket, _) = match connect_async(url).await {
            Ok(ok) => ok,
            Err(err) => {
                tracing::warn!(%err, "failed to connect to push channel");
                return;
            }
        };
        tracing::info!("connected to push channel");

        // Fetch is sequenced before event consumption, so the seed
        // cannot clobber records pushed over this connection
        self.feed_service.refresh().await;

        let (ws_tx, ws_rx) = websocket.split();
        let connection = PushConnection::new(
            self.config.recipient.clone(),
            Arc::clone(&self.store_service),
            self.shutdown_rx.clone(),
            ws_tx,
            ws_rx,
        );
        connection.run().await;
    }

    ///
    /// ### Returns
    /// false when the shutdown channel is gone and the loop must stop
    ///
    async fn sleep_before_retry(&mut self) -> bool {
        tokio::select! {
            _ = sleep(self.config.reconnect_interval) => true,
            result = self.shutdown_rx.changed() => result.is_ok(),
        }
    }
}
