use super::ApplicationEnv;
use crate::{
    auth::StaticCredentialsProvider,
    repository::NotificationsRepositoryImpl,
    service::{
        notifications_feed_service::{
            NotificationsFeedService, NotificationsFeedServiceConfig, NotificationsFeedServiceImpl,
        },
        notifications_store_service::NotificationsStoreServiceImpl,
        push_listener_service::{PushListenerConfig, PushListenerService},
    },
};
use std::sync::Arc;

pub struct ApplicationState {
    pub feed_service: Arc<dyn NotificationsFeedService>,
}

pub struct ApplicationStateToClose {
    pub push_listener_service: PushListenerService,
}

pub fn create_state(env: &ApplicationEnv) -> (ApplicationState, ApplicationStateToClose) {
    tracing::info!("creating credentials provider");
    let credentials_provider = Arc::new(StaticCredentialsProvider::new(env.bearer_token.clone()));

    tracing::info!("creating repositories");
    let notifications_repository = Arc::new(NotificationsRepositoryImpl::new(env.api_url.clone()));

    tracing::info!("creating services");
    let store_service = Arc::new(NotificationsStoreServiceImpl::new());

    let config = NotificationsFeedServiceConfig {
        recipient: env.recipient.clone(),
        fetch_limit: env.fetch_limit,
    };
    let feed_service = Arc::new(NotificationsFeedServiceImpl::new(
        config,
        credentials_provider.clone(),
        notifications_repository,
        store_service.clone(),
    ));

    let config = PushListenerConfig {
        url: env.ws_url.clone(),
        recipient: env.recipient.clone(),
        reconnect_interval: env.reconnect_interval,
    };
    let push_listener_service = PushListenerService::new(
        config,
        credentials_provider,
        feed_service.clone(),
        store_service,
    );

    (
        ApplicationState { feed_service },
        ApplicationStateToClose {
            push_listener_service,
        },
    )
}
