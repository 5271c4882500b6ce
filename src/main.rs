use admin_notifier_feed::{
    application::{self, ApplicationEnv},
    service::notifications_feed_service::NotificationsFeedService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set.
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    application::setup_tracing(&env)?;

    let (state, state_to_close) = application::create_state(&env);

    state.feed_service.refresh().await;

    let mut snapshot_rx = state.feed_service.subscribe();
    let feed_task = tokio::spawn(async move {
        while snapshot_rx.changed().await.is_ok() {
            let snapshot = snapshot_rx.borrow_and_update().clone();
            if let Some(head) = snapshot.notifications.first() {
                tracing::info!(
                    glyph = head.glyph,
                    title = head.title.as_str(),
                    unread = snapshot.unread_count,
                    "feed updated"
                );
            }
        }
    });

    application::shutdown_signal().await;

    application::close(state_to_close).await;
    feed_task.abort();

    Ok(())
}
