use super::{
    dto::{JoinFrame, PushEventFrame},
    error::Error,
};
use crate::{dto::input, service::notifications_store_service::NotificationsStoreService};
use anyhow::anyhow;
use futures::{Sink, SinkExt, Stream, StreamExt};
use std::{fmt::Display, sync::Arc};
use tokio::sync::watch;
use tokio_tungstenite::tungstenite::Message;

///
/// Single established connection to the push channel.
///
/// Joins the recipient room, then forwards `notification` events
/// into the store until the socket ends or shutdown is signalled.
/// A malformed event never terminates the connection.
///
pub struct PushConnection<PushSink, PushStream> {
    recipient: String,

    store_service: Arc<dyn NotificationsStoreService>,
    shutdown_rx: watch::Receiver<bool>,

    ws_tx: PushSink,
    ws_rx: PushStream,
}

impl<PushSink, PushStream, SinkError, StreamError> PushConnection<PushSink, PushStream>
where
    PushSink: Sink<Message, Error = SinkError> + Unpin,
    PushStream: Stream<Item = Result<Message, StreamError>> + Unpin,
    SinkError: Display,
    StreamError: Display,
{
    pub fn new(
        recipient: String,
        store_service: Arc<dyn NotificationsStoreService>,
        shutdown_rx: watch::Receiver<bool>,
        ws_tx: PushSink,
        ws_rx: PushStream,
    ) -> Self {
        Self {
            recipient,
            store_service,
            shutdown_rx,
            ws_tx,
            ws_rx,
        }
    }

    #[tracing::instrument(
        name = "Push Connection",
        skip_all,
        fields(
            recipient = self.recipient.as_str(),
        )
    )]
    pub async fn run(mut self) {
        match self.try_run().await {
            Ok(()) => (),
            Err(Error::Close(message)) => {
                tracing::info!("closing connection: {message}");
            }
            Err(Error::Anyhow(err)) => {
                tracing::warn!("{err}");
            }
        }

        tracing::info!("closing websocket");
        match self.ws_tx.close().await {
            Ok(()) => tracing::info!("websocket closed"),
            Err(err) => tracing::warn!(%err, "failed to close websocket"),
        }
    }

    async fn try_run(&mut self) -> Result<(), Error> {
        self.join_room().await?;

        loop {
            tokio::select! {
                _ = self.shutdown_rx.changed() => {
                    return Err(Error::Close("shutting down"));
                }

                message = self.ws_rx.next() => {
                    self.process_incoming_message(message).await?;
                }
            }
        }
    }

    async fn join_room(&mut self) -> Result<(), Error> {
        let frame = JoinFrame::new(&self.recipient);
        let payload = serde_json::to_string(&frame)
            .map_err(|err| anyhow!("failed to encode join frame: {err}"))?;

        self.ws_tx
            .send(Message::Text(payload))
            .await
            .map_err(|err| anyhow!("failed to join notifications room: {err}"))?;
        tracing::debug!("joined notifications room");

        Ok(())
    }

    async fn process_incoming_message(
        &mut self,
        message: Option<Result<Message, StreamError>>,
    ) -> Result<(), Error> {
        match message {
            Some(Ok(Message::Text(payload))) => {
                self.process_event_frame(payload).await;
            }
            Some(Ok(Message::Binary(_))) => {
                tracing::warn!("ignoring unexpected binary message");
            }
            Some(Ok(Message::Ping(payload))) => {
                self.ws_tx
                    .send(Message::Pong(payload))
                    .await
                    .map_err(|err| anyhow!("failed to send pong: {err}"))?;
                tracing::trace!("processed ping message");
            }
            Some(Ok(Message::Pong(_))) => tracing::trace!("processed pong message"),
            Some(Ok(Message::Close(_))) => {
                return Err(Error::Close("received close message"));
            }
            Some(Ok(_)) => (),
            Some(Err(err)) => {
                return Err(Error::Anyhow(anyhow!(
                    "failed to read incoming message: {err}"
                )));
            }
            None => return Err(Error::Anyhow(anyhow!("incoming messages stream closed"))),
        }

        Ok(())
    }

    async fn process_event_frame(&self, payload: String) {
        let frame = match serde_json::from_str::<PushEventFrame>(&payload) {
            Ok(frame) => frame,
            Err(err) => {
                tracing::warn!(%err, "ignoring malformed event frame");
                return;
            }
        };

        match frame.event.as_str() {
            "notification" => match serde_json::from_value::<input::Notification>(frame.data) {
                Ok(notification) => {
                    tracing::info!(id = notification.id.as_str(), "received notification");
                    let inserted = self.store_service.prepend(notification).await;
                    if !inserted {
                        tracing::debug!("duplicate notification ignored");
                    }
                }
                Err(err) => tracing::warn!(%err, "ignoring malformed notification payload"),
            },
            event => tracing::trace!(event, "ignoring unrelated event"),
        }
    }
}
