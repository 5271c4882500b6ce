#![allow(dead_code)]

// re-exported so `use common::*` brings the service traits into scope
pub use admin_notifier_feed::service::{
    notifications_feed_service::NotificationsFeedService,
    notifications_store_service::NotificationsStoreService,
};

use admin_notifier_feed::{
    auth::StaticCredentialsProvider,
    dto::output::FeedSnapshot,
    repository::NotificationsRepositoryImpl,
    service::{
        notifications_feed_service::{NotificationsFeedServiceConfig, NotificationsFeedServiceImpl},
        notifications_store_service::NotificationsStoreServiceImpl,
        push_listener_service::{PushListenerConfig, PushListenerService},
    },
};
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::Response,
    routing::{get, patch},
    Json, Router,
};
use serde_json::{json, Value};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::{
    sync::{broadcast, Mutex},
    time::timeout,
};

pub struct MockBackend {
    pub address: SocketAddr,
    pub state: Arc<MockBackendState>,
}

pub struct MockBackendState {
    /// Notifications returned by the fetch endpoint, newest first
    pub notifications: Mutex<Vec<Value>>,
    /// Ids confirmed read by the client
    pub read_ids: Mutex<Vec<String>>,
    pub find_status: Mutex<StatusCode>,
    pub update_status: Mutex<StatusCode>,
    /// Frames forwarded to every joined websocket client
    pub push_tx: broadcast::Sender<String>,
    /// Recipient of every received join frame
    pub joined_tx: broadcast::Sender<String>,
}

pub async fn start_mock_backend() -> MockBackend {
    let (push_tx, _) = broadcast::channel(16);
    let (joined_tx, _) = broadcast::channel(16);
    let state = Arc::new(MockBackendState {
        notifications: Mutex::new(Vec::new()),
        read_ids: Mutex::new(Vec::new()),
        find_status: Mutex::new(StatusCode::OK),
        update_status: Mutex::new(StatusCode::NO_CONTENT),
        push_tx,
        joined_tx,
    });

    let app = Router::new()
        .route("/api/notifications", get(find_notifications))
        .route("/api/notifications/:id/read", patch(update_read))
        .route("/ws", get(websocket_upgrade))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend { address, state }
}

#[derive(serde::Deserialize)]
struct FindQuery {
    recipient: String,
    limit: u32,
}

async fn find_notifications(
    State(state): State<Arc<MockBackendState>>,
    Query(query): Query<FindQuery>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    if !has_bearer(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({})));
    }
    assert_eq!(query.recipient, "admin");

    let status = *state.find_status.lock().await;
    if status != StatusCode::OK {
        return (status, Json(json!({})));
    }

    let notifications = state
        .notifications
        .lock()
        .await
        .iter()
        .take(query.limit as usize)
        .cloned()
        .collect::<Vec<_>>();

    (StatusCode::OK, Json(json!({ "notifications": notifications })))
}

async fn update_read(
    State(state): State<Arc<MockBackendState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> StatusCode {
    if !has_bearer(&headers) {
        return StatusCode::UNAUTHORIZED;
    }

    let status = *state.update_status.lock().await;
    if status.is_success() {
        state.read_ids.lock().await.push(id);
    }

    status
}

async fn websocket_upgrade(
    State(state): State<Arc<MockBackendState>>,
    ws: WebSocketUpgrade,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: Arc<MockBackendState>) {
    // first frame must be the join request
    let Some(Ok(Message::Text(payload))) = socket.recv().await else {
        return;
    };
    let frame = serde_json::from_str::<Value>(&payload).unwrap();
    assert_eq!(frame["event"], "joinNotifications");
    let recipient = frame["data"].as_str().unwrap_or_default().to_string();

    // subscribe before signalling the join, so frames pushed
    // right after the join was observed cannot be lost
    let mut push_rx = state.push_tx.subscribe();
    let _ = state.joined_tx.send(recipient);
    loop {
        tokio::select! {
            frame = push_rx.recv() => {
                let Ok(frame) = frame else { break };
                if socket.send(Message::Text(frame)).await.is_err() {
                    break;
                }
            }

            message = socket.recv() => {
                match message {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    Some(Ok(_)) => (),
                }
            }
        }
    }
}

fn has_bearer(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("Bearer "))
        .unwrap_or(false)
}

pub struct TestClient {
    pub credentials_provider: Arc<StaticCredentialsProvider>,
    pub store_service: Arc<NotificationsStoreServiceImpl>,
    pub feed_service: Arc<NotificationsFeedServiceImpl>,
}

pub fn create_test_client(address: SocketAddr, token: Option<&str>) -> TestClient {
    let credentials_provider = Arc::new(StaticCredentialsProvider::new(token.map(str::to_string)));
    let repository = Arc::new(NotificationsRepositoryImpl::new(format!("http://{address}")));
    let store_service = Arc::new(NotificationsStoreServiceImpl::new());

    let config = NotificationsFeedServiceConfig {
        recipient: "admin".to_string(),
        fetch_limit: 5,
    };
    let feed_service = Arc::new(NotificationsFeedServiceImpl::new(
        config,
        credentials_provider.clone(),
        repository,
        store_service.clone(),
    ));

    TestClient {
        credentials_provider,
        store_service,
        feed_service,
    }
}

pub fn start_push_listener(address: SocketAddr, client: &TestClient) -> PushListenerService {
    let config = PushListenerConfig {
        url: format!("ws://{address}/ws"),
        recipient: "admin".to_string(),
        reconnect_interval: Duration::from_millis(100),
    };

    PushListenerService::new(
        config,
        client.credentials_provider.clone(),
        client.feed_service.clone(),
        client.store_service.clone(),
    )
}

pub async fn wait_for_snapshot(
    store_service: &NotificationsStoreServiceImpl,
    predicate: impl FnMut(&FeedSnapshot) -> bool,
) -> FeedSnapshot {
    let mut snapshot_rx = store_service.subscribe();
    let snapshot = timeout(Duration::from_secs(2), snapshot_rx.wait_for(predicate))
        .await
        .unwrap() // timeout
        .unwrap() // channel closed
        .clone();
    snapshot
}

pub fn notification_json(id: &str, is_read: bool) -> Value {
    json!({
        "_id": id,
        "title": format!("order #{id}"),
        "message": "a new order was placed",
        "icon": "order",
        "link": format!("/orders/{id}"),
        "createdAt": "2026-08-25T10:15:00Z",
        "isRead": is_read,
    })
}

pub fn push_frame(id: &str) -> String {
    json!({ "event": "notification", "data": notification_json(id, false) }).to_string()
}
