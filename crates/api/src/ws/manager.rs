use std::collections::HashMap;

use axum::extract::ws::Message;
use enamorado_core::types::Timestamp;
use tokio::sync::{mpsc, RwLock};

/// Channel sender half for pushing messages to a WebSocket connection.
pub type WsSender = mpsc::UnboundedSender<Message>;

/// Metadata for a single WebSocket connection.
pub struct WsConnection {
    /// Channel sender for outbound messages to this connection.
    pub sender: WsSender,
    /// When this connection was established.
    pub connected_at: Timestamp,
}

/// Registry of live-update clients.
///
/// Thread-safe via interior `RwLock`; wrapped in `Arc` and injected through
/// [`AppState`](crate::state::AppState) rather than held globally.
pub struct WsManager {
    connections: RwLock<HashMap<String, WsConnection>>,
}

impl WsManager {
    /// Create a new, empty connection manager.
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new connection.
    ///
    /// Returns the receiver half of the message channel so the caller can
    /// forward messages to the WebSocket sink.
    pub async fn register(&self, conn_id: String) -> mpsc::UnboundedReceiver<Message> {
        let (tx, rx) = mpsc::unbounded_channel();
        let conn = WsConnection {
            sender: tx,
            connected_at: chrono::Utc::now(),
        };
        self.connections.write().await.insert(conn_id, conn);
        rx
    }

    /// Remove a connection by its ID.
    pub async fn unregister(&self, conn_id: &str) {
        if let Some(conn) = self.connections.write().await.remove(conn_id) {
            let open_for = chrono::Utc::now() - conn.connected_at;
            tracing::debug!(
                conn_id,
                open_secs = open_for.num_seconds(),
                "WebSocket unregistered"
            );
        }
    }

    /// Best-effort delivery of `message` to every open client.
    ///
    /// A client whose channel is closed is removed on the spot; delivery to
    /// the others continues. Returns how many clients the message reached.
    pub async fn broadcast(&self, message: Message) -> usize {
        let mut conns = self.connections.write().await;
        conns.retain(|conn_id, conn| {
            let delivered = conn.sender.send(message.clone()).is_ok();
            if !delivered {
                tracing::debug!(conn_id = %conn_id, "Dropping closed WebSocket connection");
            }
            delivered
        });
        conns.len()
    }

    /// Return the current number of active connections.
    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Send a Close frame to every connection, then clear the map.
    ///
    /// Used during graceful shutdown to notify all clients before the
    /// server exits.
    pub async fn shutdown_all(&self) {
        let mut conns = self.connections.write().await;
        let count = conns.len();
        for conn in conns.values() {
            let _ = conn.sender.send(Message::Close(None));
        }
        conns.clear();
        tracing::info!(count, "Closed all WebSocket connections");
    }
}

impl Default for WsManager {
    fn default() -> Self {
        Self::new()
    }
}
