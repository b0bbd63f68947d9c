//! Bridge from the in-process event bus to WebSocket clients.
//!
//! [`LiveUpdateForwarder`] subscribes to the [`EventBus`](enamorado_events::EventBus)
//! and relays every [`LiveEvent`] as a JSON text frame to all connected clients.

use std::sync::Arc;

use axum::extract::ws::Message;
use enamorado_events::LiveEvent;
use tokio::sync::broadcast;

use crate::ws::WsManager;

/// Relays live events to every registered WebSocket client.
pub struct LiveUpdateForwarder {
    ws_manager: Arc<WsManager>,
}

impl LiveUpdateForwarder {
    pub fn new(ws_manager: Arc<WsManager>) -> Self {
        Self { ws_manager }
    }

    /// Run until the bus is dropped.
    ///
    /// A receiver that falls behind skips the missed events and keeps going;
    /// live updates are advisory and clients refetch on their own.
    pub async fn run(self, mut receiver: broadcast::Receiver<LiveEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => self.forward(&event).await,
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Live update forwarder lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, live update forwarder shutting down");
                    break;
                }
            }
        }
    }

    async fn forward(&self, event: &LiveEvent) {
        let payload = match serde_json::to_string(event) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    event_type = event.event_type(),
                    "Failed to encode live event"
                );
                return;
            }
        };

        let delivered = self.ws_manager.broadcast(Message::Text(payload.into())).await;
        tracing::debug!(event_type = event.event_type(), delivered, "Live event broadcast");
    }
}
