use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};

use crate::state::AppState;
use crate::ws::manager::WsManager;

/// GET /ws
///
/// Subscribe a dashboard to live submission events. The feed is one-way:
/// clients never need to send anything, and whatever they do send is
/// ignored apart from Close.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| serve_subscriber(socket, state.ws_manager))
}

/// Pump registry messages out to one subscriber until either side hangs up.
async fn serve_subscriber(socket: WebSocket, ws_manager: Arc<WsManager>) {
    let subscriber = uuid::Uuid::new_v4().to_string();
    let mut outbound = ws_manager.register(subscriber.clone()).await;
    tracing::info!(subscriber = %subscriber, "Live-update subscriber joined");

    let (mut sink, mut inbound) = socket.split();

    let reason = loop {
        tokio::select! {
            queued = outbound.recv() => {
                // `None` means the registry dropped us (server shutdown).
                let Some(message) = queued else { break "removed" };
                let closing = matches!(message, Message::Close(_));
                if sink.send(message).await.is_err() {
                    break "send failed";
                }
                if closing {
                    break "server closed";
                }
            }
            frame = inbound.next() => match frame {
                Some(Ok(Message::Close(_))) | None => break "client closed",
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::debug!(
                        subscriber = %subscriber,
                        error = %e,
                        "Live-update read error",
                    );
                    break "read error";
                }
            },
        }
    };

    ws_manager.unregister(&subscriber).await;
    tracing::info!(subscriber = %subscriber, reason, "Live-update subscriber left");
}
