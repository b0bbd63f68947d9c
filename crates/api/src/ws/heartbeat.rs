use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::ws::Message;
use tokio::time::MissedTickBehavior;

use crate::ws::manager::WsManager;

/// Ping every live-update client once per `every`.
///
/// Pings go through [`WsManager::broadcast`], so a client whose socket task
/// has already exited is pruned here even when no submission traffic flows.
/// The task runs until its handle is aborted at shutdown.
pub fn start_heartbeat(
    ws_manager: Arc<WsManager>,
    every: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; nobody is connected yet.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let reached = ws_manager.broadcast(Message::Ping(Bytes::new())).await;
            if reached > 0 {
                tracing::trace!(reached, "Live-update heartbeat");
            }
        }
    })
}
