//! Live-update event bus.
//!
//! - [`EventBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`LiveEvent`] — the message envelope pushed to connected clients.
//!
//! Delivery is best-effort. Events are cache-invalidation hints for the
//! feeds, never the authoritative copy of a record.

pub mod bus;

pub use bus::{EventBus, LiveEvent};
