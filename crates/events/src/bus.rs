//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the central publish/subscribe hub for [`LiveEvent`]s.
//! It is designed to be shared via `Arc<EventBus>` across the application.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// LiveEvent
// ---------------------------------------------------------------------------

/// A notification pushed to live-update clients.
///
/// Serializes as `{"type": "<snake_case variant>", "submission": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveEvent {
    /// A submission was just created (status `pending`).
    NewSubmission { submission: serde_json::Value },

    /// A moderator changed a submission's workflow fields.
    SubmissionUpdated { submission: serde_json::Value },
}

impl LiveEvent {
    /// Build a `new_submission` event from any serializable record.
    pub fn new_submission<T: Serialize>(submission: &T) -> Result<Self, serde_json::Error> {
        Ok(LiveEvent::NewSubmission {
            submission: serde_json::to_value(submission)?,
        })
    }

    /// Build a `submission_updated` event from any serializable record.
    pub fn submission_updated<T: Serialize>(submission: &T) -> Result<Self, serde_json::Error> {
        Ok(LiveEvent::SubmissionUpdated {
            submission: serde_json::to_value(submission)?,
        })
    }

    /// The wire `type` tag.
    pub fn event_type(&self) -> &'static str {
        match self {
            LiveEvent::NewSubmission { .. } => "new_submission",
            LiveEvent::SubmissionUpdated { .. } => "submission_updated",
        }
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`LiveEvent`].
///
/// # Usage
///
/// ```rust
/// use enamorado_events::bus::{EventBus, LiveEvent};
///
/// let bus = EventBus::default();
/// let mut rx = bus.subscribe();
///
/// let event = LiveEvent::new_submission(&serde_json::json!({"id": 1})).unwrap();
/// bus.publish(event);
/// ```
pub struct EventBus {
    sender: broadcast::Sender<LiveEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped.
    pub fn publish(&self, event: LiveEvent) {
        let event_type = event.event_type();
        // A SendError only means there are zero receivers.
        if self.sender.send(event).is_err() {
            tracing::trace!(event_type, "Live event published with no subscribers");
        }
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<LiveEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
