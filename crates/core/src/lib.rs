//! Domain layer for the Enamorado submission platform.
//!
//! Pure types and rules with no I/O: identifiers, the error enum, the
//! submission workflow vocabulary and its state machines, moderation
//! actions, and URL-based content detection.

pub mod content;
pub mod error;
pub mod moderation;
pub mod submission;
pub mod types;
pub mod validation;
