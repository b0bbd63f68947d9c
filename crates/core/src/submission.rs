//! Submission workflow vocabulary and state machines.
//!
//! Status values are stored as TEXT columns. The enums here are the single
//! source of truth for the allowed values, their wire spelling, and which
//! transitions between them a moderator may perform.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

macro_rules! define_vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant ),+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// The stored / wire spelling.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text => Ok($name::$variant), )+
                    other => Err(CoreError::Validation(format!(
                        "Invalid {} '{other}'. Must be one of: {}",
                        $label,
                        [$( $text ),+].join(", ")
                    ))),
                }
            }
        }
    };
}

define_vocabulary! {
    /// Review outcome of a submission.
    SubmissionStatus ("status") {
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
        Flagged => "flagged",
    }
}

define_vocabulary! {
    /// Editorial readiness, tracked independently of [`SubmissionStatus`].
    EditorialStatus ("editorial status") {
        Pending => "pending",
        Ready => "ready",
        NeedsEdits => "needs_edits",
        NotSuitable => "not_suitable",
    }
}

define_vocabulary! {
    /// Display bucket for approved content.
    Section ("section") {
        Editorial => "editorial",
        Community => "community",
        Voices => "voices",
    }
}

define_vocabulary! {
    /// Intake category accepted by the submission form.
    Category ("category") {
        Art => "art",
        Fashion => "fashion",
        Photography => "photography",
        Mixed => "mixed",
    }
}

define_vocabulary! {
    /// Coarse kind of the submitted content.
    ContentType ("content type") {
        Text => "text",
        Substack => "substack",
        Video => "video",
        Audio => "audio",
        Mixed => "mixed",
        Playlist => "playlist",
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::Community
    }
}

impl Default for ContentType {
    fn default() -> Self {
        ContentType::Text
    }
}

impl SubmissionStatus {
    /// Statuses reachable from `self` in one moderation step.
    pub fn allowed_next(self) -> &'static [SubmissionStatus] {
        use SubmissionStatus::*;
        match self {
            Pending => &[Approved, Rejected, Flagged],
            Flagged => &[Pending, Approved, Rejected],
            Approved => &[Flagged, Rejected],
            Rejected => &[Pending, Flagged],
        }
    }

    /// Whether a moderator may move a submission from `self` to `next`.
    ///
    /// Re-applying the current status is always allowed.
    pub fn can_transition_to(self, next: SubmissionStatus) -> bool {
        self == next || self.allowed_next().contains(&next)
    }

    /// Check a transition, returning `CoreError::Conflict` when illegal.
    pub fn transition_to(self, next: SubmissionStatus) -> Result<SubmissionStatus, CoreError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(CoreError::Conflict(format!(
                "Cannot move submission from '{self}' to '{next}'"
            )))
        }
    }
}

impl EditorialStatus {
    /// Editorial statuses reachable from `self` in one step.
    pub fn allowed_next(self) -> &'static [EditorialStatus] {
        use EditorialStatus::*;
        match self {
            Pending => &[Ready, NeedsEdits, NotSuitable],
            NeedsEdits => &[Pending, Ready, NotSuitable],
            Ready => &[NeedsEdits, NotSuitable],
            NotSuitable => &[Pending, NeedsEdits, Ready],
        }
    }

    pub fn can_transition_to(self, next: EditorialStatus) -> bool {
        self == next || self.allowed_next().contains(&next)
    }

    pub fn transition_to(self, next: EditorialStatus) -> Result<EditorialStatus, CoreError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(CoreError::Conflict(format!(
                "Cannot move editorial status from '{self}' to '{next}'"
            )))
        }
    }
}
