//! URL-based content type and platform detection.
//!
//! Matching is case-insensitive substring search over the whole URL, checked
//! in a fixed order so a URL mentioning several hosts resolves to the first
//! rule that matches. Anything unrecognised is plain text on an external site.

use serde::Serialize;

use crate::submission::ContentType;

/// Platform label used when no rule matches.
pub const PLATFORM_EXTERNAL: &str = "external";

/// Result of [`detect_content`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedContent {
    pub content_type: ContentType,
    pub platform: &'static str,
}

/// Ordered `(needles, content type, platform)` rules.
const RULES: &[(&[&str], ContentType, &str)] = &[
    (&["substack.com"], ContentType::Substack, "substack"),
    (&["youtube.com", "youtu.be"], ContentType::Video, "youtube"),
    (&["vimeo.com"], ContentType::Video, "vimeo"),
    (&["soundcloud.com"], ContentType::Audio, "soundcloud"),
    (&["spotify.com"], ContentType::Playlist, "spotify"),
    (&["docs.google.com"], ContentType::Text, "google-docs"),
    (&["medium.com"], ContentType::Text, "medium"),
];

/// Classify a URL into a coarse content type and a platform label.
pub fn detect_content(url: &str) -> DetectedContent {
    let lower = url.to_lowercase();

    RULES
        .iter()
        .find(|(needles, _, _)| needles.iter().any(|n| lower.contains(n)))
        .map(|&(_, content_type, platform)| DetectedContent {
            content_type,
            platform,
        })
        .unwrap_or(DetectedContent {
            content_type: ContentType::Text,
            platform: PLATFORM_EXTERNAL,
        })
}

/// Detect from the first of several candidate URLs that is present.
///
/// Returns `None` when every candidate is absent or blank.
pub fn detect_first<'a, I>(candidates: I) -> Option<DetectedContent>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .map(detect_content)
}
