//! Result type for image resolution.
//!
//! [`ResolvedImage`] is the only value that leaves a resolver. A zero-valued
//! instance (empty URL) means no image was found.

use serde::{Deserialize, Serialize};

/// The image chosen to represent an article.
///
/// Dimensions are the values declared in markup, parsed as integers, with
/// `0` standing for unknown or unparseable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedImage {
    /// Image URL (resolved against the article URL on the body path).
    pub url: String,

    /// Declared width, `0` if unknown.
    pub width: i64,

    /// Declared height, `0` if unknown.
    pub height: i64,

    /// Caption (`alt` text or the metadata caption attribute).
    pub caption: String,
}

impl ResolvedImage {
    /// Returns `true` when no image was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.url.is_empty()
    }

    /// Builds a result from raw declared attributes, parsing dimensions leniently.
    pub(crate) fn from_raw(url: &str, width: &str, height: &str, caption: &str) -> Self {
        Self {
            url: url.to_string(),
            width: parse_dimension(width).unwrap_or(0),
            height: parse_dimension(height).unwrap_or(0),
            caption: caption.to_string(),
        }
    }
}

/// Parses a declared dimension attribute.
///
/// Accepts an optional sign followed by ASCII digits. Anything else,
/// including surrounding whitespace or a `px` suffix, yields `None`.
#[must_use]
pub fn parse_dimension(raw: &str) -> Option<i64> {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<i64>().ok()
}
