//! URL Utility Functions
//!
//! Finalization of a selected image URL. The body path resolves the URL as
//! a reference against the article URL; the metadata path only guarantees
//! an `http` scheme prefix.

use url::Url;

/// Scheme prepended to metadata URLs that lack one.
const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Check if a string parses as an absolute URL (any scheme).
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    if s.is_empty() {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) => (true, Some(url)),
        Err(_) => (false, None),
    }
}

/// Resolve `reference` against the article's final URL.
///
/// Absolute references are returned byte-for-byte. Scheme-relative and
/// path-relative references are completed against `final_url`. If
/// `final_url` is not an absolute URL, or the join fails, the reference is
/// returned unchanged.
#[must_use]
pub fn resolve_reference(reference: &str, final_url: &str) -> String {
    let (is_abs, _) = is_absolute_url(reference);
    if is_abs {
        return reference.to_string();
    }

    let Ok(base) = Url::parse(final_url) else {
        tracing::debug!(final_url, "final URL does not parse, keeping reference as-is");
        return reference.to_string();
    };

    match base.join(reference) {
        Ok(resolved) => resolved.to_string(),
        Err(err) => {
            tracing::debug!(reference, %err, "reference resolution failed");
            reference.to_string()
        }
    }
}

/// Prefix `http://` unless the URL already starts with `http`.
///
/// No relative resolution is attempted: `/img/a.png` becomes `http:///img/a.png`.
#[must_use]
pub fn ensure_http_prefix(url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{url}")
    }
}
