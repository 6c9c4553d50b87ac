//! Compiled regex patterns for image scoring.
//!
//! All patterns are compiled once at startup using `LazyLock`.
//! Case sensitivity is significant: only the patterns carrying `(?i)` ignore case.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Positive signals
// =============================================================================

/// Matches URLs hinting at a full-size rendition. Shared by the body rules
/// and the social-metadata selector.
pub static LARGE_BIG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(large|big)").expect("LARGE_BIG regex"));

pub static UPLOAD: LazyLock<Regex> = LazyLock::new(|| Regex::new("upload").expect("UPLOAD regex"));

pub static MEDIA: LazyLock<Regex> = LazyLock::new(|| Regex::new("media").expect("MEDIA regex"));

// =============================================================================
// Negative signals
// =============================================================================

pub static GRAVATAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("gravatar.com").expect("GRAVATAR regex"));

pub static FEEDBURNER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("feeds.feedburner.com").expect("FEEDBURNER regex"));

pub static ICON: LazyLock<Regex> = LazyLock::new(|| Regex::new("(?i)icon").expect("ICON regex"));

pub static LOGO: LazyLock<Regex> = LazyLock::new(|| Regex::new("(?i)logo").expect("LOGO regex"));

pub static SPINNER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?i)spinner").expect("SPINNER regex"));

pub static LOADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?i)loading").expect("LOADING regex"));

pub static ADS: LazyLock<Regex> = LazyLock::new(|| Regex::new("(?i)ads").expect("ADS regex"));

pub static BADGE: LazyLock<Regex> = LazyLock::new(|| Regex::new("badge").expect("BADGE regex"));

pub static ONE_BY_ONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("1x1").expect("ONE_BY_ONE regex"));

pub static PIXEL: LazyLock<Regex> = LazyLock::new(|| Regex::new("pixel").expect("PIXEL regex"));

pub static THUMBNAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("thumbnail[s]*").expect("THUMBNAIL regex"));

/// Extensions, share buttons and ad-network hosts.
///
/// Dots are left unescaped on purpose so the table scores the same URLs
/// it always has (`.gif` also matches `xgif`).
pub static BLACKLIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        ".html|",
        ".gif|",
        ".ico|",
        "button|",
        "twitter.jpg|",
        "facebook.jpg|",
        "ap_buy_photo|",
        "digg.jpg|",
        "digg.png|",
        "delicious.png|",
        "facebook.png|",
        "reddit.jpg|",
        "doubleclick|",
        "diggthis|",
        "diggThis|",
        "adserver|",
        "/ads/|",
        "ec.atdmt.com|",
        "mediaplex.com|",
        "adsatt|",
        "view.atdmt",
    ))
    .expect("BLACKLIST regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_big_is_case_sensitive() {
        assert!(LARGE_BIG.is_match("photo-large.jpg"));
        assert!(LARGE_BIG.is_match("bigpicture.png"));
        assert!(!LARGE_BIG.is_match("LARGE.jpg"));
    }

    #[test]
    fn case_insensitive_negatives() {
        assert!(ICON.is_match("/img/ICON.png"));
        assert!(LOGO.is_match("SiteLogo.svg"));
        assert!(ADS.is_match("/static/ADS/banner.png"));
        assert!(!BADGE.is_match("BADGE.png"));
    }

    #[test]
    fn blacklist_matches_share_buttons_and_ad_hosts() {
        assert!(BLACKLIST.is_match("http://x.com/share/facebook.png"));
        assert!(BLACKLIST.is_match("http://ad.doubleclick.net/x.jpg"));
        assert!(BLACKLIST.is_match("http://x.com/diggThis.jpg"));
        assert!(BLACKLIST.is_match("http://x.com/anim.gif"));
        assert!(!BLACKLIST.is_match("http://x.com/photo.jpg"));
    }
}
