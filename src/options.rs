//! Configuration options for image resolution.
//!
//! The `Options` struct controls which resolvers run, in what order, and
//! how the body scanner scores and ranks images.

use crate::rules::RuleSet;

/// Default significance threshold: a 320x200 image.
pub const SIGNIFICANT_SURFACE: i64 = 320 * 200;

/// An image resolution strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Open Graph and Twitter Card tags.
    SocialMetadata,
    /// `<img>` elements in the document body.
    DocumentBody,
}

/// Configuration options for image resolution.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use article_image::{Options, Strategy};
///
/// // Only scan the body, and treat anything above 100x100 as significant
/// let options = Options {
///     strategies: vec![Strategy::DocumentBody],
///     significant_surface: 100 * 100,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Resolvers to try, in priority order. The first non-empty result wins.
    ///
    /// Default: `[SocialMetadata, DocumentBody]`
    pub strategies: Vec<Strategy>,

    /// Declared surface above which an image is considered significant.
    ///
    /// When at least one scanned image exceeds it, the body selector ranks
    /// candidates by surface instead of score.
    ///
    /// Default: `64000`
    pub significant_surface: i64,

    /// Rules used to score body image URLs.
    ///
    /// Default: `RuleSet::default()`
    pub rules: RuleSet,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strategies: vec![Strategy::SocialMetadata, Strategy::DocumentBody],
            significant_surface: SIGNIFICANT_SURFACE,
            rules: RuleSet::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_prefer_metadata() {
        let options = Options::default();
        assert_eq!(
            options.strategies,
            vec![Strategy::SocialMetadata, Strategy::DocumentBody]
        );
        assert_eq!(options.significant_surface, 64000);
        assert!(!options.rules.is_empty());
    }
}
