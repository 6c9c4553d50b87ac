//! # article-image
//!
//! Selects the single representative image of an article.
//!
//! Two independent resolvers are provided:
//!
//! - [`OpenGraphResolver`] reads Open Graph and Twitter Card tags.
//! - [`WebPageResolver`] scans `<img>` elements and ranks them by declared
//!   surface or by a heuristic URL score.
//!
//! Both implement [`ImageResolver`] and return a [`ResolvedImage`]; an empty
//! URL means nothing was found. [`resolve_image`] tries them in the order
//! configured in [`Options`] and keeps the first non-empty result.
//!
//! ## Quick Start
//!
//! ```rust
//! use article_image::{resolve_html, Options};
//!
//! let html = r#"<html><head>
//! <meta property="og:image" content="https://example.com/cover.jpg">
//! </head><body><img src="/inline.png"></body></html>"#;
//!
//! let image = resolve_html(html, "https://example.com/post/1", &Options::default());
//! assert_eq!(image.url, "https://example.com/cover.jpg");
//! ```

mod error;
mod options;
mod patterns;
mod result;

/// Read-only DOM queries used by the resolvers.
pub mod dom;

/// Heuristic URL scoring rules.
pub mod rules;

/// Body `<img>` scanning and selection.
pub mod body;

/// Open Graph / Twitter Card scanning and selection.
pub mod social;

/// URL finalization.
pub mod url_utils;

// Public API - re-exports
pub use body::WebPageResolver;
pub use dom_query::Document;
pub use error::{Error, Result};
pub use options::{Options, Strategy, SIGNIFICANT_SURFACE};
pub use result::{parse_dimension, ResolvedImage};
pub use rules::{Rule, RuleSet};
pub use social::OpenGraphResolver;

/// A strategy for finding an article's representative image.
///
/// Implementations read the document without mutating it and never fail;
/// an empty [`ResolvedImage`] means no image was found.
pub trait ImageResolver {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Resolves an image from `doc`, whose resolved address is `final_url`.
    fn resolve(&self, doc: &Document, final_url: &str) -> ResolvedImage;
}

/// Builds the resolver for a strategy.
#[must_use]
pub fn resolver_for(strategy: Strategy, options: &Options) -> Box<dyn ImageResolver> {
    match strategy {
        Strategy::SocialMetadata => Box::new(OpenGraphResolver),
        Strategy::DocumentBody => Box::new(WebPageResolver::from_options(options)),
    }
}

/// Resolves the article image from a parsed document.
///
/// Tries each of `options.strategies` in order and returns the first
/// non-empty result, or an empty [`ResolvedImage`] if none finds an image.
///
/// # Example
///
/// ```rust
/// use article_image::{resolve_image, Document, Options, Strategy};
///
/// let doc = Document::from(r#"<img src="/a.jpg" width="800" height="600">"#);
/// let options = Options {
///     strategies: vec![Strategy::DocumentBody],
///     ..Options::default()
/// };
/// let image = resolve_image(&doc, "https://example.com/post", &options);
/// assert_eq!(image.url, "https://example.com/a.jpg");
/// assert_eq!((image.width, image.height), (800, 600));
/// ```
#[must_use]
pub fn resolve_image(doc: &Document, final_url: &str, options: &Options) -> ResolvedImage {
    for &strategy in &options.strategies {
        let resolver = resolver_for(strategy, options);
        let image = resolver.resolve(doc, final_url);
        if !image.is_empty() {
            tracing::debug!(resolver = resolver.name(), url = %image.url, "image resolved");
            return image;
        }
        tracing::trace!(resolver = resolver.name(), "no image");
    }
    ResolvedImage::default()
}

/// Parses `html` and resolves its article image.
///
/// See [`resolve_image`].
#[must_use]
pub fn resolve_html(html: &str, final_url: &str, options: &Options) -> ResolvedImage {
    let doc = Document::from(html);
    resolve_image(&doc, final_url, options)
}
