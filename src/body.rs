//! Body image resolution.
//!
//! Scans every `<img>` element of the document, scores each one with a
//! [`RuleSet`], and picks a single image. Declared surface decides when at
//! least one image is large enough to be significant; the rule score
//! decides otherwise.

use dom_query::{Document, Selection};

use crate::dom;
use crate::options::{Options, SIGNIFICANT_SURFACE};
use crate::result::{parse_dimension, ResolvedImage};
use crate::rules::RuleSet;
use crate::url_utils;
use crate::ImageResolver;

/// An `<img>` element considered for selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    /// Effective source URL, unresolved.
    pub url: String,
    /// Declared `width` attribute, verbatim.
    pub width: String,
    /// Declared `height` attribute, verbatim.
    pub height: String,
    /// `alt` text.
    pub caption: String,
    /// Declared surface, see [`declared_surface`].
    pub surface: i64,
    /// Rule score, always `>= 0` for a collected candidate.
    pub score: i64,
}

/// Outcome of scanning a document's images.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Candidates in document order.
    pub candidates: Vec<ImageCandidate>,
    /// Number of images (candidate or not) whose surface exceeded the threshold.
    pub significant_count: usize,
}

/// How the winning candidate was ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Largest declared surface.
    Surface,
    /// Highest rule score.
    Score,
}

/// Declared surface of an image from its raw `width`/`height` attributes.
///
/// `width * height` when both parse, otherwise whichever one parses, otherwise `0`.
#[must_use]
pub fn declared_surface(width: &str, height: &str) -> i64 {
    match (parse_dimension(width), parse_dimension(height)) {
        (Some(w), Some(h)) => w.saturating_mul(h),
        (Some(w), None) => w,
        (None, Some(h)) => h,
        (None, None) => 0,
    }
}

/// Resolves the article image from `<img>` elements in the body.
#[derive(Debug, Clone)]
pub struct WebPageResolver {
    rules: RuleSet,
    significant_surface: i64,
}

impl Default for WebPageResolver {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}

impl WebPageResolver {
    /// Creates a resolver with the given rules and the default threshold.
    #[must_use]
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            significant_surface: SIGNIFICANT_SURFACE,
        }
    }

    /// Creates a resolver from the rule set and threshold in `options`.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self {
            rules: options.rules.clone(),
            significant_surface: options.significant_surface,
        }
    }

    /// Scans one element. Elements without a usable source are skipped entirely.
    fn scan_element(&self, img: &Selection, result: &mut ScanResult) {
        let Some(src) = dom::image_source(img) else {
            return;
        };

        let width = dom::attribute_or_empty(img, "width");
        let height = dom::attribute_or_empty(img, "height");
        let alt = dom::get_attribute(img, "alt");
        let id = dom::get_attribute(img, "id");

        let surface = declared_surface(&width, &height);
        if surface > self.significant_surface {
            result.significant_count += 1;
        }

        let score = self.rules.score(Some(src.as_str()), alt.as_deref(), id.as_deref());
        if score < 0 {
            tracing::trace!(src = %src, score, "image rejected by rules");
            return;
        }

        result.candidates.push(ImageCandidate {
            url: src,
            width,
            height,
            caption: alt.unwrap_or_default(),
            surface,
            score,
        });
    }

    /// Collects candidates and counts significant images.
    #[must_use]
    pub fn scan(&self, doc: &Document) -> ScanResult {
        let mut result = ScanResult::default();
        for img in dom::find_by_tag(doc, "img") {
            self.scan_element(&img, &mut result);
        }

        tracing::debug!(
            candidates = result.candidates.len(),
            significant = result.significant_count,
            "scanned body images"
        );
        result
    }

    /// Picks the best unresolved candidate, if any.
    #[must_use]
    pub fn select<'a>(&self, scan: &'a ScanResult) -> Option<&'a ImageCandidate> {
        let policy = if scan.significant_count > 0 {
            SelectionPolicy::Surface
        } else {
            SelectionPolicy::Score
        };
        tracing::debug!(?policy, "selecting body image");
        select_candidate(&scan.candidates, policy)
    }
}

/// Picks the candidate with the highest value under `policy`.
///
/// Values below zero never win. Ties go to the later candidate in document order.
#[must_use]
pub fn select_candidate(
    candidates: &[ImageCandidate],
    policy: SelectionPolicy,
) -> Option<&ImageCandidate> {
    let value = |c: &ImageCandidate| match policy {
        SelectionPolicy::Surface => c.surface,
        SelectionPolicy::Score => c.score,
    };

    let mut max = 0;
    let mut best = None;
    for candidate in candidates {
        let v = value(candidate);
        if v >= max {
            max = v;
            best = Some(candidate);
        }
    }
    best
}

impl ImageResolver for WebPageResolver {
    fn name(&self) -> &'static str {
        "web-page"
    }

    fn resolve(&self, doc: &Document, final_url: &str) -> ResolvedImage {
        let scan = self.scan(doc);
        let Some(best) = self.select(&scan) else {
            return ResolvedImage::default();
        };

        let mut image = ResolvedImage::from_raw(&best.url, &best.width, &best.height, &best.caption);
        image.url = url_utils::resolve_reference(&image.url, final_url);
        tracing::debug!(url = %image.url, "resolved body image");
        image
    }
}
