//! Social metadata image resolution (Open Graph and Twitter Cards).
//!
//! Every `<meta>` and `<link>` element is checked against a fixed table of
//! tag descriptors. One element can match several descriptors and so yield
//! several candidates.

use dom_query::{Document, Selection};

use crate::dom;
use crate::patterns::LARGE_BIG;
use crate::result::ResolvedImage;
use crate::url_utils;
use crate::ImageResolver;

/// Which metadata convention produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Open Graph (`og:*`).
    Facebook,
    /// Twitter Card (`twitter:*`).
    Twitter,
}

/// Describes how one metadata convention encodes an image.
#[derive(Debug, Clone, Copy)]
pub struct TagDescriptor {
    pub provenance: Provenance,
    /// Attribute holding the property name.
    pub attribute: &'static str,
    /// Expected property name.
    pub name: &'static str,
    pub width: &'static str,
    pub height: &'static str,
    pub caption: &'static str,
    /// Attribute holding the image URL.
    pub value: &'static str,
}

/// Known image tags. Twitter Cards appear with both `value` and `content`.
pub static TAG_DESCRIPTORS: [TagDescriptor; 3] = [
    TagDescriptor {
        provenance: Provenance::Facebook,
        attribute: "property",
        name: "og:image",
        width: "og:image:width",
        height: "og:image:height",
        caption: "og:description",
        value: "content",
    },
    TagDescriptor {
        provenance: Provenance::Twitter,
        attribute: "name",
        name: "twitter:image",
        width: "twitter:image:width",
        height: "twitter:image:height",
        caption: "twitter:image:alt",
        value: "value",
    },
    TagDescriptor {
        provenance: Provenance::Twitter,
        attribute: "name",
        name: "twitter:image",
        width: "twitter:image:width",
        height: "twitter:image:height",
        caption: "twitter:image:alt",
        value: "content",
    },
];

/// A metadata tag considered for selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataCandidate {
    pub url: String,
    pub width: String,
    pub height: String,
    pub caption: String,
    pub provenance: Provenance,
    pub score: i64,
}

impl MetadataCandidate {
    /// Relevance: +1 for a `large`/`big` URL, +1 for Twitter provenance.
    #[must_use]
    pub fn relevance(&self) -> i64 {
        let mut score = 0;
        if LARGE_BIG.is_match(&self.url) {
            score += 1;
        }
        if self.provenance == Provenance::Twitter {
            score += 1;
        }
        score
    }
}

/// Matches one element against one descriptor.
fn match_descriptor(tag: &Selection, descriptor: &TagDescriptor) -> Option<MetadataCandidate> {
    let property = dom::get_attribute(tag, descriptor.attribute)?;
    if property != descriptor.name {
        return None;
    }
    let url = dom::get_attribute(tag, descriptor.value)?;

    Some(MetadataCandidate {
        url,
        width: dom::attribute_or_empty(tag, descriptor.width),
        height: dom::attribute_or_empty(tag, descriptor.height),
        caption: dom::attribute_or_empty(tag, descriptor.caption),
        provenance: descriptor.provenance,
        score: 0,
    })
}

/// Collects metadata candidates from `<meta>` then `<link>` elements.
#[must_use]
pub fn scan(doc: &Document) -> Vec<MetadataCandidate> {
    let candidates: Vec<_> = dom::find_union(doc, "meta", "link")
        .iter()
        .flat_map(|tag| {
            TAG_DESCRIPTORS
                .iter()
                .filter_map(move |descriptor| match_descriptor(tag, descriptor))
        })
        .collect();

    tracing::debug!(candidates = candidates.len(), "scanned social metadata");
    candidates
}

/// Picks one candidate.
///
/// A single candidate is returned as-is. With several, each is scored by
/// [`MetadataCandidate::relevance`] and the highest wins; ties go to the
/// earliest candidate.
#[must_use]
pub fn select(mut candidates: Vec<MetadataCandidate>) -> Option<MetadataCandidate> {
    if candidates.len() <= 1 {
        return candidates.pop();
    }

    let mut best: Option<MetadataCandidate> = None;
    for mut candidate in candidates {
        candidate.score = candidate.relevance();
        if best.as_ref().is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }
    best
}

/// Resolves the article image from Open Graph and Twitter Card tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenGraphResolver;

impl ImageResolver for OpenGraphResolver {
    fn name(&self) -> &'static str {
        "open-graph"
    }

    fn resolve(&self, doc: &Document, _final_url: &str) -> ResolvedImage {
        let Some(best) = select(scan(doc)) else {
            return ResolvedImage::default();
        };

        let mut image = ResolvedImage::from_raw(&best.url, &best.width, &best.height, &best.caption);
        image.url = url_utils::ensure_http_prefix(&image.url);
        tracing::debug!(url = %image.url, provenance = ?best.provenance, "resolved metadata image");
        image
    }
}
