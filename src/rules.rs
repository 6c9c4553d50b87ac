//! Heuristic rule set for scoring image source URLs.
//!
//! A [`RuleSet`] is an ordered list of pattern/weight pairs. Every rule is
//! evaluated against the URL and the weights of all matching rules are
//! summed, so the result does not depend on rule order.

use regex::Regex;

use crate::patterns;
use crate::Result;

/// `id` attribute value that marks the main photo on Facebook-style pages.
const FB_PHOTO_ID: &str = "fbPhotoImage";

/// Substring in `alt` text that marks a thumbnail.
const THUMBNAIL_ALT: &str = "thumbnail";

/// A single scoring rule.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    weight: i64,
}

impl Rule {
    /// Compiles `pattern` into a rule contributing `weight` when it matches.
    pub fn new(pattern: &str, weight: i64) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            weight,
        })
    }

    /// Builds a rule from an already compiled regex.
    #[must_use]
    pub fn from_regex(pattern: Regex, weight: i64) -> Self {
        Self { pattern, weight }
    }

    /// The rule's weight.
    #[must_use]
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// Returns the weight if the rule fires on `url`, else `0`.
    #[must_use]
    pub fn apply(&self, url: &str) -> i64 {
        if self.pattern.is_match(url) {
            self.weight
        } else {
            0
        }
    }
}

/// Immutable ordered collection of scoring rules.
///
/// The default set is the built-in table of positive hints (`large`,
/// `upload`, `media`) and negative hints (icons, logos, trackers, ad
/// networks, share buttons).
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        let table = [
            (&patterns::LARGE_BIG, 1),
            (&patterns::UPLOAD, 1),
            (&patterns::MEDIA, 1),
            (&patterns::GRAVATAR, -1),
            (&patterns::FEEDBURNER, -1),
            (&patterns::ICON, -1),
            (&patterns::LOGO, -1),
            (&patterns::SPINNER, -1),
            (&patterns::LOADING, -1),
            (&patterns::ADS, -1),
            (&patterns::BADGE, -1),
            (&patterns::ONE_BY_ONE, -1),
            (&patterns::PIXEL, -1),
            (&patterns::THUMBNAIL, -1),
            (&patterns::BLACKLIST, -1),
        ];

        Self {
            rules: table
                .into_iter()
                .map(|(re, weight)| Rule::from_regex(Regex::clone(re), weight))
                .collect(),
        }
    }
}

impl RuleSet {
    /// Creates a rule set from explicit rules.
    #[must_use]
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Returns a copy of this set with one more rule appended.
    pub fn with_rule(mut self, pattern: &str, weight: i64) -> Result<Self> {
        self.rules.push(Rule::new(pattern, weight)?);
        Ok(self)
    }

    /// Number of rules in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the set has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Sums the weights of every rule matching `url`.
    #[must_use]
    pub fn score_url(&self, url: &str) -> i64 {
        self.rules.iter().map(|rule| rule.apply(url)).sum()
    }

    /// Scores an image element from its effective source and auxiliary attributes.
    ///
    /// Returns `-1` when there is no usable source, so such elements never
    /// become candidates.
    #[must_use]
    pub fn score(&self, src: Option<&str>, alt: Option<&str>, id: Option<&str>) -> i64 {
        let Some(src) = src.filter(|s| !s.is_empty()) else {
            return -1;
        };

        let mut score = self.score_url(src);

        if alt.is_some_and(|alt| alt.contains(THUMBNAIL_ALT)) {
            score -= 1;
        }
        if id == Some(FB_PHOTO_ID) {
            score += 1;
        }

        score
    }
}
