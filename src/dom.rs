//! DOM Operations Adapter
//!
//! The handful of read-only queries the resolvers need, on top of the
//! `dom_query` crate: tag lookup, attribute lookup and collection union.

pub use dom_query::{Document, Selection};

/// Source attributes tried in order when looking for an image URL.
/// Lazy-loading scripts commonly move the real URL into the `data-*` variants.
pub const SOURCE_ATTRIBUTES: [&str; 3] = ["src", "data-src", "data-lazy-src"];

/// Get any attribute value, `None` when absent.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get an attribute value, empty when absent.
#[inline]
#[must_use]
pub fn attribute_or_empty(sel: &Selection, name: &str) -> String {
    get_attribute(sel, name).unwrap_or_default()
}

/// Returns the first attribute in `names` that is present and non-empty.
#[must_use]
pub fn first_non_empty_attribute(sel: &Selection, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| get_attribute(sel, name))
        .find(|value| !value.is_empty())
}

/// Effective image source of an element (`src`, then `data-src`, then `data-lazy-src`).
#[must_use]
pub fn image_source(sel: &Selection) -> Option<String> {
    first_non_empty_attribute(sel, &SOURCE_ATTRIBUTES)
}

/// All elements with the given tag name, in document order.
#[must_use]
pub fn find_by_tag<'a>(doc: &'a Document, tag: &str) -> Vec<Selection<'a>> {
    doc.select(tag)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// Union of two tag collections: every `first` element, then every `second`
/// element not already present.
#[must_use]
pub fn find_union<'a>(doc: &'a Document, first: &str, second: &str) -> Vec<Selection<'a>> {
    let mut elements = find_by_tag(doc, first);
    let seen: Vec<_> = doc.select(first).nodes().iter().map(|node| node.id).collect();

    elements.extend(
        doc.select(second)
            .nodes()
            .iter()
            .filter(|node| !seen.contains(&node.id))
            .map(|node| Selection::from(*node)),
    );
    elements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_source_falls_back_through_lazy_attributes() {
        let doc = Document::from(
            r#"<img id="a" src="a.jpg"><img id="b" src="" data-src="b.jpg">
               <img id="c" data-lazy-src="c.jpg"><img id="d" alt="none">"#,
        );
        let sources: Vec<_> = find_by_tag(&doc, "img").iter().map(image_source).collect();
        assert_eq!(
            sources,
            vec![
                Some("a.jpg".to_string()),
                Some("b.jpg".to_string()),
                Some("c.jpg".to_string()),
                None
            ]
        );
    }

    #[test]
    fn attribute_or_empty_distinguishes_nothing() {
        let doc = Document::from(r#"<img src="a.jpg" alt="">"#);
        let imgs = find_by_tag(&doc, "img");
        assert_eq!(get_attribute(&imgs[0], "alt"), Some(String::new()));
        assert_eq!(get_attribute(&imgs[0], "title"), None);
        assert_eq!(attribute_or_empty(&imgs[0], "title"), "");
    }

    #[test]
    fn union_lists_first_collection_before_second() {
        let doc = Document::from(
            r#"<html><head><link rel="a" href="1"><meta name="b"><link rel="c" href="2"><meta name="d"></head></html>"#,
        );
        let names: Vec<_> = find_union(&doc, "meta", "link")
            .iter()
            .map(|sel| get_attribute(sel, "name").or_else(|| get_attribute(sel, "rel")))
            .collect();
        assert_eq!(
            names,
            vec![
                Some("b".to_string()),
                Some("d".to_string()),
                Some("a".to_string()),
                Some("c".to_string())
            ]
        );
    }
}
