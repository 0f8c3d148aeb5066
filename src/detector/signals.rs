use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

use super::CANDIDATE_TAGS;

// Variants of "add to cart": each letter pair accepts upper/lower case
// independently, substring match anywhere in the haystack.
static ADD_TO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[Aa][Dd][Dd].*[Tt][Oo].*").unwrap());

/// How many parent steps are searched for wrapper-driven markup.
const ANCESTOR_DEPTH: usize = 3;

/// Attribute consulted for the image-source signal.
const IMG_SRC_ATTR: &str = "src";

/// Decide whether `elem` is likely an add-to-cart control.
///
/// A short-circuiting OR over independent signals: own text, own attribute
/// values, attribute values of up to [`ANCESTOR_DEPTH`] element ancestors,
/// and the element's own `src` attribute. Absent fields never match.
pub fn is_add_to_cart_control(elem: ElementRef<'_>) -> bool {
    // The collector only yields candidate tags, but the gate stays here so
    // the predicate is total over arbitrary elements.
    if !CANDIDATE_TAGS
        .iter()
        .any(|tag| elem.value().name().eq_ignore_ascii_case(tag))
    {
        return false;
    }

    // Text says a variant of "add to _"
    let text: String = elem.text().collect();
    if ADD_TO_RE.is_match(&text) {
        return true;
    }

    // Any own attribute value contains a variant of "add to _"
    if any_attribute_matches(elem) {
        return true;
    }

    // Wrapper div(s): an ancestor within reach has a matching attribute.
    // Bounded by ANCESTOR_DEPTH even though a well-formed tree ends at the
    // document root on its own.
    let mut node = *elem;
    for _ in 0..ANCESTOR_DEPTH {
        let Some(parent) = node.parent().and_then(ElementRef::wrap) else {
            break;
        };
        if any_attribute_matches(parent) {
            return true;
        }
        node = *parent;
    }

    // For images, the icon path itself often carries the phrase
    if let Some(src) = elem.value().attr(IMG_SRC_ATTR) {
        if ADD_TO_RE.is_match(src) {
            return true;
        }
    }

    false
}

/// True if any attribute value of `elem` matches the pattern. Attribute
/// names are ignored; an element with no attributes never matches.
fn any_attribute_matches(elem: ElementRef<'_>) -> bool {
    elem.value()
        .attrs()
        .any(|(_, value)| ADD_TO_RE.is_match(value))
}
