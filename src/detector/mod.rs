pub mod candidates;
pub mod signals;

use scraper::{ElementRef, Html};

/// Tags that commonly carry add-to-cart controls.
pub const CANDIDATE_TAGS: &[&str] = &["button", "input", "a"];

/// Find the elements on a page most likely to be add-to-cart controls.
///
/// Pure query over the parsed document: collect candidate-tagged elements,
/// keep the ones where a heuristic signal fires. Order follows the
/// collector (document order within each candidate tag). An empty result
/// means no candidate matched, not an error.
pub fn find_add_to_cart_candidates(document: &Html) -> Vec<ElementRef<'_>> {
    candidates::collect(document)
        .into_iter()
        .filter(|elem| signals::is_add_to_cart_control(*elem))
        .collect()
}
