use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::CANDIDATE_TAGS;

static TAG_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    CANDIDATE_TAGS
        .iter()
        .map(|tag| Selector::parse(tag).unwrap())
        .collect()
});

/// All elements carrying a candidate tag: document order within each tag,
/// tags in `CANDIDATE_TAGS` order. An empty document yields an empty vec.
pub fn collect(document: &Html) -> Vec<ElementRef<'_>> {
    let mut candidates = Vec::new();
    for selector in TAG_SELECTORS.iter() {
        candidates.extend(document.select(selector));
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(html: &str) -> Vec<String> {
        let doc = Html::parse_document(html);
        collect(&doc)
            .iter()
            .map(|e| e.value().name().to_string())
            .collect()
    }

    #[test]
    fn grouped_by_tag_in_fixed_order() {
        let html = r#"<a href='#'>one</a><button>two</button><input type="text"><button>three</button>"#;
        assert_eq!(tags(html), vec!["button", "button", "input", "a"]);
    }

    #[test]
    fn non_candidate_tags_skipped() {
        let html = "<div>x</div><span>y</span><img src='a.png'><button>z</button>";
        assert_eq!(tags(html), vec!["button"]);
    }

    #[test]
    fn empty_document() {
        assert!(tags("").is_empty());
    }

    #[test]
    fn nested_candidates_all_collected() {
        // An anchor wrapping a button yields both, each under its own tag
        let html = r#"<a href='#'><button>Buy</button></a>"#;
        assert_eq!(tags(html), vec!["button", "a"]);
    }
}
