use scraper::ElementRef;
use serde::Serialize;

/// Summary row for one matched element. Rows carry no score and no rank;
/// they keep the classifier's output order.
#[derive(Debug, Serialize)]
pub struct Detection {
    pub tag: String,
    pub id: Option<String>,
    pub class: Option<String>,
    pub text: String,
}

pub fn summarize(matches: &[ElementRef<'_>]) -> Vec<Detection> {
    matches.iter().map(|elem| describe(*elem)).collect()
}

fn describe(elem: ElementRef<'_>) -> Detection {
    // Collapse the subtree text to a single line for display
    let text = elem
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    Detection {
        tag: elem.value().name().to_string(),
        id: elem.value().attr("id").map(str::to_string),
        class: elem.value().attr("class").map(str::to_string),
        text: truncate(&text, 48),
    }
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::find_add_to_cart_candidates;
    use scraper::Html;

    #[test]
    fn rows_keep_detector_order() {
        let doc = Html::parse_document(
            r#"<button id="buy" class="cta">Add to cart</button>
               <div class="add-to-bag"><a href='#'>Purchase</a></div>"#,
        );
        let matches = find_add_to_cart_candidates(&doc);
        let rows = summarize(&matches);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].tag, "button");
        assert_eq!(rows[0].id.as_deref(), Some("buy"));
        assert_eq!(rows[0].text, "Add to cart");
        assert_eq!(rows[1].tag, "a");
        assert_eq!(rows[1].id, None);
    }

    #[test]
    fn long_text_truncated() {
        let long = "x".repeat(60);
        assert_eq!(truncate(&long, 48).chars().count(), 51);
        assert_eq!(truncate("short", 48), "short");
    }

    #[test]
    fn serializes_to_json() {
        let doc = Html::parse_document(r#"<button data-action="AddToCart">Buy</button>"#);
        let rows = summarize(&find_add_to_cart_candidates(&doc));
        let json = serde_json::to_string(&rows).unwrap();
        assert!(json.contains(r#""tag":"button""#));
    }
}
