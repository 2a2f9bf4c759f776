// src/extract/html.rs
// =============================================================================
// This module extracts candidate links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (lenient HTML5 parsing, so malformed markup
//   degrades to "fewer links", never an error)
// - Supports CSS selectors for finding elements
//
// Only scheme-qualified http/https hrefs are kept. Relative links are
// dropped rather than resolved against a base URL; the crawler follows
// absolute outbound links only.
// =============================================================================

use scraper::{Html, Selector};

// Extracts all absolute http/https links from HTML content, in document order.
//
// Example:
//   html = "<a href='https://a.test'>A</a><a href='/docs'>Docs</a>"
//   result = ["https://a.test"]
pub fn extract_links(html: &str) -> Vec<String> {
    let mut links = Vec::new();

    let document = Html::parse_document(html);

    // The selector is a constant and known to be valid
    let selector = Selector::parse("a[href]").unwrap();

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            if is_absolute_http_link(href) {
                links.push(href.to_string());
            }
        }
    }

    links
}

// Keeps only scheme-qualified web links; skips relative paths, anchors,
// mailto:, tel:, javascript: and the rest
fn is_absolute_http_link(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_absolute_link() {
        let html = r#"<a href="https://www.rust-lang.org">Rust</a>"#;
        let links = extract_links(html);
        assert_eq!(links, vec!["https://www.rust-lang.org"]);
    }

    #[test]
    fn test_relative_links_are_dropped() {
        let html = r##"
            <a href="https://a.test/page">A</a>
            <a href="/docs">Docs</a>
            <a href="../about">About</a>
            <a href="#section">Anchor</a>
        "##;
        let links = extract_links(html);
        assert_eq!(links, vec!["https://a.test/page"]);
    }

    #[test]
    fn test_skip_mailto_and_javascript() {
        let html = r#"
            <a href="mailto:test@example.com">Email</a>
            <a href="javascript:void(0)">JS</a>
            <a href="tel:+1234567890">Call</a>
        "#;
        let links = extract_links(html);
        assert!(links.is_empty());
    }

    #[test]
    fn test_document_order_is_preserved() {
        let html = r#"
            <p><a href="https://first.test">1</a></p>
            <div><a href="https://second.test">2</a></div>
            <a href="https://third.test">3</a>
        "#;
        let links = extract_links(html);
        assert_eq!(
            links,
            vec![
                "https://first.test",
                "https://second.test",
                "https://third.test"
            ]
        );
    }

    #[test]
    fn test_empty_and_invalid_markup_yield_no_links() {
        assert!(extract_links("").is_empty());
        assert!(extract_links("<<<not html>>>").is_empty());
        assert!(extract_links("plain text without any markup").is_empty());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let html = r#"
            <a href="https://a.test">A</a>
            <a href="https://b.test">B</a>
            <a href="https://a.test">A again</a>
        "#;
        let first = extract_links(html);
        let second = extract_links(html);
        assert_eq!(first, second);
        // Duplicates within a page are preserved here; dedup is the
        // orchestrator's job at collection time
        assert_eq!(first.len(), 3);
    }
}
