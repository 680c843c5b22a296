//! HTML word counting and link extraction

use crate::parser::PageResult;
use crate::url::PatternSet;
use scraper::{Html, Node, Selector};
use std::collections::HashMap;
use url::Url;

/// Elements whose text is not page prose
const NON_PROSE_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Parses HTML content into word counts and outbound links
///
/// # Word Rules
///
/// - Only text inside `<body>` counts; script and style contents are skipped
/// - Text is split on whitespace
/// - Each token keeps only ASCII letters, digits and `_`, lowercased
/// - Empty tokens and tokens matching an ignored-word pattern are dropped
///
/// # Link Rules
///
/// **Include:** `<a href="...">` resolved against `base_url`, in document order
///
/// **Exclude:**
/// - `<a href="..." download>`
/// - `javascript:`, `mailto:`, `tel:` links and data URIs
/// - Fragment-only links
/// - Anything that does not resolve to `http`, `https` or `file`
///
/// # Example
///
/// ```
/// use word_crawler::parser::parse_html;
/// use word_crawler::url::PatternSet;
/// use url::Url;
///
/// let html = r#"<html><body>Rust rust <a href="/next">next</a></body></html>"#;
/// let base_url = Url::parse("https://example.com/").unwrap();
/// let page = parse_html(html, &base_url, &PatternSet::default());
/// assert_eq!(page.word_counts.get("rust"), Some(&2));
/// assert_eq!(page.links, vec!["https://example.com/next".to_string()]);
/// ```
pub fn parse_html(html: &str, base_url: &Url, ignored_words: &PatternSet) -> PageResult {
    let document = Html::parse_document(html);

    PageResult {
        word_counts: count_words(&document, ignored_words),
        links: extract_links(&document, base_url),
    }
}

/// Strips a raw token down to its word characters, lowercased
///
/// Returns None if nothing is left.
pub fn normalize_word(token: &str) -> Option<String> {
    let word: String = token
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if word.is_empty() {
        None
    } else {
        Some(word)
    }
}

fn count_words(document: &Html, ignored_words: &PatternSet) -> HashMap<String, u64> {
    let mut counts = HashMap::new();

    let body_selector = match Selector::parse("body") {
        Ok(selector) => selector,
        Err(_) => return counts,
    };

    let Some(body) = document.select(&body_selector).next() else {
        return counts;
    };

    for node in body.descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };

        let in_non_prose = node
            .parent()
            .and_then(|parent| parent.value().as_element().map(|e| e.name().to_string()))
            .is_some_and(|name| NON_PROSE_ELEMENTS.contains(&name.as_str()));
        if in_non_prose {
            continue;
        }

        for token in text.split_whitespace() {
            let Some(word) = normalize_word(token) else {
                continue;
            };
            if ignored_words.matches(&word) {
                continue;
            }
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    counts
}

fn extract_links(document: &Html, base_url: &Url) -> Vec<String> {
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            // Skip if it has the download attribute
            if element.value().attr("download").is_some() {
                continue;
            }

            if let Some(href) = element.value().attr("href") {
                if let Some(absolute_url) = resolve_link(href, base_url) {
                    links.push(absolute_url);
                }
            }
        }
    }

    links
}

/// Resolves a link href to an absolute URL and validates it
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    let absolute_url = base_url.join(href).ok()?;
    match absolute_url.scheme() {
        "http" | "https" | "file" => Some(absolute_url.to_string()),
        _ => None,
    }
}
