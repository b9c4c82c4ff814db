//! HTML parser for extracting in-domain links
//!
//! Anchors are read in document order. Every `href` is resolved against the
//! URL of the page it appears on and kept only if it points back into the
//! crawled site.

use crate::url::SiteScope;
use scraper::{ElementRef, Html};
use url::Url;

/// Parses an HTML body into a document tree
///
/// Parsing never fails: malformed markup is recovered the way browsers do.
pub fn parse_html(html: &str) -> Html {
    Html::parse_document(html)
}

/// Yields the raw `href` of every anchor element in document order
///
/// The sequence is restartable: calling this again on the same document
/// yields the same hrefs.
pub fn anchor_hrefs(document: &Html) -> impl Iterator<Item = &str> + '_ {
    document
        .tree
        .root()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().name() == "a")
        .filter_map(|element| element.value().attr("href"))
}

/// Extracts in-domain links from a document, lazily and in document order
///
/// # Link Extraction Rules
///
/// - Every `<a href="...">` is a candidate, duplicates included
/// - Hrefs that fail to resolve are skipped silently
/// - Relative hrefs resolve against `base`, the page's own URL
/// - Only `http`/`https` URLs on the scope's host and port are yielded
///
/// # Example
///
/// ```
/// use creeper::crawler::{extract_links, parse_html};
/// use creeper::url::SiteScope;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/docs/").unwrap();
/// let scope = SiteScope::from_seed(&base).unwrap();
/// let document = parse_html(r#"<a href="intro">Intro</a><a href="https://other.com/">x</a>"#);
///
/// let links: Vec<_> = extract_links(&document, &base, &scope).collect();
/// assert_eq!(links.len(), 1);
/// assert_eq!(links[0].as_str(), "https://example.com/docs/intro");
/// ```
pub fn extract_links<'a>(
    document: &'a Html,
    base: &'a Url,
    scope: &'a SiteScope,
) -> impl Iterator<Item = Url> + 'a {
    anchor_hrefs(document)
        .filter_map(move |href| resolve_link(href, base))
        .filter(move |url| scope.contains(url))
}

/// Resolves an href against the page URL, logging and skipping failures
fn resolve_link(href: &str, base: &Url) -> Option<Url> {
    match base.join(href) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::debug!("Skipping unparseable href {:?} on {}: {}", href, base, e);
            None
        }
    }
}
