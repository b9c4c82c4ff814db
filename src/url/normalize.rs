use std::fmt;
use url::Url;

/// A page URL in canonical form, used as the crawl graph key
///
/// The query string and fragment are removed and the path is never empty.
/// Two URLs that differ only in query or fragment map to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedUrl(Url);

impl NormalizedUrl {
    /// Returns the serialized URL
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the underlying parsed URL
    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl AsRef<str> for NormalizedUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Normalizes an absolute URL into a graph key
///
/// # Normalization Steps
///
/// 1. Remove the query string
/// 2. Remove the fragment
/// 3. Default an empty path to `/`
///
/// Scheme, host, port and path are otherwise kept as parsed. The function is
/// idempotent.
///
/// # Examples
///
/// ```
/// use creeper::url::normalize_url;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/page?utm_source=x#top").unwrap();
/// assert_eq!(normalize_url(&url).as_str(), "https://example.com/page");
/// ```
pub fn normalize_url(url: &Url) -> NormalizedUrl {
    let mut normalized = url.clone();
    normalized.set_query(None);
    normalized.set_fragment(None);

    if normalized.path().is_empty() {
        normalized.set_path("/");
    }

    NormalizedUrl(normalized)
}

/// Returns the percent-escaped path of a URL for display, defaulting to `/`
///
/// The display path is presentation only and never identifies a page.
pub fn display_path(url: &Url) -> String {
    match url.path() {
        "" => "/".to_string(),
        path => path.to_string(),
    }
}
