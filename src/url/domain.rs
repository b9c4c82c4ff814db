use crate::{UrlError, UrlResult};
use url::Url;

/// The site a crawl is confined to
///
/// A URL is in scope when its scheme is `http` or `https` and its host and
/// port equal the seed's. Subdomains are different sites.
///
/// Ports are compared after parsing, which drops a port equal to the
/// scheme's default: `http://example.com:80/` and `http://example.com/` are
/// the same site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteScope {
    host: String,
    port: Option<u16>,
}

impl SiteScope {
    /// Builds the scope from the seed URL
    ///
    /// # Examples
    ///
    /// ```
    /// use url::Url;
    /// use creeper::url::SiteScope;
    ///
    /// let seed = Url::parse("https://example.com/").unwrap();
    /// let scope = SiteScope::from_seed(&seed).unwrap();
    /// assert!(scope.contains(&Url::parse("http://example.com/about").unwrap()));
    /// assert!(!scope.contains(&Url::parse("https://blog.example.com/").unwrap()));
    /// ```
    pub fn from_seed(seed: &Url) -> UrlResult<Self> {
        let host = seed.host_str().ok_or(UrlError::MissingHost)?;
        Ok(Self {
            host: host.to_string(),
            port: seed.port(),
        })
    }

    /// Returns true if the URL is an in-domain link
    pub fn contains(&self, url: &Url) -> bool {
        matches!(url.scheme(), "http" | "https")
            && url.host_str() == Some(self.host.as_str())
            && url.port() == self.port
    }
}
