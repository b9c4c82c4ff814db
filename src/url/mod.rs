//! URL handling module for Creeper
//!
//! This module provides seed validation, URL normalization and the
//! in-domain test that confines a crawl to one site.

mod domain;
mod normalize;

use crate::{UrlError, UrlResult};
use url::Url;

// Re-export main functions
pub use domain::SiteScope;
pub use normalize::{display_path, normalize_url, NormalizedUrl};

/// Parses and validates the seed URL of a crawl
///
/// The seed must be an absolute `http` or `https` URL with a host. Anything
/// else aborts the run before any graph work is done.
///
/// # Examples
///
/// ```
/// use creeper::url::parse_seed;
///
/// assert!(parse_seed("https://example.com/").is_ok());
/// assert!(parse_seed("example.com").is_err());
/// assert!(parse_seed("ftp://example.com/").is_err());
/// ```
pub fn parse_seed(input: &str) -> UrlResult<Url> {
    let url = Url::parse(input.trim())?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    Ok(url)
}
