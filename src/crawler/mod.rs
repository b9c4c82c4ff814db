//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the `Fetcher` trait
//! - HTML parsing and link extraction
//! - The depth-first traversal that builds the link graph

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{CrawlLimits, Crawler};
pub use fetcher::{build_http_client, FetchError, Fetcher, HttpFetcher};
pub use parser::{anchor_hrefs, extract_links, parse_html};

use crate::state::CrawlGraph;
use crate::CreeperError;
use url::Url;

/// Runs a complete crawl operation
///
/// This is the main entry point for a crawl without a visit callback. It will:
/// 1. Fetch the seed
/// 2. Extract and follow in-domain links depth-first within the budgets
/// 3. Return the finished link graph
///
/// # Arguments
///
/// * `fetcher` - Source of page bodies
/// * `seed` - The start URL
/// * `limits` - Page and depth budgets
///
/// # Returns
///
/// * `Ok(CrawlGraph)` - Crawl completed
/// * `Err(CreeperError)` - The seed was unusable or could not be fetched
pub async fn crawl<F: Fetcher>(
    fetcher: F,
    seed: &Url,
    limits: CrawlLimits,
) -> Result<CrawlGraph, CreeperError> {
    Crawler::new(fetcher, limits).crawl(seed).await
}
