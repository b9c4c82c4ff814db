//! Creeper: a single-site link mapper
//!
//! This crate crawls one web site from a seed address, builds a graph of
//! incoming and outgoing link counts per page, ranks pages by a weighted
//! link priority and renders a summary table and a sitemap.

pub mod config;
pub mod crawler;
pub mod output;
pub mod priority;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Creeper operations
#[derive(Debug, Error)]
pub enum CreeperError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid seed URL: {0}")]
    SeedInvalid(#[from] UrlError),

    #[error("Failed to fetch seed {url}: {source}")]
    SeedFetch {
        url: String,
        source: crawler::FetchError,
    },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(#[from] ::url::ParseError),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for Creeper operations
pub type Result<T> = std::result::Result<T, CreeperError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::crawler::{CrawlLimits, Crawler, Fetcher, HttpFetcher};
pub use crate::priority::{rank, score, PagePriority};
pub use crate::state::{CrawlGraph, PageNode, PageState};
pub use crate::url::{display_path, normalize_url, parse_seed, NormalizedUrl, SiteScope};
