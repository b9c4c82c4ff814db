//! Output module for crawl reports
//!
//! This module handles:
//! - The summary table of incoming link counts per path
//! - The priority-ordered sitemap XML document

mod sitemap;
mod summary;

pub use sitemap::{format_sitemap, write_sitemap, SITEMAP_NAMESPACE};
pub use summary::{
    format_summary_table, print_summary, summary_rows, terminal_width, SummaryRow, DEFAULT_WIDTH,
    MIN_WIDTH,
};

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Failed to format output: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
