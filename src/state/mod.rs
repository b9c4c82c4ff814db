//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `PageState`: Tracks the fetch state of individual pages
//! - `CrawlGraph`: The link graph built by one crawl run

mod graph;
mod page_state;

// Re-export main types
pub use graph::{CrawlGraph, PageNode};
pub use page_state::PageState;
