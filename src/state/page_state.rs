/// Page state definitions for tracking crawl progress
///
/// This module defines the states a page node can be in during a crawl.
use std::fmt;

/// Represents the current state of a page in the crawl graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageState {
    // ===== Unvisited States =====
    /// Page was linked to but not fetched because the page budget ran out
    Discovered,

    // ===== Visited States =====
    /// Page is marked visited and its fetch is in flight
    Fetching,

    /// Page was fetched; its anchors were scanned unless it lies past the
    /// depth budget
    Processed,

    /// Page fetch failed; the page stays in the graph as a leaf
    Failed,
}

impl PageState {
    /// Returns true if the page was dequeued for fetching
    ///
    /// Visited pages are never fetched again.
    pub fn is_visited(&self) -> bool {
        matches!(self, Self::Fetching | Self::Processed | Self::Failed)
    }

    /// Returns true if this represents a successful fetch
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Processed)
    }

    /// Short lowercase label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Discovered => "discovered",
            Self::Fetching => "fetching",
            Self::Processed => "processed",
            Self::Failed => "failed",
        }
    }

    /// Returns all possible page states
    pub fn all_states() -> [Self; 4] {
        [
            Self::Discovered,
            Self::Fetching,
            Self::Processed,
            Self::Failed,
        ]
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
