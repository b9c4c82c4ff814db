//! Link-based page priority
//!
//! Each page gets a score in `[0, 1]`:
//!
//! ```text
//! priority = 0.75 * outgoing / max_outgoing + 0.25 * incoming / max_incoming
//! ```
//!
//! Both maxima are taken over every node in the graph and floored at 1, so a
//! graph without internal links scores every page 0. Outbound links weigh
//! more, favouring hub pages.

use crate::state::CrawlGraph;
use crate::url::NormalizedUrl;
use std::cmp::Ordering;

/// Weight of the normalized outgoing link count
pub const OUTLINK_WEIGHT: f64 = 0.75;

/// Weight of the normalized incoming link count
pub const INLINK_WEIGHT: f64 = 0.25;

/// A page and its priority score
#[derive(Debug, Clone, PartialEq)]
pub struct PagePriority {
    pub url: NormalizedUrl,
    pub priority: f64,
}

impl PagePriority {
    /// The score with two decimals, as written to the sitemap
    pub fn formatted(&self) -> String {
        format!("{:.2}", self.priority)
    }
}

/// Scores every node of the graph, in discovery order
pub fn score(graph: &CrawlGraph) -> Vec<PagePriority> {
    let max_outgoing = graph.nodes().map(|n| n.outgoing).max().unwrap_or(0).max(1) as f64;
    let max_incoming = graph.nodes().map(|n| n.incoming).max().unwrap_or(0).max(1) as f64;

    graph
        .nodes()
        .map(|node| PagePriority {
            url: node.url.clone(),
            priority: OUTLINK_WEIGHT * (node.outgoing as f64 / max_outgoing)
                + INLINK_WEIGHT * (node.incoming as f64 / max_incoming),
        })
        .collect()
}

/// Scores every node and sorts by descending priority
///
/// Equal priorities are ordered by ascending URL, so the result is the same
/// on every run.
pub fn rank(graph: &CrawlGraph) -> Vec<PagePriority> {
    let mut ranked = score(graph);
    ranked.sort_by(compare_ranked);
    ranked
}

fn compare_ranked(a: &PagePriority, b: &PagePriority) -> Ordering {
    b.priority
        .total_cmp(&a.priority)
        .then_with(|| a.url.cmp(&b.url))
}
