//! Summary table of visited pages and their incoming link counts
//!
//! One row per distinct display path: the seed's path first, the rest in
//! lexicographic order. Paths longer than the path column wrap onto
//! continuation rows.

use crate::state::CrawlGraph;
use std::collections::HashMap;

/// Width used when the terminal size is unknown or implausibly small
pub const DEFAULT_WIDTH: usize = 80;

/// Narrowest width accepted for the table
pub const MIN_WIDTH: usize = 30;

const COUNT_COLUMN: usize = 6;
const SEPARATOR: &str = " | ";

/// A row of the summary table before wrapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub path: String,
    pub incoming: usize,
}

/// Returns the width of the attached terminal, or [`DEFAULT_WIDTH`]
pub fn terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((columns, _)) if usize::from(columns) >= MIN_WIDTH => usize::from(columns),
        _ => DEFAULT_WIDTH,
    }
}

/// Collects the table rows from the graph
///
/// When several pages share a display path (same path over `http` and
/// `https`), the count of the first one discovered is used.
pub fn summary_rows(graph: &CrawlGraph) -> Vec<SummaryRow> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for node in graph.nodes() {
        counts.entry(node.path.as_str()).or_insert(node.incoming);
    }

    let seed_path = graph.seed_node().path.as_str();
    let mut rest: Vec<&str> = counts
        .keys()
        .copied()
        .filter(|path| *path != seed_path)
        .collect();
    rest.sort_unstable();

    let mut rows = Vec::with_capacity(counts.len());
    if let Some(&incoming) = counts.get(seed_path) {
        rows.push(SummaryRow {
            path: seed_path.to_string(),
            incoming,
        });
    }
    rows.extend(rest.into_iter().map(|path| SummaryRow {
        path: path.to_string(),
        incoming: counts[path],
    }));
    rows
}

/// Formats the two-column `Count | Path` table for the given width
///
/// # Arguments
///
/// * `graph` - The finished crawl graph
/// * `width` - Total table width; values below [`MIN_WIDTH`] use [`DEFAULT_WIDTH`]
pub fn format_summary_table(graph: &CrawlGraph, width: usize) -> String {
    let width = if width < MIN_WIDTH { DEFAULT_WIDTH } else { width };
    let path_column = width - COUNT_COLUMN - SEPARATOR.len();

    let mut table = String::new();
    table.push_str(&format!(
        "{:<w$}{}{}\n",
        "Count",
        SEPARATOR,
        "Path",
        w = COUNT_COLUMN
    ));
    table.push_str(&"-".repeat(width));
    table.push('\n');

    for row in summary_rows(graph) {
        let chars: Vec<char> = row.path.chars().collect();
        for (i, chunk) in chars.chunks(path_column).enumerate() {
            let count = if i == 0 {
                row.incoming.to_string()
            } else {
                String::new()
            };
            let chunk: String = chunk.iter().collect();
            table.push_str(&format!(
                "{:<w$}{}{}\n",
                count,
                SEPARATOR,
                chunk,
                w = COUNT_COLUMN
            ));
        }
    }

    table
}

/// Prints the summary table to stdout, sized to the terminal
pub fn print_summary(graph: &CrawlGraph) {
    println!("\nSummary of visited pages and incoming link counts:");
    print!("{}", format_summary_table(graph, terminal_width()));
}
