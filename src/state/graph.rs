use crate::state::PageState;
use crate::url::{display_path, normalize_url, NormalizedUrl};
use std::collections::HashMap;
use url::Url;

/// One page in the crawl graph
///
/// Link counts, display path and state live in a single record so the
/// per-page data can never drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct PageNode {
    /// The graph key
    pub url: NormalizedUrl,

    /// Escaped path for display (last seen wins)
    pub path: String,

    /// Number of referencing anchors on pages other than this one
    pub incoming: usize,

    /// Number of in-domain anchor occurrences found on this page
    pub outgoing: usize,

    /// Fetch state of the page
    pub state: PageState,
}

impl PageNode {
    fn discovered(url: NormalizedUrl, path: String) -> Self {
        Self {
            url,
            path,
            incoming: 0,
            outgoing: 0,
            state: PageState::Discovered,
        }
    }
}

/// Link graph of a single crawl run
///
/// Created with the seed already visited, mutated only by the crawler while
/// traversal runs, then read by the scorer and the renderers. Nodes are kept
/// in discovery order.
///
/// # Invariants
///
/// - `pages_visited() <= max_pages()` at all times
/// - every node was either the seed or the target of an in-domain link
#[derive(Debug, Clone)]
pub struct CrawlGraph {
    seed: NormalizedUrl,
    nodes: Vec<PageNode>,
    index: HashMap<NormalizedUrl, usize>,
    max_pages: usize,
    pages_visited: usize,
}

impl CrawlGraph {
    /// Creates a graph holding only the seed, counted as the first visit
    ///
    /// A `max_pages` of zero is raised to one: the seed is always fetched.
    pub fn new(seed: &Url, max_pages: usize) -> Self {
        let key = normalize_url(seed);
        let mut seed_node = PageNode::discovered(key.clone(), display_path(seed));
        seed_node.state = PageState::Processed;

        let mut index = HashMap::new();
        index.insert(key.clone(), 0);

        Self {
            seed: key,
            nodes: vec![seed_node],
            index,
            max_pages: max_pages.max(1),
            pages_visited: 1,
        }
    }

    /// Returns the seed's key
    pub fn seed(&self) -> &NormalizedUrl {
        &self.seed
    }

    /// Returns the seed's node
    pub fn seed_node(&self) -> &PageNode {
        &self.nodes[0]
    }

    /// Records one in-domain anchor found on page `from` pointing at `link`
    ///
    /// Increments the target's incoming count unless it is `from` itself,
    /// overwrites the target's display path and increments the outgoing count
    /// of `from` once per occurrence. Returns the target's key.
    pub fn record_link(&mut self, from: &NormalizedUrl, link: &Url) -> NormalizedUrl {
        let target = normalize_url(link);
        let path = display_path(link);

        let idx = self.insert_or_get(&target, path);
        if &target != from {
            self.nodes[idx].incoming += 1;
        }

        if let Some(&from_idx) = self.index.get(from) {
            self.nodes[from_idx].outgoing += 1;
        }

        target
    }

    fn insert_or_get(&mut self, url: &NormalizedUrl, path: String) -> usize {
        match self.index.get(url) {
            Some(&idx) => {
                self.nodes[idx].path = path;
                idx
            }
            None => {
                let idx = self.nodes.len();
                self.nodes.push(PageNode::discovered(url.clone(), path));
                self.index.insert(url.clone(), idx);
                idx
            }
        }
    }

    /// Returns true while another page may still be fetched
    pub fn has_page_budget(&self) -> bool {
        self.pages_visited < self.max_pages
    }

    /// Marks a known, unvisited page as visited if the page budget allows
    ///
    /// Returns true when the caller should now fetch the page. The page is
    /// left in the `Fetching` state until [`finish_visit`](Self::finish_visit).
    pub fn begin_visit(&mut self, url: &NormalizedUrl) -> bool {
        if !self.has_page_budget() {
            return false;
        }

        let Some(&idx) = self.index.get(url) else {
            return false;
        };

        let node = &mut self.nodes[idx];
        if node.state.is_visited() {
            return false;
        }

        node.state = PageState::Fetching;
        self.pages_visited += 1;
        true
    }

    /// Records the outcome of a fetch started with [`begin_visit`](Self::begin_visit)
    pub fn finish_visit(&mut self, url: &NormalizedUrl, fetched: bool) {
        if let Some(node) = self.node_mut(url) {
            if node.state == PageState::Fetching {
                node.state = if fetched {
                    PageState::Processed
                } else {
                    PageState::Failed
                };
            }
        }
    }

    fn node_mut(&mut self, url: &NormalizedUrl) -> Option<&mut PageNode> {
        let idx = *self.index.get(url)?;
        self.nodes.get_mut(idx)
    }

    /// Returns true if the page has been visited
    pub fn is_visited(&self, url: &NormalizedUrl) -> bool {
        self.get(url).is_some_and(|node| node.state.is_visited())
    }

    /// Looks up a page node
    pub fn get(&self, url: &NormalizedUrl) -> Option<&PageNode> {
        self.index.get(url).map(|&idx| &self.nodes[idx])
    }

    /// Looks up a page node by its serialized URL
    pub fn get_str(&self, url: &str) -> Option<&PageNode> {
        let parsed = Url::parse(url).ok()?;
        self.get(&normalize_url(&parsed))
    }

    /// Iterates over all nodes in discovery order
    pub fn nodes(&self) -> impl Iterator<Item = &PageNode> {
        self.nodes.iter()
    }

    /// Number of nodes in the graph
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the seed is inserted on creation
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of pages fetched so far, including the seed
    pub fn pages_visited(&self) -> usize {
        self.pages_visited
    }

    /// The page budget
    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    /// Total number of in-domain anchor occurrences recorded
    pub fn total_links(&self) -> usize {
        self.nodes.iter().map(|node| node.outgoing).sum()
    }

    /// Number of nodes in the given state
    pub fn count_by_state(&self, state: PageState) -> usize {
        self.nodes.iter().filter(|node| node.state == state).count()
    }
}
