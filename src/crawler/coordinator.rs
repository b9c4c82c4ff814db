//! Crawler coordinator - the graph-building traversal
//!
//! The crawl is a depth-first walk over pages in anchor document order.
//! Instead of recursing, the coordinator keeps an explicit stack with one
//! frame per page being scanned: when a link leads to a newly fetched page,
//! that page's frame is pushed and scanned to completion before the parent
//! resumes with its next anchor.

use crate::config::CrawlerConfig;
use crate::crawler::parser::{extract_links, parse_html};
use crate::crawler::Fetcher;
use crate::state::{CrawlGraph, PageState};
use crate::url::{NormalizedUrl, SiteScope};
use crate::CreeperError;
use url::Url;

/// Page and depth budgets of a crawl
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlLimits {
    /// Hard cap on fetched pages, seed included
    pub max_pages: usize,

    /// Deepest page whose anchors are scanned, seed at depth 1; 0 means
    /// unlimited
    pub max_depth: usize,
}

impl CrawlLimits {
    /// Returns true if the anchors of a page at `depth` may be scanned
    pub fn allows_depth(&self, depth: usize) -> bool {
        self.max_depth == 0 || depth <= self.max_depth
    }
}

impl Default for CrawlLimits {
    fn default() -> Self {
        Self {
            max_pages: 100,
            max_depth: 0,
        }
    }
}

impl From<&CrawlerConfig> for CrawlLimits {
    fn from(config: &CrawlerConfig) -> Self {
        Self {
            max_pages: config.max_pages,
            max_depth: config.max_depth,
        }
    }
}

/// A page whose anchors are being scanned
struct Frame {
    page: NormalizedUrl,
    depth: usize,
    links: std::vec::IntoIter<Url>,
}

impl Frame {
    fn scan(
        page: NormalizedUrl,
        depth: usize,
        body: &str,
        base: &Url,
        scope: &SiteScope,
    ) -> Self {
        let document = parse_html(body);
        let links: Vec<Url> = extract_links(&document, base, scope).collect();
        tracing::debug!("{} in-domain links on {} (depth {})", links.len(), page, depth);

        Self {
            page,
            depth,
            links: links.into_iter(),
        }
    }
}

type VisitCallback = Box<dyn FnMut(&NormalizedUrl)>;

/// Main crawler structure
///
/// Owns the fetcher and budgets. Each call to [`crawl`](Self::crawl)
/// produces a fresh [`CrawlGraph`].
pub struct Crawler<F> {
    fetcher: F,
    limits: CrawlLimits,
    on_visit: Option<VisitCallback>,
}

impl<F: Fetcher> Crawler<F> {
    /// Creates a new crawler
    pub fn new(fetcher: F, limits: CrawlLimits) -> Self {
        Self {
            fetcher,
            limits,
            on_visit: None,
        }
    }

    /// Registers a callback invoked with every page right before it is fetched
    ///
    /// The seed is not reported.
    pub fn on_visit(mut self, callback: impl FnMut(&NormalizedUrl) + 'static) -> Self {
        self.on_visit = Some(Box::new(callback));
        self
    }

    /// Returns the fetcher
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Crawls the site of `seed` and returns the finished link graph
    ///
    /// For every in-domain anchor on a fetched page, in document order:
    /// 1. Record the link (incoming, outgoing, display path)
    /// 2. If the target is unvisited and the page budget allows, mark it
    ///    visited and fetch it
    /// 3. On success, scan the target's anchors before continuing, unless
    ///    it lies past the depth budget; on failure, keep it as a visited
    ///    leaf
    ///
    /// The page budget only stops fetching: anchors of scanned pages are
    /// always counted. A page past the depth budget is still fetched and
    /// reported but stays a leaf, and it is never fetched again.
    ///
    /// # Errors
    ///
    /// * `SeedInvalid` - the seed has no host
    /// * `SeedFetch` - the seed itself could not be fetched
    ///
    /// Failures on any other page are absorbed.
    pub async fn crawl(&mut self, seed: &Url) -> Result<CrawlGraph, CreeperError> {
        let scope = SiteScope::from_seed(seed)?;

        let body = self
            .fetcher
            .fetch(seed)
            .await
            .map_err(|source| CreeperError::SeedFetch {
                url: seed.to_string(),
                source,
            })?;

        let mut graph = CrawlGraph::new(seed, self.limits.max_pages);
        tracing::info!(
            "Starting crawl of {} (max pages: {}, max depth: {})",
            graph.seed(),
            graph.max_pages(),
            self.limits.max_depth
        );

        let mut stack = vec![Frame::scan(graph.seed().clone(), 1, &body, seed, &scope)];

        while let Some(frame) = stack.last_mut() {
            let Some(link) = frame.links.next() else {
                stack.pop();
                continue;
            };
            let from = frame.page.clone();
            let child_depth = frame.depth + 1;

            let target = graph.record_link(&from, &link);

            if graph.is_visited(&target) {
                continue;
            }

            if !graph.begin_visit(&target) {
                tracing::trace!("Page budget reached, not fetching {}", target);
                continue;
            }

            if let Some(callback) = self.on_visit.as_mut() {
                callback(&target);
            }

            match self.fetcher.fetch(target.as_url()).await {
                Ok(body) => {
                    graph.finish_visit(&target, true);
                    if self.limits.allows_depth(child_depth) {
                        let base = target.as_url().clone();
                        stack.push(Frame::scan(target, child_depth, &body, &base, &scope));
                    } else {
                        tracing::trace!("Depth budget reached, not scanning {}", target);
                    }
                }
                Err(e) => {
                    tracing::debug!("Failed to fetch {}: {}", target, e);
                    graph.finish_visit(&target, false);
                }
            }
        }

        tracing::info!(
            "Crawl completed: {} pages fetched ({} failed), {} pages known, {} links",
            graph.pages_visited(),
            graph.count_by_state(PageState::Failed),
            graph.len(),
            graph.total_links()
        );

        Ok(graph)
    }
}
