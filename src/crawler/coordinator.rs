//! Crawl coordination - the wiki traversal engine
//!
//! Owns the visited set and the depth-first work list, and decides for
//! each discovered identifier whether to fetch or skip. Fetching is
//! delegated to [`WikiFetcher`] and writing to [`PageStore`]; this module
//! only cares about which pages get processed, in what order, and how a
//! missing page is contained.

use crate::config::Config;
use crate::crawler::fetcher::{FetchOutcome, WikiFetcher};
use crate::output::PageStore;
use crate::scope::WikiScope;
use crate::MirrorError;
use std::collections::HashSet;
use std::path::Path;
use url::Url;

/// Identifier of the root wiki page.
pub const ROOT_PAGE: &str = "index";

/// Final outcome of one crawl.
#[derive(Debug)]
pub enum CrawlOutcome {
    /// The site has no wiki; only the sentinel marker was written.
    NoWiki,

    /// The wiki was mirrored.
    Mirrored(CrawlSummary),
}

/// Per-run accounting, reported when the crawl finishes.
#[derive(Debug, Default)]
pub struct CrawlSummary {
    /// Successfully written identifiers, in completion order.
    pub pages: Vec<String>,

    /// Identifiers whose fetch failed. Their subtrees were not explored.
    pub failures: Vec<String>,
}

/// One wiki mirroring run.
///
/// The visited set lives exactly as long as the run and is append-only:
/// once an identifier is recorded it is never fetched again, no matter how
/// many pages link to it. Nothing is shared between runs.
pub struct Mirror {
    scope: WikiScope,
    base: Url,
    fetcher: WikiFetcher,
    store: PageStore,
    visited: HashSet<String>,
    summary: CrawlSummary,
}

impl Mirror {
    /// Creates a mirror run for one site, writing under `out_dir`.
    pub fn new(site: &str, out_dir: &Path, config: &Config) -> Result<Self, MirrorError> {
        let scope = WikiScope::new(site);
        let base = Url::parse(&config.fetch.base_url)?;
        let fetcher = WikiFetcher::new(&config.fetch)?;
        let store = PageStore::create(out_dir)?;

        Ok(Self {
            scope,
            base,
            fetcher,
            store,
            visited: HashSet::new(),
            summary: CrawlSummary::default(),
        })
    }

    /// Runs the crawl to completion.
    ///
    /// Starts at the root index page. A site whose root has no wiki region
    /// short-circuits to [`CrawlOutcome::NoWiki`] after writing the
    /// sentinel marker; that is a normal outcome, not an error.
    pub async fn run(mut self) -> Result<CrawlOutcome, MirrorError> {
        tracing::info!("downloading index of /r/{}", self.scope.site());

        let root_url = self.scope.page_url(&self.base, ROOT_PAGE)?;
        let root = match self.fetcher.fetch_page(&root_url).await {
            FetchOutcome::Page(page) => page,
            FetchOutcome::Absent { reason } => {
                tracing::info!("/r/{} doesn't have a wiki: {}", self.scope.site(), reason);
                self.store.write_no_wiki_marker()?;
                return Ok(CrawlOutcome::NoWiki);
            }
        };

        let links = self.in_scope_links(&root.raw_links);
        self.store.write_page(ROOT_PAGE, &root.content)?;
        self.mark_done(ROOT_PAGE.to_string());

        // Explicit work list standing in for the natural recursion, so
        // deeply nested wikis cannot exhaust the call stack. Pushing each
        // page's links in reverse keeps the left-most link on top: a
        // page's subtree completes before its later siblings, exactly the
        // pre-order a recursive descent would produce.
        let mut pending: Vec<String> = Vec::new();
        self.push_links(&mut pending, links);

        while let Some(id) = pending.pop() {
            if self.visited.contains(&id) {
                continue;
            }
            self.visit(&id, &mut pending).await?;
        }

        tracing::info!(
            "successfully done downloading /r/{}: {} pages, {} failed",
            self.scope.site(),
            self.summary.pages.len(),
            self.summary.failures.len()
        );
        Ok(CrawlOutcome::Mirrored(self.summary))
    }

    /// Fetches one page, writes it, and queues the links found on it.
    ///
    /// A failed fetch is logged and recorded; it leaves the identifier out
    /// of the visited set and does not disturb the rest of the work list,
    /// so one dead page costs the crawl nothing but its own subtree.
    async fn visit(&mut self, id: &str, pending: &mut Vec<String>) -> Result<(), MirrorError> {
        tracing::info!("downloading {}", id);

        let url = match self.scope.page_url(&self.base, id) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("failed downloading {}: bad page URL: {}", id, e);
                self.summary.failures.push(id.to_string());
                return Ok(());
            }
        };

        let page = match self.fetcher.fetch_page(&url).await {
            FetchOutcome::Page(page) => page,
            FetchOutcome::Absent { reason } => {
                tracing::warn!("failed downloading {}: {}", id, reason);
                self.summary.failures.push(id.to_string());
                return Ok(());
            }
        };

        let links = self.in_scope_links(&page.raw_links);
        self.store.write_page(id, &page.content)?;
        self.mark_done(id.to_string());

        self.push_links(pending, links);
        Ok(())
    }

    /// Normalizes raw links against this run's scope, dropping the
    /// out-of-scope ones.
    fn in_scope_links(&self, raw_links: &[String]) -> Vec<String> {
        raw_links
            .iter()
            .filter_map(|raw| self.scope.normalize(raw))
            .collect()
    }

    /// Records a page as visited, only after its content is on disk. A
    /// fetch that failed is never recorded, so a later discovery of the
    /// same identifier still gets its attempt.
    fn mark_done(&mut self, id: String) {
        self.visited.insert(id.clone());
        self.summary.pages.push(id);
    }

    /// Pushes not-yet-visited links in reverse discovery order.
    fn push_links(&self, pending: &mut Vec<String>, links: Vec<String>) {
        for link in links.into_iter().rev() {
            if !self.visited.contains(&link) {
                pending.push(link);
            }
        }
    }
}
