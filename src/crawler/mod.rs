//! Crawler module for wiki traversal and page fetching
//!
//! This module contains the core mirroring logic:
//! - Depth-first traversal with visited-set deduplication
//! - HTTP fetching of wiki pages with per-page timeouts
//! - Wiki region and link extraction

mod coordinator;
mod fetcher;

pub use coordinator::{CrawlOutcome, CrawlSummary, Mirror, ROOT_PAGE};
pub use fetcher::{FetchOutcome, PageContent, WikiFetcher};

use crate::config::Config;
use crate::MirrorError;
use std::path::Path;

/// Mirrors one site's wiki into `out_dir`.
///
/// Convenience wrapper around [`Mirror`]: one call runs one complete
/// crawl. Per-page failures are reported in the returned summary; only
/// environment problems (config, client construction, filesystem) surface
/// as errors.
pub async fn mirror_wiki(
    site: &str,
    out_dir: &Path,
    config: &Config,
) -> Result<CrawlOutcome, MirrorError> {
    Mirror::new(site, out_dir, config)?.run().await
}
