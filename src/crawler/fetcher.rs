//! Wiki page fetcher
//!
//! Retrieves one wiki page over HTTP and extracts the content region
//! holding the rendered wiki, plus the links found inside it. Every
//! failure mode here (network error, timeout, error status, unreadable
//! body, missing region) surfaces as [`FetchOutcome::Absent`], so a bad
//! page never takes down the whole crawl.

use crate::config::FetchConfig;
use crate::{ConfigError, MirrorError};
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use url::Url;

/// Content region and links of one fetched wiki page.
#[derive(Debug, Clone)]
pub struct PageContent {
    /// Inner HTML of the wiki region.
    pub content: String,

    /// Link paths discovered inside the region, in document order.
    pub raw_links: Vec<String>,
}

/// Result of fetching one wiki page.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The wiki region was found and extracted.
    Page(PageContent),

    /// The page has no usable wiki region; the crawl skips it.
    Absent { reason: String },
}

/// HTTP-backed page fetcher with a per-page timeout.
pub struct WikiFetcher {
    client: Client,
    region: Selector,
    anchor: Selector,
}

impl WikiFetcher {
    /// Builds a fetcher from the fetch configuration.
    pub fn new(config: &FetchConfig) -> Result<Self, MirrorError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_millis(config.timeout_ms))
            .gzip(true)
            .brotli(true)
            .build()?;

        let region = parse_selector(&config.region_selector)?;
        let anchor = parse_selector("a[href]")?;

        Ok(Self {
            client,
            region,
            anchor,
        })
    }

    /// Fetches one page and extracts its wiki region.
    ///
    /// Timeouts and connection failures come back as [`FetchOutcome::Absent`]
    /// like any other per-page failure; the caller decides what a missing
    /// page means.
    pub async fn fetch_page(&self, url: &Url) -> FetchOutcome {
        let response = match self.client.get(url.clone()).send().await {
            Ok(r) => r,
            Err(e) => {
                let reason = if e.is_timeout() {
                    "request timeout".to_string()
                } else if e.is_connect() {
                    "connection failed".to_string()
                } else {
                    e.to_string()
                };
                return FetchOutcome::Absent { reason };
            }
        };

        let status = response.status();
        if !status.is_success() {
            return FetchOutcome::Absent {
                reason: format!("HTTP {}", status.as_u16()),
            };
        }

        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => {
                return FetchOutcome::Absent {
                    reason: format!("failed to read body: {}", e),
                }
            }
        };

        match extract_region(&body, &self.region, &self.anchor, url) {
            Some(page) => FetchOutcome::Page(page),
            None => FetchOutcome::Absent {
                reason: "wiki region not found".to_string(),
            },
        }
    }
}

fn parse_selector(selector: &str) -> Result<Selector, MirrorError> {
    Selector::parse(selector).map_err(|e| {
        MirrorError::Config(ConfigError::InvalidSelector(format!(
            "'{}': {}",
            selector, e
        )))
    })
}

/// Extracts the wiki region's inner HTML and the link paths inside it.
///
/// Anchors are resolved against the page URL and reduced to their path, so
/// relative links, rooted links, and fully-qualified links all come out in
/// the same comparable form. Anchors outside the region are ignored.
fn extract_region(
    html: &str,
    region: &Selector,
    anchor: &Selector,
    page_url: &Url,
) -> Option<PageContent> {
    let document = Html::parse_document(html);
    let region_el = document.select(region).next()?;

    let mut raw_links = Vec::new();
    for a in region_el.select(anchor) {
        if let Some(href) = a.value().attr("href") {
            if let Ok(resolved) = page_url.join(href.trim()) {
                raw_links.push(resolved.path().to_string());
            }
        }
    }

    Some(PageContent {
        content: region_el.inner_html(),
        raw_links,
    })
}
