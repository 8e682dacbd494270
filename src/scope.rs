//! Link scoping and page identifier normalization
//!
//! A wiki page is keyed by the portion of its link path after
//! `/r/<site>/wiki/`. Links without that segment point somewhere else on
//! the platform and are dropped rather than followed.

use url::Url;

/// Site-scoped link normalizer.
///
/// Holds the lower-cased site name and its precomputed wiki prefix for the
/// duration of one crawl. Identifiers are case-insensitive, so the site is
/// lower-cased once here instead of on every comparison.
#[derive(Debug, Clone)]
pub struct WikiScope {
    site: String,
    prefix: String,
}

impl WikiScope {
    /// Creates a scope for one site's wiki namespace.
    pub fn new(site: &str) -> Self {
        let site = site.to_lowercase();
        let prefix = format!("/r/{}/wiki/", site);
        Self { site, prefix }
    }

    /// The lower-cased site name.
    pub fn site(&self) -> &str {
        &self.site
    }

    /// Converts a raw link into a page identifier, or `None` when the link
    /// is outside this site's wiki namespace.
    ///
    /// The identifier is everything after the first occurrence of
    /// `/r/<site>/wiki/` in the lower-cased link. No further cleanup
    /// happens here: `.`/`..` segments and query strings pass through
    /// untouched. Known limitation.
    pub fn normalize(&self, raw_link: &str) -> Option<String> {
        let lower = raw_link.to_lowercase();
        lower
            .find(&self.prefix)
            .map(|at| lower[at + self.prefix.len()..].to_string())
    }

    /// Builds the URL a page identifier is fetched from.
    pub fn page_url(&self, base: &Url, id: &str) -> Result<Url, url::ParseError> {
        base.join(&format!("{}{}", self.prefix, id))
    }
}
