use serde::Deserialize;

/// Main configuration structure for snoomirror
///
/// Every field has a default, so running without a config file is
/// equivalent to `Config::default()`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
}

/// Page fetching configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Base URL of the hosting platform
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Per-page request timeout (milliseconds)
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,

    /// CSS selector for the content region holding the rendered wiki
    #[serde(rename = "region-selector")]
    pub region_selector: String,

    /// User agent sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.reddit.com".to_string(),
            timeout_ms: 30_000,
            region_selector: ".md.wiki".to_string(),
            user_agent: concat!("snoomirror/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
