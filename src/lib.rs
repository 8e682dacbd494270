//! Snoomirror: a subreddit wiki mirror
//!
//! This crate downloads a subreddit's wiki page by page, following every
//! in-wiki link it discovers, and writes each page to a local file whose
//! path mirrors the wiki's own link structure.

pub mod config;
pub mod crawler;
pub mod output;
pub mod scope;

use thiserror::Error;

/// Main error type for snoomirror operations
///
/// Per-page fetch failures are not represented here: a page that cannot
/// be fetched is skipped and reported in the crawl summary, while these
/// errors abort the run.
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid CSS selector in config: {0}")]
    InvalidSelector(String),
}

/// Result type alias for snoomirror operations
pub type Result<T> = std::result::Result<T, MirrorError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{mirror_wiki, CrawlOutcome, CrawlSummary};
pub use scope::WikiScope;
