//! snoomirror main entry point
//!
//! Command-line interface for mirroring a subreddit's wiki to local files.

use clap::Parser;
use snoomirror::config::{load_config, Config};
use snoomirror::crawler::{mirror_wiki, CrawlOutcome};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Mirror a subreddit wiki to local files.
///
/// Fetches the wiki index page of SITE, follows every in-wiki link it
/// discovers, and writes one HTML file per page under OUT_DIR. A subreddit
/// without a wiki produces an empty `.nowiki` marker instead.
#[derive(Parser, Debug)]
#[command(name = "snoomirror")]
#[command(version)]
#[command(about = "Mirror a subreddit wiki to local files", long_about = None)]
struct Cli {
    /// Subreddit whose wiki should be mirrored
    #[arg(value_name = "SITE")]
    site: String,

    /// Directory the mirrored pages are written to
    #[arg(value_name = "OUT_DIR")]
    out_dir: PathBuf,

    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv); errors only by default
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    match mirror_wiki(&cli.site, &cli.out_dir, &config).await? {
        CrawlOutcome::NoWiki => {
            // sentinel marker already written; a wikiless site is not an error
        }
        CrawlOutcome::Mirrored(summary) => {
            tracing::info!("mirrored pages: {:?}", summary.pages);
            if !summary.failures.is_empty() {
                tracing::warn!("pages that failed to download: {:?}", summary.failures);
            }
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// The default is silent except for errors; each `-v` widens the filter.
fn setup_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("snoomirror=error"),
        1 => EnvFilter::new("snoomirror=info"),
        2 => EnvFilter::new("snoomirror=debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
