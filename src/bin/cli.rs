//! CLI binary for itunes-search.
//!
//! Runs one search and prints the results to stdout. All tracing output
//! goes to stderr so `--json` output stays machine-readable.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use itunes_search::{Category, SearchConfig, SearchController, SearchError};
use tracing_subscriber::EnvFilter;

/// Search the iTunes catalogue.
#[derive(Parser)]
#[command(name = "itunes-search", version, about)]
struct Cli {
    /// Free-text search query.
    query: String,

    /// Category to search in (software, song, movie, podcast, ebook).
    /// Defaults to the configured category.
    #[arg(short = 'e', long)]
    category: Option<Category>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print results as a JSON array.
    #[arg(long)]
    json: bool,

    /// When nothing is found, print why the search came up empty.
    #[arg(long)]
    explain: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Users can override with RUST_LOG=trace to see queries and byte counts.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("itunes=info,itunes_search=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref(), &default_config_path())?;
    let category = cli.category.unwrap_or(config.default_category);
    let mut controller = SearchController::from_config(&config)?;

    let query = cli.query.trim();
    anyhow::ensure!(!query.is_empty(), "search query must not be empty");

    controller.perform_search(query, category).await;
    let results = controller.results();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        for result in results {
            println!("{} — {}", result.title, result.artist);
        }
    }

    if results.is_empty() {
        eprintln!("{}", empty_notice(cli.explain, controller.last_error()));
    }

    Ok(())
}

/// Message printed to stderr when a search finds nothing.
fn empty_notice(explain: bool, last_error: Option<&SearchError>) -> String {
    match (explain, last_error) {
        (true, Some(err)) => format!("no results: {err}"),
        _ => "no results".to_owned(),
    }
}

/// Load configuration from `explicit`, else from `default_path` if it
/// exists, else fall back to defaults.
fn load_config(explicit: Option<&Path>, default_path: &Path) -> anyhow::Result<SearchConfig> {
    if let Some(path) = explicit {
        return SearchConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()));
    }

    if default_path.exists() {
        tracing::debug!(path = %default_path.display(), "loading default config");
        SearchConfig::from_file(default_path)
            .with_context(|| format!("loading config from {}", default_path.display()))
    } else {
        Ok(SearchConfig::default())
    }
}

/// Returns the default config file path: `~/.config/itunes-search/config.toml`.
fn default_config_path() -> PathBuf {
    if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
        PathBuf::from(config).join("itunes-search").join("config.toml")
    } else if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home)
            .join(".config")
            .join("itunes-search")
            .join("config.toml")
    } else {
        PathBuf::from("/tmp/itunes-search-config/config.toml")
    }
}
