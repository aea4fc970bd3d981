//! Producer entry points. Each run builds one record list and replaces the
//! games file with it.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::{
    catalog::{self, FALLBACK_SOURCE},
    config::AppConfig,
    extract,
    fetch::{FetchError, ScrapeClient},
    models::{GameCollection, GameRecord},
    store,
};

/// Provenance label for records extracted from the live page.
pub const LIVE_SOURCE: &str = "IGN via Firecrawl API";

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Provenance label written with the records, if any.
    pub source: Option<String>,
    /// Number of records written.
    pub games: usize,
    /// Whether the hardcoded fallback list was substituted.
    pub used_fallback: bool,
}

/// Scrape the configured page, extract records, and write the collection.
///
/// Fetch and extraction problems degrade to the fallback list; only a
/// failure to write the games file is returned as an error.
pub async fn run_scrape(config: &AppConfig) -> Result<RunReport> {
    info!("scraping upcoming games from {}", config.source_url);

    let games = match fetch_live(config).await {
        Ok(markdown) => {
            info!("scraped {} bytes of markdown", markdown.len());
            extract::extract_games(&markdown)
        }
        Err(err) => {
            error!("error scraping games: {}", err);
            Vec::new()
        }
    };

    write_or_fallback(&config.output_path, games, LIVE_SOURCE)
}

/// Run the extractor over a local markdown file and write the collection.
pub fn run_extract_file(config: &AppConfig, input: &Path) -> Result<RunReport> {
    let markdown = fs::read_to_string(input)
        .with_context(|| format!("failed to read markdown {}", input.display()))?;
    let games = extract::extract_games(&markdown);
    let source = format!("Local markdown ({})", input.display());
    write_or_fallback(&config.output_path, games, &source)
}

/// Write the curated static catalog as a bare array.
pub fn run_static(config: &AppConfig) -> Result<RunReport> {
    let games = catalog::static_catalog();
    store::write_records(&config.output_path, &games)?;
    info!(
        "saved {} catalog games to {}",
        games.len(),
        config.output_path.display()
    );
    Ok(RunReport {
        source: None,
        games: games.len(),
        used_fallback: false,
    })
}

async fn fetch_live(config: &AppConfig) -> Result<String, FetchError> {
    let client = ScrapeClient::from_config(config)?;
    client.scrape_markdown(&config.source_url).await
}

fn write_or_fallback(path: &Path, games: Vec<GameRecord>, source: &str) -> Result<RunReport> {
    let used_fallback = games.is_empty();
    let collection = if used_fallback {
        warn!("no games extracted, falling back to sample data");
        GameCollection::new(catalog::fallback_games(), FALLBACK_SOURCE)
    } else {
        GameCollection::new(games, source)
    };

    store::write_collection(path, &collection)?;
    info!(
        "saved {} games from {} to {}",
        collection.games.len(),
        collection.source,
        path.display()
    );

    Ok(RunReport {
        games: collection.games.len(),
        source: Some(collection.source),
        used_fallback,
    })
}
