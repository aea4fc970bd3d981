use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Result;
use radar_core::{
    pipeline::{self, RunReport},
    store, AppConfig, PlatformFilter, StoredGames,
};

/// Collects upcoming game releases into a JSON file and lists them
#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Games file to write or read
    #[clap(long, short, env = "RADAR_OUTPUT_PATH", global = true)]
    pub output: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Scrape the upcoming releases page, falling back to sample data
    Scrape,

    /// Write the curated catalog as a bare array
    Static,

    /// Extract releases from a local markdown file
    Extract {
        /// Markdown file to read
        input: PathBuf,
    },

    /// Print the games file, optionally for one platform
    List {
        /// All, PlayStation, Xbox, PC or "Nintendo Switch"
        #[clap(long, short, default_value = "All")]
        platform: PlatformFilter,
    },
}

impl Commands {
    pub async fn run(&self, config: &AppConfig) -> Result<()> {
        match self {
            Commands::Scrape => {
                let report = pipeline::run_scrape(config).await?;
                print_report(&mut io::stdout().lock(), config, &report)?;
            }
            Commands::Static => {
                let report = pipeline::run_static(config)?;
                print_report(&mut io::stdout().lock(), config, &report)?;
            }
            Commands::Extract { input } => {
                let report = pipeline::run_extract_file(config, input)?;
                print_report(&mut io::stdout().lock(), config, &report)?;
            }
            Commands::List { platform } => {
                let stored = store::load(&config.output_path)?;
                write_listing(&mut io::stdout().lock(), &stored, *platform)?;
            }
        }
        Ok(())
    }
}

fn print_report(out: &mut impl Write, config: &AppConfig, report: &RunReport) -> io::Result<()> {
    let origin = match (&report.source, report.used_fallback) {
        (_, true) => "fallback data".to_string(),
        (Some(source), false) => source.clone(),
        (None, false) => "static catalog".to_string(),
    };
    writeln!(
        out,
        "Saved {} games ({}) to {}",
        report.games,
        origin,
        config.output_path.display()
    )
}

fn write_listing(
    out: &mut impl Write,
    stored: &StoredGames,
    filter: PlatformFilter,
) -> io::Result<()> {
    if let Some(updated) = stored.last_updated() {
        writeln!(out, "Last updated: {}", updated.format("%Y-%m-%d"))?;
    }

    let games = filter.apply(stored.games());
    writeln!(out, "{}", filter.heading(games.len()))?;
    if games.is_empty() {
        return writeln!(out, "No games found for the selected platform.");
    }

    for game in games {
        writeln!(
            out,
            "  {:<45} {:<18} {}",
            game.title,
            game.release_date,
            game.platform_labels()
        )?;
        if let Some(genre) = &game.genre {
            let developer = game.developer.as_deref().unwrap_or("Unknown Developer");
            writeln!(out, "  {:<45} {} / {}", "", genre, developer)?;
        }
    }
    Ok(())
}
