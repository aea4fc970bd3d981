#![warn(clippy::all, missing_docs)]

//! Core logic for the games release radar.
//!
//! This crate hosts the release models, the markdown extraction heuristics,
//! the hardcoded catalogs, the scraping client, and the games file store
//! used by the command-line frontend.

pub mod catalog;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod filter;
pub mod models;
pub mod pipeline;
pub mod store;

pub use config::AppConfig;
pub use extract::{extract_games, parse_block, ExtractError};
pub use fetch::{FetchError, ScrapeClient};
pub use filter::PlatformFilter;
pub use models::{slugify, GameCollection, GameRecord, Platform};
pub use pipeline::{run_extract_file, run_scrape, run_static, RunReport};
pub use store::StoredGames;
