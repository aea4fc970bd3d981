//! Heuristic extraction of release listings from scraped markdown.
//!
//! The text is cut into blocks at every capitalised line, each block is run
//! through the per-field heuristics in [`fields`], and the surviving records
//! are deduplicated by title and capped at [`MAX_RECORDS`].

pub mod fields;
pub mod segment;

use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{slugify, GameRecord, Platform};

/// Upper bound on records returned by [`extract_games`].
pub const MAX_RECORDS: usize = 20;

/// Failure while turning a single block into a record.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The title contains no ASCII letters or digits to build an id from.
    #[error("title '{0}' does not produce a usable id")]
    EmptySlug(String),
}

/// Extract up to [`MAX_RECORDS`] unique records from `text`.
///
/// Blocks that fail are logged and skipped.
pub fn extract_games(text: &str) -> Vec<GameRecord> {
    let mut games = Vec::new();
    for block in segment::split_blocks(text) {
        match parse_block(block) {
            Ok(Some(game)) => games.push(game),
            Ok(None) => continue,
            Err(err) => warn!("Skipping game block: {}", err),
        }
    }
    dedupe_and_cap(games)
}

/// Build a record from one block, or `None` when the block is noise.
pub fn parse_block(block: &str) -> Result<Option<GameRecord>, ExtractError> {
    let Some(lines) = segment::candidate_lines(block) else {
        return Ok(None);
    };
    let Some(title) = fields::title(lines[0]) else {
        return Ok(None);
    };

    let id = slugify(&title);
    if id.is_empty() {
        return Err(ExtractError::EmptySlug(title));
    }

    let release_date =
        fields::release_date(block).unwrap_or_else(|| fields::DEFAULT_RELEASE.to_string());

    let mut platforms = fields::platforms(block);
    if platforms.is_empty() {
        platforms = Platform::DEFAULT_SET.to_vec();
    }

    let description = fields::description(&lines);
    let genre = fields::explicit_genre(block).unwrap_or_else(|| {
        let haystack = format!("{} {}", title, description.as_deref().unwrap_or_default());
        fields::inferred_genre(&haystack)
            .unwrap_or(fields::DEFAULT_GENRE)
            .to_string()
    });
    let description = description.unwrap_or_else(|| fields::synthesized_description(&genre));

    let developer =
        fields::developer(block).unwrap_or_else(|| fields::DEFAULT_DEVELOPER.to_string());
    let publisher = fields::publisher(block).unwrap_or_else(|| developer.clone());

    Ok(Some(GameRecord {
        id,
        title,
        release_date,
        platforms,
        description: Some(description),
        developer: Some(developer),
        publisher: Some(publisher),
        genre: Some(genre),
        image: None,
        url: None,
    }))
}

/// Keep the first record per title (and per id), in order, capped at [`MAX_RECORDS`].
pub fn dedupe_and_cap(games: Vec<GameRecord>) -> Vec<GameRecord> {
    let mut titles = HashSet::new();
    let mut ids = HashSet::new();
    let mut unique = Vec::new();

    for game in games {
        if unique.len() == MAX_RECORDS {
            break;
        }
        if titles.contains(&game.title) {
            debug!("dropping duplicate title {}", game.title);
            continue;
        }
        if ids.contains(&game.id) {
            debug!("dropping {} - id {} already taken", game.title, game.id);
            continue;
        }
        titles.insert(game.title.clone());
        ids.insert(game.id.clone());
        unique.push(game);
    }

    unique
}
