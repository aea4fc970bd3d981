//! The JSON file shared by the producers and the listing.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{GameCollection, GameRecord};

/// Contents of the games file in either of its two historical shapes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StoredGames {
    /// `{ "games": [...], "lastUpdated": "...", "source": "..." }`
    Collection(GameCollection),
    /// A bare array of records.
    Bare(Vec<GameRecord>),
}

impl StoredGames {
    /// Records in file order.
    pub fn games(&self) -> &[GameRecord] {
        match self {
            StoredGames::Collection(collection) => &collection.games,
            StoredGames::Bare(games) => games,
        }
    }

    /// Consume into the record list.
    pub fn into_games(self) -> Vec<GameRecord> {
        match self {
            StoredGames::Collection(collection) => collection.games,
            StoredGames::Bare(games) => games,
        }
    }

    /// Timestamp, when the file carries one.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        match self {
            StoredGames::Collection(collection) => Some(collection.last_updated),
            StoredGames::Bare(_) => None,
        }
    }

    /// Provenance label, when the file carries one.
    pub fn source(&self) -> Option<&str> {
        match self {
            StoredGames::Collection(collection) => Some(&collection.source),
            StoredGames::Bare(_) => None,
        }
    }
}

/// Replace the file at `path` with `collection`, creating parent directories.
pub fn write_collection(path: impl AsRef<Path>, collection: &GameCollection) -> Result<()> {
    write_json(path.as_ref(), collection)
}

/// Replace the file at `path` with a bare array of `games`.
pub fn write_records(path: impl AsRef<Path>, games: &[GameRecord]) -> Result<()> {
    write_json(path.as_ref(), games)
}

/// Read the games file, accepting both shapes.
pub fn load(path: impl AsRef<Path>) -> Result<StoredGames> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read games file {}", path.display()))?;
    let stored = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse games file {}", path.display()))?;
    Ok(stored)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create data directory {}", parent.display()))?;
    }

    let serialized =
        serde_json::to_string_pretty(value).context("failed to serialize games data")?;
    fs::write(path, serialized)
        .with_context(|| format!("failed to write games file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{fallback_games, static_catalog, FALLBACK_SOURCE};
    use tempfile::tempdir;

    #[test]
    fn collection_shape_keeps_metadata() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("data").join("games.json");
        let collection = GameCollection::new(fallback_games(), FALLBACK_SOURCE);

        write_collection(&path, &collection)?;
        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert!(raw["lastUpdated"].is_string());
        assert_eq!(raw["games"].as_array().map(Vec::len), Some(5));

        let stored = load(&path)?;
        assert_eq!(stored.source(), Some(FALLBACK_SOURCE));
        assert_eq!(stored.last_updated(), Some(collection.last_updated));
        assert_eq!(stored.games(), collection.games.as_slice());
        Ok(())
    }

    #[test]
    fn bare_shape_is_accepted() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("games.json");
        write_records(&path, &static_catalog())?;

        let stored = load(&path)?;
        assert!(matches!(stored, StoredGames::Bare(_)));
        assert_eq!(stored.source(), None);
        assert_eq!(stored.last_updated(), None);
        assert_eq!(stored.into_games().len(), 20);
        Ok(())
    }

    #[test]
    fn historical_platform_tags_load() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("games.json");
        fs::write(
            &path,
            r#"[{"id": "anger-foot", "title": "Anger Foot", "releaseDate": "Jul 1, 2025", "platforms": ["PS5"]}]"#,
        )?;
        let games = load(&path)?.into_games();
        assert_eq!(games[0].platforms, vec![crate::models::Platform::PlayStation]);
        assert_eq!(games[0].genre, None);
        Ok(())
    }

    #[test]
    fn links_survive_a_reload() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("games.json");
        fs::write(
            &path,
            r#"[{"id": "fable", "title": "Fable", "releaseDate": "2026", "platforms": ["Xbox"],
                "image": "https://cdn.example.com/fable.jpg", "url": "https://example.com/fable"}]"#,
        )?;
        let games = load(&path)?.into_games();
        write_records(&path, &games)?;

        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(raw[0]["image"], "https://cdn.example.com/fable.jpg");
        assert_eq!(raw[0]["url"], "https://example.com/fable");
        assert!(raw[0].get("genre").is_none());
        Ok(())
    }

    #[test]
    fn writes_replace_previous_contents() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("games.json");
        write_records(&path, &static_catalog())?;
        write_collection(&path, &GameCollection::new(fallback_games(), FALLBACK_SOURCE))?;
        assert_eq!(load(&path)?.games().len(), 5);
        Ok(())
    }

    #[test]
    fn unwritable_destination_errors() -> Result<()> {
        let dir = tempdir()?;
        let blocker = dir.path().join("occupied");
        fs::write(&blocker, "not a directory")?;
        let result = write_records(blocker.join("games.json"), &fallback_games());
        assert!(result.is_err());
        Ok(())
    }
}
