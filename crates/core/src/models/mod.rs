//! Shared domain models.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Platforms a release can be listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Platform {
    /// Sony consoles.
    #[serde(alias = "PS5", alias = "PS4")]
    PlayStation,
    /// Microsoft consoles.
    Xbox,
    /// Windows / Steam.
    #[serde(rename = "PC")]
    Pc,
    /// Nintendo Switch family.
    #[serde(rename = "Nintendo Switch")]
    NintendoSwitch,
}

impl Platform {
    /// Every platform in enumeration order.
    pub const ALL: [Platform; 4] = [
        Platform::PlayStation,
        Platform::Xbox,
        Platform::Pc,
        Platform::NintendoSwitch,
    ];

    /// Platforms assumed when a listing names none.
    pub const DEFAULT_SET: [Platform; 3] = [Platform::Pc, Platform::PlayStation, Platform::Xbox];

    /// Display label, identical to the serialized tag.
    pub fn label(self) -> &'static str {
        match self {
            Platform::PlayStation => "PlayStation",
            Platform::Xbox => "Xbox",
            Platform::Pc => "PC",
            Platform::NintendoSwitch => "Nintendo Switch",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a platform name is not recognised.
#[derive(Debug, thiserror::Error)]
#[error("unknown platform '{0}'")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized: String = value
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "playstation" | "ps" | "ps4" | "ps5" => Ok(Platform::PlayStation),
            "xbox" | "seriesx" | "seriess" => Ok(Platform::Xbox),
            "pc" | "steam" | "windows" => Ok(Platform::Pc),
            "nintendoswitch" | "nintendo" | "switch" => Ok(Platform::NintendoSwitch),
            _ => Err(UnknownPlatform(value.to_string())),
        }
    }
}

/// One upcoming release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    /// Slug derived from the title.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Free-form release window (`Fall 2025`, `Q1 2025`, `August 8, 2025`).
    pub release_date: String,
    /// Platforms, in enumeration order when extracted.
    pub platforms: Vec<Platform>,
    /// Short blurb.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Developer credit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    /// Publisher credit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Single genre tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Cover art location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Store or announcement page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl GameRecord {
    /// Whether the record is listed for `platform`.
    pub fn supports(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }

    /// Platforms joined for display (`PC, PlayStation, Xbox`).
    pub fn platform_labels(&self) -> String {
        self.platforms
            .iter()
            .map(|platform| platform.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Records plus provenance, as written by the scrape path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCollection {
    /// Records in listing order.
    pub games: Vec<GameRecord>,
    /// When the collection was produced.
    pub last_updated: DateTime<Utc>,
    /// Provenance label (`IGN via Firecrawl API`, `Fallback sample data`).
    pub source: String,
}

impl GameCollection {
    /// Stamp `games` with the current time and the given provenance label.
    pub fn new(games: Vec<GameRecord>, source: impl Into<String>) -> Self {
        Self {
            games,
            last_updated: Utc::now(),
            source: source.into(),
        }
    }
}

/// Derive the record id for a title.
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into a
/// single hyphen and strips hyphens from both ends.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for ch in title.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_punctuation_runs() {
        assert_eq!(slugify("Mystic Quest"), "mystic-quest");
        assert_eq!(slugify("  Gears of War: E-Day!! "), "gears-of-war-e-day");
        assert_eq!(slugify("Tony Hawk's Pro Skater 3 + 4"), "tony-hawk-s-pro-skater-3-4");
        assert_eq!(slugify("???"), "");
    }

    #[test]
    fn slug_is_stable() {
        let title = "Metal Gear Solid Δ: Snake Eater";
        assert_eq!(slugify(title), slugify(title));
        assert_eq!(slugify(title), "metal-gear-solid-snake-eater");
    }

    #[test]
    fn platform_tags_round_trip_through_json() -> anyhow::Result<()> {
        let json = serde_json::to_string(&Platform::ALL)?;
        assert_eq!(json, r#"["PlayStation","Xbox","PC","Nintendo Switch"]"#);

        let parsed: Vec<Platform> = serde_json::from_str(r#"["PS5","PC"]"#)?;
        assert_eq!(parsed, vec![Platform::PlayStation, Platform::Pc]);
        Ok(())
    }

    #[test]
    fn platform_parses_loose_names() {
        assert_eq!("switch".parse::<Platform>().ok(), Some(Platform::NintendoSwitch));
        assert_eq!("Nintendo Switch".parse::<Platform>().ok(), Some(Platform::NintendoSwitch));
        assert_eq!("ps5".parse::<Platform>().ok(), Some(Platform::PlayStation));
        assert!("dreamcast".parse::<Platform>().is_err());
    }

    #[test]
    fn record_uses_camel_case_fields() -> anyhow::Result<()> {
        let record = GameRecord {
            id: "fable".to_string(),
            title: "Fable".to_string(),
            release_date: "Q2 2025".to_string(),
            platforms: vec![Platform::Xbox, Platform::Pc],
            description: None,
            developer: Some("Playground Games".to_string()),
            publisher: Some("Microsoft".to_string()),
            genre: Some("RPG".to_string()),
            image: None,
            url: Some("https://example.com/fable".to_string()),
        };
        let value = serde_json::to_value(&record)?;
        assert_eq!(value["releaseDate"], "Q2 2025");
        assert!(value.get("description").is_none());
        assert!(value.get("image").is_none());
        assert_eq!(value["url"], "https://example.com/fable");
        assert_eq!(record.platform_labels(), "Xbox, PC");
        Ok(())
    }
}
