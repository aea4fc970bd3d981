//! Platform selection for the listing.

use std::{fmt, str::FromStr};

use crate::models::{GameRecord, Platform, UnknownPlatform};

/// Which records a listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformFilter {
    /// Every record.
    #[default]
    All,
    /// Records listed for one platform.
    Only(Platform),
}

impl PlatformFilter {
    /// Whether `game` passes the filter.
    pub fn matches(&self, game: &GameRecord) -> bool {
        match self {
            PlatformFilter::All => true,
            PlatformFilter::Only(platform) => game.supports(*platform),
        }
    }

    /// Records passing the filter, in file order.
    pub fn apply<'a>(&self, games: &'a [GameRecord]) -> Vec<&'a GameRecord> {
        games.iter().filter(|game| self.matches(game)).collect()
    }

    /// Listing heading for `count` matching records.
    pub fn heading(&self, count: usize) -> String {
        match self {
            PlatformFilter::All => format!("All Upcoming Games ({count})"),
            PlatformFilter::Only(platform) => format!("{platform} Games ({count})"),
        }
    }
}

impl fmt::Display for PlatformFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformFilter::All => f.write_str("All"),
            PlatformFilter::Only(platform) => fmt::Display::fmt(platform, f),
        }
    }
}

impl FromStr for PlatformFilter {
    type Err = UnknownPlatform;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(PlatformFilter::All);
        }
        value.parse().map(PlatformFilter::Only)
    }
}
