//! Per-field heuristics. Each function looks at one block and returns the
//! value it found, leaving defaults to the caller.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Platform;

/// Descriptions are cut to this many characters before the ellipsis.
pub const DESCRIPTION_LIMIT: usize = 200;
/// Appended to every description built from block text.
pub const ELLIPSIS: &str = "...";
/// Release window used when no date is found.
pub const DEFAULT_RELEASE: &str = "TBA 2025";
/// Developer credit used when none is found.
pub const DEFAULT_DEVELOPER: &str = "Unknown Developer";
/// Genre used when neither an explicit tag nor a keyword is found.
pub const DEFAULT_GENRE: &str = "Action";

const MIN_TITLE_CHARS: usize = 3;
const MIN_DESCRIPTION_LINE_CHARS: usize = 50;

static ORDINAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s*").expect("invalid ordinal regex"));

static RELEASE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:release|coming|launch|available)[a-z]*(?:[ \t]+date)?[\s:]*([a-z]+[ \t]+\d{1,2},?[ \t]+\d{4}|[a-z]+[ \t]+\d{4}|q\d[ \t]+\d{4}|(?:fall|spring|summer|winter)[ \t]+\d{4})",
    )
    .expect("invalid release regex")
});

static DEVELOPER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:developer|developed by|dev|studio|made by)\b[ \t:]*([a-z &]+)")
        .expect("invalid developer regex")
});

static PUBLISHER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:publisher|published by)\b[ \t:]*([a-z &]+)")
        .expect("invalid publisher regex")
});

static GENRE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:genre|type)\b[ \t:]*([a-z][a-z \t-]*)").expect("invalid genre regex")
});

const PLATFORM_KEYWORDS: [(Platform, &[&str]); 4] = [
    (Platform::PlayStation, &["playstation", "ps5", "ps4"]),
    (Platform::Xbox, &["xbox", "series x", "series s"]),
    (Platform::Pc, &["pc", "steam", "windows"]),
    (Platform::NintendoSwitch, &["nintendo", "switch"]),
];

const GENRE_KEYWORDS: [(&str, &[&str]); 7] = [
    ("RPG", &["rpg", "role-playing"]),
    ("Strategy", &["strategy"]),
    ("Shooter", &["shooter"]),
    ("Sports", &["sports"]),
    ("Racing", &["racing"]),
    ("Simulation", &["simulation"]),
    ("Adventure", &["adventure"]),
];

const DESCRIPTION_STOP_WORDS: [&str; 3] = ["release", "platform", "developer"];

/// First line with any `12.` style numbering removed.
pub fn title(first_line: &str) -> Option<String> {
    let title = ORDINAL_RE.replace(first_line.trim(), "").trim().to_string();
    (title.chars().count() >= MIN_TITLE_CHARS).then_some(title)
}

/// Release window following a release keyword.
pub fn release_date(block: &str) -> Option<String> {
    capture(&RELEASE_RE, block)
}

/// Platforms mentioned anywhere in the block, in enumeration order.
pub fn platforms(block: &str) -> Vec<Platform> {
    let haystack = block.to_lowercase();
    PLATFORM_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| haystack.contains(keyword)))
        .map(|(platform, _)| *platform)
        .collect()
}

/// Long prose lines joined and cut to [`DESCRIPTION_LIMIT`] characters.
///
/// Length is measured on the raw line, indentation and bullet included.
pub fn description(lines: &[&str]) -> Option<String> {
    let joined = lines
        .iter()
        .filter(|line| line.chars().count() > MIN_DESCRIPTION_LINE_CHARS)
        .filter(|line| {
            let lower = line.to_lowercase();
            !DESCRIPTION_STOP_WORDS
                .iter()
                .any(|word| lower.contains(word))
        })
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join(" ");
    if joined.is_empty() {
        return None;
    }
    Some(truncate(&joined))
}

/// Cut `text` to [`DESCRIPTION_LIMIT`] characters and append [`ELLIPSIS`].
pub fn truncate(text: &str) -> String {
    let mut cut: String = text.chars().take(DESCRIPTION_LIMIT).collect();
    cut.push_str(ELLIPSIS);
    cut
}

/// Sentence used when a block has no usable prose.
pub fn synthesized_description(genre: &str) -> String {
    format!("An upcoming {} game.", genre.to_lowercase())
}

/// Credit following a developer keyword.
pub fn developer(block: &str) -> Option<String> {
    capture(&DEVELOPER_RE, block)
}

/// Credit following a publisher keyword.
pub fn publisher(block: &str) -> Option<String> {
    capture(&PUBLISHER_RE, block)
}

/// Genre following an explicit `Genre:` / `Type:` label.
pub fn explicit_genre(block: &str) -> Option<String> {
    capture(&GENRE_RE, block)
}

/// First genre whose keyword appears in `text`.
pub fn inferred_genre(text: &str) -> Option<&'static str> {
    let haystack = text.to_lowercase();
    GENRE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| haystack.contains(keyword)))
        .map(|(genre, _)| *genre)
}

fn capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_strips_numbering() {
        assert_eq!(title("12. Hollow Knight: Silksong").as_deref(), Some("Hollow Knight: Silksong"));
        assert_eq!(title("  Fable  ").as_deref(), Some("Fable"));
        assert_eq!(title("3. Ab"), None);
    }

    #[test]
    fn release_date_accepts_every_shape() {
        assert_eq!(release_date("Release: March 15, 2025").as_deref(), Some("March 15, 2025"));
        assert_eq!(release_date("Coming August 2025").as_deref(), Some("August 2025"));
        assert_eq!(release_date("Launch: Q3 2025").as_deref(), Some("Q3 2025"));
        assert_eq!(release_date("Released: Fall 2025").as_deref(), Some("Fall 2025"));
        assert_eq!(release_date("Release date: Winter 2026").as_deref(), Some("Winter 2026"));
        assert_eq!(release_date("Available Jul 1, 2025 on Steam").as_deref(), Some("Jul 1, 2025"));
    }

    #[test]
    fn release_date_may_sit_on_the_next_line() {
        assert_eq!(
            release_date("Release Date:\nMarch 15, 2025").as_deref(),
            Some("March 15, 2025")
        );
        assert_eq!(release_date("Coming\n  Q4 2025").as_deref(), Some("Q4 2025"));
    }

    #[test]
    fn release_date_needs_a_keyword() {
        assert_eq!(release_date("Fall 2025"), None);
        assert_eq!(release_date("Release: soon"), None);
    }

    #[test]
    fn platforms_follow_enumeration_order() {
        assert_eq!(
            platforms("Out on Switch, Steam and PS5"),
            vec![Platform::PlayStation, Platform::Pc, Platform::NintendoSwitch]
        );
        assert_eq!(platforms("Xbox Series X|S"), vec![Platform::Xbox]);
        assert!(platforms("no hardware named here").is_empty());
    }

    #[test]
    fn description_skips_short_and_labelled_lines() {
        let lines = [
            "Mystic Quest",
            "Release date is still to be confirmed by the studio, sadly for everyone",
            "An epic journey across a shattered continent full of secrets.",
        ];
        assert_eq!(
            description(&lines).as_deref(),
            Some("An epic journey across a shattered continent full of secrets....")
        );
        assert_eq!(description(&["short", "lines"]), None);
    }

    #[test]
    fn bullet_and_indent_count_toward_line_length() {
        let prose = "a".repeat(49);
        let bulleted = format!("- {prose}");
        let indented = format!("  {prose}");
        assert_eq!(
            description(&[bulleted.as_str()]),
            Some(format!("- {prose}{ELLIPSIS}"))
        );
        assert_eq!(description(&[indented.as_str()]), Some(format!("{prose}{ELLIPSIS}")));
        assert_eq!(description(&[prose.as_str()]), None);
    }

    #[test]
    fn long_descriptions_are_cut_to_the_limit() {
        let long_line = "word ".repeat(80);
        let result = description(&[long_line.trim()]).expect("description");
        assert_eq!(result.chars().count(), DESCRIPTION_LIMIT + ELLIPSIS.len());
        assert!(result.ends_with(ELLIPSIS));
        assert_eq!(&result[..DESCRIPTION_LIMIT], &long_line[..DESCRIPTION_LIMIT]);
    }

    #[test]
    fn credits_stay_on_their_line() {
        let block = "Developer: Acme Studio\nPublisher: Big & Co\nGenre: Action-Adventure";
        assert_eq!(developer(block).as_deref(), Some("Acme Studio"));
        assert_eq!(publisher(block).as_deref(), Some("Big & Co"));
        assert_eq!(explicit_genre(block).as_deref(), Some("Action-Adventure"));
    }

    #[test]
    fn credit_keywords_match_whole_words() {
        assert_eq!(developer("A devastating prototype appears"), None);
        assert_eq!(explicit_genre("A devastating prototype appears"), None);
        assert_eq!(developer("Made by: Team Cherry").as_deref(), Some("Team Cherry"));
    }

    #[test]
    fn genre_inference_uses_priority_order() {
        assert_eq!(inferred_genre("A racing RPG"), Some("RPG"));
        assert_eq!(inferred_genre("turn-based strategy shooter"), Some("Strategy"));
        assert_eq!(inferred_genre("a role-playing epic"), Some("RPG"));
        assert_eq!(inferred_genre("pure platforming"), None);
        assert_eq!(synthesized_description("Action RPG"), "An upcoming action rpg game.");
    }
}
