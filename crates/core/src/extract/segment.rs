//! Splitting scraped markdown into candidate listing blocks.

/// Minimum trimmed length for a block to be considered.
pub const MIN_BLOCK_CHARS: usize = 50;
/// Minimum number of non-empty lines for a block to be considered.
pub const MIN_BLOCK_LINES: usize = 3;

/// Split `text` before every newline whose next non-whitespace character is
/// an ASCII uppercase letter. Blocks keep their leading newline.
pub fn split_blocks(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut start = 0;

    for (index, _) in text.match_indices('\n') {
        if index == 0 || !opens_entry(&text[index..]) {
            continue;
        }
        blocks.push(&text[start..index]);
        start = index;
    }
    blocks.push(&text[start..]);
    blocks
}

fn opens_entry(rest: &str) -> bool {
    rest.chars()
        .find(|ch| !ch.is_whitespace())
        .map(|ch| ch.is_ascii_uppercase())
        .unwrap_or(false)
}

/// Non-empty lines of a block that passes the size filters. Lines keep
/// their indentation.
pub fn candidate_lines(block: &str) -> Option<Vec<&str>> {
    if block.trim().chars().count() < MIN_BLOCK_CHARS {
        return None;
    }

    let lines: Vec<&str> = block
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();
    if lines.len() < MIN_BLOCK_LINES {
        return None;
    }
    Some(lines)
}
