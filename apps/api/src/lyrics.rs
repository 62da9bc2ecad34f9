//! Verse pagination over stored lyrics

use crate::pagination::Pagination;

/// Separator between two verses: a blank line
pub const VERSE_DELIMITER: &str = "\n\n";

/// Split lyrics into verses, preserving order
///
/// Empty text yields a single empty verse.
pub fn split_verses(text: &str) -> Vec<&str> {
    text.split(VERSE_DELIMITER).collect()
}

/// Return the verses on the requested page
pub fn verse_page(text: &str, pagination: Pagination) -> Vec<String> {
    let verses = split_verses(text);
    pagination
        .slice(&verses)
        .iter()
        .map(|verse| verse.to_string())
        .collect()
}
