//! Shared utility functions for repositories

/// Escape special characters in LIKE patterns so user input matches literally.
///
/// LIKE uses `%` for any sequence and `_` for single character wildcards,
/// with backslash as the default escape character in PostgreSQL.
///
/// # Example
/// ```
/// use songbook_api::repositories::utils::escape_like;
///
/// let input = "100%";
/// let escaped = escape_like(input);
/// assert_eq!(escaped, r"100\%");
/// ```
pub fn escape_like(pattern: &str) -> String {
    pattern
        .replace('\\', r"\\")
        .replace('%', r"\%")
        .replace('_', r"\_")
}

/// Wrap an escaped value in `%...%` for substring containment
pub fn contains_pattern(value: &str) -> String {
    format!("%{}%", escape_like(value))
}

/// SQL columns for song queries
pub const SONG_COLUMNS: &str = "id, song_group, song, song_text, release_date, link";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_no_special_chars() {
        assert_eq!(escape_like("hello world"), "hello world");
    }

    #[test]
    fn test_escape_like_percent() {
        assert_eq!(escape_like("100% complete"), r"100\% complete");
    }

    #[test]
    fn test_escape_like_underscore() {
        assert_eq!(escape_like("test_case"), r"test\_case");
    }

    #[test]
    fn test_escape_like_backslash() {
        assert_eq!(escape_like(r"path\to\file"), r"path\\to\\file");
    }

    #[test]
    fn test_escape_like_all_special() {
        assert_eq!(escape_like(r"100%_\test"), r"100\%\_\\test");
    }

    #[test]
    fn test_escape_like_empty() {
        assert_eq!(escape_like(""), "");
    }

    #[test]
    fn test_contains_pattern() {
        assert_eq!(contains_pattern("Beat"), "%Beat%");
        assert_eq!(contains_pattern("5_0"), r"%5\_0%");
    }
}
