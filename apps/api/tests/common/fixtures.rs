//! Test fixtures for API integration tests

#![allow(dead_code)]

use songbook_api::models::Song;

/// Lyrics with three verses separated by blank lines
pub const THREE_VERSES: &str = "verse one\n\nverse two\n\nverse three";

/// Build a song row
pub fn song(id: i64, group: &str, title: &str, text: &str) -> Song {
    Song {
        id,
        group: group.to_string(),
        title: title.to_string(),
        text: text.to_string(),
        release_date: String::new(),
        link: String::new(),
    }
}

/// Small library covering the filter scenarios
pub fn sample_library() -> Vec<Song> {
    vec![
        Song {
            release_date: "16.07.2006".to_string(),
            link: "https://www.youtube.com/watch?v=Xsp3_a-PMTw".to_string(),
            ..song(1, "Muse", "Supermassive Black Hole", THREE_VERSES)
        },
        song(2, "The Beatles", "Yesterday", "Yesterday\n\nSuddenly"),
        song(3, "Beat Happening", "Indian Summer", ""),
        song(4, "Radiohead", "Creep", "When you were here before"),
        song(5, "The Beatles", "Let It Be", "When I find myself"),
    ]
}

/// `count` songs of the same group, IDs starting at 1
pub fn numbered_songs(group: &str, count: i64) -> Vec<Song> {
    (1..=count)
        .map(|id| song(id, group, &format!("Song {}", id), ""))
        .collect()
}
