//! Lookup API response models

use serde::{Deserialize, Serialize};

/// Optional song metadata returned by the lookup API
///
/// Every field may be missing from the response; absent fields decode to an
/// empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongDetail {
    /// Release date, free-form
    #[serde(rename = "releaseDate", default)]
    pub release_date: String,
    /// Lyrics, verses separated by a blank line
    #[serde(default)]
    pub text: String,
    /// Link to a video of the song
    #[serde(default)]
    pub link: String,
}

impl SongDetail {
    /// True when the lookup yielded nothing usable
    pub fn is_empty(&self) -> bool {
        self.release_date.is_empty() && self.text.is_empty() && self.link.is_empty()
    }
}
