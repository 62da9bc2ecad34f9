//! Song model for Songbook
//!
//! The persisted `songs` row, the filter type used both for searching and
//! for partial updates, and the request/response shapes of the songs API.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

use crate::error::{ApiError, ApiResult};

pub use songbook_details_client::SongDetail;

/// Treat an explicit JSON `null` like an absent field
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Editable columns of the `songs` table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongColumn {
    Group,
    Title,
    Text,
    ReleaseDate,
    Link,
}

impl SongColumn {
    /// Column name in the `songs` table
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Group => "song_group",
            Self::Title => "song",
            Self::Text => "song_text",
            Self::ReleaseDate => "release_date",
            Self::Link => "link",
        }
    }
}

/// Song database model
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Song {
    pub id: i64,
    #[sqlx(rename = "song_group")]
    pub group: String,
    #[sqlx(rename = "song")]
    pub title: String,
    /// Lyrics; verses are separated by a blank line
    #[sqlx(rename = "song_text")]
    pub text: String,
    pub release_date: String,
    pub link: String,
}

impl Song {
    /// Value stored in `column`
    pub fn column(&self, column: SongColumn) -> &str {
        match column {
            SongColumn::Group => &self.group,
            SongColumn::Title => &self.title,
            SongColumn::Text => &self.text,
            SongColumn::ReleaseDate => &self.release_date,
            SongColumn::Link => &self.link,
        }
    }

    /// Overwrite the value stored in `column`
    pub fn set_column(&mut self, column: SongColumn, value: impl Into<String>) {
        let value = value.into();
        match column {
            SongColumn::Group => self.group = value,
            SongColumn::Title => self.title = value,
            SongColumn::Text => self.text = value,
            SongColumn::ReleaseDate => self.release_date = value,
            SongColumn::Link => self.link = value,
        }
    }
}

/// Partial song values used to filter listings and to patch a song
///
/// An empty field means "no constraint" when filtering and "leave as is"
/// when updating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SongFilters {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_empty")]
    pub group: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_empty")]
    pub song: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_empty")]
    pub release_date: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_empty")]
    pub link: String,
}

impl SongFilters {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_empty())
    }

    fn fields(&self) -> [(SongColumn, &str); 5] {
        [
            (SongColumn::Group, self.group.as_str()),
            (SongColumn::Title, self.song.as_str()),
            (SongColumn::Text, self.text.as_str()),
            (SongColumn::ReleaseDate, self.release_date.as_str()),
            (SongColumn::Link, self.link.as_str()),
        ]
    }

    /// Non-empty fields as substring predicates, in column order
    pub fn search_terms(&self) -> Vec<(SongColumn, &str)> {
        self.fields()
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .collect()
    }

    /// Non-empty fields as single-column writes, in the order they are applied
    pub fn updates(&self) -> Vec<(SongColumn, &str)> {
        [
            (SongColumn::Text, self.text.as_str()),
            (SongColumn::Link, self.link.as_str()),
            (SongColumn::ReleaseDate, self.release_date.as_str()),
            (SongColumn::Title, self.song.as_str()),
            (SongColumn::Group, self.group.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }

    /// Whether `song` satisfies every non-empty field (case-sensitive containment)
    pub fn matches(&self, song: &Song) -> bool {
        self.search_terms()
            .into_iter()
            .all(|(column, value)| song.column(column).contains(value))
    }
}

/// Minimal data required to create a song
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SongCommon {
    #[serde(deserialize_with = "null_as_empty")]
    pub group: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub song: String,
}

impl SongCommon {
    pub fn new(group: impl Into<String>, song: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            song: song.into(),
        }
    }

    /// Both group and song must be non-empty
    pub fn validate(&self) -> ApiResult<()> {
        if self.group.is_empty() {
            return Err(ApiError::MissingField("group"));
        }
        if self.song.is_empty() {
            return Err(ApiError::MissingField("song"));
        }
        Ok(())
    }
}

/// Values written by an insert
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewSong {
    pub group: String,
    pub title: String,
    pub text: String,
    pub release_date: String,
    pub link: String,
}

impl NewSong {
    /// Combine the mandatory fields with whatever the lookup returned
    pub fn from_parts(song: &SongCommon, details: &SongDetail) -> Self {
        let mut new_song = Self {
            group: song.group.clone(),
            title: song.song.clone(),
            ..Self::default()
        };
        if !details.text.is_empty() {
            new_song.text = details.text.clone();
        }
        if !details.release_date.is_empty() {
            new_song.release_date = details.release_date.clone();
        }
        if !details.link.is_empty() {
            new_song.link = details.link.clone();
        }
        new_song
    }
}

/// Song as returned by the listing endpoint
///
/// The identifier is not exposed and empty optional fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongResponse {
    pub group: String,
    pub song: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(rename = "releaseDate", default, skip_serializing_if = "String::is_empty")]
    pub release_date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub link: String,
}

impl From<Song> for SongResponse {
    fn from(song: Song) -> Self {
        Self {
            group: song.group,
            song: song.title,
            text: song.text,
            release_date: song.release_date,
            link: song.link,
        }
    }
}

/// Body returned after a song was created
#[derive(Debug, Clone, Serialize)]
pub struct SongCreatedResponse {
    pub id: i64,
    pub message: &'static str,
}
