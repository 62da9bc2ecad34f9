//! Storage contract for songs

use async_trait::async_trait;

use crate::error::{ApiError, ApiResult};
use crate::lyrics;
use crate::models::{Song, SongColumn, SongCommon, SongDetail, SongFilters};
use crate::pagination::Pagination;

/// Song storage operations
///
/// Missing identifiers are not an error for `update_song` and
/// `delete_song`; they succeed without touching anything.
#[async_trait]
pub trait SongStore: Send + Sync {
    /// Songs matching every non-empty filter field, one page at a time
    async fn get_songs_info(
        &self,
        filters: &SongFilters,
        pagination: Pagination,
    ) -> ApiResult<Vec<Song>>;

    /// One page of a song's verses
    async fn get_song_text(&self, id: i64, pagination: Pagination) -> ApiResult<Vec<String>>;

    /// Insert a song, returning its generated identifier
    async fn create_song(&self, song: &SongCommon, details: &SongDetail) -> ApiResult<i64>;

    /// Write each non-empty field of `new_data` as its own statement
    ///
    /// The first failing write stops the remaining ones; earlier writes stand.
    async fn update_song(&self, id: i64, new_data: &SongFilters) -> ApiResult<()>;

    async fn delete_song(&self, id: i64) -> ApiResult<()>;
}

/// One single-column write, returning the number of rows touched
#[async_trait]
pub trait ColumnWriter: Send + Sync {
    async fn write_column(&self, id: i64, column: SongColumn, value: &str) -> ApiResult<u64>;
}

/// Apply the non-empty fields of `new_data` one column at a time
///
/// Writes run in [`SongFilters::updates`] order and stop at the first error.
/// Nothing is written when every field is empty.
pub async fn apply_updates<W>(writer: &W, id: i64, new_data: &SongFilters) -> ApiResult<()>
where
    W: ColumnWriter + ?Sized,
{
    for (column, value) in new_data.updates() {
        let rows = writer.write_column(id, column, value).await?;
        if rows == 0 {
            tracing::debug!(song_id = id, column = column.as_str(), "No song to update");
        }
    }
    Ok(())
}

/// Verses on `pagination`'s page, or `NotFound` when the song is absent
pub fn song_text_page(
    id: i64,
    song: Option<&Song>,
    pagination: Pagination,
) -> ApiResult<Vec<String>> {
    let song = song.ok_or_else(|| ApiError::not_found("song", id.to_string()))?;
    Ok(lyrics::verse_page(&song.text, pagination))
}
