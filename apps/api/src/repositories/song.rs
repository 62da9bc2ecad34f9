//! Song repository for centralized database operations
//!
//! All SQL touching the `songs` table lives here. Column names come from
//! [`SongColumn`]; every user-supplied value is a bound parameter.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use super::store::{apply_updates, song_text_page, ColumnWriter, SongStore};
use super::utils::{contains_pattern, SONG_COLUMNS};
use crate::error::ApiResult;
use crate::models::{NewSong, Song, SongColumn, SongCommon, SongDetail, SongFilters};
use crate::pagination::Pagination;

/// Repository for song database operations
#[derive(Clone)]
pub struct SongRepository {
    pool: PgPool,
}

impl SongRepository {
    /// Create a new SongRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a song by its ID
    pub async fn find_by_id(&self, song_id: i64) -> Result<Option<Song>, sqlx::Error> {
        let sql = format!("SELECT {} FROM songs WHERE id = $1", SONG_COLUMNS);
        sqlx::query_as::<_, Song>(&sql)
            .bind(song_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Find songs whose columns contain every non-empty filter value
    pub async fn search(
        &self,
        filters: &SongFilters,
        pagination: Pagination,
    ) -> Result<Vec<Song>, sqlx::Error> {
        let mut query = search_query(filters, pagination);
        query
            .build_query_as::<Song>()
            .fetch_all(&self.pool)
            .await
    }

    /// Insert a song and return its generated ID
    pub async fn insert(&self, song: &NewSong) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO songs (song_group, song, song_text, release_date, link)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&song.group)
        .bind(&song.title)
        .bind(&song.text)
        .bind(&song.release_date)
        .bind(&song.link)
        .fetch_one(&self.pool)
        .await
    }

    /// Overwrite a single column, returning the number of rows touched
    pub async fn update_column(
        &self,
        song_id: i64,
        column: SongColumn,
        value: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(&update_column_sql(column))
            .bind(value)
            .bind(song_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete a song, returning the number of rows removed
    pub async fn delete(&self, song_id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM songs WHERE id = $1")
            .bind(song_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

/// Build the filtered, paginated listing query
///
/// Rows come back in ID order so consecutive pages do not overlap.
fn search_query(filters: &SongFilters, pagination: Pagination) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {} FROM songs", SONG_COLUMNS));

    for (index, (column, value)) in filters.search_terms().into_iter().enumerate() {
        builder
            .push(if index == 0 { " WHERE " } else { " AND " })
            .push(column.as_str())
            .push(" LIKE ")
            .push_bind(contains_pattern(value));
    }

    builder
        .push(" ORDER BY id ASC LIMIT ")
        .push_bind(pagination.limit())
        .push(" OFFSET ")
        .push_bind(pagination.offset());

    builder
}

fn update_column_sql(column: SongColumn) -> String {
    format!("UPDATE songs SET {} = $1 WHERE id = $2", column.as_str())
}

#[async_trait]
impl ColumnWriter for SongRepository {
    async fn write_column(&self, id: i64, column: SongColumn, value: &str) -> ApiResult<u64> {
        Ok(self.update_column(id, column, value).await?)
    }
}

#[async_trait]
impl SongStore for SongRepository {
    #[instrument(skip(self))]
    async fn get_songs_info(
        &self,
        filters: &SongFilters,
        pagination: Pagination,
    ) -> ApiResult<Vec<Song>> {
        let songs = self.search(filters, pagination).await?;
        tracing::debug!(count = songs.len(), "Fetched songs");
        Ok(songs)
    }

    #[instrument(skip(self))]
    async fn get_song_text(&self, id: i64, pagination: Pagination) -> ApiResult<Vec<String>> {
        let song = self.find_by_id(id).await?;
        song_text_page(id, song.as_ref(), pagination)
    }

    #[instrument(skip(self, details))]
    async fn create_song(&self, song: &SongCommon, details: &SongDetail) -> ApiResult<i64> {
        let id = self.insert(&NewSong::from_parts(song, details)).await?;
        tracing::debug!(song_id = id, "Inserted song");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn update_song(&self, id: i64, new_data: &SongFilters) -> ApiResult<()> {
        apply_updates(self, id, new_data).await
    }

    #[instrument(skip(self))]
    async fn delete_song(&self, id: i64) -> ApiResult<()> {
        if self.delete(id).await? == 0 {
            tracing::debug!(song_id = id, "No song to delete");
        }
        Ok(())
    }
}
