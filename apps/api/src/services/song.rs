//! Song service
//!
//! Thin facade over a [`SongStore`]. Route handlers talk to this type only,
//! so the storage backend can be swapped (PostgreSQL in production, an
//! in-memory store in tests).

use std::sync::Arc;

use tracing::instrument;

use crate::error::ApiResult;
use crate::models::{Song, SongCommon, SongDetail, SongFilters};
use crate::pagination::Pagination;
use crate::repositories::SongStore;

/// Song operations exposed to the HTTP layer
#[derive(Clone)]
pub struct SongService {
    store: Arc<dyn SongStore>,
}

impl SongService {
    /// Create a service over `store`
    pub fn new(store: impl SongStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Create a service over an already shared store
    pub fn from_arc(store: Arc<dyn SongStore>) -> Self {
        Self { store }
    }

    /// List songs matching every non-empty filter, one page at a time
    #[instrument(skip(self))]
    pub async fn get_songs_info(
        &self,
        filters: &SongFilters,
        pagination: Pagination,
    ) -> ApiResult<Vec<Song>> {
        self.store.get_songs_info(filters, pagination).await
    }

    /// One page of verses of a song's lyrics
    #[instrument(skip(self))]
    pub async fn get_song_text(&self, id: i64, pagination: Pagination) -> ApiResult<Vec<String>> {
        self.store.get_song_text(id, pagination).await
    }

    /// Store a new song, returning its identifier
    #[instrument(skip(self, details))]
    pub async fn create_song(&self, song: &SongCommon, details: &SongDetail) -> ApiResult<i64> {
        self.store.create_song(song, details).await
    }

    /// Overwrite every non-empty field of `new_data`
    #[instrument(skip(self))]
    pub async fn update_song(&self, id: i64, new_data: &SongFilters) -> ApiResult<()> {
        self.store.update_song(id, new_data).await
    }

    #[instrument(skip(self))]
    pub async fn delete_song(&self, id: i64) -> ApiResult<()> {
        self.store.delete_song(id).await
    }
}
