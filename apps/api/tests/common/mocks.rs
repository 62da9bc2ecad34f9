//! In-memory `SongStore` used by route and service tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use songbook_api::models::{NewSong, Song, SongColumn, SongCommon, SongDetail, SongFilters};
use songbook_api::repositories::{apply_updates, song_text_page, ColumnWriter, SongStore};
use songbook_api::{ApiError, ApiResult, Pagination};

/// Vector-backed store with call counting and failure injection
///
/// Updates and verse lookups go through the same `apply_updates` and
/// `song_text_page` helpers as the PostgreSQL repository.
pub struct MemorySongStore {
    songs: Mutex<Vec<Song>>,
    next_id: AtomicI64,
    calls: AtomicUsize,
    unavailable: AtomicBool,
    column_writes: AtomicUsize,
    fail_after_writes: Mutex<Option<usize>>,
}

impl Default for MemorySongStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySongStore {
    pub fn new() -> Self {
        Self {
            songs: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            calls: AtomicUsize::new(0),
            unavailable: AtomicBool::new(false),
            column_writes: AtomicUsize::new(0),
            fail_after_writes: Mutex::new(None),
        }
    }

    /// Store pre-seeded with `songs`; new IDs continue after the highest one
    pub fn with_songs(songs: Vec<Song>) -> Self {
        let next_id = songs.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        let store = Self::new();
        store.next_id.store(next_id, Ordering::SeqCst);
        *store.songs.lock().unwrap() = songs;
        store
    }

    /// Make every following call fail as if the pool were exhausted
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Let `writes` more column writes succeed, then fail every later one
    pub fn fail_after_writes(&self, writes: usize) {
        *self.fail_after_writes.lock().unwrap() = Some(self.column_writes() + writes);
    }

    /// Number of successful single-column writes so far
    pub fn column_writes(&self) -> usize {
        self.column_writes.load(Ordering::SeqCst)
    }

    /// Number of store calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn songs(&self) -> Vec<Song> {
        self.songs.lock().unwrap().clone()
    }

    pub fn song(&self, id: i64) -> Option<Song> {
        self.songs().into_iter().find(|s| s.id == id)
    }

    fn enter(&self) -> ApiResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ApiError::DatabaseUnavailable);
        }
        Ok(())
    }
}

#[async_trait]
impl SongStore for MemorySongStore {
    async fn get_songs_info(
        &self,
        filters: &SongFilters,
        pagination: Pagination,
    ) -> ApiResult<Vec<Song>> {
        self.enter()?;
        let mut matching: Vec<Song> = self
            .songs
            .lock()
            .unwrap()
            .iter()
            .filter(|song| filters.matches(song))
            .cloned()
            .collect();
        matching.sort_by_key(|song| song.id);
        Ok(pagination.slice(&matching).to_vec())
    }

    async fn get_song_text(&self, id: i64, pagination: Pagination) -> ApiResult<Vec<String>> {
        self.enter()?;
        let song = self.song(id);
        song_text_page(id, song.as_ref(), pagination)
    }

    async fn create_song(&self, song: &SongCommon, details: &SongDetail) -> ApiResult<i64> {
        self.enter()?;
        let new_song = NewSong::from_parts(song, details);
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.songs.lock().unwrap().push(Song {
            id,
            group: new_song.group,
            title: new_song.title,
            text: new_song.text,
            release_date: new_song.release_date,
            link: new_song.link,
        });
        Ok(id)
    }

    async fn update_song(&self, id: i64, new_data: &SongFilters) -> ApiResult<()> {
        self.enter()?;
        apply_updates(self, id, new_data).await
    }

    async fn delete_song(&self, id: i64) -> ApiResult<()> {
        self.enter()?;
        self.songs.lock().unwrap().retain(|song| song.id != id);
        Ok(())
    }
}

#[async_trait]
impl ColumnWriter for MemorySongStore {
    async fn write_column(&self, id: i64, column: SongColumn, value: &str) -> ApiResult<u64> {
        let limit = *self.fail_after_writes.lock().unwrap();
        if limit.is_some_and(|limit| self.column_writes() >= limit) {
            return Err(ApiError::Internal(format!(
                "write to {} failed",
                column.as_str()
            )));
        }

        let mut songs = self.songs.lock().unwrap();
        let Some(song) = songs.iter_mut().find(|song| song.id == id) else {
            return Ok(0);
        };
        song.set_column(column, value);
        self.column_writes.fetch_add(1, Ordering::SeqCst);
        Ok(1)
    }
}
