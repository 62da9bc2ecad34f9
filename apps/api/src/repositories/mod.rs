//! Database repository layer for Songbook
//!
//! [`SongStore`] is the storage contract the service layer talks to;
//! [`SongRepository`] implements it on top of PostgreSQL.

pub mod song;
pub mod store;
pub mod utils;

pub use song::SongRepository;
pub use store::{apply_updates, song_text_page, ColumnWriter, SongStore};
