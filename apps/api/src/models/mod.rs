//! Database models and request/response types for Songbook

pub mod song;

pub use song::{
    NewSong, Song, SongColumn, SongCommon, SongCreatedResponse, SongDetail, SongFilters,
    SongResponse,
};
