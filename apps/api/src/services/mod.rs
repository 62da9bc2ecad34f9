//! Business logic services for Songbook

pub mod details;
pub mod health;
pub mod song;

pub use details::SongDetailsLookup;
pub use health::HealthService;
pub use song::SongService;
