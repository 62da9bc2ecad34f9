//! Song metadata lookup client for Songbook
//!
//! Given a group and a song title, asks an external HTTP API for the song's
//! lyrics, release date and video link.
//!
//! # Example
//!
//! ```rust,no_run
//! use songbook_details_client::DetailsClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = DetailsClient::new("http://localhost:9000/info")?;
//!
//! let details = client.fetch_details("Muse", "Supermassive Black Hole").await?;
//! println!("released {}", details.release_date);
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Variables
//!
//! - `SONG_DETAILS_URL`: lookup endpoint (`EXTERNAL_API_URL` is also accepted)

mod client;
mod error;
mod models;

pub use client::{DetailsClient, DETAILS_URL_VARS};
pub use error::{DetailsError, DetailsResult};
pub use models::SongDetail;
