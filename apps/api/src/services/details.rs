//! Best-effort enrichment of new songs with looked-up metadata

use songbook_details_client::DetailsClient;

use crate::models::{SongCommon, SongDetail};

/// Wraps the optional lookup client used when a song is created
///
/// A missing, unreachable or misbehaving lookup API never blocks song
/// creation: the song is stored with empty details instead.
#[derive(Debug, Clone, Default)]
pub struct SongDetailsLookup {
    client: Option<DetailsClient>,
}

impl SongDetailsLookup {
    /// Build a lookup for `url`; `None` or an unusable URL disables it
    pub fn from_url(url: Option<&str>) -> Self {
        let Some(url) = url else {
            tracing::info!("Song details lookup not configured");
            return Self::disabled();
        };

        match DetailsClient::new(url) {
            Ok(client) => {
                tracing::info!(url = client.base_url(), "Song details lookup enabled");
                Self {
                    client: Some(client),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Invalid song details URL, lookup disabled");
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Self { client: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    pub fn client(&self) -> Option<&DetailsClient> {
        self.client.as_ref()
    }

    /// Fetch details for `song`, or empty details on any failure
    pub async fn lookup(&self, song: &SongCommon) -> SongDetail {
        let Some(client) = &self.client else {
            return SongDetail::default();
        };

        match client.fetch_details(&song.group, &song.song).await {
            Ok(details) => details,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    group = %song.group,
                    song = %song.song,
                    "Song details lookup failed, storing without details"
                );
                SongDetail::default()
            }
        }
    }
}
