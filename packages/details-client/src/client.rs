//! Metadata lookup client implementation

use std::fmt;
use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use tracing::{debug, instrument, warn};

use crate::error::{DetailsError, DetailsResult};
use crate::models::SongDetail;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Maximum group or song name length
const MAX_NAME_LENGTH: usize = 256;

/// Environment variables holding the lookup endpoint, in priority order
pub const DETAILS_URL_VARS: [&str; 2] = ["SONG_DETAILS_URL", "EXTERNAL_API_URL"];

/// Client for the song metadata lookup API
#[derive(Clone)]
pub struct DetailsClient {
    http_client: Client,
    base_url: Url,
}

impl fmt::Debug for DetailsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetailsClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl DetailsClient {
    /// Create a new client for the lookup endpoint at `base_url`
    ///
    /// # Errors
    /// - `DetailsError::MissingBaseUrl` if the URL is empty
    /// - `DetailsError::InvalidInput` if the URL cannot be parsed
    pub fn new(base_url: impl AsRef<str>) -> DetailsResult<Self> {
        let base_url = base_url.as_ref().trim();
        if base_url.is_empty() {
            return Err(DetailsError::MissingBaseUrl);
        }
        let base_url = Url::parse(base_url)
            .map_err(|e| DetailsError::InvalidInput(format!("invalid base URL: {}", e)))?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .user_agent("Songbook/1.0")
            .build()?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Create a client from `SONG_DETAILS_URL` (or `EXTERNAL_API_URL`)
    pub fn from_env() -> DetailsResult<Self> {
        let base_url = DETAILS_URL_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|value| !value.is_empty())
            .ok_or(DetailsError::MissingBaseUrl)?;
        Self::new(base_url)
    }

    /// The configured lookup endpoint
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn validate_name<'a>(field: &str, value: &'a str) -> DetailsResult<&'a str> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DetailsError::InvalidInput(format!(
                "{} cannot be empty",
                field
            )));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DetailsError::InvalidInput(format!(
                "{} too long (max {} characters)",
                field, MAX_NAME_LENGTH
            )));
        }
        Ok(trimmed)
    }

    /// Look up metadata for a song
    ///
    /// Sends `GET <base_url>?group=<group>&song=<song>`.
    ///
    /// # Errors
    /// - `DetailsError::InvalidInput` - If group or song is empty or too long
    /// - `DetailsError::Status` - If the API answers with anything but 200
    /// - `DetailsError::Parse` - If the body is not the expected JSON
    /// - `DetailsError::Timeout` / `DetailsError::Http` - Transport failures
    #[instrument(skip(self))]
    pub async fn fetch_details(&self, group: &str, song: &str) -> DetailsResult<SongDetail> {
        let group = Self::validate_name("group", group)?;
        let song = Self::validate_name("song", song)?;

        debug!(group = %group, song = %song, "Fetching song details");

        let response = self
            .http_client
            .get(self.base_url.clone())
            .query(&[("group", group), ("song", song)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DetailsError::Timeout
                } else {
                    DetailsError::Http(e)
                }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "Song details API returned an error status");
            return Err(DetailsError::Status(status.as_u16()));
        }

        let text = response.text().await.map_err(DetailsError::Http)?;
        let details: SongDetail = serde_json::from_str(&text)?;

        debug!(
            group = %group,
            song = %song,
            has_text = !details.text.is_empty(),
            "Fetched song details"
        );

        Ok(details)
    }
}
