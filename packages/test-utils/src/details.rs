//! Mock song metadata lookup server
//!
//! Provides a [`MockDetailsServer`] that answers `GET /info?group=..&song=..`
//! the way the external lookup API does.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the lookup endpoint is mounted on
const INFO_PATH: &str = "/info";

/// Mock lookup API for testing song creation enrichment
///
/// # Example
///
/// ```rust,ignore
/// use songbook_test_utils::{MockDetailsServer, SongDetailFixture};
///
/// #[tokio::test]
/// async fn test_lookup() {
///     let server = MockDetailsServer::start().await;
///     server
///         .mock_details_for("Muse", "Uprising", SongDetailFixture::sample())
///         .await;
///
///     // Configure your DetailsClient with server.url()
/// }
/// ```
pub struct MockDetailsServer {
    server: MockServer,
}

impl MockDetailsServer {
    /// Start a new mock lookup server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Full URL of the lookup endpoint
    pub fn url(&self) -> String {
        format!("{}{}", self.server.uri(), INFO_PATH)
    }

    /// Mount a mock answering a specific group and song
    pub async fn mock_details_for(&self, group: &str, song: &str, detail: SongDetailFixture) {
        Mock::given(method("GET"))
            .and(path(INFO_PATH))
            .and(query_param("group", group))
            .and(query_param("song", song))
            .respond_with(ResponseTemplate::new(200).set_body_json(detail.to_json()))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock answering every lookup with the same details
    pub async fn mock_details_any(&self, detail: SongDetailFixture) {
        Mock::given(method("GET"))
            .and(path(INFO_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(detail.to_json()))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock failing every lookup with `status_code`
    pub async fn mock_details_failure(&self, status_code: u16) {
        Mock::given(method("GET"))
            .and(path(INFO_PATH))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "error": "lookup failed"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock returning a body that is not JSON
    pub async fn mock_details_malformed(&self) {
        Mock::given(method("GET"))
            .and(path(INFO_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&self.server)
            .await;
    }

    /// Number of requests the server has received so far
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}

/// Fixture for a lookup API response body
#[derive(Debug, Clone, Default)]
pub struct SongDetailFixture {
    pub release_date: Option<String>,
    pub text: Option<String>,
    pub link: Option<String>,
}

impl SongDetailFixture {
    /// A complete response with three verses
    pub fn sample() -> Self {
        Self {
            release_date: Some("16.07.2006".to_string()),
            text: Some(
                "Ooh baby, don't you know I suffer?\nOoh baby, can you hear me moan?\n\n\
                 You caught me under false pretenses\nHow long before you let me go?\n\n\
                 Ooh, you set my soul alight"
                    .to_string(),
            ),
            link: Some("https://www.youtube.com/watch?v=Xsp3_a-PMTw".to_string()),
        }
    }

    /// A response carrying only a release date
    pub fn release_date_only(release_date: &str) -> Self {
        Self {
            release_date: Some(release_date.to_string()),
            ..Self::default()
        }
    }

    /// Serialize to the wire format; `None` fields are omitted
    pub fn to_json(&self) -> serde_json::Value {
        let mut body = serde_json::Map::new();
        if let Some(release_date) = &self.release_date {
            body.insert("releaseDate".to_string(), json!(release_date));
        }
        if let Some(text) = &self.text {
            body.insert("text".to_string(), json!(text));
        }
        if let Some(link) = &self.link {
            body.insert("link".to_string(), json!(link));
        }
        serde_json::Value::Object(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_omits_missing_fields() {
        let body = SongDetailFixture::release_date_only("2001").to_json();
        assert_eq!(body["releaseDate"], "2001");
        assert!(body.get("text").is_none());
        assert!(body.get("link").is_none());
    }

    #[tokio::test]
    async fn test_mock_details_for_matches_query() {
        let server = MockDetailsServer::start().await;
        server
            .mock_details_for("Muse", "Uprising", SongDetailFixture::sample())
            .await;

        let client = reqwest::Client::new();
        let response = client
            .get(server.url())
            .query(&[("group", "Muse"), ("song", "Uprising")])
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["releaseDate"], "16.07.2006");
        assert_eq!(server.request_count().await, 1);
    }

    #[tokio::test]
    async fn test_unmatched_query_returns_404() {
        let server = MockDetailsServer::start().await;
        server
            .mock_details_for("Muse", "Uprising", SongDetailFixture::sample())
            .await;

        let response = reqwest::Client::new()
            .get(server.url())
            .query(&[("group", "Blur"), ("song", "Song 2")])
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 404);
    }
}
