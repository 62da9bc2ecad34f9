//! Shared test utilities for Songbook workspace
//!
//! Mock implementations of external services so the API and client test
//! suites run without network dependencies.
//!
//! # Mock Services
//!
//! - [`MockDetailsServer`] - Mock song metadata lookup API
//!
//! # Example
//!
//! ```rust,ignore
//! use songbook_test_utils::{MockDetailsServer, SongDetailFixture};
//!
//! #[tokio::test]
//! async fn test_with_mocks() {
//!     let details = MockDetailsServer::start().await;
//!     details.mock_details_any(SongDetailFixture::sample()).await;
//!
//!     // Use details.url() to configure your client
//! }
//! ```

mod details;

pub use details::{MockDetailsServer, SongDetailFixture};
