//! Songs HTTP route handlers
//!
//! - `GET    /` - filtered, paginated song listing
//! - `POST   /` - create a song, enriched with looked-up details
//! - `GET    /:song_id` - one page of a song's verses
//! - `PATCH  /:song_id` - overwrite the non-empty fields of the body
//! - `DELETE /:song_id` - remove a song

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::models::{SongCommon, SongCreatedResponse, SongFilters, SongResponse};
use crate::pagination::Pagination;
use crate::services::{SongDetailsLookup, SongService};

/// Shared state for song handlers
#[derive(Clone)]
pub struct SongsState {
    pub song_service: Arc<SongService>,
    pub details: Arc<SongDetailsLookup>,
}

impl SongsState {
    pub fn new(song_service: SongService, details: SongDetailsLookup) -> Self {
        Self {
            song_service: Arc::new(song_service),
            details: Arc::new(details),
        }
    }
}

/// Raw query string pairs, in request order. A repeated key resolves to its
/// first value.
type QueryPairs = Vec<(String, String)>;

fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

/// Query string of the listing endpoint
#[derive(Debug, Default)]
pub struct SongsQuery {
    pub group: Option<String>,
    pub song: Option<String>,
    pub text: Option<String>,
    pub release_date: Option<String>,
    pub link: Option<String>,
    pub page: PageQuery,
}

impl SongsQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            group: first_value(pairs, "group"),
            song: first_value(pairs, "song"),
            text: first_value(pairs, "text"),
            release_date: first_value(pairs, "release_date"),
            link: first_value(pairs, "link"),
            page: PageQuery::from_pairs(pairs),
        }
    }

    fn into_parts(self) -> ApiResult<(SongFilters, Pagination)> {
        let pagination = self.page.pagination()?;
        let filters = SongFilters {
            group: self.group.unwrap_or_default(),
            song: self.song.unwrap_or_default(),
            text: self.text.unwrap_or_default(),
            release_date: self.release_date.unwrap_or_default(),
            link: self.link.unwrap_or_default(),
        };
        Ok((filters, pagination))
    }
}

/// `page` / `page_size` query parameters
#[derive(Debug, Default)]
pub struct PageQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl PageQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            page: first_value(pairs, "page"),
            page_size: first_value(pairs, "page_size"),
        }
    }

    fn pagination(&self) -> ApiResult<Pagination> {
        Pagination::from_query(self.page.as_deref(), self.page_size.as_deref())
    }
}

/// Body of update and delete responses
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Create songs router
pub fn songs_router(state: SongsState) -> Router {
    Router::new()
        .route("/", get(list_songs).post(create_song))
        .route(
            "/:song_id",
            get(get_song_text).patch(update_song).delete(delete_song),
        )
        .with_state(state)
}

fn query_error(rejection: QueryRejection) -> ApiError {
    ApiError::ValidationError(rejection.body_text())
}

fn path_error(rejection: PathRejection) -> ApiError {
    ApiError::ValidationError(format!("invalid song id: {}", rejection.body_text()))
}

fn body_error(rejection: JsonRejection) -> ApiError {
    ApiError::InvalidBody(rejection.body_text())
}

/// List songs
///
/// # Response
/// - 200 OK with a JSON array of songs (identifiers are not exposed)
/// - 400 Bad Request for a non-numeric or zero `page`/`page_size`
async fn list_songs(
    State(state): State<SongsState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> ApiResult<Json<Vec<SongResponse>>> {
    let Query(pairs) = query.map_err(query_error)?;
    let (filters, pagination) = SongsQuery::from_pairs(&pairs).into_parts()?;

    let songs = state
        .song_service
        .get_songs_info(&filters, pagination)
        .await?;

    Ok(Json(songs.into_iter().map(SongResponse::from).collect()))
}

/// Create a song
///
/// Group and song are required. Text, release date and link come from the
/// details lookup when it is configured and answers.
///
/// # Response
/// - 201 Created with `{"id", "message"}`
/// - 400 Bad Request for a malformed body or a missing field
async fn create_song(
    State(state): State<SongsState>,
    body: Result<Json<SongCommon>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(song) = body.map_err(body_error)?;
    song.validate()?;

    let details = state.details.lookup(&song).await;
    let id = state.song_service.create_song(&song, &details).await?;

    tracing::info!(song_id = id, group = %song.group, song = %song.song, "Song created");

    Ok((
        StatusCode::CREATED,
        Json(SongCreatedResponse {
            id,
            message: "Song was added",
        }),
    ))
}

/// Get one page of verses
///
/// # Response
/// - 200 OK with a JSON array of verses (empty past the last page)
/// - 404 Not Found if the song does not exist
async fn get_song_text(
    State(state): State<SongsState>,
    song_id: Result<Path<i64>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> ApiResult<Json<Vec<String>>> {
    let Path(song_id) = song_id.map_err(path_error)?;
    let Query(pairs) = query.map_err(query_error)?;
    let pagination = PageQuery::from_pairs(&pairs).pagination()?;

    let verses = state.song_service.get_song_text(song_id, pagination).await?;
    Ok(Json(verses))
}

/// Update a song
///
/// Empty fields in the body leave the stored value untouched. An unknown
/// identifier is not an error.
async fn update_song(
    State(state): State<SongsState>,
    song_id: Result<Path<i64>, PathRejection>,
    body: Result<Json<SongFilters>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(song_id) = song_id.map_err(path_error)?;
    let Json(new_data) = body.map_err(body_error)?;

    state.song_service.update_song(song_id, &new_data).await?;

    Ok(Json(MessageResponse {
        message: "Song was updated",
    }))
}

/// Delete a song
///
/// An unknown identifier is not an error.
async fn delete_song(
    State(state): State<SongsState>,
    song_id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(song_id) = song_id.map_err(path_error)?;

    state.song_service.delete_song(song_id).await?;

    Ok(Json(MessageResponse {
        message: "Song was deleted",
    }))
}
