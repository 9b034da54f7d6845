//! Album routes
//!
//! | Path                    | Method | Operation     |
//! |-------------------------|--------|---------------|
//! | `/albums`               | GET    | list all      |
//! | `/albums`               | PUT    | add           |
//! | `/albums/random`        | PUT    | add random    |
//! | `/albums/:id`           | GET    | get by id     |
//! | `/albums/:id`           | PATCH  | update        |
//! | `/albums/:id`           | DELETE | delete        |
//! | `/albums/artist/:name`  | GET    | search artist |
//!
//! Any other method on these paths answers 405.

use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Query, State},
    http::{request::Parts, StatusCode},
    routing::{get, put},
    Json, Router,
};
use serde::Serialize;
use vinyl_core::types::{Album, AlbumChanges, AlbumId, NewAlbum};

const ALBUM_NOT_FOUND: &str = "album not found";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/albums",
            get(list_albums).put(add_album).fallback(method_not_allowed),
        )
        .route(
            "/albums/random",
            put(add_random_album).fallback(method_not_allowed),
        )
        .route(
            "/albums/:id",
            get(get_album)
                .patch(update_album)
                .delete(delete_album)
                .fallback(method_not_allowed),
        )
        .route(
            "/albums/artist/:name",
            get(get_albums_by_artist).fallback(method_not_allowed),
        )
}

/// Query string as ordered key/value pairs.
///
/// Repeated keys are kept; a rejected query string answers 400 with the
/// usual JSON error body.
#[derive(Debug, Default)]
pub struct QueryPairs(pub Vec<(String, String)>);

impl QueryPairs {
    /// First value given for `key`, if any.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for QueryPairs
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state).await?;
        Ok(Self(pairs))
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /albums
pub async fn list_albums(State(app_state): State<AppState>) -> Result<Json<Vec<Album>>> {
    let albums = app_state.albums.get_all().await.map_err(|e| {
        ServerError::store(e, "failed to get albums", StatusCode::INTERNAL_SERVER_ERROR)
    })?;

    Ok(Json(albums))
}

/// GET /albums/:id
///
/// Answers with a one-element array to match the list endpoints.
pub async fn get_album(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Album>>> {
    // No row can carry a non-numeric id
    let Ok(id) = id.parse::<AlbumId>() else {
        return Err(ServerError::NotFound(ALBUM_NOT_FOUND.to_string()));
    };

    let album = app_state
        .albums
        .get_by_id(id)
        .await
        .map_err(|e| {
            ServerError::store(e, "failed to get album", StatusCode::INTERNAL_SERVER_ERROR)
        })?
        .ok_or_else(|| ServerError::NotFound(ALBUM_NOT_FOUND.to_string()))?;

    Ok(Json(vec![album]))
}

/// GET /albums/artist/:name
pub async fn get_albums_by_artist(
    Path(name): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Album>>> {
    let albums = app_state.albums.get_by_artist(&name).await.map_err(|e| {
        ServerError::store(
            e,
            "failed to get albums by artist",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
    })?;

    if albums.is_empty() {
        return Err(ServerError::NotFound(format!(
            "failed to find an album with provided search: {}",
            name
        )));
    }

    Ok(Json(albums))
}

/// PUT /albums?title=&artist=&price=
///
/// A repeated key takes its first value.
pub async fn add_album(
    State(app_state): State<AppState>,
    query: QueryPairs,
) -> Result<Json<Album>> {
    let album = NewAlbum::parse(
        query.first("title"),
        query.first("artist"),
        query.first("price"),
    )?;

    let created = app_state.albums.add(album).await.map_err(|e| {
        ServerError::store(e, "failed to create album", StatusCode::INTERNAL_SERVER_ERROR)
    })?;

    tracing::info!("Created album {}", created.id);
    Ok(Json(created))
}

/// PUT /albums/random
pub async fn add_random_album(State(app_state): State<AppState>) -> Result<Json<Album>> {
    let created = app_state.albums.add_random().await.map_err(|e| {
        ServerError::store(e, "failed to create album", StatusCode::INTERNAL_SERVER_ERROR)
    })?;

    tracing::info!("Created random album {}", created.id);
    Ok(Json(created))
}

/// PATCH /albums/:id?<field>=<value>...
///
/// Storage failures answer 400 here, unlike the other operations.
pub async fn update_album(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    QueryPairs(params): QueryPairs,
) -> Result<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    let changes = AlbumChanges::from_pairs(params)?;

    app_state
        .albums
        .update(id, changes)
        .await
        .map_err(|e| ServerError::store(e, "could not update album", StatusCode::BAD_REQUEST))?;

    Ok(Json(MessageResponse {
        message: "album successfully updated",
    }))
}

/// DELETE /albums/:id
pub async fn delete_album(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    let id = parse_id(&id)?;

    app_state.albums.delete(id).await.map_err(|e| {
        ServerError::store(e, "could not delete album", StatusCode::INTERNAL_SERVER_ERROR)
    })?;

    tracing::info!("Deleted album {}", id);
    Ok(Json(MessageResponse {
        message: "album successfully removed",
    }))
}

async fn method_not_allowed() -> ServerError {
    ServerError::MethodNotAllowed
}

fn parse_id(raw: &str) -> Result<AlbumId> {
    raw.parse()
        .map_err(|_| ServerError::BadRequest(format!("invalid album id '{}'", raw)))
}
