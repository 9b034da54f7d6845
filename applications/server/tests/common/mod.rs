/// Common test utilities and fixtures
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;
use vinyl_core::{
    error::{Result, VinylError},
    types::{Album, AlbumChanges, AlbumId, NewAlbum},
    AlbumStore,
};
use vinyl_server::{config::CorsSettings, create_router, state::AppState};
use vinyl_storage::SqliteAlbumRepository;

/// Router backed by a real SQLite file that lives as long as the struct
pub struct TestApp {
    pub router: Router,
    pub repo: Arc<SqliteAlbumRepository>,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

        let pool = vinyl_storage::create_pool(&db_url, 5)
            .await
            .expect("Failed to create pool");
        vinyl_storage::ensure_schema(&pool)
            .await
            .expect("Failed to create schema");

        let repo = Arc::new(SqliteAlbumRepository::new(pool));
        let router = router_for(repo.clone());

        Self {
            router,
            repo,
            _temp_dir: temp_dir,
        }
    }

    pub async fn request(&self, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
        send(&self.router, method, uri).await
    }
}

pub fn router_for(store: Arc<dyn AlbumStore>) -> Router {
    let cors = CorsSettings {
        allowed_origins: vec!["*".to_string()],
    };
    create_router(AppState::new(store), &cors)
}

/// Send one request and decode the JSON body (`Null` when the body is empty)
pub async fn send(router: &Router, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, body)
}

/// Store whose every call fails at the storage layer
pub struct FailingStore;

#[async_trait]
impl AlbumStore for FailingStore {
    async fn get_all(&self) -> Result<Vec<Album>> {
        Err(VinylError::storage("connection refused"))
    }

    async fn get_by_id(&self, _id: AlbumId) -> Result<Option<Album>> {
        Err(VinylError::storage("connection refused"))
    }

    async fn get_by_artist(&self, _name: &str) -> Result<Vec<Album>> {
        Err(VinylError::decode("column 3 is not a REAL"))
    }

    async fn add(&self, _album: NewAlbum) -> Result<Album> {
        Err(VinylError::storage("database is locked"))
    }

    async fn update(&self, _id: AlbumId, _changes: AlbumChanges) -> Result<()> {
        Err(VinylError::storage("database is locked"))
    }

    async fn delete(&self, _id: AlbumId) -> Result<()> {
        Err(VinylError::storage("database is locked"))
    }
}
