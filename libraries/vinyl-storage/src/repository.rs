use crate::albums;
use async_trait::async_trait;
use sqlx::SqlitePool;
use vinyl_core::{
    error::Result,
    storage::AlbumStore,
    types::{Album, AlbumChanges, AlbumId, NewAlbum},
};

/// `AlbumStore` backed by a `SQLite` pool
///
/// Holds no state beyond the pool; each call acquires a connection for one
/// statement and returns it.
#[derive(Debug, Clone)]
pub struct SqliteAlbumRepository {
    pool: SqlitePool,
}

impl SqliteAlbumRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlbumStore for SqliteAlbumRepository {
    async fn get_all(&self) -> Result<Vec<Album>> {
        albums::get_all(&self.pool).await
    }

    async fn get_by_id(&self, id: AlbumId) -> Result<Option<Album>> {
        albums::get_by_id(&self.pool, id).await
    }

    async fn get_by_artist(&self, name: &str) -> Result<Vec<Album>> {
        albums::get_by_artist(&self.pool, name).await
    }

    async fn add(&self, album: NewAlbum) -> Result<Album> {
        albums::create(&self.pool, album).await
    }

    async fn update(&self, id: AlbumId, changes: AlbumChanges) -> Result<()> {
        albums::update(&self.pool, id, &changes).await
    }

    async fn delete(&self, id: AlbumId) -> Result<()> {
        albums::delete(&self.pool, id).await
    }
}
