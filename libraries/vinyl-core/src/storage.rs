//! Repository trait for album persistence

use crate::error::Result;
use crate::types::{Album, AlbumChanges, AlbumId, NewAlbum};
use async_trait::async_trait;

/// Album repository
///
/// Every operation is a single autocommit statement against a shared, pooled
/// handle. Implementations must be safe to call from concurrent request tasks.
#[async_trait]
pub trait AlbumStore: Send + Sync {
    /// Get every album (an empty catalogue is a valid answer)
    async fn get_all(&self) -> Result<Vec<Album>>;

    /// Get album by ID, `None` when no row matches
    async fn get_by_id(&self, id: AlbumId) -> Result<Option<Album>>;

    /// Get albums whose artist contains `name` as a substring
    async fn get_by_artist(&self, name: &str) -> Result<Vec<Album>>;

    /// Insert a new album and return it with its generated ID
    async fn add(&self, album: NewAlbum) -> Result<Album>;

    /// Apply a partial update; fails with a validation error when `changes` is empty
    async fn update(&self, id: AlbumId, changes: AlbumChanges) -> Result<()>;

    /// Delete at most one album
    async fn delete(&self, id: AlbumId) -> Result<()>;

    /// Insert an album with generated title, artist and price
    async fn add_random(&self) -> Result<Album> {
        let album = NewAlbum::random();
        self.add(album).await
    }
}
