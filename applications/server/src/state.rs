/// Shared application state
use std::sync::Arc;
use vinyl_core::AlbumStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub albums: Arc<dyn AlbumStore>,
}

impl AppState {
    pub fn new(albums: Arc<dyn AlbumStore>) -> Self {
        Self { albums }
    }
}
