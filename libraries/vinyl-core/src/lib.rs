//! Vinyl Core
//!
//! Domain types, the repository trait, and error handling for the Vinyl album service.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Album`, `NewAlbum`, `AlbumChanges`
//! - **Repository Trait**: `AlbumStore`, implemented by storage backends
//! - **Error Handling**: Unified `VinylError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use vinyl_core::types::{AlbumChanges, AlbumField, NewAlbum};
//!
//! let album = NewAlbum::parse(Some("Blue Train"), Some("John Coltrane"), Some("39.99")).unwrap();
//! assert_eq!(album.price, 39.99);
//!
//! let changes = AlbumChanges::from_pairs([("price", "12.5")]).unwrap();
//! assert_eq!(changes.fields().collect::<Vec<_>>(), vec![AlbumField::Price]);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Result, VinylError};
pub use storage::AlbumStore;
pub use types::{Album, AlbumChanges, AlbumField, AlbumId, AlbumValue, NewAlbum};
