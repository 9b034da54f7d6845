//! Vinyl Server Library
//!
//! HTTP front end for the album catalogue: routing, error translation and
//! configuration.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use app::create_router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
