//! Vinyl Storage
//!
//! `SQLite` persistence for the Vinyl album catalogue.
//!
//! # Architecture
//!
//! - **Record Mapper** (`mapper`): result rows to albums, change sets to `UPDATE` statements
//! - **Vertical Slice** (`albums`): every album statement, as free functions over a pool
//! - **Repository** (`SqliteAlbumRepository`): the `AlbumStore` implementation handed to the server
//!
//! # Example
//!
//! ```rust,no_run
//! use vinyl_storage::{SqliteAlbumRepository, create_pool, ensure_schema};
//! use vinyl_core::AlbumStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://vinyl.db", 5).await?;
//! ensure_schema(&pool).await?;
//!
//! let albums = SqliteAlbumRepository::new(pool);
//! let all = albums.get_all().await?;
//! # Ok(())
//! # }
//! ```

pub mod albums;
pub mod mapper;
mod repository;

pub use repository::SqliteAlbumRepository;

use sqlx::sqlite::SqlitePool;

const ALBUM_SCHEMA: &str = include_str!("../schema/album.sql");

/// Create the `album` table when it does not exist yet
///
/// # Errors
///
/// Returns an error if the statement fails
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(ALBUM_SCHEMA).execute(pool).await?;
    Ok(())
}

/// Round-trip a trivial statement to prove the database is reachable
///
/// # Errors
///
/// Returns an error if no connection can be acquired or the statement fails
pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// Missing parent directories of the database file are created.
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://vinyl.db>`)
/// * `max_connections` - upper bound on pooled connections
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    if let Some(parent) = options.get_filename().parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
            tracing::info!(path = %parent.display(), "Created database directory");
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(max_connections, "SQLite pool created");

    Ok(pool)
}
