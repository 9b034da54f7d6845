use crate::mapper::{build_partial_update, rows_to_albums};
use sqlx::SqlitePool;
use vinyl_core::{
    error::Result,
    types::{Album, AlbumChanges, AlbumId, NewAlbum},
};

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Album>> {
    let rows = sqlx::query("SELECT id, title, artist, price FROM album ORDER BY id")
        .fetch_all(pool)
        .await?;

    rows_to_albums(&rows)
}

pub async fn get_by_id(pool: &SqlitePool, id: AlbumId) -> Result<Option<Album>> {
    let rows = sqlx::query("SELECT id, title, artist, price FROM album WHERE id = ?")
        .bind(id)
        .fetch_all(pool)
        .await?;

    Ok(rows_to_albums(&rows)?.into_iter().next())
}

/// Substring match on the artist name
pub async fn get_by_artist(pool: &SqlitePool, name: &str) -> Result<Vec<Album>> {
    let rows = sqlx::query(
        "SELECT id, title, artist, price FROM album
         WHERE artist LIKE ? ESCAPE '\\'
         ORDER BY id",
    )
    .bind(contains_pattern(name))
    .fetch_all(pool)
    .await?;

    rows_to_albums(&rows)
}

pub async fn create(pool: &SqlitePool, album: NewAlbum) -> Result<Album> {
    let result = sqlx::query("INSERT INTO album (title, artist, price) VALUES (?, ?, ?)")
        .bind(&album.title)
        .bind(&album.artist)
        .bind(album.price)
        .execute(pool)
        .await?;

    Ok(album.with_id(result.last_insert_rowid()))
}

pub async fn update(pool: &SqlitePool, id: AlbumId, changes: &AlbumChanges) -> Result<()> {
    let update = build_partial_update(changes, id)?;
    tracing::debug!(sql = %update.sql, "Updating album {}", id);

    let result = update.query().execute(pool).await?;
    if result.rows_affected() == 0 {
        tracing::debug!("Update matched no album with id {}", id);
    }

    Ok(())
}

/// Delete at most one row; `SQLite` has no `DELETE ... LIMIT`, so the bound
/// sits on the subquery.
pub async fn delete(pool: &SqlitePool, id: AlbumId) -> Result<()> {
    let result = sqlx::query(
        "DELETE FROM album WHERE id IN (SELECT id FROM album WHERE id = ? LIMIT 1)",
    )
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        tracing::debug!("Delete matched no album with id {}", id);
    }

    Ok(())
}

// `%name%` with LIKE wildcards in `name` escaped
fn contains_pattern(name: &str) -> String {
    let mut pattern = String::with_capacity(name.len() + 2);
    pattern.push('%');
    for ch in name.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
