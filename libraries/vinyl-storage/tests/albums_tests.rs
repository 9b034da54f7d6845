//! Integration tests for the album repository
//!
//! Tests album CRUD operations including:
//! - Creating albums and reading them back by ID
//! - Substring search on artist names
//! - Partial updates
//! - Single-row deletes
//! - Not-found outcomes that are not errors


use test_helpers::*;
use vinyl_core::{AlbumChanges, AlbumStore, VinylError};
use vinyl_storage::SqliteAlbumRepository;

// ============================================================================
// Create / Read
// ============================================================================

#[tokio::test]
async fn test_add_then_get_by_id() {
    let test_db = TestDb::new().await;
    let repo = SqliteAlbumRepository::new(test_db.pool().clone());

    let created = repo
        .add(new_album("Blue Train", "John Coltrane", 39.99))
        .await
        .expect("Failed to add album");

    assert!(created.id > 0);
    assert_eq!(created.title, "Blue Train");
    assert_eq!(created.artist, "John Coltrane");
    assert_eq!(created.price, 39.99);

    let fetched = repo
        .get_by_id(created.id)
        .await
        .expect("Failed to get album")
        .expect("Album not found");

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_ids_are_assigned_by_storage() {
    let test_db = TestDb::new().await;
    let repo = SqliteAlbumRepository::new(test_db.pool().clone());

    let first = repo.add(new_album("Album1", "Artist1", 10.0)).await.unwrap();
    let second = repo.add(new_album("Album2", "Artist2", 12.0)).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}

#[tokio::test]
async fn test_get_all() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let repo = SqliteAlbumRepository::new(pool.clone());

    assert!(repo.get_all().await.unwrap().is_empty());

    insert_album(pool, "Album1", "Artist1", 10.99).await;
    insert_album(pool, "Album2", "Artist2", 12.99).await;

    let albums = repo.get_all().await.unwrap();
    assert_eq!(albums.len(), 2);
    assert_eq!(albums[0].title, "Album1");
    assert_eq!(albums[1].price, 12.99);
}

#[tokio::test]
async fn test_get_by_id_missing_is_none() {
    let test_db = TestDb::new().await;
    let repo = SqliteAlbumRepository::new(test_db.pool().clone());

    let missing = repo.get_by_id(999).await.expect("Lookup should not fail");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_add_random() {
    let test_db = TestDb::new().await;
    let repo = SqliteAlbumRepository::new(test_db.pool().clone());

    let album = repo.add_random().await.unwrap();
    let fetched = repo.get_by_id(album.id).await.unwrap().unwrap();
    assert_eq!(fetched, album);
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_get_by_artist_substring() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let repo = SqliteAlbumRepository::new(pool.clone());

    insert_album(pool, "First", "Artist1", 10.0).await;
    insert_album(pool, "Second", "The Artist", 11.0).await;
    insert_album(pool, "Third", "Band", 12.0).await;

    let found = repo.get_by_artist("Art").await.unwrap();
    let artists: Vec<&str> = found.iter().map(|a| a.artist.as_str()).collect();
    assert_eq!(artists, vec!["Artist1", "The Artist"]);

    assert!(repo.get_by_artist("Orchestra").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_by_artist_wildcards_are_literal() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let repo = SqliteAlbumRepository::new(pool.clone());

    insert_album(pool, "Covers", "100% Pure", 5.0).await;
    insert_album(pool, "Other", "1000 Pure", 5.0).await;

    let found = repo.get_by_artist("100%").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].artist, "100% Pure");

    assert!(repo.get_by_artist("_").await.unwrap().is_empty());
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_update_changes_only_given_fields() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let repo = SqliteAlbumRepository::new(pool.clone());

    let id = insert_album(pool, "Album1", "Artist1", 10.0).await;

    repo.update(id, AlbumChanges::from_pairs([("title", "X"), ("price", "20")]).unwrap())
        .await
        .expect("Failed to update album");

    let album = repo.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(album.title, "X");
    assert_eq!(album.artist, "Artist1");
    assert_eq!(album.price, 20.0);
}

#[tokio::test]
async fn test_update_empty_changes_is_validation_error() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let repo = SqliteAlbumRepository::new(pool.clone());

    let id = insert_album(pool, "Album1", "Artist1", 10.0).await;

    let err = repo.update(id, AlbumChanges::new()).await.unwrap_err();
    assert!(err.is_validation());

    let album = repo.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(album.title, "Album1");
}

#[tokio::test]
async fn test_update_rejected_by_storage() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let repo = SqliteAlbumRepository::new(pool.clone());

    let id = insert_album(pool, "Album1", "Artist1", 10.0).await;

    // The builder skips validation; the CHECK constraint still holds
    let err = repo
        .update(id, AlbumChanges::new().price(-5.0))
        .await
        .unwrap_err();
    assert!(matches!(err, VinylError::Storage(_)), "got {err:?}");

    let album = repo.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(album.price, 10.0);
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let repo = SqliteAlbumRepository::new(pool.clone());

    let id = insert_album(pool, "Album1", "Artist1", 10.0).await;
    let other = insert_album(pool, "Album2", "Artist2", 10.0).await;

    repo.delete(id).await.expect("Failed to delete album");

    assert!(repo.get_by_id(id).await.unwrap().is_none());
    assert!(repo.get_by_id(other).await.unwrap().is_some());
}

#[tokio::test]
async fn test_delete_missing_is_ok() {
    let test_db = TestDb::new().await;
    let repo = SqliteAlbumRepository::new(test_db.pool().clone());

    repo.delete(42).await.expect("Deleting a missing album should succeed");
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_missing_table_is_storage_error() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    sqlx::query("DROP TABLE album").execute(pool).await.unwrap();

    let repo = SqliteAlbumRepository::new(pool.clone());
    let err = repo.get_all().await.unwrap_err();
    assert!(matches!(err, VinylError::Storage(_)), "got {err:?}");
}

#[tokio::test]
async fn test_concurrent_adds_get_distinct_ids() {
    let test_db = TestDb::new().await;
    let repo = std::sync::Arc::new(SqliteAlbumRepository::new(test_db.pool().clone()));

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let repo = std::sync::Arc::clone(&repo);
            tokio::spawn(async move {
                repo.add(new_album(&format!("Album{i}"), "Artist", 1.0))
                    .await
                    .unwrap()
                    .id
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 10);
}
