//! Record mapping between `SQLite` rows and albums
//!
//! Reads come back as rows in the fixed column order `(id, title, artist, price)`
//! and are decoded positionally. Writes that touch a subset of columns go
//! through [`build_partial_update`], which only ever emits column names taken
//! from [`AlbumField`].

use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteRow};
use sqlx::Row;
use vinyl_core::{
    error::{Result, VinylError},
    types::{Album, AlbumChanges, AlbumField, AlbumId, AlbumValue},
};

/// Decode every row into an album.
///
/// Fails as a whole on the first row that does not decode; no partial list
/// is returned.
pub fn rows_to_albums(rows: &[SqliteRow]) -> Result<Vec<Album>> {
    rows.iter().map(row_to_album).collect()
}

fn row_to_album(row: &SqliteRow) -> Result<Album> {
    Ok(Album {
        id: row.try_get(0)?,
        title: row.try_get(1)?,
        artist: row.try_get(2)?,
        price: row.try_get(3)?,
    })
}

/// A bound positional argument
#[derive(Debug, Clone, PartialEq)]
pub enum SqlArg {
    Text(String),
    Real(f32),
    Integer(i64),
}

impl From<AlbumValue> for SqlArg {
    fn from(value: AlbumValue) -> Self {
        match value {
            AlbumValue::Text(text) => SqlArg::Text(text),
            AlbumValue::Price(price) => SqlArg::Real(price),
        }
    }
}

/// `UPDATE` statement text plus its positional arguments, `id` last
#[derive(Debug, Clone, PartialEq)]
pub struct PartialUpdate {
    pub sql: String,
    pub args: Vec<SqlArg>,
}

impl PartialUpdate {
    /// Bind the arguments in order
    pub fn query(&self) -> Query<'_, Sqlite, SqliteArguments<'_>> {
        self.args
            .iter()
            .fold(sqlx::query::<Sqlite>(&self.sql), |query, arg| match arg {
                SqlArg::Text(text) => query.bind(text.as_str()),
                SqlArg::Real(value) => query.bind(*value),
                SqlArg::Integer(value) => query.bind(*value),
            })
    }
}

/// Build `UPDATE album SET <col> = ?, ... WHERE id = ?` for the given changes.
///
/// Columns appear in the insertion order of `changes`. An empty change set is
/// rejected: an `UPDATE` with no assignments is not a valid statement.
pub fn build_partial_update(changes: &AlbumChanges, id: AlbumId) -> Result<PartialUpdate> {
    if changes.is_empty() {
        return Err(VinylError::validation("no album fields to update"));
    }

    let assignments: Vec<String> = changes
        .fields()
        .map(|field: AlbumField| format!("{} = ?", field.column()))
        .collect();

    let mut args: Vec<SqlArg> = changes
        .iter()
        .map(|(_, value)| SqlArg::from(value.clone()))
        .collect();
    args.push(SqlArg::Integer(id));

    Ok(PartialUpdate {
        sql: format!("UPDATE album SET {} WHERE id = ?", assignments.join(", ")),
        args,
    })
}
