//! Partial album updates

use super::album::{parse_price, parse_text};
use crate::error::{Result, VinylError};
use std::fmt;
use std::str::FromStr;

/// Columns a caller may change. This is the full set of identifiers that can
/// ever appear in a generated `UPDATE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlbumField {
    Title,
    Artist,
    Price,
}

impl AlbumField {
    pub const ALL: [AlbumField; 3] = [AlbumField::Title, AlbumField::Artist, AlbumField::Price];

    /// Column name in the `album` table
    pub fn column(self) -> &'static str {
        match self {
            AlbumField::Title => "title",
            AlbumField::Artist => "artist",
            AlbumField::Price => "price",
        }
    }

    /// Parse and validate a raw value for this field
    pub fn parse_value(self, raw: &str) -> Result<AlbumValue> {
        match self {
            AlbumField::Title | AlbumField::Artist => {
                parse_text(self.column(), raw).map(AlbumValue::Text)
            }
            AlbumField::Price => parse_price(raw).map(AlbumValue::Price),
        }
    }
}

impl fmt::Display for AlbumField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for AlbumField {
    type Err = VinylError;

    fn from_str(s: &str) -> Result<Self> {
        AlbumField::ALL
            .into_iter()
            .find(|field| field.column() == s)
            .ok_or_else(|| VinylError::validation(format!("unknown album field '{s}'")))
    }
}

/// A validated value for one [`AlbumField`]
#[derive(Debug, Clone, PartialEq)]
pub enum AlbumValue {
    Text(String),
    Price(f32),
}

/// Ordered set of field changes. Insertion order is kept and is the column
/// order of the generated statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlbumChanges {
    changes: Vec<(AlbumField, AlbumValue)>,
}

impl AlbumChanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw `(name, value)` pairs such as a query string.
    ///
    /// Unknown names, repeated names and invalid values are validation errors.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut changes = Self::new();
        for (name, raw) in pairs {
            let field: AlbumField = name.as_ref().parse()?;
            if changes.contains(field) {
                return Err(VinylError::validation(format!(
                    "field '{field}' given more than once"
                )));
            }
            let value = field.parse_value(raw.as_ref())?;
            changes.changes.push((field, value));
        }
        Ok(changes)
    }

    /// Set a field, replacing any earlier value in place
    pub fn set(mut self, field: AlbumField, value: AlbumValue) -> Self {
        match self.changes.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = value,
            None => self.changes.push((field, value)),
        }
        self
    }

    pub fn title(self, title: impl Into<String>) -> Self {
        self.set(AlbumField::Title, AlbumValue::Text(title.into()))
    }

    pub fn artist(self, artist: impl Into<String>) -> Self {
        self.set(AlbumField::Artist, AlbumValue::Text(artist.into()))
    }

    pub fn price(self, price: f32) -> Self {
        self.set(AlbumField::Price, AlbumValue::Price(price))
    }

    pub fn contains(&self, field: AlbumField) -> bool {
        self.changes.iter().any(|(f, _)| *f == field)
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(AlbumField, AlbumValue)> {
        self.changes.iter()
    }

    pub fn fields(&self) -> impl Iterator<Item = AlbumField> + '_ {
        self.changes.iter().map(|(field, _)| *field)
    }
}

impl IntoIterator for AlbumChanges {
    type Item = (AlbumField, AlbumValue);
    type IntoIter = std::vec::IntoIter<(AlbumField, AlbumValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}
