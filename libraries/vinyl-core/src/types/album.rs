//! Album types

use crate::error::{Result, VinylError};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize, Serializer};

pub type AlbumId = i64;

/// An album row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    #[serde(serialize_with = "serialize_price")]
    pub price: f32,
}

/// Data for creating a new album
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAlbum {
    pub title: String,
    pub artist: String,
    pub price: f32,
}

impl NewAlbum {
    /// Build from raw request values, checking presence in `title`, `artist`, `price` order.
    pub fn parse(title: Option<&str>, artist: Option<&str>, price: Option<&str>) -> Result<Self> {
        let title = title.ok_or_else(|| missing("title"))?;
        let artist = artist.ok_or_else(|| missing("artist"))?;
        let price = price.ok_or_else(|| missing("price"))?;

        Ok(Self {
            title: parse_text("title", title)?,
            artist: parse_text("artist", artist)?,
            price: parse_price(price)?,
        })
    }

    /// Synthetic album used for seeding and smoke tests
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();

        let first = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("Nina");
        let last = LAST_NAMES.choose(&mut rng).copied().unwrap_or("Simone");
        let adjective = ADJECTIVES.choose(&mut rng).copied().unwrap_or("Blue");
        let noun = NOUNS.choose(&mut rng).copied().unwrap_or("Train");
        // Rounding to cents must not reach 100
        let price: f32 = rng.gen_range(1.0..100.0);
        let price = ((price * 100.0).round() / 100.0).min(99.99);

        Self {
            title: format!("{adjective} {noun}"),
            artist: format!("{first} {last}"),
            price,
        }
    }

    /// Attach the storage-assigned ID
    pub fn with_id(self, id: AlbumId) -> Album {
        Album {
            id,
            title: self.title,
            artist: self.artist,
            price: self.price,
        }
    }
}

/// Parse a price from text: finite and non-negative, single precision.
pub fn parse_price(raw: &str) -> Result<f32> {
    let price: f32 = raw
        .trim()
        .parse()
        .map_err(|_| VinylError::validation(format!("'price' must be a number, got '{raw}'")))?;

    if !price.is_finite() || price < 0.0 {
        return Err(VinylError::validation(format!(
            "'price' must be a non-negative number, got '{raw}'"
        )));
    }

    Ok(price)
}

pub(crate) fn parse_text(field: &str, raw: &str) -> Result<String> {
    if raw.trim().is_empty() {
        return Err(VinylError::validation(format!("'{field}' must not be empty")));
    }
    Ok(raw.to_string())
}

fn missing(field: &str) -> VinylError {
    VinylError::validation(format!("must pass in a '{field}'"))
}

// Whole prices go out as integers (`10`, not `10.0`).
fn serialize_price<S: Serializer>(price: &f32, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    if price.fract() == 0.0 && price.abs() < 1e15 {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f32(*price)
    }
}

const FIRST_NAMES: &[&str] = &[
    "Ada", "Miles", "Nina", "Ornette", "Billie", "Thelonious", "Alice", "Chet", "Etta", "Wayne",
];

const LAST_NAMES: &[&str] = &[
    "Coltrane", "Davis", "Simone", "Coleman", "Holiday", "Monk", "Baker", "James", "Shorter",
    "Mingus",
];

const ADJECTIVES: &[&str] = &[
    "Blue", "Silent", "Electric", "Midnight", "Golden", "Restless", "Velvet", "Open", "Distant",
];

const NOUNS: &[&str] = &[
    "Train", "Horizons", "Sessions", "Standards", "Rivers", "Dreams", "Avenue", "Frequencies",
];
