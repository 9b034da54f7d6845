mod album;
mod changes;

pub use album::{parse_price, Album, AlbumId, NewAlbum};
pub use changes::{AlbumChanges, AlbumField, AlbumValue};
