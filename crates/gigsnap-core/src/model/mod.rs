//! Data model: raw catalog records as fetched, and the aggregated record
//! produced by the joiner.

pub mod artist;
pub mod raw;

pub use artist::AggregatedArtist;
pub use raw::{DatesIndex, RawArtist, RawDateEntry, RawRelationEntry};

/// Integer key shared by the artists, dates and relation collections
pub type ArtistId = u32;

/// Concert year exactly as parsed from a raw date (no century inference)
pub type Year = i32;
