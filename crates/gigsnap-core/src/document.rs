//! Typed decoding of fetched catalog documents
//!
//! The generic JSON tree returned by a `CatalogSource` is validated here, at
//! the boundary, so the joiner only ever sees typed records. A document that
//! lacks a required field or has the wrong shape becomes
//! `FetchError::UnexpectedShape` for that resource.

use crate::errors::FetchError;
use crate::model::{ArtistId, DatesIndex, RawArtist, RawDateEntry, RawRelationEntry};
use crate::source::{CatalogSource, Resource};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};

#[derive(Deserialize)]
struct DatesDocument {
    index: Vec<RawDateEntry>,
}

#[derive(Deserialize)]
struct RelationDocument {
    #[serde(rename = "datesLocations")]
    dates_locations: BTreeMap<String, Vec<String>>,
}

fn decode<T: DeserializeOwned>(resource: Resource, value: Value) -> Result<T, FetchError> {
    serde_json::from_value(value).map_err(|e| FetchError::UnexpectedShape {
        resource,
        message: e.to_string(),
    })
}

/// Decode the `artists` collection
///
/// # Errors
///
/// `UnexpectedShape` if the document is not an array of `{id, name}` objects
/// or if an id occurs twice.
pub fn decode_artists(value: Value) -> Result<Vec<RawArtist>, FetchError> {
    let artists: Vec<RawArtist> = decode(Resource::Artists, value)?;

    let mut seen = HashSet::with_capacity(artists.len());
    for artist in &artists {
        if !seen.insert(artist.id) {
            return Err(FetchError::UnexpectedShape {
                resource: Resource::Artists,
                message: format!("duplicate artist id {}", artist.id),
            });
        }
    }

    Ok(artists)
}

/// Decode the `dates` collection
///
/// # Errors
///
/// `UnexpectedShape` if `index` is missing or its rows lack `id`/`dates`.
pub fn decode_dates(value: Value) -> Result<DatesIndex, FetchError> {
    let document: DatesDocument = decode(Resource::Dates, value)?;
    Ok(DatesIndex::from_entries(document.index))
}

/// Decode the relation document of one artist
///
/// # Errors
///
/// `UnexpectedShape` if `datesLocations` is missing or not a map of string
/// arrays.
pub fn decode_relation(artist_id: ArtistId, value: Value) -> Result<RawRelationEntry, FetchError> {
    let document: RelationDocument = decode(Resource::Relation(artist_id), value)?;
    Ok(RawRelationEntry::new(artist_id, document.dates_locations))
}

/// Fetch and decode the `artists` collection
///
/// # Errors
///
/// Any transport or shape failure of the artists resource.
pub fn fetch_artists<S: CatalogSource + ?Sized>(source: &S) -> Result<Vec<RawArtist>, FetchError> {
    decode_artists(source.fetch(Resource::Artists)?)
}

/// Fetch and decode the `dates` collection
///
/// # Errors
///
/// Any transport or shape failure of the dates resource.
pub fn fetch_dates<S: CatalogSource + ?Sized>(source: &S) -> Result<DatesIndex, FetchError> {
    decode_dates(source.fetch(Resource::Dates)?)
}

/// Fetch and decode the relation document of one artist
///
/// # Errors
///
/// Any transport or shape failure of `relation/{artist_id}`.
pub fn fetch_relation<S: CatalogSource + ?Sized>(
    source: &S,
    artist_id: ArtistId,
) -> Result<RawRelationEntry, FetchError> {
    decode_relation(artist_id, source.fetch(Resource::Relation(artist_id))?)
}
