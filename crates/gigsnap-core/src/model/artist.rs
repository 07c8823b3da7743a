use super::{ArtistId, Year};
use serde::Serialize;
use std::collections::BTreeSet;

/// One artist joined with its concert data
///
/// Built once by the joiner and never mutated afterwards. `years` and
/// `locations` are ordered sets, so iteration is ascending and duplicate-free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedArtist {
    pub id: ArtistId,
    pub name: String,
    /// Derived from `id` alone, never fetched
    pub image_ref: String,
    /// Number of raw date strings, parseable or not
    pub concert_count: usize,
    pub years: BTreeSet<Year>,
    pub locations: BTreeSet<String>,
}

/// Image reference served by the downstream server for an artist
pub fn image_ref(image_base: &str, id: ArtistId) -> String {
    format!("{}/id{}.jpg", image_base.trim_end_matches('/'), id)
}
