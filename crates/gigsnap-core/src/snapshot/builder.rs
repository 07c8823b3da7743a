use crate::errors::Result;
use crate::model::{AggregatedArtist, Year};
use crate::snapshot::digest::compute_snapshot_digest;
use serde::Serialize;
use std::collections::BTreeSet;

/// Immutable aggregation result
///
/// Only constructible through [`Snapshot::build`], which guarantees that
/// `available_years` is the union of every artist's years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    artists: Vec<AggregatedArtist>,
    available_years: BTreeSet<Year>,
}

impl Snapshot {
    /// Build a snapshot from joined artists, keeping their order
    ///
    /// Total: an empty input yields an empty snapshot.
    pub fn build(artists: Vec<AggregatedArtist>) -> Self {
        let available_years = artists
            .iter()
            .flat_map(|artist| artist.years.iter().copied())
            .collect();

        Self {
            artists,
            available_years,
        }
    }

    /// Artists in catalog order
    pub fn artists(&self) -> &[AggregatedArtist] {
        &self.artists
    }

    /// Every year seen across all artists, ascending
    pub fn available_years(&self) -> &BTreeSet<Year> {
        &self.available_years
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// Hex SHA256 of the canonical JSON form
    ///
    /// # Errors
    ///
    /// Returns `GigsnapError::Serialization` if JSON serialization fails.
    pub fn digest(&self) -> Result<String> {
        compute_snapshot_digest(self)
    }
}
