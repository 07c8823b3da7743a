//! Joiner: one `AggregatedArtist` per artist from the three collections
//!
//! The join is a left join rooted at the artists collection: output order is
//! the artists order, every artist appears exactly once, and dates-index rows
//! without an artist are ignored. Per-artist problems (a failed relation
//! lookup, an unparseable date) degrade only that artist's derived fields and
//! are returned as degradations instead of aborting the join.

use crate::dates::summarize_dates;
use crate::document::fetch_relation;
use crate::errors::{FetchError, GigsnapError};
use crate::model::artist::image_ref;
use crate::model::{AggregatedArtist, ArtistId, DatesIndex, RawArtist};
use crate::source::CatalogSource;
use std::collections::BTreeSet;

/// Image base used by the downstream server
pub const DEFAULT_IMAGE_BASE: &str = "http://localhost:8080/images";

/// Which derived fields the join computes, and how
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOptions {
    /// Issue one relation lookup per artist; when false, locations stay empty
    /// and the catalog is never asked for relations
    pub fetch_locations: bool,
    /// Root of the templated image reference
    pub image_base: String,
    /// Relation lookups run on this many scoped threads (1 = sequential)
    pub workers: usize,
}

impl Default for JoinOptions {
    fn default() -> Self {
        Self {
            fetch_locations: true,
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            workers: 1,
        }
    }
}

/// Result of a join: the aggregated artists plus every absorbed failure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinReport {
    pub artists: Vec<AggregatedArtist>,
    /// `PartialFetch` and `MalformedDate` errors, in artist order
    pub degradations: Vec<GigsnapError>,
}

type LocationLookup = std::result::Result<BTreeSet<String>, FetchError>;

/// Join artists, dates and per-artist relations
///
/// Never fails: a relation lookup failure leaves that artist with no
/// locations, a malformed date still counts as a concert but yields no year.
pub fn join<S: CatalogSource + ?Sized>(
    artists: &[RawArtist],
    dates: &DatesIndex,
    relations: &S,
    options: &JoinOptions,
) -> JoinReport {
    let lookups: Vec<Option<LocationLookup>> = if options.fetch_locations {
        lookup_locations(artists, relations, options.workers)
            .into_iter()
            .map(Some)
            .collect()
    } else {
        vec![None; artists.len()]
    };

    let mut report = JoinReport {
        artists: Vec::with_capacity(artists.len()),
        degradations: Vec::new(),
    };

    for (artist, lookup) in artists.iter().zip(lookups) {
        let summary = summarize_dates(dates.dates_for(artist.id));
        for (raw, err) in summary.malformed {
            report.degradations.push(GigsnapError::MalformedDate {
                artist_id: artist.id,
                raw,
                reason: err.to_string(),
            });
        }

        let locations = match lookup {
            Some(Ok(locations)) => locations,
            Some(Err(source)) => {
                report.degradations.push(GigsnapError::PartialFetch {
                    artist_id: artist.id,
                    source,
                });
                BTreeSet::new()
            }
            None => BTreeSet::new(),
        };

        report.artists.push(AggregatedArtist {
            id: artist.id,
            name: artist.name.clone(),
            image_ref: image_ref(&options.image_base, artist.id),
            concert_count: summary.concert_count,
            years: summary.years,
            locations,
        });
    }

    tracing::debug!(
        artist_count = report.artists.len(),
        degraded_count = report.degradations.len(),
        "join complete"
    );

    report
}

fn lookup_one<S: CatalogSource + ?Sized>(source: &S, artist_id: ArtistId) -> LocationLookup {
    let relation = fetch_relation(source, artist_id)?;
    let locations: BTreeSet<String> = relation.locations().map(str::to_string).collect();
    tracing::debug!(artist_id, locations = locations.len(), "relation fetched");
    Ok(locations)
}

/// One lookup per artist, results in artist order
fn lookup_locations<S: CatalogSource + ?Sized>(
    artists: &[RawArtist],
    source: &S,
    workers: usize,
) -> Vec<LocationLookup> {
    if workers <= 1 || artists.len() <= 1 {
        return artists.iter().map(|a| lookup_one(source, a.id)).collect();
    }

    let chunk_size = artists.len().div_ceil(workers);
    std::thread::scope(|scope| {
        let handles: Vec<_> = artists
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|a| lookup_one(source, a.id))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawDateEntry;
    use crate::source::{InMemoryCatalog, Resource};
    use serde_json::json;

    fn dates(entries: &[(ArtistId, &[&str])]) -> DatesIndex {
        DatesIndex::from_entries(entries.iter().map(|(id, dates)| RawDateEntry {
            artist_id: *id,
            dates: dates.iter().map(|d| d.to_string()).collect(),
        }))
    }

    #[test]
    fn test_join_scenario_single_artist() {
        let artists = vec![RawArtist::new(1, "A")];
        let dates = dates(&[(1, &["01-01-2020", "02-02-2020"])]);
        let catalog = InMemoryCatalog::new().with_document(
            Resource::Relation(1),
            json!({"datesLocations": {
                "01-01-2020": ["Paris"],
                "02-02-2020": ["Paris", "London"]
            }}),
        );

        let report = join(&artists, &dates, &catalog, &JoinOptions::default());

        assert!(report.degradations.is_empty());
        let artist = &report.artists[0];
        assert_eq!(artist.id, 1);
        assert_eq!(artist.concert_count, 2);
        assert_eq!(artist.years.iter().copied().collect::<Vec<_>>(), [2020]);
        assert_eq!(
            artist.locations.iter().map(String::as_str).collect::<Vec<_>>(),
            ["London", "Paris"]
        );
        assert_eq!(artist.image_ref, "http://localhost:8080/images/id1.jpg");
    }

    #[test]
    fn test_join_without_locations_never_fetches_relations() {
        let artists = vec![RawArtist::new(1, "A"), RawArtist::new(2, "B")];
        let dates = dates(&[(2, &["01-01-2020"])]);
        // No relation documents: any lookup would fail with 404
        let catalog = InMemoryCatalog::new();
        let options = JoinOptions {
            fetch_locations: false,
            ..JoinOptions::default()
        };

        let report = join(&artists, &dates, &catalog, &options);

        assert!(report.degradations.is_empty());
        assert_eq!(report.artists[0].concert_count, 0);
        assert_eq!(report.artists[1].concert_count, 1);
        assert!(report.artists.iter().all(|a| a.locations.is_empty()));
    }

    #[test]
    fn test_join_records_failed_relation_as_degradation() {
        let artists = vec![RawArtist::new(7, "Seven"), RawArtist::new(8, "Eight")];
        let catalog = InMemoryCatalog::new()
            .with_document(
                Resource::Relation(8),
                json!({"datesLocations": {"x": ["berlin-germany"]}}),
            )
            .with_failure(
                Resource::Relation(7),
                FetchError::Transport {
                    resource: Resource::Relation(7),
                    message: "timed out".to_string(),
                },
            );

        let report = join(&artists, &DatesIndex::default(), &catalog, &JoinOptions::default());

        assert_eq!(report.artists.len(), 2);
        assert!(report.artists[0].locations.is_empty());
        assert_eq!(report.artists[1].locations.len(), 1);
        assert_eq!(report.degradations.len(), 1);
        assert_eq!(report.degradations[0].artist_id(), Some(7));
    }

    #[test]
    fn test_join_worker_pool_preserves_order() {
        let artists: Vec<RawArtist> = (1..=9)
            .rev()
            .map(|id| RawArtist::new(id, format!("Artist {}", id)))
            .collect();
        let mut catalog = InMemoryCatalog::new();
        for id in 1..=9 {
            catalog = catalog.with_document(
                Resource::Relation(id),
                json!({"datesLocations": {"d": [format!("city-{}", id)]}}),
            );
        }
        let sequential = join(&artists, &DatesIndex::default(), &catalog, &JoinOptions::default());
        let pooled = join(
            &artists,
            &DatesIndex::default(),
            &catalog,
            &JoinOptions {
                workers: 4,
                ..JoinOptions::default()
            },
        );

        assert_eq!(sequential, pooled);
        assert_eq!(
            pooled.artists.iter().map(|a| a.id).collect::<Vec<_>>(),
            [9, 8, 7, 6, 5, 4, 3, 2, 1]
        );
    }
}
