use super::ArtistId;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// An artist as listed by the `artists` collection
///
/// Only `id` and `name` are consumed; the catalog's other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawArtist {
    pub id: ArtistId,
    pub name: String,
}

impl RawArtist {
    pub fn new(id: ArtistId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// One row of the `dates` index
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawDateEntry {
    #[serde(rename = "id")]
    pub artist_id: ArtistId,
    pub dates: Vec<String>,
}

/// The `dates` collection keyed by artist id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatesIndex {
    by_artist: HashMap<ArtistId, Vec<String>>,
}

impl DatesIndex {
    /// Build the index from its rows; a repeated id keeps the last row.
    pub fn from_entries(entries: impl IntoIterator<Item = RawDateEntry>) -> Self {
        let mut by_artist = HashMap::new();
        for entry in entries {
            if let Some(previous) = by_artist.insert(entry.artist_id, entry.dates) {
                tracing::debug!(
                    artist_id = entry.artist_id,
                    replaced = previous.len(),
                    "dates index repeats artist id, keeping last entry"
                );
            }
        }
        Self { by_artist }
    }

    /// Raw date strings for an artist; empty when the artist has no entry
    pub fn dates_for(&self, artist_id: ArtistId) -> &[String] {
        self.by_artist
            .get(&artist_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.by_artist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_artist.is_empty()
    }
}

/// Relation document for one artist: date -> locations played on that date
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRelationEntry {
    pub artist_id: ArtistId,
    pub dates_locations: BTreeMap<String, Vec<String>>,
}

impl RawRelationEntry {
    pub fn new(artist_id: ArtistId, dates_locations: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            artist_id,
            dates_locations,
        }
    }

    /// Every location across all dates, with repeats
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.dates_locations
            .values()
            .flat_map(|locations| locations.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dates_index_missing_artist_is_empty() {
        let index = DatesIndex::from_entries(vec![RawDateEntry {
            artist_id: 1,
            dates: vec!["01-01-2020".to_string()],
        }]);

        assert_eq!(index.dates_for(1).len(), 1);
        assert!(index.dates_for(2).is_empty());
    }

    #[test]
    fn test_dates_index_last_entry_wins() {
        let index = DatesIndex::from_entries(vec![
            RawDateEntry {
                artist_id: 1,
                dates: vec!["01-01-2020".to_string()],
            },
            RawDateEntry {
                artist_id: 1,
                dates: vec!["02-02-2021".to_string(), "03-03-2021".to_string()],
            },
        ]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.dates_for(1), ["02-02-2021", "03-03-2021"]);
    }

    #[test]
    fn test_relation_locations_flatten_all_dates() {
        let mut map = BTreeMap::new();
        map.insert("01-01-2020".to_string(), vec!["paris-france".to_string()]);
        map.insert(
            "02-02-2020".to_string(),
            vec!["paris-france".to_string(), "london-uk".to_string()],
        );
        let relation = RawRelationEntry::new(1, map);

        let all: Vec<&str> = relation.locations().collect();
        assert_eq!(all, ["paris-france", "paris-france", "london-uk"]);
    }
}
