use gigsnap_client::DirCatalog;
use gigsnap_core::document::{fetch_artists, fetch_dates, fetch_relation};
use gigsnap_core::errors::FetchError;
use gigsnap_core::{CatalogSource, Resource};
use std::fs;
use tempfile::TempDir;

fn write_catalog(dir: &TempDir) {
    fs::write(
        dir.path().join("artists.json"),
        r#"[{"id": 1, "name": "Queen", "members": ["Freddie Mercury"]}]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("dates.json"),
        r#"{"index": [{"id": 1, "dates": ["*23-08-2019", "10-02-2020"]}]}"#,
    )
    .unwrap();
    fs::create_dir_all(dir.path().join("relation")).unwrap();
    fs::write(
        dir.path().join("relation").join("1.json"),
        r#"{"id": 1, "datesLocations": {"23-08-2019": ["north_carolina-usa"]}}"#,
    )
    .unwrap();
}

#[test]
fn test_dir_catalog_serves_all_resources() {
    let dir = TempDir::new().unwrap();
    write_catalog(&dir);
    let catalog = DirCatalog::new(dir.path());

    let artists = fetch_artists(&catalog).unwrap();
    let dates = fetch_dates(&catalog).unwrap();
    let relation = fetch_relation(&catalog, 1).unwrap();

    assert_eq!(artists[0].name, "Queen");
    assert_eq!(dates.dates_for(1).len(), 2);
    assert_eq!(
        relation.locations().collect::<Vec<_>>(),
        ["north_carolina-usa"]
    );
}

#[test]
fn test_dir_catalog_missing_file_is_transport_failure() {
    let dir = TempDir::new().unwrap();
    write_catalog(&dir);
    let catalog = DirCatalog::new(dir.path());

    let err = catalog.fetch(Resource::Relation(2)).unwrap_err();

    assert!(matches!(
        err,
        FetchError::Transport {
            resource: Resource::Relation(2),
            ..
        }
    ));
}

#[test]
fn test_dir_catalog_invalid_json_is_malformed_body() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("dates.json"), "{\"index\": [").unwrap();
    let catalog = DirCatalog::new(dir.path());

    let err = catalog.fetch(Resource::Dates).unwrap_err();

    assert!(matches!(err, FetchError::MalformedBody { .. }));
}
