use gigsnap_core::{InMemoryCatalog, Resource};
use serde_json::json;

/// Three artists; artist 7 has no relation document and one unparseable date
#[allow(dead_code)]
pub fn sample_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new()
        .with_document(
            Resource::Artists,
            json!([
                {"id": 1, "name": "Queen", "image": "https://example.test/queen.jpeg"},
                {"id": 7, "name": "Mamonas Assassinas"},
                {"id": 3, "name": "Pink Floyd"}
            ]),
        )
        .with_document(
            Resource::Dates,
            json!({"index": [
                {"id": 1, "dates": ["*23-08-2019", "10-02-2020"]},
                {"id": 7, "dates": ["01-01-1996", "tbd"]},
                {"id": 3, "dates": ["10-05-2007", "02-07-2005", "29-10-1994"]},
                {"id": 99, "dates": ["01-01-1900"]}
            ]}),
        )
        .with_document(
            Resource::Relation(1),
            json!({"id": 1, "datesLocations": {
                "23-08-2019": ["north_carolina-usa"],
                "10-02-2020": ["dunedin-new_zealand", "north_carolina-usa"]
            }}),
        )
        .with_document(
            Resource::Relation(3),
            json!({"id": 3, "datesLocations": {
                "10-05-2007": ["london-uk"],
                "02-07-2005": ["berlin-germany"],
                "29-10-1994": ["rome-italy"]
            }}),
        )
}
