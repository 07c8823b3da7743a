use super::go_literal::go_string;
use crate::model::AggregatedArtist;
use crate::snapshot::Snapshot;

const HEADER: &str = "// Data generated by gigsnap from the catalog API. DO NOT EDIT.";

/// Origin of the frontend allowed to call the stats endpoint
pub const STATS_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Render the snapshot as `func StatsHandler(w http.ResponseWriter, r *http.Request)`
///
/// The handler sets JSON and CORS headers, answers preflight `OPTIONS`
/// requests, and encodes `id`, `name`, `image` and `concertCount` per artist.
/// Tab indentation, as gofmt would produce.
pub fn render_stats_handler(snapshot: &Snapshot) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str(HEADER);
    output.push('\n');
    output.push_str("func StatsHandler(w http.ResponseWriter, r *http.Request) {\n");
    output.push_str("\tw.Header().Set(\"Content-Type\", \"application/json\")\n");
    output.push_str(&format!(
        "\tw.Header().Set(\"Access-Control-Allow-Origin\", {})\n",
        go_string(STATS_ALLOWED_ORIGIN)
    ));
    output.push_str("\tw.Header().Set(\"Access-Control-Allow-Methods\", \"GET, OPTIONS\")\n");
    output.push_str("\tw.Header().Set(\"Access-Control-Allow-Headers\", \"Content-Type\")\n");
    output.push('\n');
    output.push_str("\tif r.Method == \"OPTIONS\" {\n");
    output.push_str("\t\tw.WriteHeader(http.StatusOK)\n");
    output.push_str("\t\treturn\n");
    output.push_str("\t}\n");
    output.push('\n');
    output.push_str("\t// Static data based on the /dates and /artists APIs\n");
    output.push_str("\tjson.NewEncoder(w).Encode(map[string]interface{}{\n");
    output.push_str("\t\t\"artists\": []map[string]interface{}{\n");

    for artist in snapshot.artists() {
        output.push_str(&format!("\t\t\t{},\n", artist_record(artist)));
    }

    output.push_str("\t\t},\n");
    output.push_str("\t})\n");
    output.push_str("}\n");

    output
}

fn artist_record(artist: &AggregatedArtist) -> String {
    format!(
        "{{\"id\": {}, \"name\": {}, \"image\": {}, \"concertCount\": {}}}",
        artist.id,
        go_string(&artist.name),
        go_string(&artist.image_ref),
        artist.concert_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_stats_record_omits_years_and_locations() {
        let snapshot = Snapshot::build(vec![AggregatedArtist {
            id: 3,
            name: "Pink \"Floyd\"".to_string(),
            image_ref: "http://localhost:8080/images/id3.jpg".to_string(),
            concert_count: 19,
            years: BTreeSet::from([1994]),
            locations: BTreeSet::new(),
        }]);

        let output = render_stats_handler(&snapshot);

        assert!(output.contains(
            "\t\t\t{\"id\": 3, \"name\": \"Pink \\\"Floyd\\\"\", \"image\": \"http://localhost:8080/images/id3.jpg\", \"concertCount\": 19},\n"
        ));
        assert!(!output.contains("years"));
        assert!(!output.contains("availableYears"));
        assert!(output.contains("if r.Method == \"OPTIONS\" {"));
    }
}
