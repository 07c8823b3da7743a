use super::go_literal::{go_int_slice, go_string, go_string_slice};
use crate::model::AggregatedArtist;
use crate::snapshot::Snapshot;

const HEADER: &str = "// Code generated by gigsnap from the live catalog API. DO NOT EDIT.";

/// Render the full snapshot as `func serveStaticData(w http.ResponseWriter)`
///
/// One literal per artist (`id`, `name`, `image`, `concertCount`, `years`,
/// `locations`), followed by the `availableYears` aggregate. Four-space
/// indentation, trailing commas on every element.
pub fn render_static_data(snapshot: &Snapshot) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str(HEADER);
    output.push('\n');
    output.push_str("func serveStaticData(w http.ResponseWriter) {\n");
    output.push_str("    json.NewEncoder(w).Encode(map[string]interface{}{\n");
    output.push_str("        \"artists\": []map[string]interface{}{\n");

    for artist in snapshot.artists() {
        output.push_str(&format!("            {},\n", artist_record(artist)));
    }

    output.push_str("        },\n");
    output.push_str(&format!(
        "        \"availableYears\": {},\n",
        go_int_slice(snapshot.available_years())
    ));
    output.push_str("    })\n");
    output.push_str("}\n");

    output
}

fn artist_record(artist: &AggregatedArtist) -> String {
    format!(
        "{{\"id\": {}, \"name\": {}, \"image\": {}, \"concertCount\": {}, \"years\": {}, \"locations\": {}}}",
        artist.id,
        go_string(&artist.name),
        go_string(&artist.image_ref),
        artist.concert_count,
        go_int_slice(&artist.years),
        go_string_slice(&artist.locations),
    )
}
