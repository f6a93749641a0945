use super::*;

use futures::executor::block_on;

fn parse(json: &str) -> Vec<Suggestion> {
    let places: Vec<NominatimPlace> = serde_json::from_str(json).unwrap();
    into_suggestions(places)
}

#[test]
fn search_params_request_structured_results_with_limit() {
    let params = search_params("Paris", SUGGESTION_LIMIT);
    assert_eq!(
        params,
        vec![
            ("q", "Paris".to_owned()),
            ("format", "json".to_owned()),
            ("addressdetails", "1".to_owned()),
            ("limit", "5".to_owned()),
        ]
    );
}

#[test]
fn into_suggestions_maps_textual_degrees() {
    let suggestions = parse(
        r#"[{"place_id":282,"display_name":"Paris, France","lat":"48.8588897","lon":"2.3200410","address":{}}]"#,
    );
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].id, "282");
    assert_eq!(suggestions[0].label, "Paris, France");
    assert_eq!(suggestions[0].position, Coordinate::new(48.8588897, 2.320041));
}

#[test]
fn into_suggestions_accepts_numeric_degrees_and_text_ids() {
    let suggestions = parse(r#"[{"place_id":"n1","display_name":"Somewhere","lat":10.5,"lon":-20.25}]"#);
    assert_eq!(suggestions[0].id, "n1");
    assert_eq!(suggestions[0].position, Coordinate::new(10.5, -20.25));
}

#[test]
fn into_suggestions_drops_unparseable_entries_and_keeps_order() {
    let suggestions = parse(
        r#"[
            {"place_id":1,"display_name":"A","lat":"1","lon":"1"},
            {"place_id":2,"display_name":"Broken","lat":"x","lon":"1"},
            {"place_id":3,"display_name":"C","lat":"3","lon":"3"}
        ]"#,
    );
    let labels: Vec<&str> = suggestions.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["A", "C"]);
}

#[test]
fn nominatim_is_unavailable_outside_browser() {
    let geocoder = NominatimGeocoder::from_config(&ClientConfig::default());
    assert_eq!(block_on(geocoder.search("Paris", 5)), Err(GeocodeError::Unavailable));
}
