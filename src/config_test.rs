use super::*;

use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn default_config_uses_documented_endpoints() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.geocoder_url, DEFAULT_GEOCODER_URL);
    assert_eq!(cfg.geocoder_client_tag, "FoodDeliveryApp");
    assert_eq!(cfg.tile_url, DEFAULT_TILE_URL);
    assert!(cfg.tile_attribution.contains("OpenStreetMap"));
}

#[test]
fn from_lookup_applies_overrides_and_trims_trailing_slash() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        ("FOOD_API_BASE_URL", "https://api.example.test/api/"),
        ("FOOD_GEOCODER_URL", "https://geo.example.test/search//"),
        ("FOOD_GEOCODER_CLIENT_TAG", "TestClient"),
    ]));
    assert_eq!(cfg.api_base_url, "https://api.example.test/api");
    assert_eq!(cfg.geocoder_url, "https://geo.example.test/search");
    assert_eq!(cfg.geocoder_client_tag, "TestClient");
    assert_eq!(cfg.tile_url, DEFAULT_TILE_URL);
}

#[test]
fn from_lookup_blank_values_fall_back_to_defaults() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        ("FOOD_API_BASE_URL", "   "),
        ("FOOD_TILE_URL", ""),
    ]));
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.tile_url, DEFAULT_TILE_URL);
}
