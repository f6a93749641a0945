//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so overrides are captured
//! with `option_env!` when the crate is compiled. `from_lookup` keeps the
//! parsing testable with an arbitrary key source.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_GEOCODER_CLIENT_TAG: &str = "FoodDeliveryApp";
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Endpoints and map settings shared by the REST client and the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub geocoder_url: String,
    pub geocoder_client_tag: String,
    pub tile_url: String,
    pub tile_attribution: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ClientConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `FOOD_API_BASE_URL`: REST base URL, default `http://localhost:8080/api`
    /// - `FOOD_GEOCODER_URL`: place-search endpoint, default Nominatim
    /// - `FOOD_GEOCODER_CLIENT_TAG`: identifies this app to the geocoder
    /// - `FOOD_TILE_URL`: tile URL template
    /// - `FOOD_TILE_ATTRIBUTION`: attribution HTML for the tile layer
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let raw = match key {
                "FOOD_API_BASE_URL" => option_env!("FOOD_API_BASE_URL"),
                "FOOD_GEOCODER_URL" => option_env!("FOOD_GEOCODER_URL"),
                "FOOD_GEOCODER_CLIENT_TAG" => option_env!("FOOD_GEOCODER_CLIENT_TAG"),
                "FOOD_TILE_URL" => option_env!("FOOD_TILE_URL"),
                "FOOD_TILE_ATTRIBUTION" => option_env!("FOOD_TILE_ATTRIBUTION"),
                _ => None,
            };
            raw.map(str::to_owned)
        })
    }

    /// Build config from an arbitrary key lookup; blank values use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        Self {
            api_base_url: trim_base_url(&value("FOOD_API_BASE_URL", DEFAULT_API_BASE_URL)),
            geocoder_url: trim_base_url(&value("FOOD_GEOCODER_URL", DEFAULT_GEOCODER_URL)),
            geocoder_client_tag: value("FOOD_GEOCODER_CLIENT_TAG", DEFAULT_GEOCODER_CLIENT_TAG),
            tile_url: value("FOOD_TILE_URL", DEFAULT_TILE_URL),
            tile_attribution: value("FOOD_TILE_ATTRIBUTION", DEFAULT_TILE_ATTRIBUTION),
        }
    }
}

fn trim_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_owned()
}
