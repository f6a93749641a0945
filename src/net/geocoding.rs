//! Free-text place search used by the coordinate picker.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Geocoder` is the seam the picker session depends on. The browser build
//! talks to a Nominatim-compatible `/search` endpoint; tests substitute an
//! in-memory implementation.

#![allow(clippy::unused_async)]
#![cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]

#[cfg(test)]
#[path = "geocoding_test.rs"]
mod geocoding_test;

use serde::Deserialize;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::util::coords::Coordinate;

/// Maximum candidates requested per lookup.
pub const SUGGESTION_LIMIT: usize = 5;

/// One candidate place returned by a search.
#[derive(Clone, Debug, PartialEq)]
pub struct Suggestion {
    pub id: String,
    pub label: String,
    pub position: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    #[error("geocoding request failed: {0}")]
    Network(String),
    #[error("geocoding service returned status {0}")]
    Status(u16),
    #[error("geocoding response could not be decoded: {0}")]
    Decode(String),
    #[error("geocoding not available on server")]
    Unavailable,
}

/// Place-search collaborator.
#[allow(async_fn_in_trait)]
pub trait Geocoder {
    /// Return up to `limit` candidates for `query`, best match first.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Suggestion>, GeocodeError>;
}

/// Nominatim `/search` client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NominatimGeocoder {
    endpoint: String,
    client_tag: String,
}

impl NominatimGeocoder {
    pub fn new(endpoint: impl Into<String>, client_tag: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), client_tag: client_tag.into() }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.geocoder_url.clone(), config.geocoder_client_tag.clone())
    }
}

impl Geocoder for NominatimGeocoder {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Suggestion>, GeocodeError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint)
                .query(search_params(query, limit))
                .header("User-Agent", &self.client_tag)
                .send()
                .await
                .map_err(|e| GeocodeError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(GeocodeError::Status(resp.status()));
            }
            let places: Vec<NominatimPlace> = resp.json().await.map_err(|e| GeocodeError::Decode(e.to_string()))?;
            Ok(into_suggestions(places))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (query, limit, &self.endpoint, &self.client_tag);
            Err(GeocodeError::Unavailable)
        }
    }
}

/// Query parameters for one Nominatim search.
#[cfg(any(test, feature = "hydrate"))]
fn search_params(query: &str, limit: usize) -> Vec<(&'static str, String)> {
    vec![
        ("q", query.to_owned()),
        ("format", "json".to_owned()),
        ("addressdetails", "1".to_owned()),
        ("limit", limit.to_string()),
    ]
}

/// Raw candidate as returned by Nominatim.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    place_id: NumberOrText,
    display_name: String,
    lat: NumberOrText,
    lon: NumberOrText,
}

/// Nominatim returns ids as numbers and degrees as strings; accept either.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Int(i64),
    Float(f64),
    Text(String),
}

impl NumberOrText {
    fn as_text(&self) -> String {
        match self {
            NumberOrText::Int(v) => v.to_string(),
            NumberOrText::Float(v) => v.to_string(),
            NumberOrText::Text(v) => v.clone(),
        }
    }
}

fn into_suggestions(places: Vec<NominatimPlace>) -> Vec<Suggestion> {
    places
        .into_iter()
        .filter_map(|place| {
            let Some(position) = Coordinate::parse(&place.lat.as_text(), &place.lon.as_text()) else {
                leptos::logging::warn!("dropping geocoder result with bad coordinates: {}", place.display_name);
                return None;
            };
            Some(Suggestion { id: place.place_id.as_text(), label: place.display_name, position })
        })
        .collect()
}
