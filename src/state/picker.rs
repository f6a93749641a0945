//! Coordinate picker working state.
//!
//! DESIGN
//! ======
//! Every transition is a plain method on `PickerState` so the rules can be
//! tested without a browser. Methods that adopt a new position return it;
//! the caller (`PickerSession`) is responsible for notifying the consumer.
//! Lookups are tagged with `search_seq` so a response for a superseded
//! query is dropped instead of overwriting newer suggestions.

#[cfg(test)]
#[path = "picker_test.rs"]
mod picker_test;

use std::time::Duration;

use thiserror::Error;

use crate::net::geocoding::{GeocodeError, SUGGESTION_LIMIT, Suggestion};
use crate::net::geolocation::GeolocationError;
use crate::util::coords::{Coordinate, DEFAULT_CENTER};

/// Fixed zoom level used whenever the map re-centers.
pub const MAP_ZOOM: u8 = 13;
/// Shortest query that triggers a lookup.
pub const MIN_QUERY_CHARS: usize = 3;
/// Quiet period after the last keystroke before a lookup is issued.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Inline warning shown above the picker. Only the latest one is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PickerError {
    #[error("Geolocation is not supported by your browser.")]
    GeolocationUnsupported,
    #[error("Unable to access location. Please search or select manually.")]
    InitialLocationFailed,
    #[error("Unable to access location.")]
    LocationFailed,
    #[error("Error fetching location suggestions.")]
    SuggestionsFailed,
    #[error("Please select a valid location from the suggestions.")]
    InvalidSelection,
}

/// What triggered a device-position request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocateOrigin {
    Mount,
    Button,
}

/// Location acquisition sub-flow. Resolved/Failed are transient and
/// settle back to `Idle` in the same transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LocateStatus {
    #[default]
    Idle,
    Requesting,
}

/// Follow-up required after the query text changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryAction {
    /// Query too short: nothing to look up, pending waits should be dropped.
    Clear,
    /// Start (or restart) the debounce wait for this query.
    Schedule { seq: u64, query: String },
}

/// Where the map should be centered. Changes only when a position is
/// adopted, including re-adoption of the same coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Recenter {
    pub position: Coordinate,
    pub adoption: u64,
}

/// Per-instance picker state; created on mount, dropped on unmount.
#[derive(Clone, Debug, PartialEq)]
pub struct PickerState {
    pub position: Coordinate,
    pub query: String,
    pub suggestions: Vec<Suggestion>,
    pub loading: bool,
    pub error: Option<PickerError>,
    pub locate: LocateStatus,
    pub search_seq: u64,
    /// Bumped on every adoption.
    pub adoptions: u64,
}

impl Default for PickerState {
    fn default() -> Self {
        Self {
            position: DEFAULT_CENTER,
            query: String::new(),
            suggestions: Vec::new(),
            loading: false,
            error: None,
            locate: LocateStatus::Idle,
            search_seq: 0,
            adoptions: 0,
        }
    }
}

impl PickerState {
    /// Make `position` current. Clears any warning.
    pub fn adopt(&mut self, position: Coordinate) -> Coordinate {
        self.position = position;
        self.error = None;
        self.adoptions += 1;
        position
    }

    pub fn recenter(&self) -> Recenter {
        Recenter { position: self.position, adoption: self.adoptions }
    }

    pub fn map_click(&mut self, position: Coordinate) -> Coordinate {
        self.adopt(position.wrapped())
    }

    pub fn marker_drag_end(&mut self, position: Coordinate) -> Coordinate {
        self.adopt(position.wrapped())
    }

    /// Record new query text and decide whether a lookup should be scheduled.
    pub fn set_query(&mut self, text: String) -> QueryAction {
        self.search_seq += 1;
        self.query = text;
        if self.query.chars().count() < MIN_QUERY_CHARS {
            self.suggestions.clear();
            self.loading = false;
            return QueryAction::Clear;
        }
        QueryAction::Schedule { seq: self.search_seq, query: self.query.clone() }
    }

    /// Mark a lookup as in flight. Returns `false` if `seq` is stale.
    pub fn begin_lookup(&mut self, seq: u64) -> bool {
        if seq != self.search_seq {
            return false;
        }
        self.loading = true;
        true
    }

    /// Apply a lookup result. Returns `false` if it was dropped as stale.
    pub fn finish_lookup(&mut self, seq: u64, result: Result<Vec<Suggestion>, GeocodeError>) -> bool {
        if seq != self.search_seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(mut suggestions) => {
                suggestions.truncate(SUGGESTION_LIMIT);
                self.suggestions = suggestions;
            }
            Err(_) => {
                self.suggestions.clear();
                self.error = Some(PickerError::SuggestionsFailed);
            }
        }
        true
    }

    /// Adopt the suggestion whose label equals the query text exactly.
    pub fn submit_search(&mut self) -> Option<Coordinate> {
        let Some(position) = self.suggestions.iter().find(|s| s.label == self.query).map(|s| s.position) else {
            self.error = Some(PickerError::InvalidSelection);
            return None;
        };
        self.query.clear();
        self.end_search();
        Some(self.adopt(position))
    }

    /// Adopt a clicked suggestion and show its label in the search box.
    pub fn pick_suggestion(&mut self, suggestion: Suggestion) -> Coordinate {
        self.query = suggestion.label;
        self.end_search();
        self.adopt(suggestion.position)
    }

    fn end_search(&mut self) {
        self.search_seq += 1;
        self.suggestions.clear();
        self.loading = false;
    }

    pub fn begin_locate(&mut self) {
        self.locate = LocateStatus::Requesting;
    }

    pub fn locate_unsupported(&mut self) {
        self.locate = LocateStatus::Idle;
        self.error = Some(PickerError::GeolocationUnsupported);
    }

    /// Settle a device-position request and return to `Idle`.
    pub fn finish_locate(
        &mut self,
        origin: LocateOrigin,
        result: Result<Coordinate, GeolocationError>,
    ) -> Option<Coordinate> {
        self.locate = LocateStatus::Idle;
        match result {
            Ok(position) => Some(self.adopt(position)),
            Err(GeolocationError::Unsupported) => {
                self.error = Some(PickerError::GeolocationUnsupported);
                None
            }
            Err(GeolocationError::Failed(_)) => {
                self.error = Some(match origin {
                    LocateOrigin::Mount => PickerError::InitialLocationFailed,
                    LocateOrigin::Button => PickerError::LocationFailed,
                });
                None
            }
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }
}
