//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and the location picker while reading
//! shared state from Leptos context providers.

pub mod coordinates_picker;
pub mod leaflet_map;
pub mod navbar;
