//! Networking and device collaborators.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls to the marketplace backend, `geocoding` and
//! `geolocation` back the coordinate picker, and `types` defines the shared
//! wire schema.

pub mod api;
pub mod geocoding;
pub mod geolocation;
pub mod types;
