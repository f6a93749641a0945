//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `picker`, `profile`) so individual
//! components can depend on small focused models.

pub mod auth;
pub mod picker;
pub mod picker_session;
pub mod profile;
