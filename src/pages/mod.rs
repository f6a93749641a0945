//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pages build their own `ApiClient` from the `ClientConfig`
//! context; the client holds an `Rc` and cannot live in context itself.

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::util::auth::LocalStorageTokens;

pub mod home;
pub mod login;
pub mod profile;
pub mod register;
pub mod welcome;

/// REST client for the configured backend, authenticated from `localStorage`.
pub fn use_api() -> ApiClient {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    ApiClient::new(config.api_base_url, Rc::new(LocalStorageTokens))
}

/// Stand-in for screens that are routed but not built yet.
#[component]
pub fn PlaceholderPage(title: &'static str) -> impl IntoView {
    view! {
        <div class="page page--placeholder">
            <h2>{title}</h2>
            <p>"Coming soon."</p>
        </div>
    }
}
