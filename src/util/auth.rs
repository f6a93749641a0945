//! Bearer-token storage and shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend issues a JWT at login. It lives in `localStorage` under
//! `jwtToken` and is read by the REST client through `TokenProvider`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::TokenProvider;
use crate::state::auth::AuthState;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "jwtToken";

/// Token source backed by browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokens;

impl LocalStorageTokens {
    pub fn store(self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    pub fn clear(self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

impl TokenProvider for LocalStorageTokens {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(TOKEN_KEY).ok().flatten().filter(|t| !t.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

/// Whether a protected page should bounce to `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.signed_in()
}

/// Redirect to `/login` whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
