//! REST client for the marketplace backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: calls fail with `ApiError::Unavailable`
//! since these endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! The client is an explicit object built from a base URL and a
//! `TokenProvider`; pages build it from the config context rather than
//! importing a global. Every request carries `Authorization: Bearer <token>` when a
//! token is available.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are normalized into `ApiError::Server` with the
//! backend's message; transport failures become `ApiError::Network`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::{
    AuthResponse, CoordinatesUpdate, LoginRequest, ProfileUpdate, RegisterRequest, Restaurant, User,
};
use crate::util::coords::Coordinate;

const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";
const DISCOVERY_SEARCH_PATH: &str = "/discovery/search";

/// One query-string parameter, appended and encoded by the request builder.
type QueryPair = (&'static str, String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{0}")]
    Server(String),
    #[error("Network error")]
    Network,
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Source of the bearer token attached to each request.
pub trait TokenProvider {
    fn token(&self) -> Option<String>;
}

/// Fixed token, used for anonymous clients and tests.
#[derive(Clone, Debug, Default)]
pub struct StaticToken(pub Option<String>);

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
}

/// Authenticated HTTP client for `/api` endpoints.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    tokens: Rc<dyn TokenProvider>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, tokens: Rc<dyn TokenProvider>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_owned(), tokens }
    }

    #[cfg(test)]
    fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn authorization(&self) -> Option<String> {
        self.tokens.token().map(|t| format!("Bearer {t}"))
    }

    /// Exchange credentials for a session token via `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns the backend's message on rejection, or a network/decode error.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.send_json(Verb::Post, "/auth/login", &[], Some(credentials)).await
    }

    /// Create an account via `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns the backend's message on rejection, or a network error.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.send_empty(Verb::Post, "/auth/register", &[], Some(request)).await
    }

    /// Fetch the signed-in user via `GET /users/me`.
    ///
    /// # Errors
    ///
    /// Returns an error when the session is missing/expired or the request fails.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.send_json::<User, ()>(Verb::Get, "/users/me", &[], None).await
    }

    /// Save personal details via `PUT /users/me`.
    ///
    /// # Errors
    ///
    /// Returns the backend's message on rejection, or a network error.
    pub async fn update_user(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        self.send_empty(Verb::Put, "/users/me", &[], Some(update)).await
    }

    /// Save the user's own location via `PUT /users/me/coordinates`.
    ///
    /// # Errors
    ///
    /// Returns the backend's message on rejection, or a network error.
    pub async fn update_user_coordinates(&self, position: Coordinate) -> Result<(), ApiError> {
        let body = CoordinatesUpdate::from(position);
        self.send_empty(Verb::Put, "/users/me/coordinates", &[], Some(&body)).await
    }

    /// List restaurants owned by the signed-in user via `GET /restaurants/owned`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn owned_restaurants(&self) -> Result<Vec<Restaurant>, ApiError> {
        self.send_json::<Vec<Restaurant>, ()>(Verb::Get, "/restaurants/owned", &[], None).await
    }

    /// Replace a restaurant record via `PUT /restaurants/{id}`.
    ///
    /// # Errors
    ///
    /// Returns the backend's message on rejection, or a network error.
    pub async fn update_restaurant(&self, restaurant: &Restaurant) -> Result<(), ApiError> {
        let path = restaurant_endpoint(restaurant.restaurant_id);
        self.send_empty(Verb::Put, &path, &[], Some(restaurant)).await
    }

    /// Search restaurants, cuisines, or dishes via `GET /discovery/search`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn search_restaurants(&self, query: &str) -> Result<Vec<Restaurant>, ApiError> {
        let params = discovery_search_params(query);
        self.send_json::<Vec<Restaurant>, ()>(Verb::Get, DISCOVERY_SEARCH_PATH, &params, None).await
    }

    async fn send_json<T, B>(
        &self,
        verb: Verb,
        path: &str,
        query: &[QueryPair],
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let text = self.send(verb, path, query, body).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send_empty<B: Serialize>(
        &self,
        verb: Verb,
        path: &str,
        query: &[QueryPair],
        body: Option<&B>,
    ) -> Result<(), ApiError> {
        self.send(verb, path, query, body).await.map(|_| ())
    }

    /// Issue one request and return the raw success body.
    async fn send<B: Serialize>(
        &self,
        verb: Verb,
        path: &str,
        query: &[QueryPair],
        body: Option<&B>,
    ) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = self.endpoint(path);
            let mut builder = match verb {
                Verb::Get => Request::get(&url),
                Verb::Post => Request::post(&url),
                Verb::Put => Request::put(&url),
            }
            .header("Content-Type", "application/json");
            if !query.is_empty() {
                builder = builder.query(query.iter().map(|(key, value)| (*key, value.as_str())));
            }
            if let Some(auth) = self.authorization() {
                builder = builder.header("Authorization", &auth);
            }

            let sent = match body {
                Some(body) => builder.json(body).map_err(|e| ApiError::Decode(e.to_string()))?.send().await,
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| {
                leptos::logging::warn!("{verb:?} {url} failed: {e}");
                ApiError::Network
            })?;

            let text = resp.text().await.unwrap_or_default();
            if !resp.ok() {
                let err = normalize_error(&text);
                leptos::logging::warn!("{verb:?} {url} -> {}: {err}", resp.status());
                return Err(err);
            }
            Ok(text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (verb, path, query, body);
            Err(ApiError::Unavailable)
        }
    }
}

fn restaurant_endpoint(restaurant_id: i64) -> String {
    format!("/restaurants/{restaurant_id}")
}

/// Query-string parameters for `GET /discovery/search`; encoded by gloo-net.
fn discovery_search_params(query: &str) -> Vec<QueryPair> {
    vec![("query", query.trim().to_owned())]
}

/// Turn an error response body into a user-facing message.
///
/// Prefers a JSON `message` field, then the raw text, then a generic fallback.
fn normalize_error(body: &str) -> ApiError {
    let trimmed = body.trim();
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(trimmed) {
        if let Some(message) = map.get("message").and_then(serde_json::Value::as_str) {
            if !message.trim().is_empty() {
                return ApiError::Server(message.trim().to_owned());
            }
        }
        return ApiError::Server(FALLBACK_ERROR_MESSAGE.to_owned());
    }
    if trimmed.is_empty() {
        ApiError::Server(FALLBACK_ERROR_MESSAGE.to_owned())
    } else {
        ApiError::Server(trimmed.to_owned())
    }
}
