use super::*;

use futures::executor::block_on;

fn client(token: Option<&str>) -> ApiClient {
    ApiClient::new("http://localhost:8080/api/", Rc::new(StaticToken(token.map(str::to_owned))))
}

#[test]
fn new_trims_trailing_slash_from_base_url() {
    assert_eq!(client(None).base_url(), "http://localhost:8080/api");
}

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(client(None).endpoint("/auth/login"), "http://localhost:8080/api/auth/login");
    assert_eq!(client(None).endpoint("users/me"), "http://localhost:8080/api/users/me");
}

#[test]
fn authorization_attaches_bearer_token_when_present() {
    assert_eq!(client(Some("abc")).authorization().as_deref(), Some("Bearer abc"));
    assert_eq!(client(None).authorization(), None);
}

#[test]
fn authorization_reads_token_on_every_call() {
    struct Counting(std::cell::Cell<u32>);
    impl TokenProvider for Counting {
        fn token(&self) -> Option<String> {
            self.0.set(self.0.get() + 1);
            Some(format!("t{}", self.0.get()))
        }
    }
    let api = ApiClient::new("http://x", Rc::new(Counting(std::cell::Cell::new(0))));
    assert_eq!(api.authorization().as_deref(), Some("Bearer t1"));
    assert_eq!(api.authorization().as_deref(), Some("Bearer t2"));
}

#[test]
fn restaurant_endpoint_formats_expected_path() {
    assert_eq!(restaurant_endpoint(42), "/restaurants/42");
}

#[test]
fn discovery_search_params_trim_query() {
    assert_eq!(discovery_search_params("  thai curry "), vec![("query", "thai curry".to_owned())]);
}

#[test]
fn discovery_search_params_leave_reserved_characters_raw() {
    assert_eq!(discovery_search_params("fish&chips"), vec![("query", "fish&chips".to_owned())]);
    assert_eq!(discovery_search_params("café"), vec![("query", "café".to_owned())]);
}

#[test]
fn discovery_search_path_has_no_inline_query() {
    assert_eq!(client(None).endpoint(DISCOVERY_SEARCH_PATH), "http://localhost:8080/api/discovery/search");
}

// =============================================================
// Error normalization
// =============================================================

#[test]
fn normalize_error_prefers_json_message() {
    assert_eq!(
        normalize_error(r#"{"message":"Email already registered"}"#),
        ApiError::Server("Email already registered".to_owned())
    );
}

#[test]
fn normalize_error_uses_plain_text_body() {
    assert_eq!(normalize_error("  Invalid credentials \n"), ApiError::Server("Invalid credentials".to_owned()));
}

#[test]
fn normalize_error_falls_back_for_empty_body() {
    assert_eq!(normalize_error(""), ApiError::Server("An error occurred".to_owned()));
    assert_eq!(normalize_error(r#"{"status":500}"#), ApiError::Server("An error occurred".to_owned()));
}

#[test]
fn network_error_message_matches_ui_text() {
    assert_eq!(ApiError::Network.to_string(), "Network error");
}

#[test]
fn requests_are_unavailable_outside_browser() {
    let api = client(Some("abc"));
    assert_eq!(block_on(api.current_user()), Err(ApiError::Unavailable));
    assert_eq!(block_on(api.update_user_coordinates(Coordinate::new(1.0, 2.0))), Err(ApiError::Unavailable));
}
