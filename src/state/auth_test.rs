use super::*;
use crate::net::types::Role;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_signed_out() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.signed_in());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn login_marks_session_present() {
    let mut state = AuthState { loading: true, ..AuthState::default() };
    state.login();
    assert!(state.signed_in());
    assert!(!state.loading);
}

#[test]
fn logout_drops_user_and_token() {
    let mut state = AuthState {
        user: Some(User {
            id: Some(1),
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            phone: None,
            address: None,
            vehicle_details: None,
            role: Role::Customer,
            latitude: None,
            longitude: None,
        }),
        has_token: true,
        loading: false,
    };
    state.logout();
    assert!(!state.signed_in());
    assert!(state.user.is_none());
}
