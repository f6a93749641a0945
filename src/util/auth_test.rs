use super::*;

#[test]
fn should_redirect_unauth_when_not_loading_and_no_session() {
    let state = AuthState { user: None, has_token: false, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, has_token: false, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_token_present() {
    let state = AuthState { user: None, has_token: true, loading: false };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn local_storage_tokens_are_empty_outside_browser() {
    assert_eq!(LocalStorageTokens.token(), None);
}
