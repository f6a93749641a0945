use super::*;

#[test]
fn visitors_see_login_and_register() {
    assert_eq!(nav_links(&AuthState::default()), GUEST_LINKS);
}

#[test]
fn members_see_profile_link() {
    let state = AuthState { has_token: true, ..AuthState::default() };
    let links = nav_links(&state);
    assert!(links.iter().any(|(href, _)| *href == "/profile"));
    assert!(!links.iter().any(|(href, _)| *href == "/login"));
}
