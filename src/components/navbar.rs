//! Top navigation bar with session-aware links.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::LocalStorageTokens;

/// Links shown to signed-in users.
pub const MEMBER_LINKS: &[(&str, &str)] = &[
    ("/home", "Home"),
    ("/favorites", "Favorites"),
    ("/cart", "Cart"),
    ("/orders", "My Orders"),
    ("/profile", "Profile"),
];

/// Links shown to visitors.
pub const GUEST_LINKS: &[(&str, &str)] = &[("/login", "Login"), ("/register", "Register")];

pub fn nav_links(state: &AuthState) -> &'static [(&'static str, &'static str)] {
    if state.signed_in() { MEMBER_LINKS } else { GUEST_LINKS }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        LocalStorageTokens.clear();
        auth.update(AuthState::logout);
        navigate("/login", leptos_router::NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"FoodDelivery"</A>
            <ul class="navbar__links">
                {move || {
                    nav_links(&auth.get())
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <li>
                                    <A href=*href>{*label}</A>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <Show when=move || auth.with(AuthState::signed_in)>
                <button class="navbar__logout" on:click=on_logout.clone()>"Logout"</button>
            </Show>
        </nav>
    }
}
