//! Login page: email + password exchange for a bearer token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::LoginRequest;
use crate::state::auth::AuthState;
use crate::util::auth::LocalStorageTokens;
use crate::util::spawn_ui;

/// Trim the email and require both fields.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

pub fn login_button_label(busy: bool) -> &'static str {
    if busy { "Logging in..." } else { "Login" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let api = super::use_api();
        let navigate = navigate.clone();
        spawn_ui(async move {
            match api.login(&request).await {
                Ok(session) => {
                    LocalStorageTokens.store(&session.token);
                    auth.update(AuthState::login);
                    leptos::logging::log!("signed in as {}", request.email);
                    navigate("/home", NavigateOptions::default());
                }
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    error.try_set(Some(e.to_string()));
                }
            }
            busy.try_set(false);
        });
    };

    view! {
        <div class="page page--auth">
            <h2>"Login to FoodDelivery"</h2>
            <Show when=move || error.with(Option::is_some)>
                <div class="alert alert--error">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <form class="auth-form" on:submit=on_submit>
                <label for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <label for="password">"Password"</label>
                <input
                    id="password"
                    type="password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>
                    {move || login_button_label(busy.get())}
                </button>
            </form>
            <p class="auth-form__switch">
                "Don't have an account? "
                <A href="/register">"Register"</A>
            </p>
        </div>
    }
}
