//! Registration page with role selection.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiError;
use crate::net::types::{RegisterRequest, Role};
use crate::util::spawn_ui;

const REGISTER_FAILED: &str = "Registration failed. Please try again.";

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub role: Role,
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// Require email, password, and name; blank optional fields are omitted.
pub fn validate_register_input(form: &RegisterForm) -> Result<RegisterRequest, &'static str> {
    let email = form.email.trim();
    let name = form.name.trim();
    if email.is_empty() || form.password.is_empty() || name.is_empty() {
        return Err("Email, password, and name are required.");
    }
    Ok(RegisterRequest {
        email: email.to_owned(),
        password: form.password.clone(),
        name: name.to_owned(),
        address: optional(&form.address),
        phone: optional(&form.phone),
        role: form.role,
    })
}

pub fn register_error_message(err: &ApiError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() { REGISTER_FAILED.to_owned() } else { message }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let form = RwSignal::new(RegisterForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match form.with_untracked(validate_register_input) {
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
            match api.register(&request).await {
                Ok(()) => navigate("/login", NavigateOptions::default()),
                Err(e) => {
                    leptos::logging::warn!("registration failed: {e}");
                    error.try_set(Some(register_error_message(&e)));
                }
            }
            busy.try_set(false);
        });
    };

    let text_field = move |id: &'static str, label: &'static str, kind: &'static str, required: bool, get: fn(&RegisterForm) -> String, set: fn(&mut RegisterForm, String)| {
        view! {
            <label for=id>{label}</label>
            <input
                id=id
                type=kind
                required=required
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        }
    };

    view! {
        <div class="page page--auth">
            <h2>"Register for FoodDelivery"</h2>
            <Show when=move || error.with(Option::is_some)>
                <div class="alert alert--error">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <form class="auth-form" on:submit=on_submit>
                {text_field("email", "Email", "email", true, |f| f.email.clone(), |f, v| f.email = v)}
                {text_field("password", "Password", "password", true, |f| f.password.clone(), |f, v| f.password = v)}
                {text_field("name", "Name", "text", true, |f| f.name.clone(), |f, v| f.name = v)}
                {text_field("address", "Address (Optional)", "text", false, |f| f.address.clone(), |f, v| f.address = v)}
                {text_field("phone", "Phone (Optional)", "tel", false, |f| f.phone.clone(), |f, v| f.phone = v)}
                <label for="role">"Role"</label>
                <select
                    id="role"
                    prop:value=move || form.with(|f| f.role.as_str())
                    on:change=move |ev| {
                        if let Some(role) = Role::parse(&event_target_value(&ev)) {
                            form.update(|f| f.role = role);
                        }
                    }
                >
                    {Role::ALL
                        .into_iter()
                        .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
                        .collect_view()}
                </select>
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Registering..." } else { "Register" }}
                </button>
            </form>
            <p class="auth-form__switch">
                "Already have an account? "
                <A href="/login">"Login"</A>
            </p>
        </div>
    }
}
