//! Profile page: personal details, own location, and restaurant locations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Customers and couriers pin their own position; restaurant owners pin each
//! owned restaurant. Every picker reports through a callback into
//! `ProfileState`, and nothing is saved until the matching button is pressed.
//!
//! Pickers are rendered from untracked snapshots so that position updates
//! do not remount them.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::coordinates_picker::CoordinatesPicker;
use crate::net::api::ApiError;
use crate::net::types::{Restaurant, Role, User};
use crate::state::auth::AuthState;
use crate::state::profile::{
    COORDINATES_SAVE_FAILED, COORDINATES_SAVED, OwnedRestaurant, PROFILE_SAVE_FAILED, PROFILE_SAVED, ProfileField,
    ProfileState, RESTAURANT_SAVE_FAILED, restaurant_saved_message,
};
use crate::util::auth::install_unauth_redirect;
use crate::util::spawn_ui;

pub fn save_label(loading: bool, idle: &str) -> String {
    if loading { "Saving...".to_owned() } else { idle.to_owned() }
}

pub fn restaurant_save_label(name: &str) -> String {
    format!("Save Coordinates for {name}")
}

pub fn details_heading(role: Role) -> String {
    format!("Personal Details ({})", role.as_str())
}

/// Fetch the user, then owned restaurants when the user is an owner.
async fn load_profile(api: &crate::net::api::ApiClient) -> Result<(User, Vec<Restaurant>), ApiError> {
    let user = api.current_user().await?;
    let restaurants = if user.role == Role::RestaurantOwner { api.owned_restaurants().await? } else { Vec::new() };
    Ok((user, restaurants))
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let profile = RwSignal::new(ProfileState::default());
    profile.update(ProfileState::begin_load);
    let api = super::use_api();
    spawn_ui(async move {
        let result = load_profile(&api).await;
        if let Err(e) = &result {
            leptos::logging::error!("profile load failed: {e}");
        }
        if let Ok((user, _)) = &result {
            let user = user.clone();
            auth.update(|a| a.user = Some(user));
        }
        profile.try_update(|p| p.finish_load(result));
    });

    let loading = move || profile.with(|p| p.loading);
    let role = move || profile.with(ProfileState::role);

    let on_save_details = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let update = match profile.with_untracked(|p| p.form.to_update()) {
            Ok(update) => update,
            Err(msg) => {
                profile.update(|p| p.error = Some(msg.to_owned()));
                return;
            }
        };
        profile.update(ProfileState::begin_save);
        let api = super::use_api();
        spawn_ui(async move {
            let result = api.update_user(&update).await;
            profile.try_update(|p| p.finish_save(result, PROFILE_SAVED.to_owned(), PROFILE_SAVE_FAILED));
        });
    };

    let on_save_coordinates = move |_| {
        let Some(position) = profile.with_untracked(|p| p.position) else {
            return;
        };
        profile.update(ProfileState::begin_save);
        let api = super::use_api();
        spawn_ui(async move {
            let result = api.update_user_coordinates(position).await;
            profile.try_update(|p| p.finish_save(result, COORDINATES_SAVED.to_owned(), COORDINATES_SAVE_FAILED));
        });
    };

    let save_restaurant = move |restaurant_id: i64| {
        let Some(record) = profile.with_untracked(|p| p.restaurant_update(restaurant_id)) else {
            return;
        };
        profile.update(ProfileState::begin_save);
        let api = super::use_api();
        spawn_ui(async move {
            let result = api.update_restaurant(&record).await;
            profile.try_update(|p| {
                if result.is_ok() {
                    p.commit_restaurant(record);
                }
                p.finish_save(result, restaurant_saved_message(restaurant_id), RESTAURANT_SAVE_FAILED);
            });
        });
    };

    let field = move |id: &'static str, label: &'static str, kind: &'static str, which: ProfileField| {
        let value = move || {
            profile.with(|p| match which {
                ProfileField::Name => p.form.name.clone(),
                ProfileField::Email => p.form.email.clone(),
                ProfileField::Phone => p.form.phone.clone(),
                ProfileField::Address => p.form.address().unwrap_or_default().to_owned(),
                ProfileField::VehicleDetails => p.form.vehicle_details().unwrap_or_default().to_owned(),
            })
        };
        view! {
            <label for=id>{label}</label>
            <input
                id=id
                type=kind
                prop:value=value
                on:input=move |ev| profile.update(|p| p.form.set(which, event_target_value(&ev)))
            />
        }
    };

    let own_location = move || {
        let initial = profile.with_untracked(|p| p.position);
        view! {
            <section class="card">
                <h3 class="card__header">"Set Your Location"</h3>
                <CoordinatesPicker
                    initial=initial
                    on_change=Callback::new(move |at| profile.update(|p| p.set_position(at)))
                />
                <button on:click=on_save_coordinates disabled=loading>
                    {move || save_label(loading(), "Save Coordinates")}
                </button>
            </section>
        }
    };

    let restaurant_card = move |entry: OwnedRestaurant| {
        let id = entry.record.restaurant_id;
        let name = entry.record.name.clone();
        let label_name = name.clone();
        view! {
            <div class="restaurant-card">
                <h5>{name}</h5>
                <p>
                    <strong>"Cuisine: "</strong>{entry.record.cuisine_type.clone().unwrap_or_default()}<br/>
                    <strong>"Location: "</strong>{entry.record.location.clone().unwrap_or_default()}<br/>
                    <strong>"Status: "</strong>{entry.record.status.clone().unwrap_or_default()}
                </p>
                <CoordinatesPicker
                    initial=Some(entry.position)
                    on_change=Callback::new(move |at| profile.update(|p| p.set_restaurant_position(id, at)))
                />
                <button on:click=move |_| save_restaurant(id) disabled=loading>
                    {move || if loading() { "Saving...".to_owned() } else { restaurant_save_label(&label_name) }}
                </button>
            </div>
        }
    };

    let restaurants = move || {
        let entries = profile.with_untracked(|p| p.restaurants.clone());
        let body = if entries.is_empty() {
            view! { <p>"No restaurants found."</p> }.into_any()
        } else {
            entries.into_iter().map(restaurant_card).collect_view().into_any()
        };
        view! {
            <section class="card">
                <h3 class="card__header">"Your Restaurants"</h3>
                {body}
            </section>
        }
    };

    view! {
        <div class="page page--profile">
            <Show
                when=move || profile.with(|p| p.user.is_some())
                fallback=move || {
                    view! {
                        <p class="page__status">
                            {move || if loading() { "Loading..." } else { "Error loading profile." }}
                        </p>
                    }
                }
            >
                <h1>"Manage Profile"</h1>
                <Show when=move || profile.with(|p| p.error.is_some())>
                    <div class="alert alert--error">{move || profile.with(|p| p.error.clone()).unwrap_or_default()}</div>
                </Show>
                <Show when=move || profile.with(|p| p.success.is_some())>
                    <div class="alert alert--success">
                        {move || profile.with(|p| p.success.clone()).unwrap_or_default()}
                    </div>
                </Show>
                <section class="card">
                    <h3 class="card__header">{move || role().map(details_heading).unwrap_or_default()}</h3>
                    <form on:submit=on_save_details>
                        {field("name", "Name", "text", ProfileField::Name)}
                        {field("email", "Email", "email", ProfileField::Email)}
                        {field("phone", "Phone", "tel", ProfileField::Phone)}
                        <Show when=move || role() == Some(Role::Customer)>
                            {field("address", "Address", "text", ProfileField::Address)}
                        </Show>
                        <Show when=move || role() == Some(Role::DeliveryPerson)>
                            {field("vehicleDetails", "Vehicle Details", "text", ProfileField::VehicleDetails)}
                        </Show>
                        <button type="submit" disabled=loading>
                            {move || save_label(loading(), "Save Details")}
                        </button>
                    </form>
                </section>
                <Show when=move || role().is_some_and(Role::has_personal_location)>{own_location}</Show>
                <Show when=move || role() == Some(Role::RestaurantOwner)>{restaurants}</Show>
            </Show>
        </div>
    }
}
