//! Home page: restaurant discovery search.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Restaurant;
use crate::util::spawn_ui;

/// Trimmed query, or `None` when there is nothing to search for.
pub fn normalize_search_query(raw: &str) -> Option<String> {
    let query = raw.trim();
    (!query.is_empty()).then(|| query.to_owned())
}

/// One-line summary shown under a result's name.
pub fn restaurant_summary(restaurant: &Restaurant) -> String {
    [restaurant.cuisine_type.as_deref(), restaurant.location.as_deref(), restaurant.status.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

#[derive(Clone, Debug, Default, PartialEq)]
enum SearchStatus {
    #[default]
    Idle,
    Searching,
    Done(Vec<Restaurant>),
    Failed(String),
}

#[component]
pub fn HomePage() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let status = RwSignal::new(SearchStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(q) = normalize_search_query(&query.get_untracked()) else {
            return;
        };
        leptos::logging::log!("Search query: {q}");
        status.set(SearchStatus::Searching);

        let api = super::use_api();
        spawn_ui(async move {
            let next = match api.search_restaurants(&q).await {
                Ok(found) => SearchStatus::Done(found),
                Err(e) => {
                    leptos::logging::warn!("discovery search failed: {e}");
                    SearchStatus::Failed(e.to_string())
                }
            };
            status.try_set(next);
        });
    };

    let results = move || match status.get() {
        SearchStatus::Idle => ().into_any(),
        SearchStatus::Searching => view! { <p class="search__status">"Searching..."</p> }.into_any(),
        SearchStatus::Failed(msg) => view! { <div class="alert alert--error">{msg}</div> }.into_any(),
        SearchStatus::Done(found) if found.is_empty() => {
            view! { <p class="search__status">"No restaurants found."</p> }.into_any()
        }
        SearchStatus::Done(found) => view! {
            <ul class="search__results">
                {found
                    .into_iter()
                    .map(|r| {
                        let href = format!("/restaurants/{}", r.restaurant_id);
                        let summary = restaurant_summary(&r);
                        view! {
                            <li class="search__result">
                                <A href=href>{r.name}</A>
                                <span class="search__summary">{summary}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
    };

    view! {
        <div class="page page--home">
            <h1>"Welcome to FoodDelivery"</h1>
            <p class="lead">"Discover delicious meals from your favorite restaurants, delivered to your door."</p>
            <form class="search" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Search restaurants, cuisines, or dishes..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || status.with(|s| *s == SearchStatus::Searching)>
                    "Search"
                </button>
            </form>
            {results}
        </div>
    }
}
