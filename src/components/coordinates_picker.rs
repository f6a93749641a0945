//! Location picker: place search, device location, and a draggable map marker.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each mounted picker owns a `PickerState` signal and a `PickerSession`
//! wired to the browser collaborators. The parent hears about every adopted
//! position through `on_change`; it never reads picker state directly.

#[cfg(test)]
#[path = "coordinates_picker_test.rs"]
mod coordinates_picker_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::leaflet_map::{LeafletMap, MapEvent};
use crate::config::ClientConfig;
use crate::net::geocoding::{NominatimGeocoder, Suggestion};
use crate::net::geolocation::BrowserGeolocator;
use crate::state::picker::{PickerState, Recenter};
use crate::state::picker_session::{PickerServices, PickerSession};
use crate::util::coords::Coordinate;
use crate::util::debounce::BrowserSleeper;
use crate::util::spawn_ui;

type BrowserSession = PickerSession<RwSignal<PickerState>, NominatimGeocoder, BrowserGeolocator, BrowserSleeper>;

pub fn selected_coordinates_text(position: Coordinate) -> String {
    format!("Selected Coordinates: {}", position.display())
}

pub fn search_button_label(state: &PickerState) -> &'static str {
    if state.loading { "Searching..." } else { "Search" }
}

/// Map target that notifies only when a position is adopted.
pub fn recenter_memo(state: RwSignal<PickerState>) -> Memo<Recenter> {
    Memo::new(move |_| state.with(PickerState::recenter))
}

pub fn suggestions_memo(state: RwSignal<PickerState>) -> Memo<Vec<Suggestion>> {
    Memo::new(move |_| state.with(|s| s.suggestions.clone()))
}

#[component]
pub fn CoordinatesPicker(initial: Option<Coordinate>, on_change: Callback<Coordinate>) -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let state = RwSignal::new(PickerState::default());
    let services = PickerServices {
        geocoder: Rc::new(NominatimGeocoder::from_config(&config)),
        geolocator: Rc::new(BrowserGeolocator),
        sleeper: Rc::new(BrowserSleeper),
    };
    let session: StoredValue<BrowserSession, LocalStorage> =
        StoredValue::new_local(PickerSession::new(state, services, move |at| on_change.run(at)));

    let first = session.get_value();
    spawn_ui(async move { first.initialize(initial).await });

    on_cleanup(move || {
        if let Some(s) = session.try_get_value() {
            s.unmount();
        }
    });

    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        let s = session.get_value();
        spawn_ui(async move { s.input_query(text).await });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        session.get_value().submit_search();
    };

    let on_locate = move |_| {
        let s = session.get_value();
        spawn_ui(async move { s.use_my_location().await });
    };

    let on_map = Callback::new(move |event: MapEvent| {
        let s = session.get_value();
        match event {
            MapEvent::Click(at) => s.map_click(at),
            MapEvent::DragEnd(at) => s.marker_drag_end(at),
        };
    });

    let recenter = recenter_memo(state);
    let suggestions = suggestions_memo(state);
    let suggestion_item = move |suggestion: Suggestion| {
        let label = suggestion.label.clone();
        view! {
            <li
                class="coordinates-picker__suggestion"
                on:click=move |_| {
                    session.get_value().pick_suggestion(suggestion.clone());
                }
            >
                {label}
            </li>
        }
    };

    view! {
        <div class="coordinates-picker">
            <h5>"Select Location"</h5>
            <Show when=move || state.with(|s| s.error.is_some())>
                <div class="coordinates-picker__warning" role="alert">
                    {move || state.with(PickerState::error_message).unwrap_or_default()}
                </div>
            </Show>
            <form class="coordinates-picker__search" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Search for a location..."
                    prop:value=move || state.with(|s| s.query.clone())
                    on:input=on_input
                />
                <button type="submit" disabled=move || state.with(|s| s.loading)>
                    {move || state.with(search_button_label)}
                </button>
                <Show when=move || suggestions.with(|list| !list.is_empty())>
                    <ul class="coordinates-picker__suggestions">
                        <For each=move || suggestions.get() key=|s: &Suggestion| s.id.clone() children=suggestion_item/>
                    </ul>
                </Show>
            </form>
            <button
                type="button"
                class="coordinates-picker__locate"
                on:click=on_locate
                disabled=move || state.with(|s| s.loading)
            >
                "Use My Location"
            </button>
            <LeafletMap recenter=recenter on_event=on_map/>
            <p class="coordinates-picker__selected">
                {move || state.with(|s| selected_coordinates_text(s.position))}
            </p>
        </div>
    }
}
