//! Leaflet map with a single draggable marker.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Leaflet script and stylesheet are loaded by the page shell; this
//! module binds only the calls the coordinate picker needs. Map and marker
//! handles live in a local `StoredValue` and are torn down in `on_cleanup`.
//! The view follows `Recenter`, so it moves only when a position is adopted.

#[cfg(test)]
#[path = "leaflet_map_test.rs"]
mod leaflet_map_test;

use leptos::prelude::*;

use crate::state::picker::Recenter;
use crate::util::coords::Coordinate;

/// Position reported by a map interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MapEvent {
    Click(Coordinate),
    DragEnd(Coordinate),
}

/// Read a Leaflet `LatLng`-shaped value (`{ lat, lng }`).
pub fn lat_lng_from_parts(lat: Option<f64>, lng: Option<f64>) -> Option<Coordinate> {
    let (lat, lng) = (lat?, lng?);
    (lat.is_finite() && lng.is_finite()).then(|| Coordinate::new(lat, lng))
}

#[component]
pub fn LeafletMap(#[prop(into)] recenter: Signal<Recenter>, on_event: Callback<MapEvent>) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    browser::mount(container, recenter, on_event);
    #[cfg(not(feature = "hydrate"))]
    let _ = (recenter, on_event);

    view! { <div class="coordinates-picker__map" node_ref=container></div> }
}

#[cfg(feature = "hydrate")]
mod browser {
    use js_sys::{Array, Object, Reflect};
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use super::{MapEvent, lat_lng_from_parts};
    use crate::config::ClientConfig;
    use crate::state::picker::{MAP_ZOOM, Recenter};
    use crate::util::coords::Coordinate;

    #[wasm_bindgen]
    extern "C" {
        #[derive(Clone)]
        pub type Map;

        #[wasm_bindgen(js_namespace = L, js_name = map)]
        fn create_map(element: &web_sys::HtmlElement) -> Map;

        #[wasm_bindgen(method, js_name = setView)]
        fn set_view(this: &Map, center: &JsValue, zoom: u8) -> Map;

        #[wasm_bindgen(method)]
        fn on(this: &Map, event: &str, handler: &JsValue) -> Map;

        #[wasm_bindgen(method)]
        fn remove(this: &Map) -> Map;

        pub type TileLayer;

        #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
        fn tile_layer(url: &str, options: &JsValue) -> TileLayer;

        #[wasm_bindgen(method, js_name = addTo)]
        fn add_to(this: &TileLayer, map: &Map) -> TileLayer;

        #[derive(Clone)]
        pub type Marker;

        #[wasm_bindgen(js_namespace = L, js_name = marker)]
        fn create_marker(at: &JsValue, options: &JsValue) -> Marker;

        #[wasm_bindgen(method, js_name = addTo)]
        fn add_to(this: &Marker, map: &Map) -> Marker;

        #[wasm_bindgen(method, js_name = setLatLng)]
        fn set_lat_lng(this: &Marker, at: &JsValue) -> Marker;

        #[wasm_bindgen(method, js_name = getLatLng)]
        fn get_lat_lng(this: &Marker) -> JsValue;

        #[wasm_bindgen(method)]
        fn on(this: &Marker, event: &str, handler: &JsValue) -> Marker;
    }

    struct Handles {
        map: Map,
        marker: Marker,
        _listeners: [Closure<dyn FnMut(JsValue)>; 2],
    }

    pub(super) fn mount(
        container: NodeRef<leptos::html::Div>,
        recenter: Signal<Recenter>,
        on_event: Callback<MapEvent>,
    ) {
        let handles = StoredValue::new_local(None::<Handles>);
        let config = use_context::<ClientConfig>().unwrap_or_default();

        Effect::new(move || {
            let at = recenter.get().position;
            let Some(element) = container.get() else {
                return;
            };
            handles.update_value(|slot| match slot {
                Some(h) => {
                    let center = lat_lng(at);
                    h.marker.set_lat_lng(&center);
                    h.map.set_view(&center, MAP_ZOOM);
                }
                None => *slot = Some(create(element.unchecked_ref(), at, &config, on_event)),
            });
        });

        on_cleanup(move || {
            let _ = handles.try_update_value(|slot| {
                if let Some(h) = slot.take() {
                    h.map.remove();
                }
            });
        });
    }

    fn create(element: &web_sys::HtmlElement, at: Coordinate, config: &ClientConfig, on_event: Callback<MapEvent>) -> Handles {
        let center = lat_lng(at);
        let map = create_map(element);
        map.set_view(&center, MAP_ZOOM);

        let tile_options = Object::new();
        let _ = Reflect::set(&tile_options, &"attribution".into(), &config.tile_attribution.as_str().into());
        tile_layer(&config.tile_url, &tile_options).add_to(&map);

        let marker_options = Object::new();
        let _ = Reflect::set(&marker_options, &"draggable".into(), &JsValue::TRUE);
        let marker = create_marker(&center, &marker_options);
        marker.add_to(&map);

        let on_click = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            let latlng = Reflect::get(&event, &"latlng".into()).unwrap_or(JsValue::UNDEFINED);
            match read_lat_lng(&latlng) {
                Some(at) => on_event.run(MapEvent::Click(at)),
                None => leptos::logging::warn!("map click without a usable position"),
            }
        });
        map.on("click", on_click.as_ref());

        let dragged = marker.clone();
        let on_drag = Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| {
            if let Some(at) = read_lat_lng(&dragged.get_lat_lng()) {
                on_event.run(MapEvent::DragEnd(at));
            }
        });
        marker.on("dragend", on_drag.as_ref());

        Handles { map, marker, _listeners: [on_click, on_drag] }
    }

    fn lat_lng(at: Coordinate) -> JsValue {
        Array::of2(&at.lat.into(), &at.lon.into()).into()
    }

    fn read_lat_lng(value: &JsValue) -> Option<Coordinate> {
        let field = |name: &str| Reflect::get(value, &name.into()).ok().and_then(|v| v.as_f64());
        lat_lng_from_parts(field("lat"), field("lng"))
    }
}
