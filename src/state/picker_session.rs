//! Async orchestration for one mounted coordinate picker.
//!
//! SYSTEM CONTEXT
//! ==============
//! `PickerSession` reconciles the three location sources (map interaction,
//! place search, device position) into `PickerState` and notifies the
//! consumer on every adopted position. It is single-threaded: futures are
//! `!Send` and run on the UI task queue (`spawn_local` in the browser,
//! `LocalPool` in tests).
//!
//! CANCELLATION
//! ============
//! Each keystroke restarts the debounce token; `unmount` cancels both the
//! pending wait and the session itself, so results that arrive afterwards
//! are discarded. In-flight requests are not aborted.

#[cfg(test)]
#[path = "picker_session_test.rs"]
mod picker_session_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use super::picker::{LocateOrigin, PickerState, QueryAction, SEARCH_DEBOUNCE};
use crate::net::geocoding::{Geocoder, SUGGESTION_LIMIT, Suggestion};
use crate::net::geolocation::{GEOLOCATION_TIMEOUT, Geolocator};
use crate::util::coords::Coordinate;
use crate::util::debounce::{CancelToken, Debouncer, Sleeper};

/// Where `PickerState` lives. Returns `None` once the owner is gone.
pub trait PickerStore: Clone + 'static {
    fn with_state<R>(&self, f: impl FnOnce(&mut PickerState) -> R) -> Option<R>;
}

impl PickerStore for RwSignal<PickerState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut PickerState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl PickerStore for Rc<RefCell<PickerState>> {
    fn with_state<R>(&self, f: impl FnOnce(&mut PickerState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// External collaborators used by a session.
pub struct PickerServices<G, L, T> {
    pub geocoder: Rc<G>,
    pub geolocator: Rc<L>,
    pub sleeper: Rc<T>,
}

impl<G, L, T> Clone for PickerServices<G, L, T> {
    fn clone(&self) -> Self {
        Self {
            geocoder: self.geocoder.clone(),
            geolocator: self.geolocator.clone(),
            sleeper: self.sleeper.clone(),
        }
    }
}

/// Handle shared by every event handler of one picker instance.
pub struct PickerSession<S, G, L, T> {
    store: S,
    services: PickerServices<G, L, T>,
    notify: Rc<dyn Fn(Coordinate)>,
    debouncer: Rc<RefCell<Debouncer>>,
    alive: CancelToken,
}

impl<S: Clone, G, L, T> Clone for PickerSession<S, G, L, T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            services: self.services.clone(),
            notify: self.notify.clone(),
            debouncer: self.debouncer.clone(),
            alive: self.alive.clone(),
        }
    }
}

impl<S, G, L, T> PickerSession<S, G, L, T>
where
    S: PickerStore,
    G: Geocoder,
    L: Geolocator,
    T: Sleeper,
{
    pub fn new(store: S, services: PickerServices<G, L, T>, notify: impl Fn(Coordinate) + 'static) -> Self {
        Self {
            store,
            services,
            notify: Rc::new(notify),
            debouncer: Rc::new(RefCell::new(Debouncer::default())),
            alive: CancelToken::new(),
        }
    }

    /// First-render policy: a valid initial position wins outright;
    /// otherwise ask the device, keeping the fallback center on failure.
    pub async fn initialize(&self, initial: Option<Coordinate>) {
        if let Some(position) = initial.filter(|c| c.is_valid()) {
            self.adopt_with(|s| Some(s.adopt(position)));
            return;
        }
        self.locate(LocateOrigin::Mount).await;
    }

    /// "Use my location": same flow as mount, re-triggerable at any time.
    pub async fn use_my_location(&self) {
        self.locate(LocateOrigin::Button).await;
    }

    async fn locate(&self, origin: LocateOrigin) {
        if !self.services.geolocator.is_supported() {
            leptos::logging::warn!("geolocation is not supported; keeping current position");
            self.apply(PickerState::locate_unsupported);
            return;
        }
        if self.apply(PickerState::begin_locate).is_none() {
            return;
        }

        let result = self.services.geolocator.current_position(GEOLOCATION_TIMEOUT).await;
        if let Err(e) = &result {
            leptos::logging::error!("Geolocation error: {e}");
        }
        self.adopt_with(|s| s.finish_locate(origin, result));
    }

    /// Handle a keystroke in the search box.
    ///
    /// Resolves once this keystroke's lookup has finished, or immediately if
    /// it was superseded, too short, or the picker unmounted.
    pub async fn input_query(&self, text: String) {
        let Some(action) = self.apply(|s| s.set_query(text)) else {
            return;
        };
        let QueryAction::Schedule { seq, query } = action else {
            self.debouncer.borrow_mut().cancel();
            return;
        };

        let token = self.debouncer.borrow_mut().restart();
        self.services.sleeper.sleep(SEARCH_DEBOUNCE).await;
        if token.is_cancelled() {
            return;
        }
        if self.apply(|s| s.begin_lookup(seq)) != Some(true) {
            return;
        }

        let result = self.services.geocoder.search(&query, SUGGESTION_LIMIT).await;
        if let Err(e) = &result {
            leptos::logging::error!("Error fetching suggestions: {e}");
        }
        self.apply(|s| s.finish_lookup(seq, result));
    }

    /// Submit the search form.
    pub fn submit_search(&self) -> Option<Coordinate> {
        let adopted = self.adopt_with(PickerState::submit_search);
        if adopted.is_some() {
            self.debouncer.borrow_mut().cancel();
        }
        adopted
    }

    pub fn pick_suggestion(&self, suggestion: Suggestion) -> Option<Coordinate> {
        self.debouncer.borrow_mut().cancel();
        self.adopt_with(|s| Some(s.pick_suggestion(suggestion)))
    }

    pub fn map_click(&self, position: Coordinate) -> Option<Coordinate> {
        self.adopt_with(|s| Some(s.map_click(position)))
    }

    pub fn marker_drag_end(&self, position: Coordinate) -> Option<Coordinate> {
        self.adopt_with(|s| Some(s.marker_drag_end(position)))
    }

    /// Tear down: drop the pending debounce and ignore late results.
    pub fn unmount(&self) {
        self.alive.cancel();
        self.debouncer.borrow_mut().cancel();
    }

    #[cfg(test)]
    fn is_mounted(&self) -> bool {
        !self.alive.is_cancelled()
    }

    fn apply<R>(&self, f: impl FnOnce(&mut PickerState) -> R) -> Option<R> {
        if self.alive.is_cancelled() {
            return None;
        }
        self.store.with_state(f)
    }

    /// Run a transition and notify the consumer if it adopted a position.
    /// The store borrow is released before `notify` runs.
    fn adopt_with(&self, f: impl FnOnce(&mut PickerState) -> Option<Coordinate>) -> Option<Coordinate> {
        let adopted = self.apply(f).flatten()?;
        (self.notify)(adopted);
        Some(adopted)
    }
}
