//! Device position lookup.
//!
//! The browser implementation wraps `navigator.geolocation.getCurrentPosition`
//! callbacks into a future so the picker can `await` a plain `Result`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "geolocation_test.rs"]
mod geolocation_test;

use std::time::Duration;

use thiserror::Error;

use crate::util::coords::Coordinate;

/// Upper bound on a single position request.
pub const GEOLOCATION_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("geolocation is not supported")]
    Unsupported,
    /// Denied, timed out, or unavailable; the reason is opaque.
    #[error("geolocation failed: {0}")]
    Failed(String),
}

/// Device-position collaborator.
#[allow(async_fn_in_trait)]
pub trait Geolocator {
    fn is_supported(&self) -> bool;

    async fn current_position(&self, timeout: Duration) -> Result<Coordinate, GeolocationError>;
}

/// `navigator.geolocation` bridge.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserGeolocator;

impl Geolocator for BrowserGeolocator {
    fn is_supported(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window().is_some_and(|w| {
                js_sys::Reflect::has(&w.navigator(), &wasm_bindgen::JsValue::from_str("geolocation")).unwrap_or(false)
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    async fn current_position(&self, timeout: Duration) -> Result<Coordinate, GeolocationError> {
        #[cfg(feature = "hydrate")]
        {
            browser::current_position(timeout).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = timeout;
            Err(GeolocationError::Unsupported)
        }
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use futures::channel::oneshot;
    use js_sys::Reflect;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    use super::GeolocationError;
    use crate::util::coords::Coordinate;

    type Reply = Rc<RefCell<Option<oneshot::Sender<Result<Coordinate, GeolocationError>>>>>;

    pub(super) async fn current_position(timeout: Duration) -> Result<Coordinate, GeolocationError> {
        let window = web_sys::window().ok_or(GeolocationError::Unsupported)?;
        let geolocation = window.navigator().geolocation().map_err(|_| GeolocationError::Unsupported)?;

        let (tx, rx) = oneshot::channel();
        let reply: Reply = Rc::new(RefCell::new(Some(tx)));

        let reply_ok = reply.clone();
        let on_success = Closure::once_into_js(move |position: JsValue| {
            send(&reply_ok, read_position(&position));
        });
        let reply_err = reply;
        let on_error = Closure::once_into_js(move |error: JsValue| {
            let reason = Reflect::get(&error, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
                .unwrap_or_else(|| "unknown geolocation error".to_owned());
            send(&reply_err, Err(GeolocationError::Failed(reason)));
        });

        let options = web_sys::PositionOptions::new();
        options.set_timeout(u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX));

        geolocation
            .get_current_position_with_error_callback_and_options(
                on_success.unchecked_ref(),
                Some(on_error.unchecked_ref()),
                &options,
            )
            .map_err(|e| GeolocationError::Failed(format!("{e:?}")))?;

        rx.await
            .unwrap_or_else(|_| Err(GeolocationError::Failed("position callback dropped".to_owned())))
    }

    fn send(reply: &Reply, result: Result<Coordinate, GeolocationError>) {
        if let Some(tx) = reply.borrow_mut().take() {
            let _ = tx.send(result);
        }
    }

    fn read_position(position: &JsValue) -> Result<Coordinate, GeolocationError> {
        let coords = Reflect::get(position, &JsValue::from_str("coords"))
            .map_err(|_| GeolocationError::Failed("position without coords".to_owned()))?;
        let field = |name: &str| Reflect::get(&coords, &JsValue::from_str(name)).ok().and_then(|v| v.as_f64());
        match (field("latitude"), field("longitude")) {
            (Some(lat), Some(lon)) => Coordinate::from_pair(&[lat, lon])
                .ok_or_else(|| GeolocationError::Failed("position out of range".to_owned())),
            _ => Err(GeolocationError::Failed("position missing latitude/longitude".to_owned())),
        }
    }
}
