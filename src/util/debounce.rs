//! Debounce timers and cooperative cancellation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The picker issues geocoding lookups only after typing goes quiet. Each
//! keystroke restarts the wait by cancelling the previous token; a sleeping
//! task checks its token on wake and exits if it was superseded.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Single-threaded cancellation flag shared between a task and its owner.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Tracks the one pending debounced action.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<CancelToken>,
}

impl Debouncer {
    /// Cancel whatever is waiting and hand out a token for the new wait.
    pub fn restart(&mut self) -> CancelToken {
        self.cancel();
        let token = CancelToken::new();
        self.pending = Some(token.clone());
        token
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }

    #[cfg(test)]
    fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|t| !t.is_cancelled())
    }
}

/// Timer source for debounce waits.
#[allow(async_fn_in_trait)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// Browser timer backed by `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSleeper;

impl Sleeper for BrowserSleeper {
    async fn sleep(&self, duration: Duration) {
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::future::sleep(duration).await;
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = duration;
        }
    }
}
