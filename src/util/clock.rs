//! Time sources for the frame loop.
//!
//! Everything time-dependent in the crate (timelines, watchdogs, particle
//! lifetimes) consumes a monotonic [`Duration`] since an arbitrary origin
//! instead of reading wall-clock time itself. [`SystemClock`] backs real
//! sessions; [`ManualClock`] lets tests advance virtual time by hand.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use web_time::Instant;

/// A monotonic time source.
pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

/// Wall-clock time measured from construction.
///
/// Uses `web_time::Instant`, which delegates to `performance.now()` on
/// wasm targets.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Clock whose origin is the moment of construction.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Virtual clock advanced explicitly.
///
/// Clones share the same underlying time, so a test can hand one clone to
/// the engine and keep another to drive it.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Clock starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }

    /// Jump to an absolute time. Earlier values are ignored so the clock
    /// stays monotonic.
    pub fn set(&self, at: Duration) {
        if at > self.now.get() {
            self.now.set(at);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}
