//! Completion signals and the timeout combinator behind the busy-guard
//! watchdog.
//!
//! A transition's timeline holds a [`Completer`]; the step engine holds
//! the matching [`Completion`] wrapped in a [`Timeout`]. Polling the
//! timeout each frame yields `Ok(())` once the timeline signals completion,
//! or `Err(Elapsed)` once the window has passed without it.

use std::cell::Cell;
use std::rc::Rc;
use std::task::Poll;
use std::time::Duration;

/// Something that can be polled against the frame clock.
pub trait PollAt {
    /// Value produced when ready.
    type Output;

    /// Check for readiness at time `now`.
    fn poll_at(&mut self, now: Duration) -> Poll<Self::Output>;
}

/// Sending half of a one-shot completion signal.
#[derive(Debug)]
#[must_use = "dropping a Completer without calling `complete` means the signal never fires"]
pub struct Completer {
    fired: Rc<Cell<bool>>,
}

impl Completer {
    /// Fire the signal.
    pub fn complete(self) {
        self.fired.set(true);
    }
}

/// Receiving half of a one-shot completion signal.
#[derive(Debug)]
pub struct Completion {
    fired: Rc<Cell<bool>>,
}

impl Completion {
    /// Whether the signal has fired.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.fired.get()
    }

    /// Whether the sending half was dropped without firing. An orphaned
    /// completion can only resolve through a timeout.
    #[must_use]
    pub fn is_orphaned(&self) -> bool {
        !self.fired.get() && Rc::strong_count(&self.fired) == 1
    }
}

impl PollAt for Completion {
    type Output = ();

    fn poll_at(&mut self, _now: Duration) -> Poll<()> {
        if self.fired.get() {
            Poll::Ready(())
        } else {
            Poll::Pending
        }
    }
}

/// Create a connected completer/completion pair.
pub fn completion() -> (Completer, Completion) {
    let fired = Rc::new(Cell::new(false));
    (
        Completer {
            fired: Rc::clone(&fired),
        },
        Completion { fired },
    )
}

/// Error returned when a [`Timeout`] deadline passes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    /// The deadline that was missed.
    pub deadline: Duration,
}

/// Wraps a pollable and fails it once a deadline passes.
#[derive(Debug)]
pub struct Timeout<F> {
    inner: F,
    deadline: Duration,
}

impl<F> Timeout<F> {
    /// The absolute deadline.
    #[must_use]
    pub fn deadline(&self) -> Duration {
        self.deadline
    }
}

/// Require `inner` to become ready within `window` of `start`.
pub fn timeout<F: PollAt>(inner: F, start: Duration, window: Duration) -> Timeout<F> {
    Timeout {
        inner,
        deadline: start + window,
    }
}

impl<F: PollAt> PollAt for Timeout<F> {
    type Output = Result<F::Output, Elapsed>;

    fn poll_at(&mut self, now: Duration) -> Poll<Self::Output> {
        // The inner value wins a tie with the deadline.
        if let Poll::Ready(value) = self.inner.poll_at(now) {
            return Poll::Ready(Ok(value));
        }
        if now >= self.deadline {
            Poll::Ready(Err(Elapsed {
                deadline: self.deadline,
            }))
        } else {
            Poll::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    #[test]
    fn completion_fires_once_completed() {
        let (completer, mut done) = completion();
        assert_eq!(done.poll_at(SEC), Poll::Pending);
        completer.complete();
        assert_eq!(done.poll_at(SEC), Poll::Ready(()));
        assert!(done.is_complete());
    }

    #[test]
    fn dropped_completer_orphans_completion() {
        let (completer, done) = completion();
        assert!(!done.is_orphaned());
        drop(completer);
        assert!(done.is_orphaned());
    }

    #[test]
    fn timeout_passes_through_ready_value() {
        let (completer, done) = completion();
        let mut guarded = timeout(done, Duration::ZERO, 5 * SEC);
        completer.complete();
        assert_eq!(guarded.poll_at(SEC), Poll::Ready(Ok(())));
    }

    #[test]
    fn timeout_elapses_at_deadline() {
        let (_completer, done) = completion();
        let mut guarded = timeout(done, 2 * SEC, 5 * SEC);
        assert_eq!(guarded.deadline(), 7 * SEC);
        assert_eq!(guarded.poll_at(6 * SEC), Poll::Pending);
        assert_eq!(
            guarded.poll_at(7 * SEC),
            Poll::Ready(Err(Elapsed { deadline: 7 * SEC }))
        );
    }

    #[test]
    fn completion_wins_tie_with_deadline() {
        let (completer, done) = completion();
        let mut guarded = timeout(done, Duration::ZERO, SEC);
        completer.complete();
        assert_eq!(guarded.poll_at(SEC), Poll::Ready(Ok(())));
    }
}
