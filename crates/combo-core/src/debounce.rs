//! Cancellable one-shot timers for debounced input (like type-ahead search).

use crate::command::Command;
use std::time::Duration;

/// Identity of one scheduled expiry.
///
/// Carried inside the deferred message so the receiver can tell whether the
/// delivery belongs to the timer that is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceToken(u64);

/// A single-shot timer with debounce semantics.
///
/// Every [`schedule`](Debounce::schedule) cancels whatever was pending and
/// starts a fresh timer. Scheduling produces a [`Command::after`] carrying a
/// [`DebounceToken`]; when that message comes back, [`fire`](Debounce::fire)
/// reports whether it is the live timer. Deliveries for cancelled or
/// superseded timers are rejected, which is how cancellation works without
/// reaching into the host's scheduler.
///
/// # Example
///
/// ```
/// use combo_core::debounce::Debounce;
/// use std::time::Duration;
///
/// let mut timer = Debounce::new(Duration::from_millis(500));
///
/// let first = timer.schedule(|token| token).into_after().unwrap().1;
/// let second = timer.schedule(|token| token).into_after().unwrap().1;
///
/// // The first timer was superseded by the second.
/// assert!(!timer.fire(first));
/// assert!(timer.fire(second));
/// // A timer fires at most once.
/// assert!(!timer.fire(second));
/// ```
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    generation: u64,
    pending: bool,
}

impl Debounce {
    /// Create an idle timer that fires `delay` after each schedule.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: false,
        }
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel any pending timer and schedule a new one.
    ///
    /// `map` builds the message that will be delivered on expiry.
    pub fn schedule<Msg: Send + 'static>(
        &mut self,
        map: impl FnOnce(DebounceToken) -> Msg,
    ) -> Command<Msg> {
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        Command::after(self.delay, map(DebounceToken(self.generation)))
    }

    /// Cancel the pending timer, if any.
    pub fn cancel(&mut self) {
        if self.pending {
            self.generation = self.generation.wrapping_add(1);
            self.pending = false;
        }
    }

    /// Consume an expiry delivery.
    ///
    /// Returns `true` only for the token of the currently pending timer, and
    /// only once.
    pub fn fire(&mut self, token: DebounceToken) -> bool {
        if self.pending && token.0 == self.generation {
            self.pending = false;
            true
        } else {
            false
        }
    }

    /// Returns `true` while a timer is scheduled and not yet fired or cancelled.
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
