//! Wall-clock rate limiting for gesture change sequences.

use std::time::{Duration, Instant};

use tracing::trace;

use crate::domain::change::{ChangeKind, StateChange};
use crate::pipeline::error::PipelineError;
use crate::pipeline::gesture::GestureSource;

/// Time source for the rate limiter, mockable in tests so the pacing rules
/// can be verified without real sleeping.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&self, duration: Duration);
}

/// The process clock: `Instant::now` and `std::thread::sleep`.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Bounds how often consecutive same-kind changes are forwarded.
///
/// Per pull, changes are drawn from the wrapped source until one may be
/// emitted:
///
/// - the first change ever is forwarded immediately;
/// - a change of a *different* kind than the previously forwarded one is
///   forwarded after a pacing sleep equal to the time elapsed since the
///   previous emission;
/// - a change of the *same* kind is forwarded only if at least `interval`
///   has elapsed since the previous emission, and discarded otherwise.
///
/// The cross-kind branch sleeps for the elapsed time rather than the time
/// remaining until `interval`, which roughly doubles the gap on a kind
/// change.  That is the pacing contract callers rely on; do not "correct"
/// it to remaining-time pacing.
pub struct RateLimited<G: GestureSource, C: Clock = SystemClock> {
    inner: G,
    interval: Duration,
    clock: C,
    last: Option<(ChangeKind, Instant)>,
}

impl<G: GestureSource> RateLimited<G> {
    pub fn new(inner: G, interval: Duration) -> Self {
        Self::with_clock(inner, interval, SystemClock)
    }
}

impl<G: GestureSource, C: Clock> RateLimited<G, C> {
    pub fn with_clock(inner: G, interval: Duration, clock: C) -> Self {
        Self {
            inner,
            interval,
            clock,
            last: None,
        }
    }
}

impl<G: GestureSource, C: Clock> GestureSource for RateLimited<G, C> {
    fn next_change(&mut self) -> Option<StateChange> {
        while let Some(change) = self.inner.next_change() {
            let kind = change.kind();
            let (last_kind, last_at) = match self.last {
                None => {
                    // First emission ever: forward immediately.
                    self.last = Some((kind, self.clock.now()));
                    return Some(change);
                }
                Some(last) => last,
            };
            if kind != last_kind {
                let elapsed = self.clock.now().saturating_duration_since(last_at);
                self.clock.sleep(elapsed);
                self.last = Some((kind, self.clock.now()));
                return Some(change);
            }
            if self.clock.now().saturating_duration_since(last_at) >= self.interval {
                self.last = Some((kind, self.clock.now()));
                return Some(change);
            }
            trace!(?kind, "discarding state change inside rate-limit window");
        }
        None
    }

    fn secondary_mode(&self) -> bool {
        self.inner.secondary_mode()
    }

    fn close(&mut self) -> Result<(), PipelineError> {
        self.inner.close()
    }
}
