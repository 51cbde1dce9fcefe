//! Time abstraction and single-slot timers.
//!
//! Every timer-driven machine in this crate is a plain state machine that
//! reports when it next wants to run ([`TimedMachine::next_deadline`]) and is
//! told when that moment has come ([`TimedMachine::on_deadline`]). Who does
//! the waiting is up to the host: the desktop app sleeps on tokio timers,
//! tests advance a [`ManualClock`] and call [`drive_until`].

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Upper bound on firings per [`drive_until`] call.
const MAX_FIRINGS: usize = 1_000_000;

/// Time abstraction for testability.
///
/// `now()` is measured from an arbitrary, clock-specific epoch and is
/// monotonic.
pub trait Clock: Send + Sync {
    fn now(&self) -> Duration;
}

/// Real monotonic clock anchored at construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
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

/// Virtual clock advanced explicitly. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    millis: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves time forward and returns the new instant.
    pub fn advance(&self, by: Duration) -> Duration {
        let by = by.as_millis() as u64;
        let now = self.millis.fetch_add(by, Ordering::SeqCst) + by;
        Duration::from_millis(now)
    }

    /// Jumps to an absolute instant. Going backwards is ignored.
    pub fn set(&self, to: Duration) {
        self.millis.fetch_max(to.as_millis() as u64, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_millis(self.millis.load(Ordering::SeqCst))
    }
}

/// A single pending deadline.
///
/// Scheduling replaces whatever was pending, so an owner can never have two
/// overlapping timers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Duration>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any pending deadline and arms a new one `delay` after `now`.
    pub fn schedule(&mut self, now: Duration, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn is_due(&self, now: Duration) -> bool {
        matches!(self.deadline, Some(deadline) if deadline <= now)
    }

    /// Disarms the timer and returns true if it was due at `now`.
    pub fn take_if_due(&mut self, now: Duration) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }
}

/// A state machine driven by deadlines.
pub trait TimedMachine {
    /// The next instant at which the machine wants to run, if any.
    fn next_deadline(&self) -> Option<Duration>;

    /// Runs the machine at `now`. Calls before the deadline are no-ops.
    fn on_deadline(&mut self, now: Duration);
}

/// Fires the machine's deadlines in order until none remain at or before
/// `until`. Returns the number of firings.
pub fn drive_until<M: TimedMachine + ?Sized>(machine: &mut M, until: Duration) -> usize {
    let mut fired = 0;
    while let Some(deadline) = machine.next_deadline() {
        if deadline > until || fired >= MAX_FIRINGS {
            break;
        }
        machine.on_deadline(deadline);
        fired += 1;
    }
    fired
}

/// Milliseconds helper used throughout the machines.
pub const fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ticker {
        timer: Timer,
        period: Duration,
        fired_at: Vec<Duration>,
    }

    impl TimedMachine for Ticker {
        fn next_deadline(&self) -> Option<Duration> {
            self.timer.deadline()
        }

        fn on_deadline(&mut self, now: Duration) {
            if self.timer.take_if_due(now) {
                self.fired_at.push(now);
                self.timer.schedule(now, self.period);
            }
        }
    }

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new();
        let other = clock.clone();

        assert_eq!(clock.advance(ms(250)), ms(250));
        assert_eq!(other.now(), ms(250));

        other.set(ms(100));
        assert_eq!(clock.now(), ms(250));
        other.set(ms(900));
        assert_eq!(clock.now(), ms(900));
    }

    #[test]
    fn test_timer_reschedule_replaces_pending() {
        let mut timer = Timer::new();
        timer.schedule(ms(0), ms(100));
        timer.schedule(ms(50), ms(100));

        assert_eq!(timer.deadline(), Some(ms(150)));
        assert!(!timer.is_due(ms(100)));
        assert!(timer.take_if_due(ms(150)));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_timer_cancel() {
        let mut timer = Timer::new();
        timer.schedule(ms(0), ms(10));
        timer.cancel();

        assert!(!timer.is_due(ms(1_000)));
        assert!(!timer.take_if_due(ms(1_000)));
    }

    #[test]
    fn test_drive_until_fires_in_order() {
        let mut ticker = Ticker {
            timer: Timer::new(),
            period: ms(100),
            fired_at: Vec::new(),
        };
        ticker.timer.schedule(ms(0), ms(100));

        let fired = drive_until(&mut ticker, ms(350));

        assert_eq!(fired, 3);
        assert_eq!(ticker.fired_at, vec![ms(100), ms(200), ms(300)]);
        assert_eq!(ticker.next_deadline(), Some(ms(400)));
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
