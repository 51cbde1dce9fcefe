//! Runs [`TimedMachine`]s on the tokio timer.
//!
//! The machines only know about deadlines. This loop sleeps until the next
//! one and fires it, polling at [`IDLE_POLL`] while the machine has nothing
//! scheduled so that deadlines set from event handlers are picked up.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use folio_core::{Clock, TimedMachine, ms};
use tokio::time::{Instant, sleep};

/// Upper bound on a single sleep of the driver loop.
pub const IDLE_POLL: Duration = ms(50);

/// Clock on tokio's timer, so paused test time applies.
#[derive(Debug, Clone, Copy)]
pub struct TokioClock {
    origin: Instant,
}

impl TokioClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TokioClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Shared, mutable home of a machine.
pub trait MachineCell<M> {
    fn peek_with<R>(&self, f: impl FnOnce(&M) -> R) -> R;

    fn write_with<R>(&mut self, f: impl FnOnce(&mut M) -> R) -> R;
}

impl<M: 'static> MachineCell<M> for Signal<M> {
    fn peek_with<R>(&self, f: impl FnOnce(&M) -> R) -> R {
        f(&self.peek())
    }

    fn write_with<R>(&mut self, f: impl FnOnce(&mut M) -> R) -> R {
        f(&mut self.write())
    }
}

impl<M> MachineCell<M> for Rc<RefCell<M>> {
    fn peek_with<R>(&self, f: impl FnOnce(&M) -> R) -> R {
        f(&self.borrow())
    }

    fn write_with<R>(&mut self, f: impl FnOnce(&mut M) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Fires the machine's deadlines as they come due. Never returns; the task
/// owning it is cancelled when its component unmounts.
pub async fn drive<M, C, K>(mut cell: C, clock: K)
where
    M: TimedMachine,
    C: MachineCell<M>,
    K: Clock,
{
    loop {
        let now = clock.now();
        let wait = match cell.peek_with(|machine| machine.next_deadline()) {
            Some(deadline) if deadline <= now => {
                cell.write_with(|machine| machine.on_deadline(deadline));
                continue;
            }
            Some(deadline) => (deadline - now).min(IDLE_POLL),
            None => IDLE_POLL,
        };
        sleep(wait).await;
    }
}
