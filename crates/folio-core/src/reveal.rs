//! Welcome splash sequencing.
//!
//! `Showing → FadingOut → Done`, each step on a fixed timer. Reaching `Done`
//! sets the session's visited flag and hands control to the main view by
//! running the completion callback. A torn-down sequencer never fires.

use std::time::Duration;

use tracing::{debug, info};

use crate::clock::{TimedMachine, Timer, ms};
use crate::session::VisitedFlag;

/// How long the splash animation shows before fading.
pub const SHOW_DURATION: Duration = ms(3_500);

/// Length of the exit animation.
pub const EXIT_DURATION: Duration = ms(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Constructed, not mounted yet.
    Idle,
    Showing,
    FadingOut,
    Done,
    /// Torn down before `Done`.
    Cancelled,
}

/// What the app shows on startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupView {
    Splash,
    Main,
}

/// Decides whether the splash plays, from the session's visited flag.
pub fn startup_view(visited: &VisitedFlag, skip_splash: bool) -> StartupView {
    if skip_splash || visited.is_set() {
        StartupView::Main
    } else {
        StartupView::Splash
    }
}

pub struct RevealSequencer {
    phase: RevealPhase,
    timer: Timer,
    show: Duration,
    exit: Duration,
    visited: VisitedFlag,
    on_complete: Option<Box<dyn FnOnce()>>,
}

impl RevealSequencer {
    pub fn new(visited: VisitedFlag) -> Self {
        Self::with_durations(visited, SHOW_DURATION, EXIT_DURATION)
    }

    pub fn with_durations(visited: VisitedFlag, show: Duration, exit: Duration) -> Self {
        Self {
            phase: RevealPhase::Idle,
            timer: Timer::new(),
            show,
            exit,
            visited,
            on_complete: None,
        }
    }

    /// Sets the callback run once on reaching `Done`.
    pub fn on_complete(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// True while the overlay should be rendered.
    pub fn is_visible(&self) -> bool {
        self.phase == RevealPhase::Showing
    }

    pub fn is_done(&self) -> bool {
        self.phase == RevealPhase::Done
    }

    /// Enters `Showing` and starts the show timer. Only the first call counts.
    pub fn mount(&mut self, now: Duration) {
        if self.phase != RevealPhase::Idle {
            debug!(phase = ?self.phase, "Splash already mounted");
            return;
        }
        self.phase = RevealPhase::Showing;
        self.timer.schedule(now, self.show);
        debug!("Splash showing");
    }

    /// Cancels pending timers and drops the callback unless already done.
    pub fn teardown(&mut self) {
        self.timer.cancel();
        if self.phase != RevealPhase::Done {
            self.phase = RevealPhase::Cancelled;
            self.on_complete = None;
        }
    }

    fn complete(&mut self) {
        self.phase = RevealPhase::Done;
        self.visited.mark();
        info!("Splash complete");
        if let Some(callback) = self.on_complete.take() {
            callback();
        }
    }
}

impl TimedMachine for RevealSequencer {
    fn next_deadline(&self) -> Option<Duration> {
        self.timer.deadline()
    }

    fn on_deadline(&mut self, now: Duration) {
        if !self.timer.take_if_due(now) {
            return;
        }
        match self.phase {
            RevealPhase::Showing => {
                self.phase = RevealPhase::FadingOut;
                self.timer.schedule(now, self.exit);
                debug!("Splash fading out");
            }
            RevealPhase::FadingOut => self.complete(),
            RevealPhase::Idle | RevealPhase::Done | RevealPhase::Cancelled => {}
        }
    }
}

impl std::fmt::Debug for RevealSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealSequencer")
            .field("phase", &self.phase)
            .field("timer", &self.timer)
            .finish()
    }
}
