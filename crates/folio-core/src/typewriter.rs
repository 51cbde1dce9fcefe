//! Typewriter phrase cycler for the hero headline.
//!
//! Types the current phrase one character per tick, holds it, deletes it one
//! character per tick, then moves on to the next phrase (wrapping). The cycle
//! only runs while armed. A single [`Timer`] carries every step, so typing,
//! holding and deleting can never overlap.

use std::time::Duration;

use tracing::debug;

use crate::clock::{TimedMachine, Timer, ms};
use crate::error::ContentError;

/// Delay between typed characters.
pub const TYPING_DELAY: Duration = ms(100);

/// Delay between deleted characters.
pub const DELETING_DELAY: Duration = ms(50);

/// Pause on a fully typed phrase before deleting.
pub const HOLD_DELAY: Duration = ms(2_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterPhase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    index: usize,
    /// Number of characters of the current phrase on display.
    shown: usize,
    phase: TypewriterPhase,
    armed: bool,
    timer: Timer,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>) -> Result<Self, ContentError> {
        if phrases.is_empty() {
            return Err(ContentError::EmptyPhrases);
        }
        Ok(Self {
            phrases,
            index: 0,
            shown: 0,
            phase: TypewriterPhase::Typing,
            armed: false,
            timer: Timer::new(),
        })
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    pub fn is_deleting(&self) -> bool {
        self.phase == TypewriterPhase::Deleting
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// The typed prefix of the current phrase.
    pub fn displayed(&self) -> &str {
        let phrase = self.current_phrase();
        match phrase.char_indices().nth(self.shown) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    fn phrase_len(&self) -> usize {
        self.current_phrase().chars().count()
    }

    fn step_delay(&self) -> Duration {
        match self.phase {
            TypewriterPhase::Typing => TYPING_DELAY,
            TypewriterPhase::Holding => HOLD_DELAY,
            TypewriterPhase::Deleting => DELETING_DELAY,
        }
    }

    /// Starts or stops the cycle. Disarming freezes the display.
    pub fn set_armed(&mut self, armed: bool, now: Duration) {
        if armed == self.armed {
            return;
        }
        self.armed = armed;
        if armed {
            self.timer.schedule(now, self.step_delay());
        } else {
            self.timer.cancel();
        }
    }

    pub fn teardown(&mut self) {
        self.armed = false;
        self.timer.cancel();
    }

    fn step(&mut self, now: Duration) {
        match self.phase {
            TypewriterPhase::Typing => {
                if self.shown < self.phrase_len() {
                    self.shown += 1;
                } else {
                    self.phase = TypewriterPhase::Holding;
                }
            }
            TypewriterPhase::Holding => {
                self.phase = TypewriterPhase::Deleting;
            }
            TypewriterPhase::Deleting => {
                if self.shown > 0 {
                    self.shown -= 1;
                } else {
                    self.phase = TypewriterPhase::Typing;
                    self.index = (self.index + 1) % self.phrases.len();
                    debug!(index = self.index, phrase = %self.current_phrase(), "Next phrase");
                }
            }
        }
        self.timer.schedule(now, self.step_delay());
    }
}

impl TimedMachine for Typewriter {
    fn next_deadline(&self) -> Option<Duration> {
        self.timer.deadline()
    }

    fn on_deadline(&mut self, now: Duration) {
        if self.armed && self.timer.take_if_due(now) {
            self.step(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::drive_until;

    fn typewriter(phrases: &[&str]) -> Typewriter {
        Typewriter::new(phrases.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_empty_list_rejected() {
        assert!(matches!(Typewriter::new(Vec::new()), Err(ContentError::EmptyPhrases)));
    }

    #[test]
    fn test_unarmed_does_nothing() {
        let mut tw = typewriter(&["Hello"]);
        assert_eq!(tw.next_deadline(), None);
        assert_eq!(drive_until(&mut tw, ms(10_000)), 0);
        assert_eq!(tw.displayed(), "");
    }

    #[test]
    fn test_types_one_char_per_tick() {
        let mut tw = typewriter(&["Rust"]);
        tw.set_armed(true, ms(0));

        drive_until(&mut tw, ms(100));
        assert_eq!(tw.displayed(), "R");
        drive_until(&mut tw, ms(399));
        assert_eq!(tw.displayed(), "Rus");
        drive_until(&mut tw, ms(400));
        assert_eq!(tw.displayed(), "Rust");
        assert!(!tw.is_deleting());
    }

    #[test]
    fn test_two_phrase_cycle() {
        let mut tw = typewriter(&["A", "BB"]);
        tw.set_armed(true, ms(0));

        drive_until(&mut tw, ms(100));
        assert_eq!((tw.phrase_index(), tw.displayed()), (0, "A"));

        // Full at 200ms, holds until 2200ms, deletes at 2250ms, advances at 2300ms.
        drive_until(&mut tw, ms(2_199));
        assert_eq!(tw.phase(), TypewriterPhase::Holding);
        drive_until(&mut tw, ms(2_200));
        assert!(tw.is_deleting());
        drive_until(&mut tw, ms(2_250));
        assert_eq!(tw.displayed(), "");
        drive_until(&mut tw, ms(2_300));
        assert_eq!(tw.phrase_index(), 1);
        assert!(!tw.is_deleting());

        drive_until(&mut tw, ms(2_500));
        assert_eq!(tw.displayed(), "BB");

        drive_until(&mut tw, ms(4_750));
        assert_eq!(tw.phrase_index(), 0);
        drive_until(&mut tw, ms(4_850));
        assert_eq!(tw.displayed(), "A");
    }

    #[test]
    fn test_prefix_invariant_every_tick() {
        let mut tw = typewriter(&["A", "BB", "héllo"]);
        tw.set_armed(true, ms(0));

        let mut last_len = 0;
        let mut last_index = 0;
        for _ in 0..500 {
            let deadline = tw.next_deadline().unwrap();
            let was_deleting = tw.is_deleting();
            tw.on_deadline(deadline);

            let shown = tw.displayed();
            assert!(tw.current_phrase().starts_with(shown));
            assert!(shown.chars().count() <= tw.current_phrase().chars().count());

            let len = shown.chars().count();
            if tw.phrase_index() == last_index {
                if was_deleting && tw.is_deleting() {
                    assert!(len <= last_len);
                } else if !was_deleting && !tw.is_deleting() {
                    assert!(len >= last_len);
                }
            } else {
                // Only advances from an empty display.
                assert_eq!(last_len, 0);
                assert_eq!(tw.phrase_index(), (last_index + 1) % 3);
            }
            last_len = len;
            last_index = tw.phrase_index();
        }
    }

    #[test]
    fn test_single_pending_timer() {
        let mut tw = typewriter(&["abc"]);
        tw.set_armed(true, ms(0));
        tw.set_armed(true, ms(30));
        assert_eq!(tw.next_deadline(), Some(ms(100)));
    }

    #[test]
    fn test_disarm_freezes_and_rearm_resumes() {
        let mut tw = typewriter(&["abc"]);
        tw.set_armed(true, ms(0));
        drive_until(&mut tw, ms(200));
        assert_eq!(tw.displayed(), "ab");

        tw.set_armed(false, ms(250));
        assert_eq!(drive_until(&mut tw, ms(5_000)), 0);
        assert_eq!(tw.displayed(), "ab");

        tw.set_armed(true, ms(5_000));
        drive_until(&mut tw, ms(5_100));
        assert_eq!(tw.displayed(), "abc");
    }

    #[test]
    fn test_teardown_stops_ticks() {
        let mut tw = typewriter(&["abc"]);
        tw.set_armed(true, ms(0));
        tw.teardown();

        tw.on_deadline(ms(100));
        assert_eq!(tw.displayed(), "");
        assert_eq!(tw.next_deadline(), None);
    }

    #[test]
    fn test_multibyte_prefix() {
        let mut tw = typewriter(&["héllo"]);
        tw.set_armed(true, ms(0));
        drive_until(&mut tw, ms(200));
        assert_eq!(tw.displayed(), "hé");
    }
}
