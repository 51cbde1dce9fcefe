//! # Folio Core
//!
//! View-state orchestration for the portfolio site, free of any UI
//! framework so it can be tested with virtual time.
//!
//! ## Machines
//!
//! - [`VisibilityTrigger`]: one-shot or continuous "section is on screen" flag
//! - [`RevealSequencer`]: welcome splash, `Showing → FadingOut → Done`
//! - [`Typewriter`]: types, holds and deletes hero phrases in a loop
//! - [`Carousel`]: cyclic experience slides plus contact modal
//! - [`ScrollTracker`]: which navigation section is active
//! - [`OrbitalTimeline`]: rotating project nodes
//!
//! Timer-driven machines implement [`TimedMachine`]; hosts wait until
//! [`TimedMachine::next_deadline`] and then call
//! [`TimedMachine::on_deadline`].

pub mod carousel;
pub mod clock;
pub mod content;
pub mod error;
pub mod format;
pub mod navigation;
pub mod orbit;
pub mod reveal;
pub mod scroll;
pub mod session;
pub mod typewriter;
pub mod visibility;

pub use carousel::*;
pub use clock::*;
pub use content::*;
pub use error::*;
pub use navigation::*;
pub use orbit::*;
pub use reveal::*;
pub use scroll::*;
pub use session::*;
pub use typewriter::*;
pub use visibility::*;
