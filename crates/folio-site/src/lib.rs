//! Single-page portfolio rendered as a Dioxus desktop app.
//!
//! Rendering lives here; every piece of view state (splash sequencing,
//! typewriter, carousel, active section, orbital timeline) is a
//! `folio-core` machine driven by [`driver::drive`] and the hooks in
//! [`hooks`].

pub mod components;
pub mod config;
pub mod driver;
pub mod hooks;
pub mod interop;
pub mod logging;
pub mod state;
pub mod theme;
