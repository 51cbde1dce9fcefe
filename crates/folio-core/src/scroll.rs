//! Scroll-driven active section tracking for the navigation bar.
//!
//! Recomputed on every scroll event: the active section is the lowest one
//! whose top edge is at or above the scroll position plus a fixed lookahead.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::error::ContentError;

/// Pixels added to `scrollY` before comparing against section offsets.
pub const LOOKAHEAD: f64 = 100.0;

/// Looks up a section's top offset in document coordinates.
pub trait SectionLocator {
    /// `None` when no element with that id exists.
    fn offset_top(&self, id: &str) -> Option<f64>;
}

impl SectionLocator for HashMap<String, f64> {
    fn offset_top(&self, id: &str) -> Option<f64> {
        self.get(id).copied()
    }
}

impl SectionLocator for BTreeMap<String, f64> {
    fn offset_top(&self, id: &str) -> Option<f64> {
        self.get(id).copied()
    }
}

/// Resolves the active section for a scroll position, without state.
///
/// Walks `sections` bottom to top and returns the first whose offset is
/// `<= scroll_y + LOOKAHEAD`. Missing sections are skipped.
pub fn resolve_active<'a, L: SectionLocator + ?Sized>(
    sections: &'a [String],
    scroll_y: f64,
    locator: &L,
) -> Option<&'a str> {
    let position = scroll_y + LOOKAHEAD;
    sections
        .iter()
        .rev()
        .find(|id| matches!(locator.offset_top(id), Some(top) if top <= position))
        .map(String::as_str)
}

#[derive(Debug, Clone)]
pub struct ScrollTracker {
    sections: Vec<String>,
    active: String,
    attached: bool,
}

impl ScrollTracker {
    /// `sections` in top-to-bottom order; the first starts active.
    pub fn new(sections: Vec<String>) -> Result<Self, ContentError> {
        let active = sections.first().cloned().ok_or(ContentError::EmptyNavigation)?;
        Ok(Self {
            sections,
            active,
            attached: false,
        })
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Attaches the listener. Returns false if it already was.
    pub fn attach(&mut self) -> bool {
        !std::mem::replace(&mut self.attached, true)
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Handles one scroll event. Returns the new active id if it changed.
    ///
    /// When no section qualifies the previous active section is kept.
    pub fn on_scroll<L: SectionLocator + ?Sized>(
        &mut self,
        scroll_y: f64,
        locator: &L,
    ) -> Option<&str> {
        if !self.attached {
            return None;
        }
        let resolved = resolve_active(&self.sections, scroll_y, locator)?;
        if resolved == self.active {
            return None;
        }
        self.active = resolved.to_string();
        debug!(section = %self.active, scroll_y, "Active section changed");
        Some(&self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(entries: &[(&str, f64)]) -> HashMap<String, f64> {
        entries.iter().map(|(id, top)| (id.to_string(), *top)).collect()
    }

    fn tracker() -> ScrollTracker {
        let mut tracker = ScrollTracker::new(
            ["home", "skills", "projects"].iter().map(|s| s.to_string()).collect(),
        )
        .unwrap();
        tracker.attach();
        tracker
    }

    #[test]
    fn test_empty_sections_rejected() {
        assert!(matches!(
            ScrollTracker::new(Vec::new()),
            Err(ContentError::EmptyNavigation)
        ));
    }

    #[test]
    fn test_boundary_arithmetic() {
        let page = offsets(&[("home", 0.0), ("skills", 800.0), ("projects", 1600.0)]);
        let mut tracker = tracker();

        assert_eq!(tracker.on_scroll(699.0, &page), None);
        assert_eq!(tracker.active(), "home");

        assert_eq!(tracker.on_scroll(700.0, &page), Some("skills"));
        assert_eq!(tracker.on_scroll(750.0, &page), None);
        assert_eq!(tracker.active(), "skills");

        assert_eq!(tracker.on_scroll(1500.0, &page), Some("projects"));
        assert_eq!(tracker.on_scroll(699.0, &page), Some("home"));
    }

    #[test]
    fn test_missing_sections_skipped() {
        let page = offsets(&[("home", 0.0), ("projects", 1600.0)]);
        let mut tracker = tracker();

        tracker.on_scroll(1000.0, &page);
        assert_eq!(tracker.active(), "home");
        tracker.on_scroll(1600.0, &page);
        assert_eq!(tracker.active(), "projects");
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let page = offsets(&[("home", 0.0), ("skills", 800.0)]);
        let mut tracker = tracker();
        tracker.on_scroll(900.0, &page);
        assert_eq!(tracker.active(), "skills");

        let shifted = offsets(&[("home", 5000.0), ("skills", 6000.0)]);
        assert_eq!(tracker.on_scroll(0.0, &shifted), None);
        assert_eq!(tracker.active(), "skills");

        assert_eq!(tracker.on_scroll(0.0, &HashMap::<String, f64>::new()), None);
        assert_eq!(tracker.active(), "skills");
    }

    #[test]
    fn test_recomputed_every_event() {
        let mut tracker = tracker();
        let before = offsets(&[("home", 0.0), ("skills", 800.0)]);
        tracker.on_scroll(100.0, &before);
        assert_eq!(tracker.active(), "home");

        // Layout changed underneath without scrolling.
        let after = offsets(&[("home", 0.0), ("skills", 150.0)]);
        assert_eq!(tracker.on_scroll(100.0, &after), Some("skills"));
    }

    #[test]
    fn test_detached_ignores_events() {
        let page = offsets(&[("home", 0.0), ("skills", 800.0)]);
        let mut tracker = tracker();
        tracker.detach();

        assert_eq!(tracker.on_scroll(2000.0, &page), None);
        assert_eq!(tracker.active(), "home");
    }

    #[test]
    fn test_attach_once() {
        let mut tracker = ScrollTracker::new(vec!["home".to_string()]).unwrap();
        assert!(tracker.attach());
        assert!(!tracker.attach());
        tracker.detach();
        assert!(tracker.attach());
    }

    #[test]
    fn test_resolve_active_btreemap() {
        let sections: Vec<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        let mut page = BTreeMap::new();
        page.insert("a".to_string(), 0.0);
        page.insert("b".to_string(), 100.0);

        assert_eq!(resolve_active(&sections, 0.0, &page), Some("b"));
        assert_eq!(resolve_active(&sections, -1.0, &page), Some("a"));
        assert_eq!(resolve_active(&sections, -101.0, &page), None);
    }
}
