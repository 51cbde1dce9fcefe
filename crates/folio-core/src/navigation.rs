//! Compact navigation menu state.

use tracing::debug;

use crate::content::{NavItem, anchor_of};
use crate::error::ContentError;
use crate::scroll::ScrollTracker;

/// Something the host has to do in response to a menu interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Smooth-scroll to the element with this id (no-op if it is missing).
    ScrollTo(String),
    /// Download the resume file.
    DownloadResume(String),
}

/// Dropdown menu plus the scroll tracker that highlights its active entry.
#[derive(Debug, Clone)]
pub struct NavMenu {
    items: Vec<NavItem>,
    open: bool,
    tracker: ScrollTracker,
    resume_file_name: String,
}

impl NavMenu {
    pub fn new(
        items: Vec<NavItem>,
        resume_file_name: impl Into<String>,
    ) -> Result<Self, ContentError> {
        let ids = items
            .iter()
            .map(|item| item.anchor().map(str::to_string))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            items,
            open: false,
            tracker: ScrollTracker::new(ids)?,
            resume_file_name: resume_file_name.into(),
        })
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn tracker(&self) -> &ScrollTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut ScrollTracker {
        &mut self.tracker
    }

    pub fn is_active(&self, item: &NavItem) -> bool {
        self.tracker.is_active(&item.id)
    }

    /// Clicking an entry (or the brand button) scrolls and closes the menu.
    pub fn click(&mut self, href: &str) -> Result<NavAction, ContentError> {
        let target = anchor_of(href)?.to_string();
        self.open = false;
        debug!(%target, "Navigate");
        Ok(NavAction::ScrollTo(target))
    }

    pub fn download_resume(&mut self) -> NavAction {
        self.open = false;
        NavAction::DownloadResume(self.resume_file_name.clone())
    }
}
