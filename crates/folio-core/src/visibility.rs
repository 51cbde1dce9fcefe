//! Viewport visibility trigger.
//!
//! Gates entrance animations and the typewriter on a section having been
//! seen. The host reports intersection changes (from an intersection
//! observer, or by feeding rectangles through [`Viewport::is_intersecting`])
//! while the trigger is attached.

use tracing::debug;

/// Observation settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityOptions {
    /// Fraction of the element that must be inside the root, 0.0 to 1.0.
    pub threshold: f64,
    /// Pixels added to the bottom edge of the root; negative shrinks it.
    pub root_margin_bottom: f64,
    /// Latch on the first intersection and never revert.
    pub trigger_once: bool,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin_bottom: -50.0,
            trigger_once: false,
        }
    }
}

impl VisibilityOptions {
    pub fn once() -> Self {
        Self {
            trigger_once: true,
            ..Self::default()
        }
    }
}

/// An element's bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// The visible window area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Fraction of `rect` inside the viewport after applying the margin.
    pub fn intersection_ratio(&self, rect: &Rect, root_margin_bottom: f64) -> f64 {
        let root_bottom = self.height + root_margin_bottom;
        let overlap_w = (rect.right().min(self.width) - rect.left.max(0.0)).max(0.0);
        let overlap_h = (rect.bottom().min(root_bottom) - rect.top.max(0.0)).max(0.0);

        let area = rect.width * rect.height;
        if area <= 0.0 {
            let inside = rect.left >= 0.0
                && rect.left <= self.width
                && rect.top >= 0.0
                && rect.top <= root_bottom;
            return if inside { 1.0 } else { 0.0 };
        }
        (overlap_w * overlap_h) / area
    }

    pub fn is_intersecting(&self, rect: &Rect, options: &VisibilityOptions) -> bool {
        let ratio = self.intersection_ratio(rect, options.root_margin_bottom);
        if options.threshold <= 0.0 {
            ratio > 0.0
        } else {
            ratio >= options.threshold
        }
    }
}

/// One-shot or continuous "has become visible" flag.
#[derive(Debug, Clone)]
pub struct VisibilityTrigger {
    options: VisibilityOptions,
    attached: bool,
    visible: bool,
    has_intersected: bool,
}

impl VisibilityTrigger {
    pub fn new(options: VisibilityOptions) -> Self {
        Self {
            options,
            attached: false,
            visible: false,
            has_intersected: false,
        }
    }

    pub fn options(&self) -> &VisibilityOptions {
        &self.options
    }

    /// Starts accepting observations. Attaching twice is a no-op.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Stops accepting observations; later reports are ignored.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Records an intersection report. Returns true if the exposed flag changed.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if !self.attached {
            return false;
        }
        let before = self.is_active();
        self.visible = intersecting;
        if intersecting {
            self.has_intersected = true;
        }
        if self.options.trigger_once && self.has_intersected {
            // Latched; nothing left to watch.
            self.attached = false;
        }
        let changed = before != self.is_active();
        if changed {
            debug!(active = self.is_active(), "Visibility changed");
        }
        changed
    }

    /// Records a geometry sample.
    pub fn observe_rect(&mut self, viewport: &Viewport, rect: &Rect) -> bool {
        let intersecting = viewport.is_intersecting(rect, &self.options);
        self.observe(intersecting)
    }

    /// The exposed flag: latched when one-shot, live otherwise.
    pub fn is_active(&self) -> bool {
        if self.options.trigger_once {
            self.has_intersected
        } else {
            self.visible
        }
    }

    pub fn has_intersected(&self) -> bool {
        self.has_intersected
    }
}

impl Default for VisibilityTrigger {
    fn default() -> Self {
        Self::new(VisibilityOptions::default())
    }
}
