//! Radial orbital timeline for the projects section.
//!
//! Projects sit on a circle that slowly rotates. Selecting one stops the
//! rotation, turns the circle so the node faces the top, and pulses the
//! nodes related to it.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use tracing::debug;

use crate::clock::{TimedMachine, Timer, ms};
use crate::content::Project;

/// Rotation tick period while auto-rotating.
pub const ROTATION_TICK: Duration = ms(50);

/// Degrees advanced per tick.
pub const ROTATION_STEP: f64 = 0.3;

/// Circle radius in pixels.
pub const ORBIT_RADIUS: f64 = 200.0;

/// Angle (degrees) a selected node is turned to: the top of the circle.
pub const FOCUS_ANGLE: f64 = 270.0;

/// Where and how a node is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeLayout {
    pub angle: f64,
    pub x: f64,
    pub y: f64,
    pub z_index: i32,
    pub opacity: f64,
}

#[derive(Debug, Clone)]
pub struct OrbitalTimeline {
    ids: Vec<u32>,
    related: HashMap<u32, Vec<u32>>,
    rotation: f64,
    auto_rotate: bool,
    expanded: Option<u32>,
    pulsing: HashSet<u32>,
    timer: Timer,
    mounted: bool,
}

impl OrbitalTimeline {
    pub fn new(projects: &[Project]) -> Self {
        Self {
            ids: projects.iter().map(|p| p.id).collect(),
            related: projects
                .iter()
                .map(|p| (p.id, p.related_ids.clone()))
                .collect(),
            rotation: 0.0,
            auto_rotate: true,
            expanded: None,
            pulsing: HashSet::new(),
            timer: Timer::new(),
            mounted: false,
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_auto_rotating(&self) -> bool {
        self.auto_rotate
    }

    pub fn expanded(&self) -> Option<u32> {
        self.expanded
    }

    pub fn is_expanded(&self, id: u32) -> bool {
        self.expanded == Some(id)
    }

    pub fn is_pulsing(&self, id: u32) -> bool {
        self.pulsing.contains(&id)
    }

    pub fn related(&self, id: u32) -> &[u32] {
        self.related.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when `id` is related to the expanded node.
    pub fn is_related_to_expanded(&self, id: u32) -> bool {
        self.expanded
            .is_some_and(|expanded| self.related(expanded).contains(&id))
    }

    pub fn mount(&mut self, now: Duration) {
        self.mounted = true;
        if self.auto_rotate {
            self.timer.schedule(now, ROTATION_TICK);
        }
    }

    pub fn teardown(&mut self) {
        self.mounted = false;
        self.timer.cancel();
    }

    fn base_angle(&self, index: usize) -> f64 {
        if self.ids.is_empty() {
            return 0.0;
        }
        (index as f64 / self.ids.len() as f64) * 360.0
    }

    pub fn layout(&self, index: usize) -> NodeLayout {
        let angle = (self.base_angle(index) + self.rotation).rem_euclid(360.0);
        let radians = angle.to_radians();
        let opacity = (0.4 + 0.6 * ((1.0 + radians.sin()) / 2.0)).clamp(0.4, 1.0);
        NodeLayout {
            angle,
            x: ORBIT_RADIUS * radians.cos(),
            y: ORBIT_RADIUS * radians.sin(),
            z_index: (100.0 + 50.0 * radians.cos()).round() as i32,
            opacity,
        }
    }

    /// Selects or deselects a node.
    pub fn toggle(&mut self, id: u32, now: Duration) {
        if self.expanded == Some(id) {
            self.resume(now);
            return;
        }
        let Some(index) = self.ids.iter().position(|&candidate| candidate == id) else {
            return;
        };
        self.expanded = Some(id);
        self.auto_rotate = false;
        self.timer.cancel();
        self.pulsing = self.related(id).iter().copied().collect();
        self.rotation = (FOCUS_ANGLE - self.base_angle(index)).rem_euclid(360.0);
        debug!(id, rotation = self.rotation, "Project focused");
    }

    /// Background click: collapse and resume rotating.
    pub fn resume(&mut self, now: Duration) {
        self.expanded = None;
        self.pulsing.clear();
        self.auto_rotate = true;
        if self.mounted {
            self.timer.schedule(now, ROTATION_TICK);
        }
    }
}

impl TimedMachine for OrbitalTimeline {
    fn next_deadline(&self) -> Option<Duration> {
        self.timer.deadline()
    }

    fn on_deadline(&mut self, now: Duration) {
        if !self.auto_rotate || !self.timer.take_if_due(now) {
            return;
        }
        self.rotation = (self.rotation + ROTATION_STEP).rem_euclid(360.0);
        self.timer.schedule(now, ROTATION_TICK);
    }
}
