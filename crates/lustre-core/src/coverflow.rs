//! Cover-flow engine for the explore stage.
//!
//! Pure state machine: given an item count, an active index, and a viewport
//! class it derives one [`CardTransform`] per item. The rendering layer paints
//! whatever this produces; nothing here touches a DOM. All index math clamps
//! rather than failing.

use crate::constants::{AUTOPLAY_INTERVAL_MS, DOUBLE_TAP_WINDOW_MS, DRAG_STEP_FRACTION};
use glam::Vec3;
use smallvec::SmallVec;

/// Width class of the hosting viewport. Mobile renders a flat scroll list and
/// only uses the active index for the explicit double-tap gesture; desktop
/// gets the full 3D treatment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

/// Visual transform for a single card, in CSS-ish units: px for the
/// translation vector, degrees for rotation, 0..1 for opacity and
/// desaturation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardTransform {
    pub translate: Vec3,
    pub rotate_y: f32,
    pub scale: f32,
    pub opacity: f32,
    pub desaturation: f32,
    pub blur: f32,
    pub border_radius: f32,
    pub stack_order: i32,
}

/// Per-viewport tuning for the transform formulas.
#[derive(Clone, Copy, Debug)]
pub struct FlowTuning {
    pub card_w: f32,
    pub card_h: f32,
    pub gap: f32,
    pub tilt_deg: f32,
    pub tilt_factor: f32,
    pub max_depth: f32,
    pub arc_k: f32,
    pub depth_lift: f32,
    pub center_scale: f32,
    pub edge_blur: f32,
}

impl FlowTuning {
    pub fn for_viewport(viewport: ViewportClass) -> Self {
        match viewport {
            ViewportClass::Desktop => Self {
                card_w: 340.0,
                card_h: 360.0,
                gap: 48.0,
                tilt_deg: 20.0,
                tilt_factor: 1.0,
                max_depth: 360.0,
                arc_k: 6.0,
                depth_lift: 12.0,
                center_scale: 1.12,
                edge_blur: 2.2,
            },
            ViewportClass::Mobile => Self {
                card_w: 280.0,
                card_h: 320.0,
                gap: 20.0,
                tilt_deg: 8.0,
                tilt_factor: 0.35,
                max_depth: 160.0,
                arc_k: 3.5,
                depth_lift: 8.0,
                center_scale: 1.06,
                edge_blur: 1.5,
            },
        }
    }
}

/// What an autoplay tick did, so hosts can log or repaint selectively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Suppressed,
    Stepped,
    Bounced,
}

/// Frame-time accumulator for the autoplay cadence. The accumulator is
/// clamped to one interval, so a stalled frame clock (a throttled background
/// tab resuming with seconds of delta) releases a single tick, not a burst.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutoplayClock {
    accum_ms: f64,
}

impl AutoplayClock {
    pub fn reset(&mut self) {
        self.accum_ms = 0.0;
    }

    /// Returns `true` when an interval has elapsed. At most one per call.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        self.accum_ms = (self.accum_ms + dt_ms).min(AUTOPLAY_INTERVAL_MS);
        if self.accum_ms >= AUTOPLAY_INTERVAL_MS {
            self.accum_ms = 0.0;
            true
        } else {
            false
        }
    }
}

pub struct CoverFlow {
    item_count: usize,
    active: usize,
    viewport: ViewportClass,
    autoplay_running: bool,
    autoplay_dir: i32,
    reduced_motion: bool,
    dragging: bool,
    // (index, timestamp ms) of the previous tap, for double-tap detection
    last_tap: Option<(usize, f64)>,
}

impl CoverFlow {
    /// Starts centered, matching the original stage (`floor(count / 2)`).
    pub fn new(item_count: usize, viewport: ViewportClass) -> Self {
        Self {
            item_count,
            active: item_count / 2,
            viewport,
            autoplay_running: true,
            autoplay_dir: 1,
            reduced_motion: false,
            dragging: false,
            last_tap: None,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    pub fn autoplay_running(&self) -> bool {
        self.autoplay_running
    }

    pub fn autoplay_dir(&self) -> i32 {
        self.autoplay_dir
    }

    pub fn set_viewport(&mut self, viewport: ViewportClass) {
        self.viewport = viewport;
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    /// Dragging suspends autoplay ticking without touching the running flag.
    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    fn clamp_index(&self, i: i64) -> usize {
        if self.item_count == 0 {
            return 0;
        }
        i.clamp(0, self.item_count as i64 - 1) as usize
    }

    /// Focus an item directly (click on a card). Clamped into range.
    pub fn set_active(&mut self, i: usize) {
        self.active = self.clamp_index(i as i64);
    }

    /// Arrow-key step. Clamps at the boundaries; never wraps.
    pub fn advance(&mut self, dir: i32) {
        self.active = self.clamp_index(self.active as i64 + dir as i64);
    }

    /// Convert a horizontal drag distance into a discrete index delta and
    /// apply it. Positive `offset_x` means the stage was dragged rightward,
    /// which moves the focus left.
    pub fn drag_release(&mut self, offset_x: f32) {
        let step = FlowTuning::for_viewport(self.viewport).card_w * DRAG_STEP_FRACTION;
        let delta = (-offset_x / step).round() as i64;
        if delta != 0 {
            self.active = self.clamp_index(self.active as i64 + delta);
        }
    }

    fn autoplay_allowed(&self) -> bool {
        self.autoplay_running
            && !self.dragging
            && !self.reduced_motion
            && self.viewport == ViewportClass::Desktop
            && self.item_count > 1
    }

    /// One ping-pong autoplay step. On overrunning either boundary the
    /// direction flips and the index steps back one position from the edge
    /// rather than reflecting by the overshoot distance; with two items this
    /// simply oscillates.
    pub fn autoplay_tick(&mut self) -> TickOutcome {
        if !self.autoplay_allowed() {
            return TickOutcome::Suppressed;
        }
        let count = self.item_count as i64;
        let mut next = self.active as i64 + self.autoplay_dir as i64;
        let mut bounced = false;
        if next >= count {
            self.autoplay_dir = -1;
            next = if count - 2 >= 0 { count - 2 } else { count - 1 };
            bounced = true;
        } else if next < 0 {
            self.autoplay_dir = 1;
            next = 1.min(count - 1);
            bounced = true;
        }
        self.active = self.clamp_index(next);
        if bounced {
            TickOutcome::Bounced
        } else {
            TickOutcome::Stepped
        }
    }

    /// Flip the running flag. Direction resets to forward as a side effect;
    /// it does not resume from wherever the ping-pong left it.
    pub fn toggle_autoplay(&mut self) {
        self.autoplay_running = !self.autoplay_running;
        self.autoplay_dir = 1;
    }

    /// Register a tap on a card. Returns `true` when this completes a
    /// double-tap (same index twice within the tap window, mobile only), in
    /// which case the card has been centered.
    pub fn tap(&mut self, i: usize, now_ms: f64) -> bool {
        if self.viewport != ViewportClass::Mobile {
            return false;
        }
        match self.last_tap {
            Some((idx, t)) if idx == i && now_ms - t < DOUBLE_TAP_WINDOW_MS => {
                self.set_active(i);
                self.last_tap = None;
                true
            }
            _ => {
                self.last_tap = Some((i, now_ms));
                false
            }
        }
    }

    /// Transform for one card at the current active index.
    pub fn transform_for(&self, i: usize) -> CardTransform {
        let t = FlowTuning::for_viewport(self.viewport);
        let diff = i as f32 - self.active as f32;
        let abs = diff.abs();

        let step_x = t.card_w * 0.52 + t.gap * 0.18;
        let translate_x = diff * step_x;
        let rotate_y = diff * -t.tilt_deg * t.tilt_factor;

        let depth = (1.0 - abs.powf(1.05) * 0.45).max(0.0);
        let translate_z = (depth * t.max_depth).round();

        // Shallow downward bow for neighbors, lifted back up in proportion to
        // depth so the center card sits highest on the shelf.
        let arc = -diff * diff * t.arc_k + if diff < 0.0 { -t.arc_k } else { t.arc_k };
        let translate_y = -(arc - depth * t.depth_lift);

        let scale = if abs == 0.0 {
            t.center_scale
        } else {
            1.0 - (abs * 0.05).min(0.14)
        };
        // Hard three-tier falloff keyed on distance from center.
        let (opacity, desaturation) = if abs == 0.0 {
            (1.0, 0.0)
        } else if abs == 1.0 {
            (0.94, 0.04)
        } else {
            (0.3, 0.28)
        };
        let blur = if abs > 1.0 { t.edge_blur } else { 0.0 };
        let border_radius = if abs == 0.0 { 18.0 } else { 12.0 };
        let stack_order = 3000 - (abs as i32) * 50 + translate_z as i32;

        CardTransform {
            translate: Vec3::new(translate_x, translate_y, translate_z),
            rotate_y,
            scale,
            opacity,
            desaturation,
            blur,
            border_radius,
            stack_order,
        }
    }

    /// Recompute transforms for every card. Always a full pass; the set is
    /// small and the formulas depend only on distance from the active index.
    pub fn transforms(&self) -> SmallVec<[CardTransform; 8]> {
        (0..self.item_count).map(|i| self.transform_for(i)).collect()
    }
}
