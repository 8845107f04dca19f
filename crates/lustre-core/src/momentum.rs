//! Momentum scroll engine for the product strip.
//!
//! Owns a horizontal scroll offset driven by three competing inputs: a
//! continuous eased autoplay, pointer drags with inertial release, and
//! wheel/keyboard jumps. The host feeds layout metrics in and paints the
//! offset out; time arrives as an explicit `now_ms` so the whole thing runs
//! under tests without a clock.

use crate::constants::{
    GLIDE_DURATION_MS, INERTIA_FRAME_MS, INERTIA_GAIN, INERTIA_MAX_TRAVEL, STRIP_BOUNCE_SPEED,
    STRIP_MAX_SPEED, STRIP_SPEED_EASE, STRIP_WHEEL_SHIFT_MULT, VELOCITY_MIN_DT_MS,
};

/// Horizontal extent of one strip child, in content coordinates.
#[derive(Clone, Copy, Debug, Default)]
pub struct ItemBounds {
    pub left: f32,
    pub width: f32,
}

impl ItemBounds {
    #[inline]
    pub fn center(&self) -> f32 {
        self.left + self.width / 2.0
    }
}

/// Ephemeral pointer-drag state. Velocity is estimated from the last two
/// move samples only, with a floored denominator so near-simultaneous events
/// cannot spike it.
#[derive(Clone, Copy, Debug)]
pub struct DragSession {
    start_x: f32,
    start_offset: f32,
    last_sample_time: f64,
    last_sample_x: f32,
    velocity: f32, // px per ms, signed in pointer direction
}

/// Fixed-window offset animation with cubic ease-out, used for both inertia
/// and the snap fallback when native smooth scrolling is unavailable.
#[derive(Clone, Copy, Debug)]
struct Glide {
    from: f32,
    to: f32,
    start_ms: f64,
    snap_after: bool,
}

impl Glide {
    fn sample(&self, now_ms: f64) -> f32 {
        let t = ((now_ms - self.start_ms) / GLIDE_DURATION_MS).clamp(0.0, 1.0) as f32;
        let eased = 1.0 - (1.0 - t) * (1.0 - t) * (1.0 - t);
        (self.from + (self.to - self.from) * eased).round()
    }

    fn is_done(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= GLIDE_DURATION_MS
    }
}

/// What a frame step did, so the host knows whether to repaint and whether a
/// snap pass is due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Idle,
    Autoplay,
    Gliding,
    /// A glide finished this frame; `snap` asks the host to run snap-to-nearest.
    Settled {
        snap: bool,
    },
}

pub struct MomentumStrip {
    offset: f32,
    scroll_width: f32,
    viewport_width: f32,
    items: Vec<ItemBounds>,
    dir: f32,
    speed: f32,
    paused: bool,
    focus_within: bool,
    reduced_motion: bool,
    drag: Option<DragSession>,
    glide: Option<Glide>,
}

impl Default for MomentumStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl MomentumStrip {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            scroll_width: 0.0,
            viewport_width: 0.0,
            items: Vec::new(),
            dir: 1.0,
            speed: STRIP_MAX_SPEED * 0.5,
            paused: false,
            focus_within: false,
            reduced_motion: false,
            drag: None,
            glide: None,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_scroll(&self) -> f32 {
        (self.scroll_width - self.viewport_width).max(0.0)
    }

    pub fn overflowing(&self) -> bool {
        self.scroll_width > self.viewport_width
    }

    pub fn drag_active(&self) -> bool {
        self.drag.is_some()
    }

    pub fn gliding(&self) -> bool {
        self.glide.is_some()
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn set_focus_within(&mut self, inside: bool) {
        self.focus_within = inside;
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    /// Content and viewport extents, from the host's layout pass.
    pub fn set_metrics(&mut self, scroll_width: f32, viewport_width: f32) {
        self.scroll_width = scroll_width;
        self.viewport_width = viewport_width;
        self.offset = self.clamp(self.offset);
    }

    /// Per-child bounds, in the same content coordinates as the offset.
    pub fn set_items(&mut self, items: Vec<ItemBounds>) {
        self.items = items;
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Adopt an offset the host observed directly (native smooth scrolling
    /// moves the DOM without going through the engine).
    pub fn sync_offset(&mut self, offset: f32) {
        self.offset = self.clamp(offset);
    }

    #[inline]
    fn clamp(&self, v: f32) -> f32 {
        v.clamp(0.0, self.max_scroll())
    }

    fn autoplay_suppressed(&self) -> bool {
        self.paused || self.focus_within || self.drag.is_some() || self.reduced_motion
    }

    /// Advance one animation frame. At most one state transition is applied:
    /// an active glide wins over autoplay, and a drag suspends both (drag
    /// moves arrive through [`drag_move`], not here).
    pub fn frame(&mut self, now_ms: f64) -> FrameOutcome {
        if let Some(g) = self.glide {
            if self.reduced_motion {
                // Collapse the animation to its end state immediately.
                self.offset = self.clamp(g.to);
                self.glide = None;
                return FrameOutcome::Settled { snap: g.snap_after };
            }
            self.offset = self.clamp(g.sample(now_ms));
            if g.is_done(now_ms) {
                self.glide = None;
                return FrameOutcome::Settled { snap: g.snap_after };
            }
            return FrameOutcome::Gliding;
        }

        if self.autoplay_suppressed() || !self.overflowing() {
            return FrameOutcome::Idle;
        }

        // Exponential approach toward top speed, then a damped bounce at the
        // edges: direction flips and speed drops instead of dead-stopping.
        self.speed += (STRIP_MAX_SPEED - self.speed) * STRIP_SPEED_EASE;
        let mut next = self.offset + self.speed * self.dir;
        let max = self.max_scroll();
        if next >= max {
            next = max;
            self.dir = -1.0;
            self.speed = STRIP_MAX_SPEED * STRIP_BOUNCE_SPEED;
        } else if next <= 0.0 {
            next = 0.0;
            self.dir = 1.0;
            self.speed = STRIP_MAX_SPEED * STRIP_BOUNCE_SPEED;
        }
        self.offset = next;
        FrameOutcome::Autoplay
    }

    /// Pointer-down: capture the anchor and cancel any in-flight glide.
    pub fn begin_drag(&mut self, client_x: f32, now_ms: f64) {
        self.glide = None;
        self.drag = Some(DragSession {
            start_x: client_x,
            start_offset: self.offset,
            last_sample_time: now_ms,
            last_sample_x: client_x,
            velocity: 0.0,
        });
    }

    /// Pointer-move while dragging: follow the pointer 1:1 (clamped) and
    /// refresh the velocity estimate from this and the previous sample.
    pub fn drag_move(&mut self, client_x: f32, now_ms: f64) {
        let max = self.max_scroll();
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let dx = client_x - drag.start_x;
        self.offset = (drag.start_offset - dx).clamp(0.0, max);

        let dt = (now_ms - drag.last_sample_time).max(VELOCITY_MIN_DT_MS);
        drag.velocity = ((client_x - drag.last_sample_x) as f64 / dt) as f32;
        drag.last_sample_time = now_ms;
        drag.last_sample_x = client_x;
    }

    /// Pointer-up: convert the release velocity into a bounded inertia glide
    /// ending in a snap pass. Under reduced motion the projected target is
    /// applied on the next frame instead of animated.
    pub fn end_drag(&mut self, now_ms: f64) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let per_frame = drag.velocity * INERTIA_FRAME_MS;
        let travel = (per_frame * INERTIA_GAIN).clamp(-INERTIA_MAX_TRAVEL, INERTIA_MAX_TRAVEL);
        let target = self.clamp(self.offset - travel);
        self.glide = Some(Glide {
            from: self.offset,
            to: target,
            start_ms: now_ms,
            snap_after: true,
        });
    }

    /// Wheel input remapped to horizontal. Ignored when nothing overflows so
    /// the page keeps its native vertical scrolling.
    pub fn wheel(&mut self, delta_y: f32, shift_held: bool) -> bool {
        if !self.overflowing() {
            return false;
        }
        let mult = if shift_held {
            STRIP_WHEEL_SHIFT_MULT
        } else {
            1.0
        };
        self.offset = self.clamp(self.offset + delta_y * mult);
        true
    }

    /// Index of the child whose center is nearest the viewport center.
    pub fn nearest_index(&self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        let center = self.offset + self.viewport_width / 2.0;
        let mut best_i = 0usize;
        let mut best_dist = f32::MAX;
        for (i, item) in self.items.iter().enumerate() {
            let dist = (item.center() - center).abs();
            if dist < best_dist {
                best_dist = dist;
                best_i = i;
            }
        }
        Some(best_i)
    }

    /// Offset that centers item `i` in the viewport, clamped to valid range.
    pub fn snap_target(&self, i: usize) -> Option<f32> {
        let item = self.items.get(i)?;
        Some(self.clamp(item.left - (self.viewport_width - item.width) / 2.0))
    }

    /// Animate toward `target` with the cubic ease-out fallback (used when
    /// native smooth scrolling is unavailable). No snap pass afterwards.
    pub fn start_glide(&mut self, target: f32, now_ms: f64) {
        let target = self.clamp(target);
        if self.reduced_motion {
            self.offset = target;
            return;
        }
        self.glide = Some(Glide {
            from: self.offset,
            to: target,
            start_ms: now_ms,
            snap_after: false,
        });
    }
}
