// Shared interaction tuning used by both the web and native frontends.

// Viewport classification
pub const MOBILE_BREAK_PX: f32 = 768.0; // below this the page uses the mobile layouts

// Cover-flow
pub const AUTOPLAY_INTERVAL_MS: f64 = 2200.0; // time between autoplay advances on desktop
pub const DOUBLE_TAP_WINDOW_MS: f64 = 350.0; // two taps on the same card within this re-center it
pub const DRAG_STEP_FRACTION: f32 = 0.6; // fraction of a card width per index step on drag release

// Momentum strip
pub const STRIP_MAX_SPEED: f32 = 0.9; // autoplay top speed, px per frame
pub const STRIP_SPEED_EASE: f32 = 0.06; // exponential approach rate toward top speed
pub const STRIP_BOUNCE_SPEED: f32 = 0.6; // speed fraction retained after a boundary bounce
pub const STRIP_WHEEL_SHIFT_MULT: f32 = 1.8; // wheel delta multiplier while shift is held
pub const VELOCITY_MIN_DT_MS: f64 = 8.0; // floor on the sample interval to avoid velocity spikes
pub const INERTIA_FRAME_MS: f32 = 16.0; // converts px/ms release velocity to px/frame
pub const INERTIA_GAIN: f32 = 14.0; // projected travel per px/frame of release velocity
pub const INERTIA_MAX_TRAVEL: f32 = 1200.0; // clamp on projected inertia travel, px
pub const GLIDE_DURATION_MS: f64 = 420.0; // inertia and snap fallback animation window
pub const RESIZE_SNAP_DELAY_MS: f64 = 150.0; // settle delay before snapping after a resize
