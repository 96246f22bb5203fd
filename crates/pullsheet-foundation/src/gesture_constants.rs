//! Shared gesture thresholds.
//!
//! Values are in logical pixels and milliseconds.

/// Vertical travel a pointer must cover before a drag starts.
///
/// Matches Android's `ViewConfiguration` touch slop at baseline density.
pub const TOUCH_SLOP: f32 = 8.0;

/// Release speed in px/ms at or above which a release counts as a fling.
pub const RELEASE_VELOCITY_PX_MS: f32 = 1.0;

/// Cut-off frequency of the velocity low-pass filter, in Hz.
pub const VELOCITY_CUTOFF_HZ: f32 = 10.0;

/// Time constant of the velocity low-pass filter, in milliseconds.
pub const SCROLL_VELOCITY_DAMPENING_RC: f32 = 1000.0 / (2.0 * std::f32::consts::PI * VELOCITY_CUTOFF_HZ);

/// Speeds below this magnitude are treated as "at rest" by the smoother.
pub const VELOCITY_REST_EPSILON: f32 = 0.001;
