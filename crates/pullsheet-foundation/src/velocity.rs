//! Low-pass filtered instantaneous velocity.
//!
//! Unlike an impulse tracker that fits a window of samples, the smoother
//! keeps one running value and blends each new `delta / dt` into it with a
//! first-order RC filter, so it only needs the displacement since the
//! previous call. Pointer samples and animation frames each use their own.

use crate::gesture_constants::{SCROLL_VELOCITY_DAMPENING_RC, VELOCITY_REST_EPSILON};

/// Smoothed 1D velocity in px/ms.
#[derive(Clone, Copy, Debug)]
pub struct VelocitySmoother {
    velocity: f32,
    last_time_ms: u64,
    rc: f32,
}

impl Default for VelocitySmoother {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocitySmoother {
    pub fn new() -> Self {
        Self::with_time_constant(SCROLL_VELOCITY_DAMPENING_RC)
    }

    pub fn with_time_constant(rc_millis: f32) -> Self {
        Self {
            velocity: 0.0,
            last_time_ms: 0,
            rc: rc_millis,
        }
    }

    /// Blends the velocity implied by `delta` since the previous call into the
    /// running value and returns it.
    pub fn compute(&mut self, delta: f32, now_ms: u64) -> f32 {
        let previous_ms = self.last_time_ms;
        self.last_time_ms = now_ms;
        let dt = now_ms as f64 - previous_ms as f64;
        let raw = if dt > 0.0 { (delta as f64 / dt) as f32 } else { 0.0 };

        if self.velocity.abs() < VELOCITY_REST_EPSILON {
            self.velocity = raw;
        } else {
            let alpha = self.dampening_factor(dt as f32);
            self.velocity = (1.0 - alpha) * self.velocity + alpha * raw;
        }
        self.velocity
    }

    /// Zeroes the velocity and restarts the clock at `now_ms`.
    pub fn reset(&mut self, now_ms: u64) {
        self.velocity = 0.0;
        self.last_time_ms = now_ms;
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    // alpha = dt / (RC + dt)
    fn dampening_factor(&self, dt_ms: f32) -> f32 {
        if dt_ms <= 0.0 {
            return 0.0;
        }
        dt_ms / (self.rc + dt_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_is_taken_raw() {
        let mut smoother = VelocitySmoother::new();
        smoother.reset(100);
        assert_eq!(smoother.compute(-32.0, 116), -2.0);
    }

    #[test]
    fn later_samples_are_low_pass_filtered() {
        let mut smoother = VelocitySmoother::new();
        smoother.reset(0);
        smoother.compute(16.0, 16);
        let velocity = smoother.compute(48.0, 32);

        let alpha = 16.0 / (SCROLL_VELOCITY_DAMPENING_RC + 16.0);
        let expected = (1.0 - alpha) * 1.0 + alpha * 3.0;
        assert!((velocity - expected).abs() < 1e-5, "{velocity} vs {expected}");
        assert!(velocity > 1.0 && velocity < 3.0);
    }

    #[test]
    fn zero_time_delta_yields_zero_raw_velocity() {
        let mut smoother = VelocitySmoother::new();
        smoother.reset(50);
        assert_eq!(smoother.compute(10.0, 50), 0.0);
    }

    #[test]
    fn reset_clears_velocity() {
        let mut smoother = VelocitySmoother::new();
        smoother.reset(0);
        smoother.compute(100.0, 10);
        smoother.reset(20);
        assert_eq!(smoother.velocity(), 0.0);
        assert_eq!(smoother.compute(5.0, 25), 1.0);
    }
}
