//! Settle duration from release velocity and remaining travel.

/// Maps a release to a bounded settle duration.
///
/// `duration = max(min, base * travel / divisor)` where
/// `divisor = max(1.5, 0.5 * |velocity|)` and
/// `travel = max(0.2, remaining / shift_range)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DurationCalculator {
    base_duration_millis: u64,
    min_duration_millis: u64,
}

const MIN_VELOCITY_DIVISOR: f64 = 1.5;
const MIN_TRAVEL_FRACTION: f64 = 0.2;

impl DurationCalculator {
    pub fn new(base_duration_millis: u64, min_duration_millis: u64) -> Self {
        Self {
            base_duration_millis,
            min_duration_millis,
        }
    }

    pub fn calculate(&self, velocity: f32, remaining: f32, shift_range: f32) -> u64 {
        let divisor = MIN_VELOCITY_DIVISOR.max((0.5 * velocity as f64).abs());
        let travel = if shift_range > 0.0 {
            MIN_TRAVEL_FRACTION.max(remaining as f64 / shift_range as f64)
        } else {
            MIN_TRAVEL_FRACTION
        };
        let scaled = (self.base_duration_millis as f64 * travel / divisor).round();
        let duration = (scaled as u64).max(self.min_duration_millis);
        log::debug!(
            "settle duration {duration}ms for velocity {velocity} px/ms, remaining {remaining} px"
        );
        duration
    }
}

impl Default for DurationCalculator {
    fn default() -> Self {
        Self::new(1200, 100)
    }
}
