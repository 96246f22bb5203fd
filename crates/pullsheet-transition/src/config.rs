//! Tunables of the transition controller.

use pullsheet_foundation::gesture_constants::{RELEASE_VELOCITY_PX_MS, TOUCH_SLOP};
use pullsheet_ui_graphics::Color;

/// Shape of the discovery bounce that hints the apps surface exists.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiscoveryBounceSpec {
    /// Progress reached at the top of each bounce.
    pub peak_progress: f32,
    /// Duration of one leg (down or up) in milliseconds.
    pub leg_duration_millis: u64,
    /// Extra legs after the first one; an odd count ends back at rest.
    pub repeat_count: u32,
    pub start_delay_millis: u64,
}

impl Default for DiscoveryBounceSpec {
    fn default() -> Self {
        Self {
            peak_progress: 0.94,
            leg_duration_millis: 200,
            repeat_count: 5,
            start_delay_millis: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransitionConfig {
    /// Duration of a full-range settle at the slowest release speed.
    pub animation_duration_millis: u64,
    pub min_animation_duration_millis: u64,
    /// Scale applied to workspace (and landscape hotseat) translation.
    pub parallax_coefficient: f32,
    /// Shift range used until the first hotseat layout arrives.
    pub default_shift_range: f32,
    /// Size of the dead zones at either end of the progress range.
    pub recatch_rejection_fraction: f32,
    /// Height of the bottom edge band that starts a pull in landscape.
    pub bezel_swipe_up_height: f32,
    pub touch_slop: f32,
    /// Release speed in px/ms at or above which a release is a fling.
    pub fling_threshold: f32,
    pub apps_background_color: Color,
    pub discovery_bounce: DiscoveryBounceSpec,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            animation_duration_millis: 1200,
            min_animation_duration_millis: 100,
            parallax_coefficient: 0.125,
            default_shift_range: 10.0,
            recatch_rejection_fraction: 0.0875,
            bezel_swipe_up_height: 18.0,
            touch_slop: TOUCH_SLOP,
            fling_threshold: RELEASE_VELOCITY_PX_MS,
            apps_background_color: Color::from_argb(0xF2FF_FFFF),
            discovery_bounce: DiscoveryBounceSpec::default(),
        }
    }
}

impl TransitionConfig {
    pub fn with_animation_duration(mut self, duration_millis: u64) -> Self {
        self.animation_duration_millis = duration_millis;
        self
    }

    pub fn with_min_animation_duration(mut self, duration_millis: u64) -> Self {
        self.min_animation_duration_millis = duration_millis;
        self
    }

    pub fn with_parallax_coefficient(mut self, coefficient: f32) -> Self {
        self.parallax_coefficient = coefficient;
        self
    }

    pub fn with_default_shift_range(mut self, shift_range: f32) -> Self {
        self.default_shift_range = shift_range;
        self
    }

    pub fn with_recatch_rejection_fraction(mut self, fraction: f32) -> Self {
        self.recatch_rejection_fraction = fraction;
        self
    }

    pub fn with_bezel_swipe_up_height(mut self, height: f32) -> Self {
        self.bezel_swipe_up_height = height;
        self
    }

    pub fn with_touch_slop(mut self, slop: f32) -> Self {
        self.touch_slop = slop;
        self
    }

    pub fn with_fling_threshold(mut self, threshold: f32) -> Self {
        self.fling_threshold = threshold;
        self
    }

    pub fn with_apps_background_color(mut self, color: Color) -> Self {
        self.apps_background_color = color;
        self
    }

    pub fn with_discovery_bounce(mut self, bounce: DiscoveryBounceSpec) -> Self {
        self.discovery_bounce = bounce;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation_duration_millis == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "animation_duration_millis",
            });
        }
        if self.min_animation_duration_millis > self.animation_duration_millis {
            return Err(ConfigError::MinDurationExceedsBase {
                min: self.min_animation_duration_millis,
                base: self.animation_duration_millis,
            });
        }
        check_non_negative("parallax_coefficient", self.parallax_coefficient)?;
        check_non_negative("default_shift_range", self.default_shift_range)?;
        check_non_negative("bezel_swipe_up_height", self.bezel_swipe_up_height)?;
        check_non_negative("touch_slop", self.touch_slop)?;
        if !(self.recatch_rejection_fraction >= 0.0 && self.recatch_rejection_fraction < 0.5) {
            return Err(ConfigError::OutOfRange {
                field: "recatch_rejection_fraction",
                value: self.recatch_rejection_fraction,
            });
        }
        if !(self.fling_threshold.is_finite() && self.fling_threshold > 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "fling_threshold",
                value: self.fling_threshold,
            });
        }
        let bounce = &self.discovery_bounce;
        if !(bounce.peak_progress >= 0.0 && bounce.peak_progress <= 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "discovery_bounce.peak_progress",
                value: bounce.peak_progress,
            });
        }
        if bounce.leg_duration_millis == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "discovery_bounce.leg_duration_millis",
            });
        }
        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    ZeroDuration { field: &'static str },
    MinDurationExceedsBase { min: u64, base: u64 },
    OutOfRange { field: &'static str, value: f32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroDuration { field } => write!(f, "{field} must be positive"),
            ConfigError::MinDurationExceedsBase { min, base } => {
                write!(f, "minimum duration {min}ms exceeds base duration {base}ms")
            }
            ConfigError::OutOfRange { field, value } => {
                write!(f, "{field} out of range: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
