//! Gesture-driven pull-up transition between a workspace and an apps
//! surface.
//!
//! A single progress scalar (0 = apps pulled up, 1 = apps hidden) drives
//! every visual. Pointer samples go through a [`PullDetector`]; releases
//! settle with an [`AnimatorSet`] driven by the frame runtime.
//!
//! [`PullDetector`]: pullsheet_foundation::PullDetector
//! [`AnimatorSet`]: pullsheet_animation::AnimatorSet

pub mod config;
pub mod controller;
mod discovery;
pub mod duration;
pub mod progress;
pub mod surfaces;
pub mod visuals;

pub use config::{ConfigError, DiscoveryBounceSpec, TransitionConfig};
pub use controller::{AppsTransitionController, SettleTarget};
pub use duration::DurationCalculator;
pub use progress::{ProgressFrame, ProgressModel};
pub use surfaces::{
    AppsSurface, CaretController, DeviceProfile, Host, Hotseat, TransitionAction,
    TransitionContainer, TransitionDirection, TransitionEvent, Workspace,
};
pub use visuals::VisualBinder;

pub mod prelude {
    pub use crate::config::TransitionConfig;
    pub use crate::controller::{AppsTransitionController, SettleTarget};
    pub use crate::surfaces::{
        AppsSurface, CaretController, DeviceProfile, Host, Hotseat, TransitionEvent, Workspace,
    };
}
