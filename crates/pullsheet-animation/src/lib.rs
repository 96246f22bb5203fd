//! Animation system for pullsheet
//!
//! This crate provides easing curves, tween specifications and
//! frame-clock-driven animator sets with start/cancel/end listeners.

pub mod animation;
pub mod animator;

pub use animation::*;
pub use animator::{
    AnimatorListener, AnimatorSet, AnimatorState, CancellationToken, RepeatMode, ValueAnimator,
};

pub mod prelude {
    pub use crate::animation::{AnimationSpec, Easing, Lerp};
    pub use crate::animator::{
        AnimatorListener, AnimatorSet, AnimatorState, CancellationToken, RepeatMode,
        ValueAnimator,
    };
}
