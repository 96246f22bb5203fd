//! Gesture foundation for pullsheet
//!
//! Raw pointer samples come in as [`PointerEvent`]s; the [`PullDetector`]
//! turns them into drag start/drag/end events along the vertical axis.

pub mod gesture_constants;
pub mod input;
pub mod pull_detector;
pub mod velocity;

pub use input::{PointerEvent, PointerEventKind};
pub use pull_detector::{DetectorState, DragEvent, DragEvents, DragListener, PullDetector, ScrollDirections};
pub use velocity::VelocitySmoother;

pub mod prelude {
    pub use crate::input::{PointerEvent, PointerEventKind};
    pub use crate::pull_detector::{
        DetectorState, DragEvent, DragListener, PullDetector, ScrollDirections,
    };
    pub use crate::velocity::VelocitySmoother;
}
