//! Testing utilities for pullsheet
//!
//! Recording fakes for every collaborator of the transition controller, a
//! manual clock and [`TransitionTestRule`], a harness that owns a frame
//! runtime and drives gestures and frames at explicit timestamps.

pub mod assertions;
pub mod fakes;
pub mod rule;

pub use assertions::*;
pub use fakes::*;
pub use rule::*;

pub mod prelude {
    pub use crate::assertions::{assert_approx_eq, assert_calls_in_order};
    pub use crate::fakes::{
        CallLog, FakeAppsSurface, FakeCaret, FakeHost, FakeHotseat, FakeWorkspace, ManualClock,
        SurfaceCall,
    };
    pub use crate::rule::TransitionTestRule;
}
