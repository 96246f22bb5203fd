//! Core runtime for pullsheet
//!
//! Everything in the workspace runs on one cooperative UI loop. This crate
//! owns the queue of frame callbacks that animations register on, plus the
//! platform hooks (frame scheduling, wall clock) a host plugs in.

mod frame_clock;
mod platform;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::{Clock, RuntimeScheduler, SystemClock};
pub use runtime::{DefaultScheduler, Runtime, RuntimeHandle};

pub type FrameCallbackId = u64;

/// Converts a frame timestamp to whole milliseconds.
#[inline]
pub fn nanos_to_millis(nanos: u64) -> u64 {
    nanos / 1_000_000
}

pub mod prelude {
    pub use crate::frame_clock::{FrameCallbackRegistration, FrameClock};
    pub use crate::platform::{Clock, RuntimeScheduler, SystemClock};
    pub use crate::runtime::{DefaultScheduler, Runtime, RuntimeHandle};
}
