//! Platform abstraction traits for the runtime.
//!
//! These traits let the host drive frame scheduling and supply wall-clock
//! time, so the controller never reaches for a global clock directly and
//! tests can substitute a manual one.

use web_time::{SystemTime, UNIX_EPOCH};

/// Schedules work for the runtime.
///
/// Implementations are responsible for asking the host loop for another
/// frame whenever a frame callback is registered.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Provides wall-clock timing information.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed origin. Only differences are
    /// meaningful.
    fn now_millis(&self) -> u64;
}

/// [`Clock`] backed by the system time (works on wasm through `web-time`).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default()
    }
}
