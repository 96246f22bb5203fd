//! Assertion helpers for transition tests.

use crate::fakes::SurfaceCall;

/// Assert that a value is within `tolerance` of the expected one.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that the calls named in `expected` appear in `calls` in that
/// order. Other calls may be interleaved.
pub fn assert_calls_in_order(calls: &[SurfaceCall], expected: &[&str]) {
    let mut remaining = expected.iter().peekable();
    for call in calls {
        if remaining.peek().is_some_and(|name| **name == call.name()) {
            remaining.next();
        }
    }
    let missing: Vec<&&str> = remaining.collect();
    assert!(
        missing.is_empty(),
        "calls {:?} missing or out of order in {:?}",
        missing,
        calls.iter().map(SurfaceCall::name).collect::<Vec<_>>()
    );
}
