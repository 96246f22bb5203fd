//! Pure math/data for pullsheet surfaces
//!
//! Colour values and the handful of geometric primitives the transition
//! controller needs to talk about layout bounds, pointer positions and window
//! insets.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
