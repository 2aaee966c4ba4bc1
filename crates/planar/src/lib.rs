//! Closed-form 2D intersections for points, lines, circles and rectangles.
//!
//! Layout
//! - `cfg`: the shared tolerance policy (`EPS_DET`, `EPS_DIST`, `ApproxEq`).
//! - `point`, `line`, `circle`, `rect`: value types and their queries.
//! - `intersections`: the 0/1/2-point result returned by curve queries.
//! - `sample`: seeded random inputs for benches and randomized tests.
//!
//! "No solution" is always a value (`Option`, `Intersections::None`), never a
//! sentinel coordinate and never a panic.

pub mod cfg;
pub mod circle;
pub mod intersections;
pub mod line;
pub mod point;
pub mod rect;
pub mod sample;


/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{ApproxEq, EPS_DET, EPS_DIST};
pub use circle::Circle;
pub use intersections::Intersections;
pub use line::Line;
pub use point::Point;
pub use rect::{Built, Rect, RectError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::sample::{Bounds2, ReplayToken};
    pub use crate::{ApproxEq, Built, Circle, Intersections, Line, Point, Rect, RectError};
    pub use nalgebra::Vector2 as Vec2;
}
