//! 2D point value type.
//!
//! - `Point`: plain `(x, y)` pair with Euclidean distance.
//! - `Point::INVALID`: reserved "no such point" value. Queries in this crate
//!   return `Option<Point>` instead; the sentinel only exists for rendering and
//!   for callers that must store a placeholder in a plain `Point` slot.

use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Reserved coordinate value meaning "no value".
    pub const ERROR: f64 = f64::MAX;
    /// Sentinel point `(ERROR, ERROR)`.
    pub const INVALID: Point = Point {
        x: Self::ERROR,
        y: Self::ERROR,
    };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Reassign both coordinates in place.
    #[inline]
    pub fn assign(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    #[inline]
    pub fn to_vec(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (other.to_vec() - self.to_vec()).norm()
    }

    #[inline]
    pub fn distance_squared(&self, other: &Point) -> f64 {
        (other.to_vec() - self.to_vec()).norm_squared()
    }

    #[inline]
    pub fn midpoint(&self, other: &Point) -> Point {
        ((self.to_vec() + other.to_vec()) * 0.5).into()
    }

    /// True iff both coordinates are finite and neither is the reserved `ERROR`.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.x != Self::ERROR && self.y != Self::ERROR && self.x.is_finite() && self.y.is_finite()
    }

    /// Lift an optional query result into the sentinel form.
    #[inline]
    pub fn or_invalid(p: Option<Point>) -> Point {
        p.unwrap_or(Self::INVALID)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vec()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "Point({}, {})", self.x, self.y)
        } else {
            f.write_str("Point(invalid)")
        }
    }
}
