//! Infinite lines in implicit form `a·x + b·y + c = 0`.
//!
//! - `Line::through` fixes the coefficient scale: `(a, b)` is the left normal
//!   of `p2 - p1`, so `direction()` recovers `p2 - p1` exactly.
//! - Line–line intersection is a 2×2 solve by Cramer's rule. With
//!   `d = a1·b2 - a2·b1`, the solution is `x = (b1·c2 - b2·c1)/d` and
//!   `y = (a2·c1 - a1·c2)/d`; substituting back gives `a1·x + b1·y = -c1`.

use nalgebra::{Matrix2, Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::cfg::{EPS_DET, EPS_DIST};
use crate::point::Point;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    /// Sentinel returned by `x_at_or_error`.
    pub const ERROR: f64 = Point::ERROR;

    #[inline]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Line through `p1` and `p2`. Coincident points give the degenerate `(0, 0, 0)`.
    #[inline]
    pub fn through(p1: Point, p2: Point) -> Self {
        let a = -(p2.y - p1.y);
        let b = p2.x - p1.x;
        let c = -a * p1.x - b * p1.y;
        Self { a, b, c }
    }

    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        Vector2::new(self.a, self.b)
    }

    /// Direction vector `(b, -a)`; equals `p2 - p1` for `Line::through(p1, p2)`.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        Vector2::new(self.b, -self.a)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.normal().norm() < EPS_DET
    }

    /// Residual `a·x + b·y + c` (zero on the line).
    #[inline]
    pub fn eval(&self, p: Point) -> f64 {
        self.normal().dot(&p.to_vec()) + self.c
    }

    /// Perpendicular distance from `p`; infinite for a degenerate line.
    pub fn distance_to(&self, p: Point) -> f64 {
        let n = self.normal().norm();
        if n < EPS_DET {
            return f64::INFINITY;
        }
        self.eval(p).abs() / n
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.distance_to(p) <= EPS_DIST
    }

    /// `x` on the line at height `y`; `None` for (near-)horizontal lines.
    #[inline]
    pub fn x_at(&self, y: f64) -> Option<f64> {
        if self.a.abs() < EPS_DET {
            return None;
        }
        Some(-(self.b * y + self.c) / self.a)
    }

    /// `x_at` with the `Line::ERROR` sentinel in place of `None`.
    #[inline]
    pub fn x_at_or_error(&self, y: f64) -> f64 {
        self.x_at(y).unwrap_or(Self::ERROR)
    }

    /// `y` on the line at abscissa `x`; `None` for (near-)vertical lines.
    #[inline]
    pub fn y_at(&self, x: f64) -> Option<f64> {
        if self.b.abs() < EPS_DET {
            return None;
        }
        Some(-(self.a * x + self.c) / self.b)
    }

    /// Normalized cross term `sin θ` between the two normals, in `[-1, 1]`.
    fn sin_angle(&self, other: &Line) -> Option<f64> {
        let scale = self.normal().norm() * other.normal().norm();
        if scale < EPS_DET {
            return None;
        }
        let m = Matrix2::new(self.a, self.b, other.a, other.b);
        Some(m.determinant() / scale)
    }

    /// Parallel or coincident (degenerate lines count as parallel to everything).
    #[inline]
    pub fn is_parallel(&self, other: &Line) -> bool {
        self.sin_angle(other).is_none_or(|s| s.abs() < EPS_DET)
    }

    /// Same point set: coefficients equal up to a non-zero scalar.
    pub fn same_as(&self, other: &Line) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        let u = Vector3::new(self.a, self.b, self.c);
        let v = Vector3::new(other.a, other.b, other.c);
        (u / u.norm()).cross(&(v / v.norm())).norm() < EPS_DIST
    }

    /// Intersection of two infinite lines; `None` if parallel or coincident.
    pub fn intersect(line1: &Line, line2: &Line) -> Option<Point> {
        if line1.is_parallel(line2) {
            return None;
        }
        let d = line1.a * line2.b - line2.a * line1.b;
        let x = (line1.b * line2.c - line2.b * line1.c) / d;
        let y = (line2.a * line1.c - line1.a * line2.c) / d;
        Some(Point::new(x, y))
    }

    #[inline]
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        Self::intersect(self, other)
    }
}
