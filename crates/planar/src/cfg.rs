//! Tolerance defaults for 2D intersections.
//!
//! Policy
//! - Fixed constants, shared by every module. Degeneracy checks on raw
//!   coefficients use `EPS_DET`; anything measured as a distance between
//!   points uses `EPS_DIST`, widened by `EPS_REL` per unit of coordinate
//!   magnitude (`dist_tol`) where coordinates can be large.
//! - Tangency is decided on the squared half-chord `h² = r² - d²`
//!   (`tangent_tol`). Rounding in `h²` is about `ε·r²`, so `h` itself is only
//!   resolved to about `sqrt(ε)·r`; chords with half-length below roughly
//!   `1e-5·r` therefore count as a single tangent point.

use crate::point::Point;

/// Near-zero threshold for line coefficients, determinants and discriminants.
pub const EPS_DET: f64 = 1e-10;
/// Distance under which two points are treated as the same point.
pub const EPS_DIST: f64 = 1e-9;
/// Relative distance allowance per unit of coordinate magnitude.
pub const EPS_REL: f64 = 1e-12;

/// Distance tolerance for points whose coordinates reach `scale` in magnitude.
#[inline]
pub fn dist_tol(scale: f64) -> f64 {
    EPS_DIST.max(scale.abs() * EPS_REL)
}

/// Bound on `|r² - d²|` under which a line counts as tangent to a circle of radius `r`.
#[inline]
pub fn tangent_tol(r: f64) -> f64 {
    EPS_DET * (r * r).max(1.0)
}

pub trait ApproxEq {
    fn approx_eq(&self, other: &Self) -> bool;
}

impl ApproxEq for f64 {
    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        (self - other).abs() <= EPS_DIST
    }
}

impl ApproxEq for Point {
    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        self.distance_squared(other) <= EPS_DIST * EPS_DIST
    }
}

/// `|a - b|` within `EPS_DIST` scaled by the larger magnitude (at least 1).
#[inline]
pub(crate) fn approx_eq_rel(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS_DIST * a.abs().max(b.abs()).max(1.0)
}
