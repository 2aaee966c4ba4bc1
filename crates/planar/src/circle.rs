//! Circles and line–circle intersection.
//!
//! The line is moved into center-local coordinates `(u, v) = (x - cx, y - cy)`
//! and substituted into `u² + v² = r²`:
//! - near-horizontal lines (`|a| < |b|`, which includes `a = 0`) are written as
//!   `v = p·u + q` and solved for `u`;
//! - all other lines are written as `u = p·v + q` and solved for `v`.
//!
//! Either way `|p| <= 1`, and the half-chord² `r² - d²` (with `d` the distance
//! from the center to the line) is computed directly instead of through
//! `B² - 4AC`. Roots come back smaller-first in the solved variable. Tangency
//! follows `cfg::tangent_tol`.

use serde::{Deserialize, Serialize};

use crate::cfg::{tangent_tol, EPS_DIST};
use crate::intersections::Intersections;
use crate::line::Line;
use crate::point::Point;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

/// Real roots of `t ↦ (t, p·t + q)` meeting the circle of radius `r` at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Roots {
    None,
    One(f64),
    Two(f64, f64),
}

fn chord_roots(p: f64, q: f64, r: f64) -> Roots {
    // (1 + p²)·t² + 2pq·t + (q² - r²) = 0
    let qa = 1.0 + p * p;
    let half_chord_sq = (qa * r * r - q * q) / qa;
    let mid = -p * q / qa;
    let tol = tangent_tol(r);
    if half_chord_sq < -tol {
        Roots::None
    } else if half_chord_sq <= tol {
        Roots::One(mid)
    } else {
        let h = (half_chord_sq / qa).sqrt();
        Roots::Two(mid - h, mid + h)
    }
}

impl Circle {
    /// Negative radii are clamped to zero (logged, never an error).
    pub fn new(center: Point, radius: f64) -> Self {
        let radius = if radius < 0.0 {
            tracing::warn!(radius, "circle radius must be non-negative; clamped to 0");
            0.0
        } else {
            radius
        };
        Self { center, radius }
    }

    /// On or inside the circle (with `EPS_DIST` slack).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.center.distance(&p) <= self.radius + EPS_DIST
    }

    /// Points where `line` meets the circle: none, one (tangent) or two.
    pub fn intersection(&self, line: &Line) -> Intersections {
        if line.is_degenerate() {
            return Intersections::None;
        }
        let Point { x: cx, y: cy } = self.center;
        // a·u + b·v + c0 = 0 in center-local coordinates
        let c0 = line.eval(self.center);

        if line.a.abs() < line.b.abs() {
            let (p, q) = (-line.a / line.b, -c0 / line.b);
            let at = |u: f64| Point::new(cx + u, cy + p * u + q);
            return match chord_roots(p, q, self.radius) {
                Roots::None => Intersections::None,
                Roots::One(u) => Intersections::One(at(u)),
                Roots::Two(u1, u2) => Intersections::Two(at(u1), at(u2)),
            };
        }

        let (p, q) = (-line.b / line.a, -c0 / line.a);
        let at = |v: f64| Point::new(cx + p * v + q, cy + v);
        match chord_roots(p, q, self.radius) {
            Roots::None => Intersections::None,
            Roots::One(v) => Intersections::One(at(v)),
            Roots::Two(v1, v2) => Intersections::Two(at(v1), at(v2)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(p: Point, x: f64, y: f64) -> bool {
        (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9
    }

    #[test]
    fn negative_radius_is_clamped() {
        let c = Circle::new(Point::new(1.0, 1.0), -3.0);
        assert_eq!(c.radius, 0.0);
        assert!(c.contains(Point::new(1.0, 1.0)));
    }

    #[test]
    fn vertical_chord_of_radius_five() {
        let c = Circle::new(Point::new(0.0, 0.0), 5.0);
        let x3 = Line::through(Point::new(3.0, -10.0), Point::new(3.0, 10.0));
        match c.intersection(&x3) {
            Intersections::Two(p, q) => {
                // smaller y first
                assert!(close(p, 3.0, -4.0));
                assert!(close(q, 3.0, 4.0));
            }
            other => panic!("expected two points, got {other:?}"),
        }
    }

    #[test]
    fn near_horizontal_branch() {
        let c = Circle::new(Point::new(1.0, 2.0), 5.0);
        let y5 = Line::through(Point::new(-10.0, 5.0), Point::new(10.0, 5.0));
        let hits = c.intersection(&y5);
        assert_eq!(hits.len(), 2);
        // (x - 1)² = 25 - 9 = 16
        assert!(close(hits.get(0).unwrap(), -3.0, 5.0));
        assert!(close(hits.get(1).unwrap(), 5.0, 5.0));

        let tangent = Line::new(0.0, 1.0, -7.0);
        assert_eq!(c.intersection(&tangent), Intersections::One(Point::new(1.0, 7.0)));
        assert!(c.intersection(&Line::new(0.0, 1.0, -8.0)).is_empty());

        // shallow slope: still solved for x, smaller x first
        let shallow = Line::through(Point::new(-4.0, 2.0), Point::new(6.0, 3.0));
        let hits = c.intersection(&shallow);
        assert_eq!(hits.len(), 2);
        assert!(hits.get(0).unwrap().x < hits.get(1).unwrap().x);
        for p in hits.iter() {
            assert!(shallow.contains(p));
            assert!((c.center.distance(&p) - 5.0).abs() < 1e-9);
        }
    }

    #[test]
    fn nearly_horizontal_tangent_far_from_origin() {
        let c = Circle::new(Point::new(1000.0, -500.0), 3.0);
        // tangent at the top of the circle, tilted by a tiny angle
        let top = Point::new(1000.0, -497.0);
        let l = Line::through(top, Point::new(top.x + 1.0, top.y + 1e-9));
        let hits = c.intersection(&l);
        assert_eq!(hits.len(), 1);
        assert!(hits.first().unwrap().distance(&top) < 1e-6);
    }

    #[test]
    fn tangent_policy_resolves_chords_above_sqrt_eps() {
        let c = Circle::new(Point::new(0.0, 0.0), 1.0);
        let chord_at = |h: f64| Line::new(0.0, 1.0, -(1.0 - h * h).sqrt());
        // half-chord 1e-6: below resolution, reported as tangent
        assert_eq!(c.intersection(&chord_at(1e-6)).len(), 1);
        // half-chord 1e-4: two distinct points
        let hits = c.intersection(&chord_at(1e-4));
        assert_eq!(hits.len(), 2);
        let (p, q) = (hits.get(0).unwrap(), hits.get(1).unwrap());
        assert!((p.distance(&q) - 2e-4).abs() < 1e-8);
    }

    #[test]
    fn tangent_and_miss_general_lines() {
        let c = Circle::new(Point::new(0.0, 0.0), 1.0);
        // x + y = √2 touches the unit circle at (√2/2, √2/2)
        let s = std::f64::consts::SQRT_2;
        let tangent = Line::new(1.0, 1.0, -s);
        let hits = c.intersection(&tangent);
        assert_eq!(hits.len(), 1);
        let h = s / 2.0;
        assert!(close(hits.first().unwrap(), h, h));

        let miss = Line::new(1.0, 1.0, -2.0);
        assert!(c.intersection(&miss).is_empty());
    }

    #[test]
    fn hits_lie_on_both_curves() {
        let c = Circle::new(Point::new(-1.5, 0.25), 2.0);
        let l = Line::through(Point::new(-3.0, -1.0), Point::new(1.0, 2.0));
        let hits = c.intersection(&l);
        assert_eq!(hits.len(), 2);
        for p in hits.iter() {
            assert!(l.contains(p));
            assert!((c.center.distance(&p) - c.radius).abs() < 1e-9);
        }
    }

    #[test]
    fn degenerate_line_has_no_hits() {
        let c = Circle::new(Point::new(0.0, 0.0), 1.0);
        assert!(c.intersection(&Line::new(0.0, 0.0, 0.0)).is_empty());
    }

    #[test]
    fn zero_radius_circle_touches_lines_through_center() {
        let c = Circle::new(Point::new(2.0, 3.0), 0.0);
        let l = Line::through(Point::new(0.0, 1.0), Point::new(4.0, 5.0));
        let hits = c.intersection(&l);
        assert_eq!(hits.len(), 1);
        assert!(close(hits.first().unwrap(), 2.0, 3.0));
    }
}
