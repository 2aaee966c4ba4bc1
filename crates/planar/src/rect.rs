//! Rectangles given by four ordered corners.
//!
//! Corners run `top_left → top_right → bottom_right → bottom_left`, so
//! `top_left`/`bottom_right` and `top_right`/`bottom_left` are the diagonals.
//! "Top" and "left" are names for corner slots, not orientation claims: a
//! three-point rectangle may be rotated arbitrarily.
//!
//! Construction
//! - `from_diagonal`: axis-aligned from two diagonal corners, always succeeds.
//! - `try_from_three`: rotated; the third corner must sit on the circle whose
//!   diameter is the diagonal (Thales), and the fourth is its antipode.
//! - `from_three`: `try_from_three`, falling back to `from_diagonal`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cfg::{approx_eq_rel, dist_tol, ApproxEq, EPS_DIST};
use crate::circle::Circle;
use crate::intersections::Intersections;
use crate::line::Line;
use crate::point::Point;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_right: Point,
    pub bottom_left: Point,
}

/// Why a three-point rectangle could not be built as requested.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RectError {
    #[error("third corner is {actual} from the center, expected {expected}")]
    NotCoCircular { expected: f64, actual: f64 },
    #[error("corners are degenerate (coincident points or zero diagonal)")]
    Degenerate,
}

/// Outcome of `Rect::from_three`.
#[derive(Clone, Debug, PartialEq)]
pub enum Built {
    /// Built from the three given corners.
    Exact(Rect),
    /// Input rejected; `rect` is the axis-aligned rectangle on the diagonal.
    Fallback { rect: Rect, reason: RectError },
}

impl Built {
    #[inline]
    pub fn rect(&self) -> &Rect {
        match self {
            Built::Exact(rect) | Built::Fallback { rect, .. } => rect,
        }
    }

    #[inline]
    pub fn into_rect(self) -> Rect {
        match self {
            Built::Exact(rect) | Built::Fallback { rect, .. } => rect,
        }
    }

    #[inline]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Built::Fallback { .. })
    }

    #[inline]
    pub fn reason(&self) -> Option<&RectError> {
        match self {
            Built::Exact(_) => None,
            Built::Fallback { reason, .. } => Some(reason),
        }
    }
}

/// Where the segment `start`–`end` crosses the zero set of a linear function
/// taking the values `rs` at `start` and `re` at `end` (opposite signs).
fn crossing(start: Point, end: Point, rs: f64, re: f64) -> Point {
    let w = re - rs;
    Point::new(
        (start.x * re - end.x * rs) / w,
        (start.y * re - end.y * rs) / w,
    )
}

impl Rect {
    /// Axis-aligned rectangle on the diagonal `top_left`–`bottom_right`.
    pub fn from_diagonal(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            top_right: Point::new(bottom_right.x, top_left.y),
            bottom_right,
            bottom_left: Point::new(top_left.x, bottom_right.y),
        }
    }

    /// Rectangle with diagonal `top_left`–`bottom_right` and `third` as the
    /// `top_right` corner. `bottom_left` is derived.
    pub fn try_from_three(
        top_left: Point,
        bottom_right: Point,
        third: Point,
    ) -> Result<Self, RectError> {
        let center = top_left.midpoint(&bottom_right);
        let radius = center.distance(&top_left);
        if radius <= EPS_DIST || third.approx_eq(&top_left) || third.approx_eq(&bottom_right) {
            return Err(RectError::Degenerate);
        }
        let actual = center.distance(&third);
        if !approx_eq_rel(radius, actual) {
            return Err(RectError::NotCoCircular {
                expected: radius,
                actual,
            });
        }
        // The line through `third` and the center is a diameter: one hit is
        // `third` itself, the other is the missing corner.
        let hits = Circle::new(center, radius).intersection(&Line::through(third, center));
        let fourth = hits
            .iter()
            .max_by(|p, q| p.distance(&third).total_cmp(&q.distance(&third)))
            .filter(|p| !p.approx_eq(&third))
            .ok_or(RectError::Degenerate)?;
        Ok(Self {
            top_left,
            top_right: third,
            bottom_right,
            bottom_left: fourth,
        })
    }

    /// `try_from_three`, or the axis-aligned rectangle on the same diagonal.
    pub fn from_three(top_left: Point, bottom_right: Point, third: Point) -> Built {
        match Self::try_from_three(top_left, bottom_right, third) {
            Ok(rect) => Built::Exact(rect),
            Err(reason) => {
                tracing::warn!(
                    %top_left,
                    %bottom_right,
                    %third,
                    %reason,
                    "rect: falling back to axis-aligned corners"
                );
                Built::Fallback {
                    rect: Self::from_diagonal(top_left, bottom_right),
                    reason,
                }
            }
        }
    }

    #[inline]
    pub fn corners(&self) -> [Point; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.top_left.midpoint(&self.bottom_right)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.top_left.distance(&self.top_right)
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.top_left.distance(&self.bottom_left)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn top_edge(&self) -> Line {
        Line::through(self.top_left, self.top_right)
    }

    pub fn right_edge(&self) -> Line {
        Line::through(self.top_right, self.bottom_right)
    }

    pub fn bottom_edge(&self) -> Line {
        Line::through(self.bottom_left, self.bottom_right)
    }

    pub fn left_edge(&self) -> Line {
        Line::through(self.top_left, self.bottom_left)
    }

    /// Edge segments as `(start, end)` in top, right, bottom, left order.
    /// Each pair matches the points the corresponding `*_edge` line is built from.
    pub fn edges(&self) -> [(Point, Point); 4] {
        [
            (self.top_left, self.top_right),
            (self.top_right, self.bottom_right),
            (self.bottom_left, self.bottom_right),
            (self.top_left, self.bottom_left),
        ]
    }

    /// Inside or on the boundary (with `EPS_DIST` slack); works for rotated
    /// rectangles and for ones collapsed to a segment or a point.
    pub fn contains(&self, p: Point) -> bool {
        let origin = self.top_left.to_vec();
        let w = p.to_vec() - origin;
        let mut residual = w;
        // sides are orthogonal, so projecting onto each in turn decomposes `w`
        for corner in [self.top_right, self.bottom_left] {
            let u = corner.to_vec() - origin;
            let len = u.norm();
            if len < EPS_DIST {
                continue;
            }
            let s = w.dot(&u) / len;
            if !(-EPS_DIST..=len + EPS_DIST).contains(&s) {
                return false;
            }
            residual -= u * (s / len);
        }
        residual.norm() <= EPS_DIST
    }

    /// Points where the infinite `line` crosses the boundary, ordered along
    /// `line.direction()`.
    ///
    /// Each corner is classified once by its signed distance to `line`.
    /// Corners within `dist_tol` of the line are reported as the corner itself,
    /// so a corner shared by two edges is reported once; any other edge whose
    /// ends lie on opposite sides contributes its crossing point. If the line
    /// runs along an edge, the result is that edge's two endpoints.
    pub fn intersection(&self, line: &Line) -> Intersections {
        if line.is_degenerate() {
            return Intersections::None;
        }
        let norm = line.normal().norm();
        let scale = self
            .corners()
            .iter()
            .fold(0.0_f64, |m, p| m.max(p.x.abs()).max(p.y.abs()));
        let tol = dist_tol(scale);
        let side = |p: Point| line.eval(p) / norm;

        let mut hits = Intersections::None;
        for (start, end) in self.edges() {
            if start.approx_eq(&end) {
                continue;
            }
            let (rs, re) = (side(start), side(end));
            match (rs.abs() <= tol, re.abs() <= tol) {
                (true, true) => {
                    hits = Intersections::Two(start, end);
                    break;
                }
                (true, false) => {
                    hits.push_unique(start);
                }
                (false, true) => {
                    hits.push_unique(end);
                }
                (false, false) if (rs < 0.0) != (re < 0.0) => {
                    hits.push_unique(crossing(start, end, rs, re));
                }
                (false, false) => {}
            }
        }
        let dir = line.direction();
        hits.sort_by_key(|p| dir.dot(&p.to_vec()))
    }
}
