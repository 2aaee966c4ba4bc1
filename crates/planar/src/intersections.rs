//! Result of a curve query: zero, one or two points.
//!
//! Replaces "count + out-parameters": the number of points is the variant, so a
//! caller cannot read an unset slot.

use serde::{Deserialize, Serialize};

use crate::cfg::ApproxEq;
use crate::point::Point;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intersections {
    #[default]
    None,
    One(Point),
    Two(Point, Point),
}

impl Intersections {
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Intersections::None => 0,
            Intersections::One(_) => 1,
            Intersections::Two(..) => 2,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Intersections::None)
    }

    #[inline]
    pub fn first(&self) -> Option<Point> {
        self.get(0)
    }

    pub fn get(&self, i: usize) -> Option<Point> {
        match (*self, i) {
            (Intersections::One(p), 0) | (Intersections::Two(p, _), 0) => Some(p),
            (Intersections::Two(_, q), 1) => Some(q),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    pub fn to_vec(&self) -> Vec<Point> {
        self.iter().collect()
    }

    /// Whether some stored point coincides with `p` within `EPS_DIST`.
    pub fn contains_point(&self, p: &Point) -> bool {
        self.iter().any(|q| q.approx_eq(p))
    }

    /// Append `p` unless it duplicates a stored point; a third point is dropped.
    /// Returns whether `p` was stored.
    pub(crate) fn push_unique(&mut self, p: Point) -> bool {
        if self.contains_point(&p) {
            return false;
        }
        match *self {
            Intersections::None => *self = Intersections::One(p),
            Intersections::One(q) => *self = Intersections::Two(q, p),
            Intersections::Two(..) => return false,
        }
        true
    }

    /// Order the two points by `key` (ascending); no-op for fewer points.
    pub(crate) fn sort_by_key<F: Fn(&Point) -> f64>(self, key: F) -> Self {
        match self {
            Intersections::Two(p, q) if key(&q) < key(&p) => Intersections::Two(q, p),
            other => other,
        }
    }
}

impl From<Intersections> for Vec<Point> {
    fn from(hits: Intersections) -> Self {
        hits.to_vec()
    }
}
