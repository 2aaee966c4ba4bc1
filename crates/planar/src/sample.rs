//! Seeded random shapes for benches and randomized tests.
//!
//! Model
//! - Points are uniform in an axis-aligned box (`Bounds2`).
//! - Lines go through two distinct sampled points.
//! - Rectangles pick a random diagonal and a random angle on its Thales
//!   circle, then go through `Rect::try_from_three`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so draw `k` of a run can be regenerated alone.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::circle::Circle;
use crate::line::Line;
use crate::point::Point;
use crate::rect::Rect;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// The token for the next draw of the same run.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Axis-aligned sampling box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Point,
    pub max: Point,
}

impl Bounds2 {
    /// Square `[-half, half]²`.
    pub fn centered(half: f64) -> Self {
        let h = half.abs();
        Self {
            min: Point::new(-h, -h),
            max: Point::new(h, h),
        }
    }

    fn span(&self) -> f64 {
        (self.max.x - self.min.x)
            .abs()
            .max((self.max.y - self.min.y).abs())
    }
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self::centered(10.0)
    }
}

fn uniform<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

pub fn draw_point<R: Rng>(rng: &mut R, bounds: Bounds2) -> Point {
    Point::new(
        uniform(rng, bounds.min.x, bounds.max.x),
        uniform(rng, bounds.min.y, bounds.max.y),
    )
}

/// Two sampled points at least 1% of the box span apart; `None` if the box is
/// too small to find them.
fn draw_pair<R: Rng>(rng: &mut R, bounds: Bounds2) -> Option<(Point, Point)> {
    let min_gap = 0.01 * bounds.span();
    if min_gap <= 0.0 {
        return None;
    }
    for _ in 0..64 {
        let p = draw_point(rng, bounds);
        let q = draw_point(rng, bounds);
        if p.distance(&q) >= min_gap {
            return Some((p, q));
        }
    }
    None
}

/// Line through two distinct points of `bounds`.
pub fn draw_line(tok: ReplayToken, bounds: Bounds2) -> Option<Line> {
    let mut rng = tok.to_std_rng();
    let (p, q) = draw_pair(&mut rng, bounds)?;
    Some(Line::through(p, q))
}

/// Circle centered in `bounds` with radius up to half the box span.
pub fn draw_circle(tok: ReplayToken, bounds: Bounds2) -> Circle {
    let mut rng = tok.to_std_rng();
    let center = draw_point(&mut rng, bounds);
    let radius = uniform(&mut rng, 0.0, 0.5 * bounds.span());
    Circle::new(center, radius)
}

/// Rotated rectangle with its diagonal in `bounds` (corners may leave the box).
pub fn draw_rect(tok: ReplayToken, bounds: Bounds2) -> Option<Rect> {
    let mut rng = tok.to_std_rng();
    let (top_left, bottom_right) = draw_pair(&mut rng, bounds)?;
    let center = top_left.midpoint(&bottom_right);
    let r = center.distance(&top_left);
    let base = (top_left.y - center.y).atan2(top_left.x - center.x);
    // stay clear of the diagonal corners themselves
    let theta = base + uniform(&mut rng, 0.1, std::f64::consts::PI - 0.1);
    let third = Point::new(center.x + r * theta.cos(), center.y + r * theta.sin());
    Rect::try_from_three(top_left, bottom_right, third).ok()
}
