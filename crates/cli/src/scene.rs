//! JSON scene files: one query line against one shape.
//!
//! ```json
//! { "shape": { "circle": { "center": { "x": 0, "y": 0 }, "radius": 5 } },
//!   "line":  { "through": [ { "x": 3, "y": 0 }, { "x": 3, "y": 1 } ] } }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{bail, ensure, Context, Result};
use planar::{Circle, Intersections, Line, Point, Rect};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSpec {
    Coeffs { a: f64, b: f64, c: f64 },
    Through([Point; 2]),
}

impl LineSpec {
    pub fn to_line(&self) -> Line {
        match *self {
            LineSpec::Coeffs { a, b, c } => Line::new(a, b, c),
            LineSpec::Through([p1, p2]) => Line::through(p1, p2),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Line(LineSpec),
    Circle { center: Point, radius: f64 },
    /// Two diagonal corners (axis-aligned) or diagonal + third corner.
    Rect { corners: Vec<Point> },
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Scene {
    pub shape: Shape,
    pub line: LineSpec,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Outcome {
    pub count: usize,
    pub points: Vec<Point>,
    /// Set when a three-corner rectangle fell back to its axis-aligned form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

impl Outcome {
    fn from_hits(hits: Intersections, fallback: Option<String>) -> Self {
        Self {
            count: hits.len(),
            points: hits.to_vec(),
            fallback,
        }
    }
}

pub fn load(path: &Path) -> Result<Scene> {
    let raw = fs::read(path).with_context(|| format!("reading scene {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("parsing scene {}", path.display()))
}

pub fn evaluate(scene: &Scene) -> Result<Outcome> {
    let query = scene.line.to_line();
    ensure!(!query.is_degenerate(), "query line is degenerate: {query:?}");
    let outcome = match &scene.shape {
        Shape::Line(spec) => {
            let other = spec.to_line();
            ensure!(!other.is_degenerate(), "shape line is degenerate: {other:?}");
            let hits = match other.intersection(&query) {
                Some(p) => Intersections::One(p),
                None => Intersections::None,
            };
            Outcome::from_hits(hits, None)
        }
        Shape::Circle { center, radius } => {
            let circle = Circle::new(*center, *radius);
            Outcome::from_hits(circle.intersection(&query), None)
        }
        Shape::Rect { corners } => match corners.as_slice() {
            [tl, br] => {
                let rect = Rect::from_diagonal(*tl, *br);
                Outcome::from_hits(rect.intersection(&query), None)
            }
            [tl, br, third] => {
                let built = Rect::from_three(*tl, *br, *third);
                let fallback = built.reason().map(|r| r.to_string());
                Outcome::from_hits(built.rect().intersection(&query), fallback)
            }
            other => bail!("rect needs 2 or 3 corners, got {}", other.len()),
        },
    };
    tracing::info!(count = outcome.count, "evaluated scene");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn parse(json: &str) -> Scene {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn circle_scene_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scene.json");
        fs::write(
            &path,
            r#"{ "shape": { "circle": { "center": { "x": 0, "y": 0 }, "radius": 5 } },
                 "line": { "through": [ { "x": 3, "y": 0 }, { "x": 3, "y": 1 } ] } }"#,
        )
        .unwrap();
        let out = evaluate(&load(&path).unwrap()).unwrap();
        assert_eq!(out.count, 2);
        assert!((out.points[0].y + 4.0).abs() < 1e-9);
        assert!((out.points[1].y - 4.0).abs() < 1e-9);
    }

    #[test]
    fn rect_scene_and_fallback() {
        let axis = parse(
            r#"{ "shape": { "rect": { "corners": [ { "x": 0, "y": 0 }, { "x": 4, "y": 2 } ] } },
                 "line": { "coeffs": { "a": 1, "b": 0, "c": -2 } } }"#,
        );
        let out = evaluate(&axis).unwrap();
        // x = 2 written as (1, 0, -2) points towards -y
        assert_eq!(out.points, vec![Point::new(2.0, 2.0), Point::new(2.0, 0.0)]);
        assert!(out.fallback.is_none());

        let bad = parse(
            r#"{ "shape": { "rect": { "corners": [ { "x": 0, "y": 0 }, { "x": 4, "y": 2 }, { "x": 1, "y": 1 } ] } },
                 "line": { "coeffs": { "a": 1, "b": 0, "c": -2 } } }"#,
        );
        let out = evaluate(&bad).unwrap();
        assert_eq!(out.count, 2);
        assert!(out.fallback.is_some());
    }

    #[test]
    fn line_scene_and_errors() {
        let crossing = parse(
            r#"{ "shape": { "line": { "coeffs": { "a": 0, "b": 1, "c": -1 } } },
                 "line": { "coeffs": { "a": 1, "b": 0, "c": -3 } } }"#,
        );
        assert_eq!(evaluate(&crossing).unwrap().points, vec![Point::new(3.0, 1.0)]);

        let one_corner = parse(
            r#"{ "shape": { "rect": { "corners": [ { "x": 0, "y": 0 } ] } },
                 "line": { "coeffs": { "a": 1, "b": 0, "c": -3 } } }"#,
        );
        assert!(evaluate(&one_corner).is_err());

        let degenerate = parse(
            r#"{ "shape": { "circle": { "center": { "x": 0, "y": 0 }, "radius": 1 } },
                 "line": { "through": [ { "x": 1, "y": 1 }, { "x": 1, "y": 1 } ] } }"#,
        );
        assert!(evaluate(&degenerate).is_err());
        assert!(load(Path::new("/nonexistent/scene.json")).is_err());
    }
}
