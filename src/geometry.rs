//! Points and the distance predicates used by hit-testing.
//!
//! Everything here is a pure function over finite `f64` inputs. Coordinates
//! are canvas-local pixels; the host normalizes pointer events before they
//! reach the engine.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// An axis-aligned box with `origin` at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// The box spanned by two opposite corners, in either drag direction.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            origin: Point::new(a.x.min(b.x), a.y.min(b.y)),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }
}

/// Shortest distance from `p` to the segment `a`–`b`.
///
/// The projection parameter is clamped to `[0, 1]`, so points beyond either
/// endpoint measure to that endpoint. A zero-length segment measures to `a`.
#[must_use]
pub fn distance_point_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx.mul_add(dx, dy * dy);
    if len_sq == 0.0 {
        return p.distance_to(a);
    }
    let t = ((p.x - a.x).mul_add(dx, (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    let closest = Point::new(t.mul_add(dx, a.x), t.mul_add(dy, a.y));
    p.distance_to(closest)
}

/// True when `p` lies within `tolerance` of the segment `a`–`b` (inclusive).
#[must_use]
pub fn point_near_line(p: Point, a: Point, b: Point, tolerance: f64) -> bool {
    distance_point_to_segment(p, a, b) <= tolerance
}

/// True when `p` lies inside `rect`, edges included.
#[must_use]
pub fn point_in_rectangle(p: Point, rect: &Bounds) -> bool {
    p.x >= rect.origin.x
        && p.x <= rect.origin.x + rect.width
        && p.y >= rect.origin.y
        && p.y <= rect.origin.y + rect.height
}

/// True when `p` lies strictly within `tolerance` of the circle's outline.
#[must_use]
pub fn point_near_circle_edge(p: Point, center: Point, radius: f64, tolerance: f64) -> bool {
    (p.distance_to(center) - radius).abs() < tolerance
}
