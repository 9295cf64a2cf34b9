//! Hit-testing against drawn shapes, and the erase dispatcher built on it.
//!
//! Each shape variant has its own predicate:
//!
//! | Variant | Hit when |
//! |---------|----------|
//! | `Path` | within tolerance of any recorded point |
//! | `Line`, `Arrow` | within tolerance of the shaft |
//! | `Rectangle` | inside the box, edges included |
//! | `Circle` | within tolerance of the outline |
//! | `Text` | inside the estimated text box above the baseline |
//!
//! Erase has no z-order priority: every shape under the pointer goes.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{DEFAULT_ERASE_TOLERANCE, DEFAULT_TEXT_CHAR_WIDTH};
use crate::doc::{Drawing, Shape};
use crate::geometry::{Bounds, Point, point_in_rectangle, point_near_circle_edge, point_near_line};

/// Parameters shared by every hit-test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitParams {
    /// Proximity threshold in pixels for strokes and outlines.
    pub tolerance: f64,
    /// Average glyph advance as a fraction of font size, for text boxes.
    pub text_char_width: f64,
}

impl Default for HitParams {
    fn default() -> Self {
        Self { tolerance: DEFAULT_ERASE_TOLERANCE, text_char_width: DEFAULT_TEXT_CHAR_WIDTH }
    }
}

/// Estimated box of a text label: it sits above the baseline `anchor` and is
/// one font size tall.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn text_bounds(anchor: Point, text: &str, font_size: f64, char_width: f64) -> Bounds {
    let width = text.chars().count() as f64 * font_size * char_width;
    Bounds { origin: Point::new(anchor.x, anchor.y - font_size), width, height: font_size }
}

/// Whether `pt` is on `shape`.
#[must_use]
pub fn shape_hit(shape: &Shape, pt: Point, params: &HitParams) -> bool {
    match shape {
        Shape::Path { points, .. } => path_hit(points, pt, params.tolerance),
        Shape::Line { start, end, .. } | Shape::Arrow { start, end, .. } => {
            point_near_line(pt, *start, *end, params.tolerance)
        }
        Shape::Rectangle { origin, width, height, .. } => {
            point_in_rectangle(pt, &Bounds { origin: *origin, width: *width, height: *height })
        }
        Shape::Circle { center, radius, .. } => point_near_circle_edge(pt, *center, *radius, params.tolerance),
        Shape::Text { anchor, text, font_size, .. } => {
            point_in_rectangle(pt, &text_bounds(*anchor, text, *font_size, params.text_char_width))
        }
    }
}

/// Only the recorded samples count; the gaps between them do not.
fn path_hit(points: &[Point], pt: Point, tolerance: f64) -> bool {
    points.iter().any(|p| p.distance_to(pt) <= tolerance)
}

/// Return `drawing` without every shape hit at `pt`.
///
/// The input is never modified. Callers compare lengths to decide whether
/// anything was actually erased.
#[must_use]
pub fn erase(pt: Point, drawing: &Drawing, params: &HitParams) -> Drawing {
    let mut next = drawing.clone();
    next.retain(|shape| !shape_hit(shape, pt, params));
    next
}
