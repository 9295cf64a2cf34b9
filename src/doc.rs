//! Document model: drawable shapes and the ordered drawing that holds them.
//!
//! A [`Shape`] is immutable once committed; editing is modeled as erase plus
//! recreate. A [`Drawing`] keeps shapes in insertion order, which is also the
//! paint order: later shapes render on top. The renderer and hit-tester both
//! walk [`Drawing::shapes`] front to back.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, Point};

/// A single drawable object.
///
/// Colors are CSS color strings exactly as the toolbar supplies them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// Freehand pen stroke through `points` in order.
    Path { points: Vec<Point>, color: String, stroke_width: f64 },
    /// Straight segment.
    Line { start: Point, end: Point, color: String, stroke_width: f64 },
    /// Axis-aligned rectangle; `origin` is always the top-left corner.
    Rectangle { origin: Point, width: f64, height: f64, color: String, stroke_width: f64, filled: bool },
    /// Circle around `center`.
    Circle { center: Point, radius: f64, color: String, stroke_width: f64, filled: bool },
    /// Segment with a two-stroke head at `end`.
    Arrow { start: Point, end: Point, color: String, stroke_width: f64 },
    /// Single line of text whose baseline starts at `anchor`.
    Text { anchor: Point, text: String, color: String, font_size: f64 },
}

impl Shape {
    /// Rectangle spanned by a drag from `anchor` to `pos`, normalized so the
    /// origin is the top-left corner whichever way the pointer moved.
    #[must_use]
    pub fn rectangle_from_drag(anchor: Point, pos: Point, color: &str, stroke_width: f64, filled: bool) -> Self {
        let bounds = Bounds::from_corners(anchor, pos);
        Self::Rectangle {
            origin: bounds.origin,
            width: bounds.width,
            height: bounds.height,
            color: color.to_owned(),
            stroke_width,
            filled,
        }
    }

    /// Circle centered on `anchor` whose outline passes through `pos`.
    #[must_use]
    pub fn circle_from_drag(anchor: Point, pos: Point, color: &str, stroke_width: f64, filled: bool) -> Self {
        Self::Circle {
            center: anchor,
            radius: anchor.distance_to(pos),
            color: color.to_owned(),
            stroke_width,
            filled,
        }
    }

    /// Short lowercase name of the variant, used in logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Path { .. } => "path",
            Self::Line { .. } => "line",
            Self::Rectangle { .. } => "rectangle",
            Self::Circle { .. } => "circle",
            Self::Arrow { .. } => "arrow",
            Self::Text { .. } => "text",
        }
    }

    /// The shape's color.
    #[must_use]
    pub fn color(&self) -> &str {
        match self {
            Self::Path { color, .. }
            | Self::Line { color, .. }
            | Self::Rectangle { color, .. }
            | Self::Circle { color, .. }
            | Self::Arrow { color, .. }
            | Self::Text { color, .. } => color,
        }
    }
}

/// An ordered sequence of committed shapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    shapes: Vec<Shape>,
}

impl Drawing {
    /// Create an empty drawing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape on top of everything already drawn.
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Keep only the shapes for which `keep` returns true, preserving order.
    /// Returns how many shapes were removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&Shape) -> bool,
    {
        let before = self.shapes.len();
        self.shapes.retain(|s| keep(s));
        before - self.shapes.len()
    }

    /// Shapes in paint order (bottom first).
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of shapes in the drawing.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl From<Vec<Shape>> for Drawing {
    fn from(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }
}
