//! Rendering: replays a drawing, plus the live preview, onto a 2D surface.
//!
//! Drawing goes through the [`Surface`] trait, a small subset of the Canvas2D
//! API. [`web_sys::CanvasRenderingContext2d`] implements it for the browser,
//! and tests substitute a recording surface. Rendering reads the drawing and
//! never mutates application state.
//!
//! Paint order is: clear, committed shapes bottom first, then the preview so
//! the shape being dragged is always on top.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::config::EngineConfig;
use crate::doc::{Drawing, Shape};
use crate::geometry::Point;

/// The drawing operations the renderer needs from a raster target.
pub trait Surface {
    /// Error reported by fallible operations.
    type Error;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn set_stroke_style(&mut self, color: &str);
    fn set_fill_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_line_cap(&mut self, cap: &str);
    fn set_line_join(&mut self, join: &str);
    fn set_font(&mut self, font: &str);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    /// Add a circular arc to the current path.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the surface rejects the arc (e.g. negative radius).
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), Self::Error>;
    fn stroke(&mut self);
    fn fill(&mut self);
    /// Draw `text` with its baseline starting at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the surface cannot draw text.
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Self::Error>;
}

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.set_stroke_style_str(color);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn set_line_cap(&mut self, cap: &str) {
        CanvasRenderingContext2d::set_line_cap(self, cap);
    }

    fn set_line_join(&mut self, join: &str) {
        CanvasRenderingContext2d::set_line_join(self, join);
    }

    fn set_font(&mut self, font: &str) {
        CanvasRenderingContext2d::set_font(self, font);
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::rect(self, x, y, width, height);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::arc(self, x, y, radius, start, end)
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }

    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::fill_text(self, text, x, y)
    }
}

/// Draw the full scene: clear, every committed shape, then `preview`.
///
/// `viewport_w` and `viewport_h` are the surface size in pixels.
///
/// # Errors
///
/// Returns `Err` if any fallible surface call fails.
pub fn draw<S: Surface>(
    surface: &mut S,
    drawing: &Drawing,
    preview: Option<&Shape>,
    viewport_w: f64,
    viewport_h: f64,
    config: &EngineConfig,
) -> Result<(), S::Error> {
    surface.clear_rect(0.0, 0.0, viewport_w, viewport_h);

    for shape in drawing.shapes() {
        draw_shape(surface, shape, config)?;
    }
    if let Some(shape) = preview {
        draw_shape(surface, shape, config)?;
    }
    Ok(())
}

/// The two arrowhead tips for an arrow from `start` to `end`.
///
/// Each tip lies `length` back from `end`, rotated `half_angle` radians to
/// either side of the shaft.
#[must_use]
pub fn arrow_head(start: Point, end: Point, length: f64, half_angle: f64) -> [Point; 2] {
    let angle = (end.y - start.y).atan2(end.x - start.x);
    let tip = |a: f64| Point::new(length.mul_add(-a.cos(), end.x), length.mul_add(-a.sin(), end.y));
    [tip(angle - half_angle), tip(angle + half_angle)]
}

// =============================================================
// Shape dispatch
// =============================================================

fn draw_shape<S: Surface>(surface: &mut S, shape: &Shape, config: &EngineConfig) -> Result<(), S::Error> {
    match shape {
        Shape::Path { points, color, stroke_width } => {
            apply_style(surface, color, *stroke_width);
            draw_path(surface, points, *stroke_width)
        }
        Shape::Line { start, end, color, stroke_width } => {
            apply_style(surface, color, *stroke_width);
            stroke_segment(surface, *start, *end);
            Ok(())
        }
        Shape::Rectangle { origin, width, height, color, stroke_width, filled } => {
            apply_style(surface, color, *stroke_width);
            surface.begin_path();
            surface.rect(origin.x, origin.y, *width, *height);
            paint(surface, *filled);
            Ok(())
        }
        Shape::Circle { center, radius, color, stroke_width, filled } => {
            apply_style(surface, color, *stroke_width);
            surface.begin_path();
            surface.arc(center.x, center.y, *radius, 0.0, TAU)?;
            paint(surface, *filled);
            Ok(())
        }
        Shape::Arrow { start, end, color, stroke_width } => {
            apply_style(surface, color, *stroke_width);
            draw_arrow(surface, *start, *end, config);
            Ok(())
        }
        Shape::Text { anchor, text, color, font_size } => {
            surface.set_fill_style(color);
            surface.set_font(&format!("{font_size}px {}", config.font_family));
            surface.fill_text(text, anchor.x, anchor.y)
        }
    }
}

fn apply_style<S: Surface>(surface: &mut S, color: &str, stroke_width: f64) {
    surface.set_stroke_style(color);
    surface.set_fill_style(color);
    surface.set_line_width(stroke_width);
    surface.set_line_cap("round");
    surface.set_line_join("round");
}

fn paint<S: Surface>(surface: &mut S, filled: bool) {
    if filled {
        surface.fill();
    } else {
        surface.stroke();
    }
}

fn stroke_segment<S: Surface>(surface: &mut S, a: Point, b: Point) {
    surface.begin_path();
    surface.move_to(a.x, a.y);
    surface.line_to(b.x, b.y);
    surface.stroke();
}

/// A lone point renders as a filled dot one stroke wide.
fn draw_path<S: Surface>(surface: &mut S, points: &[Point], stroke_width: f64) -> Result<(), S::Error> {
    match points {
        [] => Ok(()),
        [only] => {
            surface.begin_path();
            surface.arc(only.x, only.y, stroke_width / 2.0, 0.0, TAU)?;
            surface.fill();
            Ok(())
        }
        [first, rest @ ..] => {
            surface.begin_path();
            surface.move_to(first.x, first.y);
            for p in rest {
                surface.line_to(p.x, p.y);
            }
            surface.stroke();
            Ok(())
        }
    }
}

fn draw_arrow<S: Surface>(surface: &mut S, start: Point, end: Point, config: &EngineConfig) {
    stroke_segment(surface, start, end);

    let [left, right] = arrow_head(start, end, config.arrow_head_length, config.arrow_head_angle());
    surface.begin_path();
    surface.move_to(end.x, end.y);
    surface.line_to(left.x, left.y);
    surface.move_to(end.x, end.y);
    surface.line_to(right.x, right.y);
    surface.stroke();
}
