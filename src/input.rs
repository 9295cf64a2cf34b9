//! Input model: tools, toolbar settings, keys, and the gesture state machine.
//!
//! `Tool` and `ToolSettings` capture what the toolbar says at the time of an
//! event. The engine reads them per call and never caches them. `InputState`
//! is the gesture being tracked between pointer-down and its resolution,
//! carrying everything needed to build a preview and commit the final shape.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
use crate::doc::Shape;
use crate::geometry::Point;

/// Which tool the toolbar has selected.
///
/// Deserializes from the toolbar's lowercase names. Any unrecognized name
/// becomes [`Tool::Unknown`], which makes pointer gestures do nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand pen (default).
    #[default]
    Pen,
    /// Straight line segment.
    Line,
    /// Axis-aligned rectangle.
    Rectangle,
    /// Circle from center outward.
    Circle,
    /// Line with an arrowhead at the release point.
    Arrow,
    /// Single-line text label.
    Text,
    /// Remove every shape under the pointer.
    Eraser,
    /// A tool name this engine does not know.
    #[serde(other)]
    Unknown,
}

impl Tool {
    /// Whether this tool draws by dragging (pen and the parametric shapes).
    #[must_use]
    pub fn is_drag(self) -> bool {
        matches!(self, Self::Pen | Self::Line | Self::Rectangle | Self::Circle | Self::Arrow)
    }
}

/// Toolbar state supplied with every input event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSettings {
    /// Active tool.
    pub tool: Tool,
    /// CSS color string for new shapes.
    pub color: String,
    /// Brush size in pixels, nominally `1..=20`.
    pub brush_size: u32,
    /// Fill rectangles and circles instead of outlining them.
    #[serde(default)]
    pub filled: bool,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self { tool: Tool::Pen, color: "#000000".into(), brush_size: 3, filled: false }
    }
}

impl ToolSettings {
    /// Brush size clamped into the supported range, as a stroke width.
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        f64::from(self.brush_size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE))
    }
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g.
/// `"Enter"`, `"Escape"`, `"a"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is_enter(&self) -> bool {
        self.0 == "Enter"
    }

    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }

    #[must_use]
    pub fn is_backspace(&self) -> bool {
        self.0 == "Backspace"
    }

    /// The character this key types, if it is a single printable character.
    #[must_use]
    pub fn printable(&self) -> Option<char> {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_control() => Some(c),
            _ => None,
        }
    }
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A drag with a drawing tool is in progress.
    Drawing {
        /// Tool captured at pointer-down; later tool changes do not affect
        /// this gesture.
        tool: Tool,
        /// Where the drag started.
        anchor: Point,
        /// Every pointer position so far (used by the pen).
        path: Vec<Point>,
        /// Shape that would be committed if the gesture ended now.
        preview: Option<Shape>,
    },
    /// Text entry is open at `anchor`.
    TextEditing {
        /// Baseline origin of the label being typed.
        anchor: Point,
        /// Characters typed so far.
        buffer: String,
    },
}

impl InputState {
    /// The live, uncommitted shape for the current gesture, if any.
    #[must_use]
    pub fn preview(&self) -> Option<&Shape> {
        match self {
            Self::Drawing { preview, .. } => preview.as_ref(),
            Self::Idle | Self::TextEditing { .. } => None,
        }
    }

    /// Short name of the state, used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Drawing { .. } => "drawing",
            Self::TextEditing { .. } => "text_editing",
        }
    }
}
