//! Shared numeric constants for the annotation engine.

// ── Hit-testing ─────────────────────────────────────────────────

/// Pixel distance within which a pointer counts as touching a stroke.
pub const DEFAULT_ERASE_TOLERANCE: f64 = 10.0;

// ── Arrows ──────────────────────────────────────────────────────

/// Length of each arrowhead segment in canvas pixels.
pub const DEFAULT_ARROW_HEAD_LENGTH: f64 = 10.0;

/// Angle between the shaft and each arrowhead segment, in degrees.
pub const DEFAULT_ARROW_HEAD_ANGLE_DEG: f64 = 30.0;

// ── Text ────────────────────────────────────────────────────────

/// Font size for committed text labels, in pixels.
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// Average glyph advance as a fraction of the font size.
pub const DEFAULT_TEXT_CHAR_WIDTH: f64 = 0.6;

// ── Brush ───────────────────────────────────────────────────────

/// Smallest brush size the toolbar may supply.
pub const MIN_BRUSH_SIZE: u32 = 1;

/// Largest brush size the toolbar may supply.
pub const MAX_BRUSH_SIZE: u32 = 20;
