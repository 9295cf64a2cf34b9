//! Engine tunables, parsed from the host's JSON configuration.
//!
//! Every field is optional in the JSON; missing fields take the defaults from
//! [`crate::consts`]. Parsed values are validated before use.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    DEFAULT_ARROW_HEAD_ANGLE_DEG, DEFAULT_ARROW_HEAD_LENGTH, DEFAULT_ERASE_TOLERANCE, DEFAULT_FONT_SIZE,
    DEFAULT_TEXT_CHAR_WIDTH,
};
use crate::hit::HitParams;

/// Error returned by [`EngineConfig::from_json`] and [`EngineConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input was not valid JSON for this shape.
    #[error("failed to parse engine config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field parsed but holds an unusable value.
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Erase proximity threshold in pixels.
    pub erase_tolerance: f64,
    /// Arrowhead segment length in pixels.
    pub arrow_head_length: f64,
    /// Arrowhead half-angle from the shaft, in degrees.
    pub arrow_head_angle_deg: f64,
    /// Font size for new text labels, in pixels.
    pub text_font_size: f64,
    /// CSS font family for text labels.
    pub font_family: String,
    /// Average glyph advance as a fraction of font size, for text hit boxes.
    pub text_char_width: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            erase_tolerance: DEFAULT_ERASE_TOLERANCE,
            arrow_head_length: DEFAULT_ARROW_HEAD_LENGTH,
            arrow_head_angle_deg: DEFAULT_ARROW_HEAD_ANGLE_DEG,
            text_font_size: DEFAULT_FONT_SIZE,
            font_family: "Arial".into(),
            text_char_width: DEFAULT_TEXT_CHAR_WIDTH,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("erase_tolerance", self.erase_tolerance)?;
        require_positive("text_font_size", self.text_font_size)?;
        require_positive("text_char_width", self.text_char_width)?;
        require_non_negative("arrow_head_length", self.arrow_head_length)?;
        require_non_negative("arrow_head_angle_deg", self.arrow_head_angle_deg)?;
        if self.font_family.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "font_family", reason: "must not be empty".into() });
        }
        Ok(())
    }

    /// Hit-test parameters derived from this config.
    #[must_use]
    pub fn hit_params(&self) -> HitParams {
        HitParams { tolerance: self.erase_tolerance, text_char_width: self.text_char_width }
    }

    /// Arrowhead half-angle in radians.
    #[must_use]
    pub fn arrow_head_angle(&self) -> f64 {
        self.arrow_head_angle_deg.to_radians()
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: format!("expected a positive number, got {value}") })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: format!("expected a non-negative number, got {value}") })
    }
}
