#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_config_is_valid() {
    let config = EngineConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.erase_tolerance, 10.0);
    assert_eq!(config.arrow_head_length, 10.0);
    assert_eq!(config.text_font_size, 16.0);
    assert_eq!(config.font_family, "Arial");
}

#[test]
fn empty_json_yields_defaults() {
    let config = EngineConfig::from_json("{}").unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn partial_json_overrides_only_given_fields() {
    let config = EngineConfig::from_json(r#"{ "erase_tolerance": 4.5, "font_family": "Helvetica" }"#).unwrap();
    assert_eq!(config.erase_tolerance, 4.5);
    assert_eq!(config.font_family, "Helvetica");
    assert_eq!(config.arrow_head_length, 10.0);
}

#[test]
fn malformed_json_is_parse_error() {
    let err = EngineConfig::from_json("{ erase_tolerance: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn zero_tolerance_is_rejected() {
    let err = EngineConfig::from_json(r#"{ "erase_tolerance": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "erase_tolerance", .. }));
    assert!(err.to_string().contains("erase_tolerance"));
}

#[test]
fn negative_head_length_is_rejected() {
    let config = EngineConfig { arrow_head_length: -1.0, ..EngineConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::Invalid { field: "arrow_head_length", .. })));
}

#[test]
fn zero_head_length_is_allowed() {
    let config = EngineConfig { arrow_head_length: 0.0, ..EngineConfig::default() };
    assert!(config.validate().is_ok());
}

#[test]
fn non_finite_font_size_is_rejected() {
    let config = EngineConfig { text_font_size: f64::NAN, ..EngineConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::Invalid { field: "text_font_size", .. })));
}

#[test]
fn blank_font_family_is_rejected() {
    let config = EngineConfig { font_family: "  ".into(), ..EngineConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::Invalid { field: "font_family", .. })));
}

#[test]
fn hit_params_follow_config() {
    let config = EngineConfig { erase_tolerance: 3.0, text_char_width: 0.5, ..EngineConfig::default() };
    let params = config.hit_params();
    assert_eq!(params.tolerance, 3.0);
    assert_eq!(params.text_char_width, 0.5);
}

#[test]
fn arrow_head_angle_in_radians() {
    let config = EngineConfig::default();
    assert!((config.arrow_head_angle() - std::f64::consts::FRAC_PI_6).abs() < 1e-12);
}
