#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn params() -> HitParams {
    HitParams::default()
}

fn path(points: &[(f64, f64)]) -> Shape {
    Shape::Path {
        points: points.iter().map(|&(x, y)| pt(x, y)).collect(),
        color: "#000".into(),
        stroke_width: 3.0,
    }
}

fn line(ax: f64, ay: f64, bx: f64, by: f64) -> Shape {
    Shape::Line { start: pt(ax, ay), end: pt(bx, by), color: "#000".into(), stroke_width: 3.0 }
}

fn arrow(ax: f64, ay: f64, bx: f64, by: f64) -> Shape {
    Shape::Arrow { start: pt(ax, ay), end: pt(bx, by), color: "#000".into(), stroke_width: 3.0 }
}

fn rect(x: f64, y: f64, w: f64, h: f64) -> Shape {
    Shape::Rectangle { origin: pt(x, y), width: w, height: h, color: "#000".into(), stroke_width: 3.0, filled: false }
}

fn circle(cx: f64, cy: f64, r: f64) -> Shape {
    Shape::Circle { center: pt(cx, cy), radius: r, color: "#000".into(), stroke_width: 3.0, filled: false }
}

fn text(x: f64, y: f64, s: &str) -> Shape {
    Shape::Text { anchor: pt(x, y), text: s.into(), color: "#000".into(), font_size: 16.0 }
}

// =============================================================
// HitParams
// =============================================================

#[test]
fn default_params_use_ten_pixel_tolerance() {
    assert_eq!(params().tolerance, 10.0);
    assert_eq!(params().text_char_width, 0.6);
}

// =============================================================
// Line / Arrow
// =============================================================

#[test]
fn line_hit_within_tolerance() {
    assert!(shape_hit(&line(0.0, 0.0, 10.0, 0.0), pt(5.0, 5.0), &params()));
}

#[test]
fn line_miss_beyond_tolerance() {
    assert!(!shape_hit(&line(0.0, 0.0, 10.0, 0.0), pt(5.0, 15.0), &params()));
}

#[test]
fn line_miss_past_endpoint() {
    assert!(!shape_hit(&line(0.0, 0.0, 10.0, 0.0), pt(25.0, 0.0), &params()));
}

#[test]
fn arrow_hits_along_shaft() {
    assert!(shape_hit(&arrow(0.0, 0.0, 100.0, 100.0), pt(50.0, 52.0), &params()));
    assert!(!shape_hit(&arrow(0.0, 0.0, 100.0, 100.0), pt(50.0, 80.0), &params()));
}

#[test]
fn custom_tolerance_is_respected() {
    let tight = HitParams { tolerance: 2.0, ..HitParams::default() };
    assert!(!shape_hit(&line(0.0, 0.0, 10.0, 0.0), pt(5.0, 5.0), &tight));
}

// =============================================================
// Path
// =============================================================

#[test]
fn path_hit_near_a_recorded_point() {
    let p = path(&[(0.0, 0.0), (100.0, 0.0)]);
    assert!(shape_hit(&p, pt(96.0, 8.0), &params()));
    assert!(shape_hit(&p, pt(10.0, 0.0), &params()));
}

#[test]
fn path_miss_in_gap_between_samples() {
    let p = path(&[(0.0, 0.0), (100.0, 0.0)]);
    assert!(!shape_hit(&p, pt(50.0, 0.0), &params()));
    assert!(!shape_hit(&p, pt(11.0, 0.0), &params()));
}

#[test]
fn path_miss_far_away() {
    let p = path(&[(0.0, 0.0), (5.0, 5.0), (10.0, 10.0)]);
    assert!(!shape_hit(&p, pt(40.0, 0.0), &params()));
}

#[test]
fn single_point_path_hits_near_the_dot() {
    let p = path(&[(20.0, 20.0)]);
    assert!(shape_hit(&p, pt(24.0, 23.0), &params()));
    assert!(!shape_hit(&p, pt(40.0, 40.0), &params()));
}

#[test]
fn empty_path_never_hits() {
    assert!(!shape_hit(&path(&[]), pt(0.0, 0.0), &params()));
}

// =============================================================
// Rectangle / Circle
// =============================================================

#[test]
fn rectangle_hit_inside_and_on_edge() {
    let r = rect(10.0, 10.0, 40.0, 40.0);
    assert!(shape_hit(&r, pt(30.0, 30.0), &params()));
    assert!(shape_hit(&r, pt(50.0, 10.0), &params()));
}

#[test]
fn rectangle_miss_outside() {
    assert!(!shape_hit(&rect(10.0, 10.0, 40.0, 40.0), pt(55.0, 30.0), &params()));
}

#[test]
fn circle_hit_on_outline_not_center() {
    let c = circle(0.0, 0.0, 50.0);
    assert!(shape_hit(&c, pt(48.0, 0.0), &params()));
    assert!(!shape_hit(&c, pt(0.0, 0.0), &params()));
}

#[test]
fn zero_radius_circle_hits_near_center() {
    assert!(shape_hit(&circle(5.0, 5.0, 0.0), pt(8.0, 5.0), &params()));
}

// =============================================================
// Text
// =============================================================

#[test]
fn text_bounds_sit_above_baseline() {
    let b = text_bounds(pt(10.0, 50.0), "hello", 20.0, 0.5);
    assert_eq!(b.origin, pt(10.0, 30.0));
    assert_eq!(b.width, 50.0);
    assert_eq!(b.height, 20.0);
}

#[test]
fn text_bounds_count_characters_not_bytes() {
    let b = text_bounds(pt(0.0, 0.0), "héé", 10.0, 1.0);
    assert_eq!(b.width, 30.0);
}

#[test]
fn text_hit_inside_glyph_box() {
    let t = text(100.0, 100.0, "note");
    assert!(shape_hit(&t, pt(110.0, 92.0), &params()));
}

#[test]
fn text_miss_below_baseline() {
    let t = text(100.0, 100.0, "note");
    assert!(!shape_hit(&t, pt(110.0, 110.0), &params()));
}

// =============================================================
// erase
// =============================================================

#[test]
fn erase_removes_every_overlapping_shape() {
    let drawing = Drawing::from(vec![
        line(0.0, 0.0, 10.0, 0.0),
        rect(0.0, 0.0, 20.0, 20.0),
        circle(200.0, 200.0, 10.0),
    ]);
    let next = erase(pt(5.0, 5.0), &drawing, &params());
    assert_eq!(next.len(), 1);
    assert!(matches!(next.shapes()[0], Shape::Circle { .. }));
}

#[test]
fn erase_on_empty_space_keeps_everything() {
    let drawing = Drawing::from(vec![line(0.0, 0.0, 10.0, 0.0), circle(200.0, 200.0, 10.0)]);
    let next = erase(pt(100.0, 500.0), &drawing, &params());
    assert_eq!(next, drawing);
}

#[test]
fn erase_keeps_fast_stroke_when_clicking_between_samples() {
    let drawing = Drawing::from(vec![path(&[(0.0, 0.0), (100.0, 0.0)])]);
    let next = erase(pt(50.0, 0.0), &drawing, &params());
    assert_eq!(next.len(), 1);
}

#[test]
fn erase_leaves_input_untouched() {
    let drawing = Drawing::from(vec![line(0.0, 0.0, 10.0, 0.0)]);
    let next = erase(pt(5.0, 0.0), &drawing, &params());
    assert!(next.is_empty());
    assert_eq!(drawing.len(), 1);
}

#[test]
fn erase_preserves_order_of_survivors() {
    let drawing = Drawing::from(vec![
        rect(100.0, 100.0, 10.0, 10.0),
        line(0.0, 0.0, 10.0, 0.0),
        circle(300.0, 300.0, 5.0),
    ]);
    let next = erase(pt(5.0, 0.0), &drawing, &params());
    assert!(matches!(next.shapes(), [Shape::Rectangle { .. }, Shape::Circle { .. }]));
}
