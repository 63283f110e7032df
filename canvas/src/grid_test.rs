#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn frame() -> GridFrame {
    GridFrame::new(Point::new(320.0, 80.0))
}

// --- scale_for ---

#[test]
fn small_modules_use_large_scale() {
    assert_eq!(scale_for(1.0, 1.0), 4.0);
    assert_eq!(scale_for(7.0, 7.0), 4.0);
}

#[test]
fn wide_or_tall_modules_drop_to_small_scale() {
    assert_eq!(scale_for(8.0, 1.0), 2.0);
    assert_eq!(scale_for(1.0, 12.0), 2.0);
}

// --- to_grid / to_pixels ---

#[test]
fn module_origin_maps_to_grid_zero() {
    let f = frame();
    let g = f.to_grid(Point::new(344.0, 104.0));
    assert!(point_approx_eq(g, Point::new(0.0, 0.0)));
}

#[test]
fn one_block_at_large_scale_is_eighty_pixels() {
    let f = frame();
    let g = f.to_grid(Point::new(344.0 + 80.0, 104.0 + 160.0));
    assert!(point_approx_eq(g, Point::new(1.0, 2.0)));
}

#[test]
fn to_pixels_inverts_to_grid() {
    let mut f = frame();
    for scale in [SCALE_LARGE, SCALE_SMALL] {
        f.scale = scale;
        for (x, y) in [(320.0, 80.0), (345.5, 97.25), (900.0, 700.0), (0.0, 0.0), (1279.9, 719.1)] {
            let p = Point::new(x, y);
            assert!(point_approx_eq(f.to_pixels(f.to_grid(p)), p), "round trip failed at {p:?}");
        }
    }
}

#[test]
fn to_grid_inverts_to_pixels() {
    let f = frame();
    let g = Point::new(3.0, 2.0);
    assert!(point_approx_eq(f.to_grid(f.to_pixels(g)), g));
}

#[test]
fn rescale_changes_conversion() {
    let mut f = frame();
    f.rescale(10.0, 3.0);
    assert_eq!(f.scale, SCALE_SMALL);
    let g = f.to_grid(Point::new(344.0 + 40.0, 104.0));
    assert!(point_approx_eq(g, Point::new(1.0, 0.0)));
}

#[test]
fn module_bounds_follow_scale() {
    let f = frame();
    let r = f.module_bounds(2.0, 3.0);
    assert_eq!(r, Rect::new(344.0, 104.0, 160.0, 240.0));
}

// --- snap ---

#[test]
fn snap_step_one_is_identity() {
    let f = frame();
    let p = Point::new(351.3, 111.7);
    assert_eq!(f.snap(p, 1.0), p);
}

#[test]
fn snap_rounds_relative_to_module_origin() {
    let f = frame();
    let snapped = f.snap(Point::new(344.0 + 23.0, 104.0 + 9.0), 20.0);
    assert!(point_approx_eq(snapped, Point::new(364.0, 104.0)));
}

#[test]
fn snap_ignores_non_finite_step() {
    let f = frame();
    let p = Point::new(400.0, 200.0);
    assert_eq!(f.snap(p, f64::NAN), p);
}

// --- Rect ---

#[test]
fn rect_contains_is_half_open() {
    let r = Rect::new(10.0, 10.0, 20.0, 20.0);
    assert!(r.contains(Point::new(10.0, 10.0)));
    assert!(r.contains(Point::new(29.9, 29.9)));
    assert!(!r.contains(Point::new(30.0, 15.0)));
    assert!(!r.contains(Point::new(15.0, 9.9)));
}
