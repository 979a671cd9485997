// Host-side tests for pure input and sizing functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn dpr_is_capped_at_two() {
    assert_eq!(capped_dpr(1.0), 1.0);
    assert_eq!(capped_dpr(1.5), 1.5);
    assert_eq!(capped_dpr(3.0), 2.0);
}

#[test]
fn unusable_dpr_falls_back_to_one() {
    assert_eq!(capped_dpr(0.0), 1.0);
    assert_eq!(capped_dpr(-2.0), 1.0);
    assert_eq!(capped_dpr(f64::NAN), 1.0);
    assert_eq!(capped_dpr(f64::INFINITY), 1.0);
}

#[test]
fn backing_size_scales_css_size() {
    assert_eq!(backing_size(800.0, 450.0, 2.0), (1600, 900));
    assert_eq!(backing_size(333.5, 100.0, 1.5), (500, 150));
}

#[test]
fn backing_size_is_never_empty() {
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(-10.0, 5.0, 1.0), (1, 5));
}

#[test]
fn pointer_is_relative_to_canvas_origin() {
    let p = pointer_local(150.0, 320.0, 100.0, 300.0);
    assert_eq!(p, glam::Vec2::new(50.0, 20.0));

    // Outside the canvas stays outside; the engine treats it as a miss.
    let q = pointer_local(90.0, 10.0, 100.0, 300.0);
    assert!(q.x < 0.0 && q.y < 0.0);
}
