// Host-side tests for viewport and cursor state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod state {
        include!("../src/core/state.rs");
    }
}

use crate::core::state::*;

#[test]
fn aspect_and_pixel_ratio_follow_resize() {
    let mut vp = Viewport::default();
    for &(w, h, dpr) in &[(800.0, 600.0, 1.0), (1920.0, 1080.0, 3.0), (390.0, 844.0, 2.0)] {
        vp.resize(w, h, dpr);
        assert!((vp.aspect() - (w / h) as f32).abs() < 1e-6);
        assert_eq!(vp.pixel_ratio(), dpr.min(2.0));
    }
}

#[test]
fn pixel_ratio_is_capped_at_two() {
    let vp = Viewport::new(100.0, 100.0, 4.0);
    assert_eq!(vp.pixel_ratio(), 2.0);
    assert_eq!(vp.drawing_buffer_size(), (200, 200));
    let vp = Viewport::new(100.0, 100.0, 1.5);
    assert_eq!(vp.drawing_buffer_size(), (150, 150));
}

#[test]
fn drawing_buffer_floors_fractional_sizes() {
    let vp = Viewport::new(333.0, 201.0, 1.25);
    assert_eq!(vp.drawing_buffer_size(), (416, 251));
}

#[test]
fn repeated_resize_is_idempotent() {
    let mut vp = Viewport::default();
    assert!(vp.resize(1024.0, 768.0, 2.0));
    let snapshot = vp;
    assert!(!vp.resize(1024.0, 768.0, 2.0));
    assert_eq!(vp, snapshot);
}

#[test]
fn degenerate_resize_is_ignored() {
    let mut vp = Viewport::new(640.0, 480.0, 1.0);
    assert!(!vp.resize(0.0, 480.0, 1.0));
    assert!(!vp.resize(640.0, -1.0, 1.0));
    assert_eq!(vp, Viewport::new(640.0, 480.0, 1.0));
}

#[test]
fn non_finite_resize_is_ignored() {
    let mut vp = Viewport::new(640.0, 480.0, 1.0);
    assert!(!vp.resize(f64::NAN, 480.0, 1.0));
    assert!(!vp.resize(640.0, f64::NAN, 1.0));
    assert!(!vp.resize(f64::INFINITY, 480.0, 1.0));
    assert_eq!(vp, Viewport::new(640.0, 480.0, 1.0));
}

#[test]
fn cursor_is_offset_from_center() {
    let vp = Viewport::new(800.0, 600.0, 1.0);
    assert_eq!(Cursor::from_client(400.0, 300.0, &vp), Cursor { x: 0.0, y: 0.0 });
    assert_eq!(Cursor::from_client(0.0, 0.0, &vp), Cursor { x: -0.5, y: -0.5 });
    let c = Cursor::from_client(800.0, 600.0, &vp);
    assert!((c.x - 0.5).abs() < 1e-6 && (c.y - 0.5).abs() < 1e-6);
}
