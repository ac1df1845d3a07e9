// Host-side tests for scene parameters and query overrides.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod params {
        include!("../src/core/params.rs");
    }
}

use crate::core::constants::*;
use crate::core::params::*;

fn approx3(a: [f32; 3], b: [f32; 3]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
}

#[test]
fn defaults_match_stock_page() {
    let p = SceneParams::default();
    assert_eq!(p.distance, 4.0);
    assert_eq!(p.particle_count, 500);
    assert_eq!(p.gradient_url, "textures/gradients/3.png");
    assert!(approx3(p.material_color, parse_hex_color("#7fcffb").unwrap()));
    assert!(approx3(p.particle_color, parse_hex_color("#ff88cc").unwrap()));
}

#[test]
fn hex_colors_accept_prefixes_and_reject_garbage() {
    let white = parse_hex_color("ffffff").unwrap();
    assert!(approx3(white, [1.0, 1.0, 1.0]));
    assert!(approx3(parse_hex_color("#000000").unwrap(), [0.0, 0.0, 0.0]));
    assert!(approx3(
        parse_hex_color("%23ff0000").unwrap(),
        [1.0, 0.0, 0.0]
    ));
    assert!(parse_hex_color("fff").is_none());
    assert!(parse_hex_color("#gggggg").is_none());
    assert!(parse_hex_color("").is_none());
    assert!(parse_hex_color("#12345678").is_none());
}

#[test]
fn hex_colors_are_linearized() {
    // sRGB mid grey is darker in linear space
    let grey = parse_hex_color("808080").unwrap();
    assert!(grey[0] > 0.2 && grey[0] < 0.23, "got {}", grey[0]);
    assert!((srgb_to_linear(0.0)).abs() < 1e-6);
    assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
}

#[test]
fn query_overrides_known_keys() {
    let p = SceneParams::from_query("?color=%23ff0000&distance=6&particles=42&particleColor=00ff00");
    assert!(approx3(p.material_color, [1.0, 0.0, 0.0]));
    assert!(approx3(p.particle_color, [0.0, 1.0, 0.0]));
    assert_eq!(p.distance, 6.0);
    assert_eq!(p.particle_count, 42);
}

#[test]
fn query_ignores_unknown_and_malformed_values() {
    let p = SceneParams::from_query("foo=bar&distance=abc&particles=-3&color=nope&flag");
    assert_eq!(p, SceneParams::default());
    assert_eq!(SceneParams::from_query(""), SceneParams::default());
}

#[test]
fn query_values_are_clamped() {
    let p = SceneParams::from_query("distance=250&particles=99999999");
    assert_eq!(p.distance, MAX_OBJECTS_DISTANCE);
    assert_eq!(p.particle_count, MAX_PARTICLE_COUNT);
    let p = SceneParams::from_query("distance=-1");
    assert_eq!(p.distance, 0.0);
}
