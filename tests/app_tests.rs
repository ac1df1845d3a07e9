// Host-side tests for the per-frame application state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod animator {
        include!("../src/core/animator.rs");
    }
    pub mod app {
        include!("../src/core/app.rs");
    }
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod params {
        include!("../src/core/params.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
    pub mod state {
        include!("../src/core/state.rs");
    }
}

use crate::core::app::*;
use crate::core::params::SceneParams;
use crate::core::scene::Scene;
use crate::core::state::{Cursor, InputEvent, Viewport};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

const W: f64 = 1280.0;
const H: f64 = 800.0;

fn make_state(scroll: f64) -> AppState {
    let params = SceneParams::default();
    let mut rng = StdRng::seed_from_u64(11);
    let scene = Scene::build(&params, &mut rng);
    AppState::new(params, scene, Viewport::new(W, H, 1.0), scroll)
}

fn rotations(state: &AppState) -> Vec<Vec3> {
    state.scene.meshes.iter().map(|m| m.rotation).collect()
}

fn assert_vec3_near(a: Vec3, b: Vec3, eps: f32) {
    assert!((a - b).abs().max_element() < eps, "{a:?} != {b:?}");
}

#[test]
fn idle_spin_per_frame_without_tweens() {
    let mut state = make_state(0.0);
    let before = rotations(&state);
    let dt = 0.016;
    state.advance(dt);
    for (b, a) in before.iter().zip(rotations(&state)) {
        assert_vec3_near(a - *b, Vec3::new(dt * 0.2, dt * 0.12, 0.0), 1e-7);
    }
}

#[test]
fn first_frame_with_zero_dt_changes_nothing() {
    let mut state = make_state(0.0);
    state.advance(0.0);
    assert!(rotations(&state).iter().all(|r| *r == Vec3::ZERO));
    assert_eq!(state.rig.group, Vec3::ZERO);
}

#[test]
fn resize_updates_camera_aspect_once() {
    let mut state = make_state(0.0);
    let ev = InputEvent::Resize {
        width: 1000.0,
        height: 500.0,
        device_pixel_ratio: 3.0,
    };
    let fx = state.handle(ev);
    assert!(fx.viewport_changed);
    assert_eq!(state.rig.camera.aspect, 2.0);
    assert_eq!(state.viewport.pixel_ratio(), 2.0);
    let snapshot = (state.viewport, state.rig.camera.clone());
    let fx = state.handle(ev);
    assert!(!fx.viewport_changed);
    assert_eq!((state.viewport, state.rig.camera.clone()), snapshot);
}

#[test]
fn scroll_into_next_section_spins_that_mesh() {
    let mut state = make_state(0.0);
    let fx = state.handle(InputEvent::Scroll { offset: H });
    assert_eq!(fx.entered_section, Some(1));
    assert_eq!(state.sections.current(), 1);
    assert!(state.animator.is_animating(1));
    assert!(!state.animator.is_animating(0));

    // a further scroll inside the same section starts nothing new
    let fx = state.handle(InputEvent::Scroll { offset: H + 50.0 });
    assert_eq!(fx.entered_section, None);
    assert_eq!(state.animator.active_count(), 1);

    let dt = 0.1;
    for _ in 0..12 {
        state.advance(dt);
    }
    assert_eq!(state.animator.active_count(), 0);
    let idle = Vec3::new(0.2, 0.12, 0.0) * dt * 12.0;
    let rots = rotations(&state);
    assert_vec3_near(rots[0], idle, 1e-4);
    assert_vec3_near(rots[1], idle + Vec3::new(3.0, 6.0, 1.0), 1e-3);
    assert_vec3_near(rots[2], idle, 1e-4);
}

#[test]
fn queued_scrolls_each_trigger_their_crossing() {
    let mut state = make_state(0.0);
    let fx = state.handle_all([
        InputEvent::Scroll { offset: H },
        InputEvent::Scroll { offset: 2.0 * H },
        InputEvent::Scroll { offset: 2.2 * H },
    ]);
    assert_eq!(fx.entered_section, Some(2));
    assert_eq!(state.animator.active_count(), 2);
    assert!(state.animator.is_animating(1) && state.animator.is_animating(2));
}

#[test]
fn scrolling_past_the_last_section_is_clamped() {
    let mut state = make_state(0.0);
    state.handle(InputEvent::Scroll { offset: 2.0 * H });
    let fx = state.handle(InputEvent::Scroll { offset: 9.0 * H });
    assert_eq!(fx.entered_section, None);
    assert_eq!(state.sections.current(), 2);
}

#[test]
fn first_scroll_on_restored_page_spins_its_section() {
    let mut state = make_state(2.0 * H);
    assert_eq!(state.sections.current(), 0);
    assert_eq!(state.animator.active_count(), 0);
    assert_eq!(state.rig.camera.position.y, -8.0);

    let fx = state.handle(InputEvent::Scroll {
        offset: 2.0 * H + 10.0,
    });
    assert_eq!(fx.entered_section, Some(2));
    assert!(state.animator.is_animating(2));
}

#[test]
fn camera_follows_scroll_each_frame() {
    let mut state = make_state(0.0);
    state.handle(InputEvent::Scroll { offset: 0.5 * H });
    state.advance(0.016);
    assert!((state.rig.camera.position.y + 2.0).abs() < 1e-6);
}

#[test]
fn pointer_moves_drive_parallax() {
    let mut state = make_state(0.0);
    state.handle(InputEvent::PointerMove {
        client_x: W,
        client_y: 0.0,
    });
    assert_eq!(state.cursor, Cursor { x: 0.5, y: -0.5 });
    for _ in 0..600 {
        state.advance(1.0 / 60.0);
    }
    assert!((state.rig.group.x - 0.25).abs() < 1e-4);
    assert!((state.rig.group.y - 0.25).abs() < 1e-4);
}
