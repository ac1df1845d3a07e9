// Host-side tests for section tracking and rotation tweens.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod animator {
        include!("../src/core/animator.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
}

use crate::core::animator::*;
use crate::core::scroll::*;
use glam::Vec3;

const H: f64 = 900.0;

fn assert_vec3_near(a: Vec3, b: Vec3, eps: f32) {
    assert!((a - b).abs().max_element() < eps, "{a:?} != {b:?}");
}

#[test]
fn section_is_rounded_offset_over_height() {
    let t = SectionTracker::new(3);
    assert_eq!(t.section_for(0.0, H), Some(0));
    assert_eq!(t.section_for(449.0, H), Some(0));
    assert_eq!(t.section_for(450.0, H), Some(1)); // halves round up
    assert_eq!(t.section_for(900.0, H), Some(1));
    assert_eq!(t.section_for(1400.0, H), Some(2));
}

#[test]
fn section_is_clamped_to_available_meshes() {
    let t = SectionTracker::new(3);
    assert_eq!(t.section_for(10_000.0, H), Some(2));
    assert_eq!(t.section_for(-500.0, H), Some(0)); // overscroll bounce
    assert_eq!(t.section_for(f64::NAN, H), None);
    assert_eq!(t.section_for(100.0, 0.0), None);
    assert_eq!(SectionTracker::new(0).section_for(0.0, H), None);
}

#[test]
fn transition_fires_once_per_section_entered() {
    let mut t = SectionTracker::new(3);
    let offsets = [0.0, 100.0, 300.0, 460.0, 500.0, 800.0, 1000.0, 1400.0, 5000.0, 1300.0, 400.0];
    let fired: Vec<usize> = offsets.iter().filter_map(|&o| t.observe(o, H)).collect();
    assert_eq!(fired, vec![1, 2, 1, 0]);
    assert_eq!(t.current(), 0);
}

#[test]
fn power2_in_out_endpoints_and_symmetry() {
    let e = Ease::Power2InOut;
    assert_eq!(e.apply(0.0), 0.0);
    assert_eq!(e.apply(1.0), 1.0);
    assert!((e.apply(0.5) - 0.5).abs() < 1e-6);
    for i in 0..=20 {
        let t = i as f32 / 20.0;
        assert!((e.apply(t) + e.apply(1.0 - t) - 1.0).abs() < 1e-5);
    }
    // slow start: well behind linear at 25%
    assert!(e.apply(0.25) < 0.1);
    assert_eq!(e.apply(-1.0), 0.0);
    assert_eq!(e.apply(2.0), 1.0);
}

#[test]
fn tween_hands_out_exactly_its_delta() {
    let delta = Vec3::new(3.0, 6.0, 1.0);
    let mut tween = RotationTween::new(delta, 1.0, Ease::Power2InOut);
    let mut total = Vec3::ZERO;
    let mut steps = 0;
    while !tween.finished() {
        total += tween.advance(1.0 / 60.0);
        steps += 1;
        assert!(steps < 1000);
    }
    assert_vec3_near(total, delta, 1e-4);
    assert!((59..=61).contains(&steps), "steps={steps}");
    // finished tweens stay quiet
    assert_eq!(tween.advance(0.5), Vec3::ZERO);
}

#[test]
fn zero_duration_tween_applies_at_once() {
    let mut tween = RotationTween::new(Vec3::X, 0.0, Ease::Linear);
    assert_eq!(tween.advance(0.0), Vec3::X);
    assert!(tween.finished());
}

#[test]
fn stacked_tweens_add_up_on_one_target() {
    let mut animator = Animator::new();
    let delta = Vec3::new(3.0, 6.0, 1.0);
    animator.start(0, RotationTween::new(delta, 1.0, Ease::Power2InOut));
    let mut rotations = vec![Vec3::ZERO; 3];
    animator.advance(0.5, &mut rotations);
    animator.start(0, RotationTween::new(delta, 1.0, Ease::Power2InOut));
    assert_eq!(animator.active_count(), 2);
    for _ in 0..20 {
        animator.advance(0.1, &mut rotations);
    }
    assert_eq!(animator.active_count(), 0);
    assert_vec3_near(rotations[0], delta * 2.0, 1e-4);
    assert_eq!(rotations[1], Vec3::ZERO);
}

#[test]
fn out_of_range_targets_are_dropped() {
    let mut animator = Animator::new();
    animator.start(7, RotationTween::new(Vec3::ONE, 1.0, Ease::Linear));
    let mut rotations = vec![Vec3::ZERO; 3];
    animator.advance(0.1, &mut rotations);
    assert_eq!(animator.active_count(), 0);
    assert!(rotations.iter().all(|r| *r == Vec3::ZERO));
}
