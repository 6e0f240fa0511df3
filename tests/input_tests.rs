// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn css_offsets_scale_to_backing_pixels() {
    // 2x device pixel ratio
    let p = css_to_backing(
        Vec2::new(100.0, 50.0),
        Vec2::new(800.0, 600.0),
        Vec2::new(1600.0, 1200.0),
    );
    assert_eq!(p, Vec2::new(200.0, 100.0));
}

#[test]
fn non_uniform_canvas_stretch_is_respected() {
    let p = css_to_backing(
        Vec2::new(400.0, 300.0),
        Vec2::new(800.0, 600.0),
        Vec2::new(1920.0, 1080.0),
    );
    assert_eq!(p, Vec2::new(960.0, 540.0));
}

#[test]
fn collapsed_canvas_passes_css_through() {
    let p = css_to_backing(Vec2::new(12.0, 34.0), Vec2::ZERO, Vec2::new(100.0, 100.0));
    assert_eq!(p, Vec2::new(12.0, 34.0));
}

#[test]
fn frame_gaps_are_clamped() {
    assert_eq!(clamp_frame_ms(16.0, 250.0), 16.0);
    assert_eq!(clamp_frame_ms(5000.0, 250.0), 250.0);
    assert_eq!(clamp_frame_ms(-3.0, 250.0), 0.0);
    assert_eq!(clamp_frame_ms(f32::NAN, 250.0), 0.0);
    assert_eq!(clamp_frame_ms(f32::INFINITY, 250.0), 0.0);
}
