// Host-side tests for the canvas-independent stage.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod stage {
    include!("../src/stage.rs");
}

use glam::Vec2;
use overlay_core::{KeyframeSpec, OverlayConfig, ParameterModel, MODEL_CURSOR};
use stage::*;

const VIEW: Vec2 = Vec2::new(1920.0, 1080.0);

// Camera parked at identity so screen and container space coincide
fn still_stage() -> Stage {
    let mut config = OverlayConfig::default().with_seed(11);
    config.camera.script = vec![KeyframeSpec::eased(Vec2::ZERO, 1.0, 1000.0)];
    Stage::new(VIEW, config).unwrap()
}

#[test]
fn default_stage_opens_on_the_intro() {
    let stage = Stage::with_defaults(VIEW).unwrap();
    assert_eq!(stage.overlay.transform().scale, 4.0);
    assert!(!stage.is_hovering());
}

#[test]
fn hover_changes_are_reported_once() {
    let mut stage = still_stage();
    let inside = Vec2::new(960.0, 540.0);
    assert_eq!(stage.pointer_move(inside), Some(true));
    assert_eq!(stage.pointer_move(inside + Vec2::ONE), None);
    assert_eq!(stage.cursor("auto"), MODEL_CURSOR);

    // Up-left of the model origin is empty background
    assert_eq!(stage.pointer_move(Vec2::new(-60.0, -140.0)), Some(false));
    assert_eq!(stage.cursor("auto"), "auto");
}

#[test]
fn press_on_model_drags_and_release_resets() {
    let mut stage = still_stage();
    let ids = stage.ids().clone();
    stage.pointer_down(Vec2::new(500.0, 500.0));
    assert!(stage.overlay.is_dragging());
    stage.pointer_move(Vec2::new(600.0, 500.0));
    let x = stage.overlay.model().value(&ids.angle_x);
    assert!((x - 9.0).abs() < 1e-4, "x={x}");

    stage.pointer_up_stage();
    assert!(!stage.overlay.is_dragging());
    stage.pointer_up_global();
    assert_eq!(stage.overlay.idle_state().target_blush, -5.0);
}

#[test]
fn press_off_model_is_ignored() {
    let mut stage = still_stage();
    stage.pointer_down(Vec2::new(-500.0, -500.0));
    assert!(!stage.overlay.is_dragging());
}

#[test]
fn frame_ticks_engine_and_builds_draw_list() {
    let mut stage = still_stage();
    stage.pointer_move(Vec2::new(300.0, 200.0));
    let list = stage.frame(1000.0 / 60.0);
    assert_eq!(list.ribbon.len(), 100);
    assert_eq!(stage.overlay.trail_points()[0], Vec2::new(300.0, 200.0));
    assert!(!list.quads.is_empty());
}

#[test]
fn resize_refits_but_ignores_empty_views() {
    let mut stage = still_stage();
    let before = stage.scene.layout;
    stage.resize(Vec2::ZERO);
    assert_eq!(stage.scene.layout, before);
    stage.resize(Vec2::new(960.0, 540.0));
    assert!(stage.scene.layout.background_scale < before.background_scale);
}
