// Host-side tests for the camera choreography.

use glam::Vec2;
use overlay_core::easing::{ease_in_out_cubic, linear, progress};
use overlay_core::*;

// One sequencer tick of this many frames advances the clock by 500ms.
const HALF_SECOND: f32 = 500.0 / CAMERA_MS_PER_FRAME;

fn eased(x: f32, y: f32, scale: f32, duration_ms: f32) -> Keyframe {
    Keyframe {
        target: Vec2::new(x, y),
        scale,
        phase: Phase::Eased { duration_ms },
    }
}

fn instant(x: f32, y: f32, scale: f32, hold_ms: f32, pan: Option<Vec2>) -> Keyframe {
    Keyframe {
        target: Vec2::new(x, y),
        scale,
        phase: Phase::Instant { hold_ms, pan },
    }
}

#[test]
fn easing_curve_endpoints_and_midpoint() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert_eq!(ease_in_out_cubic(0.5), 0.5);
    assert_eq!(ease_in_out_cubic(1.0), 1.0);
    assert_eq!(ease_in_out_cubic(-2.0), 0.0);
    assert_eq!(ease_in_out_cubic(3.0), 1.0);
    assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < 1e-6);
    let mut prev = 0.0;
    for i in 1..=100 {
        let e = ease_in_out_cubic(i as f32 / 100.0);
        assert!(e >= prev);
        prev = e;
    }
    assert_eq!(linear(0.3), 0.3);
    assert_eq!(linear(1.7), 1.0);
    assert_eq!(progress(250.0, 1000.0), 0.25);
    assert_eq!(progress(5.0, 0.0), 1.0);
}

#[test]
fn eased_keyframe_hits_midpoint_and_target() {
    let mut cam = Transform2D::default();
    let mut seq =
        CameraSequencer::new(vec![eased(100.0, 0.0, 2.0, 1000.0)], LoopMode::Forever, &mut cam)
            .unwrap();

    seq.tick(HALF_SECOND, &mut cam);
    assert_eq!(seq.elapsed_ms(), 500.0);
    assert_eq!(cam.position, Vec2::new(50.0, 0.0));
    assert_eq!(cam.scale, 1.5);

    seq.tick(HALF_SECOND, &mut cam);
    assert_eq!(cam.position, Vec2::new(100.0, 0.0));
    assert_eq!(cam.scale, 2.0);
    // Only keyframe completed: wrapped to the start of the script
    assert_eq!(seq.index(), 0);
    assert_eq!(seq.cycles(), 1);
    assert_eq!(seq.elapsed_ms(), 0.0);
    assert_eq!(seq.phase_start(), (Vec2::new(100.0, 0.0), 2.0));
}

#[test]
fn instant_keyframe_cuts_then_pans() {
    let mut cam = Transform2D::default();
    let script = vec![
        instant(-100.0, -50.0, 4.0, 1000.0, Some(Vec2::new(-50.0, -60.0))),
        eased(0.0, 0.0, 1.0, 1000.0),
    ];
    let mut seq = CameraSequencer::new(script, LoopMode::Forever, &mut cam).unwrap();

    // The cut happens on entry, before any time passes
    assert_eq!(cam.position, Vec2::new(-100.0, -50.0));
    assert_eq!(cam.scale, 4.0);

    seq.tick(HALF_SECOND, &mut cam);
    assert_eq!(cam.position, Vec2::new(-75.0, -55.0));
    assert_eq!(cam.scale, 4.0);

    seq.tick(HALF_SECOND, &mut cam);
    assert_eq!(cam.position, Vec2::new(-50.0, -60.0));
    assert_eq!(seq.index(), 1);

    // The eased zoom-out starts from where the pan ended
    seq.tick(HALF_SECOND, &mut cam);
    assert_eq!(cam.position, Vec2::new(-25.0, -30.0));
    assert_eq!(cam.scale, 2.5);
}

#[test]
fn instant_keyframe_without_pan_holds_the_cut() {
    let mut cam = Transform2D::default();
    let script = vec![instant(30.0, 40.0, 2.0, 1000.0, None), eased(0.0, 0.0, 1.0, 1000.0)];
    let mut seq = CameraSequencer::new(script, LoopMode::Forever, &mut cam).unwrap();
    seq.tick(HALF_SECOND, &mut cam);
    assert_eq!(cam.position, Vec2::new(30.0, 40.0));
    assert_eq!(cam.scale, 2.0);
    assert_eq!(seq.index(), 0);
}

#[test]
fn zero_length_keyframe_completes_without_nan() {
    let mut cam = Transform2D::default();
    let script = vec![eased(10.0, 10.0, 3.0, 0.0), eased(20.0, 0.0, 1.0, 1000.0)];
    let mut seq = CameraSequencer::new(script, LoopMode::Forever, &mut cam).unwrap();

    seq.tick(1.0, &mut cam);
    assert_eq!(cam.position, Vec2::new(10.0, 10.0));
    assert_eq!(cam.scale, 3.0);
    assert_eq!(seq.index(), 1);

    seq.tick(HALF_SECOND, &mut cam);
    assert_eq!(cam.position, Vec2::new(15.0, 5.0));
    assert_eq!(cam.scale, 2.0);
}

#[test]
fn script_loops_forever() {
    let mut cam = Transform2D::default();
    let script = vec![
        instant(1.0, 0.0, 1.0, 100.0, None),
        instant(2.0, 0.0, 1.0, 100.0, None),
    ];
    let mut seq = CameraSequencer::new(script, LoopMode::Forever, &mut cam).unwrap();
    let step = 100.0 / CAMERA_MS_PER_FRAME;
    for _ in 0..10 {
        seq.tick(step, &mut cam);
    }
    assert_eq!(seq.cycles(), 5);
    assert_eq!(seq.index(), 0);
    assert_eq!(cam.position, Vec2::new(1.0, 0.0));
    assert!(!seq.is_finished());
}

#[test]
fn play_once_holds_the_final_frame() {
    let mut cam = Transform2D::default();
    let script = vec![
        instant(5.0, 5.0, 3.0, 100.0, None),
        eased(0.0, 0.0, 1.0, 100.0),
    ];
    let mut seq = CameraSequencer::new(script, LoopMode::Once, &mut cam).unwrap();
    let step = 100.0 / CAMERA_MS_PER_FRAME;
    seq.tick(step, &mut cam);
    seq.tick(step, &mut cam);
    assert!(seq.is_finished());
    assert_eq!(cam.position, Vec2::ZERO);
    assert_eq!(cam.scale, 1.0);

    for _ in 0..20 {
        seq.tick(step, &mut cam);
    }
    assert_eq!(seq.index(), 1);
    assert_eq!(seq.cycles(), 0);
    assert_eq!(cam.position, Vec2::ZERO);
}

#[test]
fn large_delta_crosses_one_boundary_per_tick() {
    let mut cam = Transform2D::default();
    let script = vec![
        instant(1.0, 0.0, 1.0, 100.0, None),
        instant(2.0, 0.0, 1.0, 100.0, None),
        instant(3.0, 0.0, 1.0, 100.0, None),
    ];
    let mut seq = CameraSequencer::new(script, LoopMode::Forever, &mut cam).unwrap();
    seq.tick(1000.0, &mut cam);
    assert_eq!(seq.index(), 1);
    assert_eq!(cam.position, Vec2::new(2.0, 0.0));
}

#[test]
fn zero_delta_is_a_noop() {
    let mut cam = Transform2D::default();
    let mut seq =
        CameraSequencer::new(vec![eased(100.0, 0.0, 2.0, 1000.0)], LoopMode::Forever, &mut cam)
            .unwrap();
    seq.tick(HALF_SECOND / 2.0, &mut cam);
    let snapshot = cam;
    let elapsed = seq.elapsed_ms();
    for _ in 0..5 {
        seq.tick(0.0, &mut cam);
    }
    assert_eq!(cam, snapshot);
    assert_eq!(seq.elapsed_ms(), elapsed);
}

#[test]
fn script_is_scaled_to_the_screen() {
    let config = CameraConfig {
        screen_size: Vec2::new(960.0, 540.0),
        ..CameraConfig::default()
    };
    let frames = config.build_keyframes().unwrap();
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[0].target, Vec2::new(-1900.0, -1050.0));
    assert_eq!(frames[0].scale, 4.0);
    assert_eq!(
        frames[0].phase,
        Phase::Instant {
            hold_ms: 2000.0,
            pan: Some(Vec2::new(-1850.0, -1055.0)),
        }
    );
    assert_eq!(frames[3].phase, Phase::Eased { duration_ms: 2000.0 });
}

#[test]
fn bad_scripts_are_rejected() {
    let mut cam = Transform2D::default();
    assert!(matches!(
        CameraSequencer::new(Vec::new(), LoopMode::Forever, &mut cam).err(),
        Some(OverlayError::EmptyScript)
    ));

    let script = vec![eased(0.0, 0.0, 1.0, 10.0), eased(0.0, 0.0, 1.0, -1.0)];
    assert!(matches!(
        CameraSequencer::new(script, LoopMode::Forever, &mut cam).err(),
        Some(OverlayError::InvalidKeyframe { index: 1, .. })
    ));

    let script = vec![instant(0.0, 0.0, 1.0, 10.0, Some(Vec2::new(f32::NAN, 0.0)))];
    assert!(CameraSequencer::new(script, LoopMode::Forever, &mut cam).is_err());

    let config = CameraConfig {
        screen_size: Vec2::new(0.0, 1080.0),
        ..CameraConfig::default()
    };
    assert!(matches!(
        config.build_keyframes(),
        Err(OverlayError::InvalidSize { which: "screen", .. })
    ));
}
