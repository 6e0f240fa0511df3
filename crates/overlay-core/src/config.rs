//! Overlay configuration. `Default` reproduces the shipped lobby tuning; hosts adjust the
//! screen size (and tests the seed) before building an [`Overlay`](crate::Overlay).

use crate::constants::*;
use crate::error::{OverlayError, Result};
use crate::params::ParamIds;
use crate::sequencer::{Keyframe, Phase};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct IdleConfig {
    pub smoothing_speed: f32,
    pub closed_threshold: f32,
    pub first_blink_interval_ms: f32,
    pub eye_open: f32,
    pub eye_closed: f32,
    pub blush_rest: f32,
    pub blush_drag: f32,
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self {
            smoothing_speed: SMOOTHING_SPEED,
            closed_threshold: BLINK_CLOSED_THRESHOLD,
            first_blink_interval_ms: FIRST_BLINK_INTERVAL_MS,
            eye_open: EYE_OPEN,
            eye_closed: EYE_CLOSED,
            blush_rest: BLUSH_REST,
            blush_drag: BLUSH_DRAG,
        }
    }
}

/// What the sequencer does after the last keyframe completes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopMode {
    #[default]
    Forever,
    /// Play the script once and hold the final transform.
    Once,
}

/// Keyframe authored in design-space pixels; offsets are rescaled to the screen at build time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyframeSpec {
    pub target: Vec2,
    pub scale: f32,
    pub phase: Phase,
}

impl KeyframeSpec {
    pub fn instant(target: Vec2, scale: f32, hold_ms: f32, pan: Option<Vec2>) -> Self {
        Self {
            target,
            scale,
            phase: Phase::Instant { hold_ms, pan },
        }
    }

    pub fn eased(target: Vec2, scale: f32, duration_ms: f32) -> Self {
        Self {
            target,
            scale,
            phase: Phase::Eased { duration_ms },
        }
    }

    /// Scale position and pan offsets by `ratio` (screen / design); zoom is left alone.
    pub fn scaled(&self, ratio: Vec2) -> Keyframe {
        let phase = match self.phase {
            Phase::Instant { hold_ms, pan } => Phase::Instant {
                hold_ms,
                pan: pan.map(|p| p * ratio),
            },
            eased @ Phase::Eased { .. } => eased,
        };
        Keyframe {
            target: self.target * ratio,
            scale: self.scale,
            phase,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub design_size: Vec2,
    pub screen_size: Vec2,
    pub script: Vec<KeyframeSpec>,
    pub loop_mode: LoopMode,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let design = Vec2::new(DESIGN_WIDTH, DESIGN_HEIGHT);
        Self {
            design_size: design,
            screen_size: design,
            script: lobby_intro_script(),
            loop_mode: LoopMode::Forever,
        }
    }
}

impl CameraConfig {
    pub fn screen_ratio(&self) -> Vec2 {
        self.screen_size / self.design_size
    }

    /// Validate the script and return it rescaled to the screen.
    pub fn build_keyframes(&self) -> Result<Vec<Keyframe>> {
        check_size("design", self.design_size)?;
        check_size("screen", self.screen_size)?;
        if self.script.is_empty() {
            return Err(OverlayError::EmptyScript);
        }
        let ratio = self.screen_ratio();
        self.script
            .iter()
            .enumerate()
            .map(|(index, kf)| {
                let frame = kf.scaled(ratio);
                frame.validate(index)?;
                Ok(frame)
            })
            .collect()
    }
}

fn check_size(which: &'static str, size: Vec2) -> Result<()> {
    if size.is_finite() && size.x > 0.0 && size.y > 0.0 {
        Ok(())
    } else {
        Err(OverlayError::InvalidSize {
            which,
            width: size.x,
            height: size.y,
        })
    }
}

/// Pointer flags the host applies to the model's hit region.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerCapabilities {
    pub interactive: bool,
    pub cursor: String,
}

impl Default for PointerCapabilities {
    fn default() -> Self {
        Self {
            interactive: true,
            cursor: MODEL_CURSOR.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverlayConfig {
    pub history_size: usize,
    pub rope_size: usize,
    /// Where the trail history starts before the first pointer move.
    pub trail_origin: Vec2,
    pub idle: IdleConfig,
    pub drag_sensitivity: f32,
    pub params: ParamIds,
    pub camera: CameraConfig,
    pub pointer: PointerCapabilities,
    /// Fixed seed for the blink RNG; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            history_size: HISTORY_SIZE,
            rope_size: ROPE_SIZE,
            trail_origin: Vec2::ZERO,
            idle: IdleConfig::default(),
            drag_sensitivity: DRAG_SENSITIVITY,
            params: ParamIds::default(),
            camera: CameraConfig::default(),
            pointer: PointerCapabilities::default(),
            seed: None,
        }
    }
}

impl OverlayConfig {
    pub fn with_screen_size(mut self, width: f32, height: f32) -> Self {
        self.camera.screen_size = Vec2::new(width, height);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Load-time choreography: three close-up holds with a slow pan, then an eased zoom-out.
pub fn lobby_intro_script() -> Vec<KeyframeSpec> {
    vec![
        KeyframeSpec::instant(
            Vec2::new(-3800.0, -2100.0),
            4.0,
            2000.0,
            Some(Vec2::new(-3700.0, -2110.0)),
        ),
        KeyframeSpec::instant(
            Vec2::new(-3600.0, -1500.0),
            3.5,
            2000.0,
            Some(Vec2::new(-3660.0, -1510.0)),
        ),
        KeyframeSpec::instant(
            Vec2::new(-3800.0, -1000.0),
            3.5,
            2000.0,
            Some(Vec2::new(-3750.0, -1010.0)),
        ),
        KeyframeSpec::eased(Vec2::ZERO, 1.0, 2000.0),
    ]
}
