//! Scripted camera choreography over the scene container.
//!
//! Each keyframe is either an instant cut followed by a slow linear pan for the hold
//! time, or an eased move from wherever the camera currently is. Phases run back to
//! back on a clock driven by the renderer's frame delta.

use crate::config::{CameraConfig, LoopMode};
use crate::constants::CAMERA_MS_PER_FRAME;
use crate::easing::{ease_in_out_cubic, linear, progress};
use crate::error::{OverlayError, Result};
use glam::Vec2;

/// Anything with a 2D position and a uniform scale the camera can drive.
pub trait TransformTarget {
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);
    fn scale(&self) -> f32;
    fn set_scale(&mut self, scale: f32);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    pub position: Vec2,
    pub scale: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl TransformTarget for Transform2D {
    fn position(&self) -> Vec2 {
        self.position
    }
    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
    fn scale(&self) -> f32 {
        self.scale
    }
    fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    /// Cut to the target, then pan linearly towards `pan` (if any) over `hold_ms`.
    Instant { hold_ms: f32, pan: Option<Vec2> },
    /// Ease from the current transform to the target over `duration_ms`.
    Eased { duration_ms: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub target: Vec2,
    pub scale: f32,
    pub phase: Phase,
}

impl Keyframe {
    #[inline]
    pub fn duration_ms(&self) -> f32 {
        match self.phase {
            Phase::Instant { hold_ms, .. } => hold_ms,
            Phase::Eased { duration_ms } => duration_ms,
        }
    }

    pub fn validate(&self, index: usize) -> Result<()> {
        let invalid = |reason| Err(OverlayError::InvalidKeyframe { index, reason });
        if !self.target.is_finite() {
            return invalid("target is not finite");
        }
        if !self.scale.is_finite() {
            return invalid("scale is not finite");
        }
        let duration = self.duration_ms();
        if !duration.is_finite() || duration < 0.0 {
            return invalid("duration must be finite and non-negative");
        }
        if let Phase::Instant { pan: Some(pan), .. } = self.phase {
            if !pan.is_finite() {
                return invalid("pan target is not finite");
            }
        }
        Ok(())
    }
}

// Lands exactly on `b` once the phase is complete.
#[inline]
fn mix<T>(a: T, b: T, t: f32) -> T
where
    T: Copy + std::ops::Add<Output = T> + std::ops::Sub<Output = T> + std::ops::Mul<f32, Output = T>,
{
    if t >= 1.0 {
        b
    } else {
        a + (b - a) * t
    }
}

pub struct CameraSequencer {
    keyframes: Vec<Keyframe>,
    loop_mode: LoopMode,
    index: usize,
    elapsed: f32,
    start_position: Vec2,
    start_scale: f32,
    cycles: u32,
    finished: bool,
}

impl CameraSequencer {
    /// Validate the keyframes and enter the first one against `target`.
    pub fn new(
        keyframes: Vec<Keyframe>,
        loop_mode: LoopMode,
        target: &mut impl TransformTarget,
    ) -> Result<Self> {
        if keyframes.is_empty() {
            return Err(OverlayError::EmptyScript);
        }
        for (i, k) in keyframes.iter().enumerate() {
            k.validate(i)?;
        }
        let mut seq = Self {
            keyframes,
            loop_mode,
            index: 0,
            elapsed: 0.0,
            start_position: target.position(),
            start_scale: target.scale(),
            cycles: 0,
            finished: false,
        };
        seq.enter(0, target);
        log::info!(
            "[camera] script of {} keyframes, loop={:?}",
            seq.keyframes.len(),
            seq.loop_mode
        );
        Ok(seq)
    }

    pub fn from_config(config: &CameraConfig, target: &mut impl TransformTarget) -> Result<Self> {
        Self::new(config.build_keyframes()?, config.loop_mode, target)
    }

    /// Advance the clock by `frame_delta` renderer frames and apply the active phase.
    ///
    /// At most one phase boundary is crossed per tick; leftover time is dropped.
    pub fn tick(&mut self, frame_delta: f32, target: &mut impl TransformTarget) {
        if self.finished || !(frame_delta > 0.0) {
            return;
        }
        self.elapsed += frame_delta * CAMERA_MS_PER_FRAME;

        let key = self.keyframes[self.index];
        let duration = key.duration_ms();
        self.apply(&key, progress(self.elapsed, duration), target);

        if self.elapsed >= duration {
            self.advance(target);
        }
    }

    fn apply(&self, key: &Keyframe, t: f32, target: &mut impl TransformTarget) {
        match key.phase {
            Phase::Instant { pan: Some(pan), .. } => {
                target.set_position(mix(self.start_position, pan, linear(t)));
            }
            Phase::Instant { pan: None, .. } => {}
            Phase::Eased { .. } => {
                let e = ease_in_out_cubic(t);
                target.set_position(mix(self.start_position, key.target, e));
                target.set_scale(mix(self.start_scale, key.scale, e));
            }
        }
    }

    fn advance(&mut self, target: &mut impl TransformTarget) {
        let mut next = self.index + 1;
        if next >= self.keyframes.len() {
            match self.loop_mode {
                LoopMode::Forever => {
                    next = 0;
                    self.cycles += 1;
                    log::debug!("[camera] script looped ({} cycles)", self.cycles);
                }
                LoopMode::Once => {
                    self.finished = true;
                    log::debug!("[camera] script finished");
                    return;
                }
            }
        }
        self.enter(next, target);
    }

    fn enter(&mut self, index: usize, target: &mut impl TransformTarget) {
        let key = self.keyframes[index];
        self.index = index;
        self.elapsed = 0.0;
        self.start_position = target.position();
        self.start_scale = target.scale();

        if let Phase::Instant { .. } = key.phase {
            target.set_position(key.target);
            target.set_scale(key.scale);
            self.start_position = key.target;
            self.start_scale = key.scale;
        }
        log::debug!(
            "[camera] keyframe {} -> ({:.0},{:.0}) x{:.2} over {:.0}ms",
            index,
            key.target.x,
            key.target.y,
            key.scale,
            key.duration_ms()
        );
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Where the active phase started (the pan origin for instant phases).
    pub fn phase_start(&self) -> (Vec2, f32) {
        (self.start_position, self.start_scale)
    }
}
