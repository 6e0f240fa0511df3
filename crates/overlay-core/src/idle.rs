//! Idle "alive" motion: randomized blinks and blush, eased with a first-order low-pass.

use crate::config::IdleConfig;
use crate::interaction::InteractionState;
use crate::params::{ParamIds, ParameterModel};
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdleState {
    pub current_r_eye: f32,
    pub current_l_eye: f32,
    pub current_blush: f32,
    pub target_r_eye: f32,
    pub target_l_eye: f32,
    pub target_blush: f32,
    pub time_since_last_blink: f32,
    pub blink_interval: f32,
}

/// Next blink interval in ms.
///
/// Kept as `2000 * r * 3 + 1` with `r` uniform in [0, 1), so the draw lands in
/// [1, 6001) ms rather than a clean [1000, 5000) window.
#[inline]
pub fn next_blink_interval<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    2000.0 * rng.gen::<f32>() * (4.0 - 1.0) + 1.0
}

#[inline]
fn approach(current: f32, target: f32, speed: f32) -> f32 {
    current + (target - current) * speed
}

pub struct IdleMotionController {
    state: IdleState,
    config: IdleConfig,
    ids: ParamIds,
    rng: StdRng,
}

impl IdleMotionController {
    /// Current values start from whatever the model holds; targets start at rest.
    pub fn new(model: &impl ParameterModel, ids: ParamIds, config: IdleConfig, rng: StdRng) -> Self {
        let state = IdleState {
            current_r_eye: model.value(&ids.eye_r_open),
            current_l_eye: model.value(&ids.eye_l_open),
            current_blush: model.value(&ids.blush),
            target_r_eye: config.eye_open,
            target_l_eye: config.eye_open,
            target_blush: config.blush_rest,
            time_since_last_blink: 0.0,
            blink_interval: config.first_blink_interval_ms,
        };
        Self {
            state,
            config,
            ids,
            rng,
        }
    }

    /// Advance by `delta_ms` and write the eased values to the model.
    ///
    /// Blink transitions are skipped while dragging; smoothing always runs.
    /// A non-positive delta leaves everything untouched.
    pub fn tick(
        &mut self,
        delta_ms: f32,
        interaction: &InteractionState,
        model: &mut impl ParameterModel,
    ) {
        if !(delta_ms > 0.0) {
            return;
        }
        let cfg = &self.config;
        let s = &mut self.state;
        s.time_since_last_blink += delta_ms;

        if !interaction.is_dragging() {
            if s.time_since_last_blink >= s.blink_interval {
                s.target_r_eye = cfg.eye_closed;
                s.target_l_eye = cfg.eye_closed;
                s.time_since_last_blink = 0.0;
                log::debug!("[idle] blink close");
            }
            let closed = s.current_r_eye <= cfg.closed_threshold
                && s.target_r_eye == cfg.eye_closed
                && s.current_l_eye <= cfg.closed_threshold
                && s.target_l_eye == cfg.eye_closed;
            if closed {
                s.target_r_eye = cfg.eye_open;
                s.target_l_eye = cfg.eye_open;
                s.blink_interval = next_blink_interval(&mut self.rng);
                log::debug!("[idle] blink open, next in {:.0}ms", s.blink_interval);
            }
        }

        let speed = cfg.smoothing_speed;
        s.current_r_eye = approach(s.current_r_eye, s.target_r_eye, speed);
        s.current_l_eye = approach(s.current_l_eye, s.target_l_eye, speed);
        s.current_blush = approach(s.current_blush, s.target_blush, speed);

        model.set_value(&self.ids.eye_r_open, s.current_r_eye);
        model.set_value(&self.ids.eye_l_open, s.current_l_eye);
        model.set_value(&self.ids.blush, s.current_blush);
    }

    /// Squint and flush while the model is grabbed.
    pub fn apply_drag_targets(&mut self) {
        self.state.target_r_eye = self.config.eye_closed;
        self.state.target_blush = self.config.blush_drag;
    }

    /// Back to the resting look after a release anywhere on the page.
    pub fn apply_rest_targets(&mut self) {
        self.state.target_r_eye = self.config.eye_open;
        self.state.target_blush = self.config.blush_rest;
    }

    #[inline]
    pub fn state(&self) -> &IdleState {
        &self.state
    }

    /// Override the pending blink interval (ms).
    pub fn set_blink_interval(&mut self, interval_ms: f32) {
        self.state.blink_interval = interval_ms;
    }
}
