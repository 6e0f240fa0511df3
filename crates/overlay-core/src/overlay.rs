use crate::config::{OverlayConfig, PointerCapabilities};
use crate::constants::{FRAME_MS, IDLE_MS_PER_FRAME};
use crate::drag::DragInteractionController;
use crate::error::Result;
use crate::idle::{IdleMotionController, IdleState};
use crate::interaction::InteractionState;
use crate::params::ParameterModel;
use crate::sequencer::{CameraSequencer, Transform2D};
use crate::trail::TrailInterpolator;
use glam::Vec2;
use rand::prelude::*;

/// Convert wall-clock milliseconds into renderer frame units (1.0 == one 60 Hz frame).
#[inline]
pub fn frame_delta_from_ms(ms: f32) -> f32 {
    ms / FRAME_MS
}

/// The whole engine: pointer handlers in, eased parameters and camera transform out.
///
/// Hosts forward pointer events as they arrive and call [`Overlay::tick`] once per
/// rendered frame, then read the trail points, model parameters and container transform.
pub struct Overlay<M: ParameterModel> {
    interaction: InteractionState,
    trail: TrailInterpolator,
    idle: IdleMotionController,
    drag: DragInteractionController,
    camera: CameraSequencer,
    transform: Transform2D,
    model: M,
    pointer_caps: PointerCapabilities,
}

impl<M: ParameterModel> Overlay<M> {
    pub fn new(config: OverlayConfig, model: M) -> Result<Self> {
        let OverlayConfig {
            history_size,
            rope_size,
            trail_origin,
            idle,
            drag_sensitivity,
            params,
            camera,
            pointer,
            seed,
        } = config;

        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let trail = TrailInterpolator::new(history_size, rope_size, trail_origin)?;
        let mut transform = Transform2D::default();
        let camera = CameraSequencer::from_config(&camera, &mut transform)?;
        let idle = IdleMotionController::new(&model, params.clone(), idle, rng);
        let drag = DragInteractionController::new(params, drag_sensitivity);

        log::info!("[overlay] history={} rope={} seed={:?}", history_size, rope_size, seed);
        Ok(Self {
            interaction: InteractionState::new(),
            trail,
            idle,
            drag,
            camera,
            transform,
            model,
            pointer_caps: pointer,
        })
    }

    // ---------------- Pointer events ----------------

    pub fn pointer_move(&mut self, pos: Vec2) {
        self.interaction.record_pointer(pos);
        self.drag.pointer_move(pos, &self.interaction, &mut self.model);
    }

    /// `over_model` is the host's hit-test result for the model region.
    pub fn pointer_down(&mut self, pos: Vec2, over_model: bool) {
        if !over_model || !self.pointer_caps.interactive {
            return;
        }
        self.drag.pointer_down(pos, &mut self.interaction, &self.model, &mut self.idle);
    }

    pub fn pointer_up_stage(&mut self) {
        self.drag.pointer_up_stage(&mut self.interaction);
    }

    pub fn pointer_up_global(&mut self) {
        self.drag.pointer_up_global(&mut self.interaction, &mut self.idle);
    }

    // ---------------- Frame ----------------

    /// Run one frame: trail, then idle motion, then camera.
    pub fn tick(&mut self, frame_delta: f32) {
        self.trail.tick(&self.interaction, frame_delta);
        self.idle.tick(frame_delta * IDLE_MS_PER_FRAME, &self.interaction, &mut self.model);
        self.camera.tick(frame_delta, &mut self.transform);
    }

    // ---------------- Read access for renderers ----------------

    #[inline]
    pub fn trail_points(&self) -> &[Vec2] {
        self.trail.points()
    }

    #[inline]
    pub fn transform(&self) -> &Transform2D {
        &self.transform
    }

    #[inline]
    pub fn model(&self) -> &M {
        &self.model
    }

    #[inline]
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    #[inline]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.interaction.is_dragging()
    }

    #[inline]
    pub fn idle_state(&self) -> &IdleState {
        self.idle.state()
    }

    #[inline]
    pub fn camera(&self) -> &CameraSequencer {
        &self.camera
    }

    #[inline]
    pub fn pointer_capabilities(&self) -> &PointerCapabilities {
        &self.pointer_caps
    }
}
