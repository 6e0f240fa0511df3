//! Drag-to-rotate: pointer motion while the model is held maps onto the head angle
//! parameters.

use crate::idle::IdleMotionController;
use crate::interaction::{DragState, InteractionState};
use crate::params::{ParamIds, ParameterModel};
use glam::Vec2;

pub struct DragInteractionController {
    sensitivity: f32,
    ids: ParamIds,
}

impl DragInteractionController {
    pub fn new(ids: ParamIds, sensitivity: f32) -> Self {
        Self { sensitivity, ids }
    }

    /// Pointer pressed over the model: anchor the drag and switch the face to its
    /// dragged look.
    pub fn pointer_down(
        &self,
        pos: Vec2,
        interaction: &mut InteractionState,
        model: &impl ParameterModel,
        idle: &mut IdleMotionController,
    ) {
        let model_start = Vec2::new(model.value(&self.ids.angle_x), model.value(&self.ids.angle_y));
        interaction.drag = DragState::Dragging {
            pointer_start: pos,
            model_start,
        };
        idle.apply_drag_targets();
        log::debug!(
            "[drag] begin at ({:.1},{:.1}) angle=({:.2},{:.2})",
            pos.x,
            pos.y,
            model_start.x,
            model_start.y
        );
    }

    /// Rotate while dragging; ignored otherwise.
    ///
    /// Both axes follow the horizontal delta from the X anchor. Vertical motion has no
    /// effect.
    pub fn pointer_move(
        &self,
        pos: Vec2,
        interaction: &InteractionState,
        model: &mut impl ParameterModel,
    ) {
        let DragState::Dragging {
            pointer_start,
            model_start,
        } = interaction.drag
        else {
            return;
        };
        let delta_x = pos.x - pointer_start.x;
        let angle = model_start.x + delta_x * self.sensitivity;
        model.set_value(&self.ids.angle_x, angle);
        model.set_value(&self.ids.angle_y, angle);
    }

    /// Release over the stage: end the drag, keep the current face targets.
    pub fn pointer_up_stage(&self, interaction: &mut InteractionState) {
        if interaction.is_dragging() {
            log::debug!("[drag] end");
        }
        interaction.drag = DragState::Idle;
    }

    /// Release anywhere in the viewport: end the drag and restore the resting face.
    pub fn pointer_up_global(
        &self,
        interaction: &mut InteractionState,
        idle: &mut IdleMotionController,
    ) {
        self.pointer_up_stage(interaction);
        idle.apply_rest_targets();
    }

    #[inline]
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }
}
