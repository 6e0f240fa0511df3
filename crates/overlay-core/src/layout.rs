//! Cover-fit layout for the background and the character model.

use crate::constants::{MODEL_ORIGIN, MODEL_SCALE_MARGIN};
use glam::Vec2;

/// Uniform scale that makes `content` cover `view` entirely (may crop).
#[inline]
pub fn cover_scale(view: Vec2, content: Vec2) -> f32 {
    if content.x <= 0.0 || content.y <= 0.0 {
        return 1.0;
    }
    let s = view / content;
    s.x.max(s.y)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneLayout {
    pub background_scale: f32,
    pub model_position: Vec2,
    pub model_scale: f32,
}

impl SceneLayout {
    /// Background covers the view; the model covers it with a 10% margin and is
    /// nudged up-left so the face sits in frame.
    pub fn fit(view: Vec2, background: Vec2, model_bounds: Vec2) -> Self {
        Self {
            background_scale: cover_scale(view, background),
            model_position: Vec2::from(MODEL_ORIGIN),
            model_scale: cover_scale(view, model_bounds) * MODEL_SCALE_MARGIN,
        }
    }

    /// Model rectangle in container space, used by hosts for pointer hit-testing.
    pub fn model_rect(&self, model_bounds: Vec2) -> (Vec2, Vec2) {
        let min = self.model_position;
        (min, min + model_bounds * self.model_scale)
    }
}
