// Browser-independent state behind the canvas: the engine, the scene geometry and hover.

use glam::Vec2;
use overlay_core::{
    frame_delta_from_ms, DrawList, Overlay, OverlayConfig, OverlayError, ParamIds, ParamStore,
    SceneView, BACKGROUND_SIZE, MODEL_BOUNDS,
};

pub struct Stage {
    pub overlay: Overlay<ParamStore>,
    pub scene: SceneView,
    view: Vec2,
    hovering: bool,
}

impl Stage {
    pub fn new(view: Vec2, config: OverlayConfig) -> Result<Self, OverlayError> {
        let ids = config.params.clone();
        let config = config.with_screen_size(view.x, view.y);
        let overlay = Overlay::new(config, ParamStore::with_rest_pose(&ids))?;
        let scene = SceneView::new(
            view,
            Vec2::from(BACKGROUND_SIZE),
            Vec2::from(MODEL_BOUNDS),
            ids,
        );
        Ok(Self {
            overlay,
            scene,
            view,
            hovering: false,
        })
    }

    pub fn with_defaults(view: Vec2) -> Result<Self, OverlayError> {
        Self::new(view, OverlayConfig::default())
    }

    pub fn ids(&self) -> &ParamIds {
        &self.scene.ids
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Refit the layout when the canvas backing size changed; the camera script keeps the
    /// screen size it was built for.
    pub fn resize(&mut self, view: Vec2) {
        if view == self.view || view.x <= 0.0 || view.y <= 0.0 {
            return;
        }
        self.view = view;
        self.scene.resize(view);
    }

    /// Forward a move; returns the new hover state when it changed.
    pub fn pointer_move(&mut self, pos: Vec2) -> Option<bool> {
        self.overlay.pointer_move(pos);
        let hovering = self.overlay.pointer_capabilities().interactive
            && self.scene.hit_model(self.overlay.transform(), pos);
        if hovering == self.hovering {
            return None;
        }
        self.hovering = hovering;
        Some(hovering)
    }

    pub fn pointer_down(&mut self, pos: Vec2) {
        let hit = self.scene.hit_model(self.overlay.transform(), pos);
        self.overlay.pointer_down(pos, hit);
    }

    pub fn pointer_up_stage(&mut self) {
        self.overlay.pointer_up_stage();
    }

    pub fn pointer_up_global(&mut self) {
        self.overlay.pointer_up_global();
    }

    /// CSS cursor for the canvas given the current hover state.
    pub fn cursor<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.hovering {
            &self.overlay.pointer_capabilities().cursor
        } else {
            fallback
        }
    }

    pub fn frame(&mut self, dt_ms: f32) -> DrawList {
        self.overlay.tick(frame_delta_from_ms(dt_ms));
        self.scene.draw_list(&self.overlay)
    }
}
