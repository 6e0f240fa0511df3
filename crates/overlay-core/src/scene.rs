//! Renderer-neutral description of one overlay frame.
//!
//! Hosts own the actual drawing (wgpu on desktop, canvas 2D on the web). This module turns
//! the engine's outputs into flat quads plus a ribbon for the trail, so both hosts draw the
//! same picture. Model and background art are stood in for by coloured blocks.

use crate::constants::{BLUSH_DRAG, BLUSH_REST};
use crate::layout::SceneLayout;
use crate::overlay::Overlay;
use crate::params::{ParamIds, ParameterModel};
use crate::sequencer::Transform2D;
use glam::Vec2;

pub const TRAIL_WIDTH: f32 = 18.0; // px at the head of the ribbon
pub const HEAD_TILT_PX: f32 = 3.0; // model-space px per unit of head angle

pub const BACKGROUND_COLOR: [f32; 4] = [0.10, 0.08, 0.16, 1.0];
pub const BODY_COLOR: [f32; 4] = [0.93, 0.86, 0.80, 1.0];
pub const EYE_COLOR: [f32; 4] = [0.16, 0.10, 0.22, 1.0];
pub const BLUSH_COLOR: [f32; 3] = [0.95, 0.35, 0.45];
pub const TRAIL_COLOR: [f32; 3] = [0.70, 0.85, 1.0];

// Face features as fractions of the model rectangle
const EYE_CENTERS: [[f32; 2]; 2] = [[0.38, 0.32], [0.62, 0.32]];
const EYE_SIZE: [f32; 2] = [0.08, 0.06];
const CHEEK_CENTERS: [[f32; 2]; 2] = [[0.33, 0.42], [0.67, 0.42]];
const CHEEK_SIZE: [f32; 2] = [0.10, 0.035];
const BLUSH_MAX_ALPHA: f32 = 0.6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    pub min: Vec2,
    pub max: Vec2,
    pub color: [f32; 4],
}

/// Cross-section of the trail ribbon at one curve point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RibbonEdge {
    pub left: Vec2,
    pub right: Vec2,
    pub alpha: f32,
}

#[derive(Clone, Debug, Default)]
pub struct DrawList {
    /// Back to front, in screen pixels.
    pub quads: Vec<Quad>,
    pub ribbon: Vec<RibbonEdge>,
    pub ribbon_color: [f32; 3],
}

/// Extrude the rope perpendicular to its direction, tapering and fading towards the tail.
pub fn ribbon(points: &[Vec2], width: f32) -> Vec<RibbonEdge> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    let mut edges = Vec::with_capacity(n);
    for i in 0..n {
        let prev = points[i.saturating_sub(1)];
        let next = points[(i + 1).min(n - 1)];
        let dir = (next - prev).normalize_or_zero();
        let normal = Vec2::new(-dir.y, dir.x);
        let fade = 1.0 - i as f32 / (n - 1) as f32;
        let half = normal * (width * 0.5 * fade);
        edges.push(RibbonEdge {
            left: points[i] + half,
            right: points[i] - half,
            alpha: fade,
        });
    }
    edges
}

#[inline]
fn to_screen(transform: &Transform2D, p: Vec2) -> Vec2 {
    transform.position + p * transform.scale
}

/// Static scene geometry: background and model sizes plus the cover layout for the view.
#[derive(Clone, Debug)]
pub struct SceneView {
    pub background_size: Vec2,
    pub model_bounds: Vec2,
    pub layout: SceneLayout,
    pub ids: ParamIds,
}

impl SceneView {
    pub fn new(view: Vec2, background_size: Vec2, model_bounds: Vec2, ids: ParamIds) -> Self {
        Self {
            background_size,
            model_bounds,
            layout: SceneLayout::fit(view, background_size, model_bounds),
            ids,
        }
    }

    pub fn resize(&mut self, view: Vec2) {
        self.layout = SceneLayout::fit(view, self.background_size, self.model_bounds);
    }

    /// Model rectangle in screen pixels under the camera transform.
    pub fn model_screen_rect(&self, transform: &Transform2D) -> (Vec2, Vec2) {
        let (min, max) = self.layout.model_rect(self.model_bounds);
        (to_screen(transform, min), to_screen(transform, max))
    }

    /// Hit-test for pointer-down over the model.
    pub fn hit_model(&self, transform: &Transform2D, pointer: Vec2) -> bool {
        let (min, max) = self.model_screen_rect(transform);
        pointer.cmpge(min).all() && pointer.cmple(max).all()
    }

    pub fn draw_list<M: ParameterModel>(&self, overlay: &Overlay<M>) -> DrawList {
        let transform = overlay.transform();
        let model = overlay.model();
        let mut quads = Vec::with_capacity(6);

        let bg_max = self.background_size * self.layout.background_scale;
        quads.push(Quad {
            min: to_screen(transform, Vec2::ZERO),
            max: to_screen(transform, bg_max),
            color: BACKGROUND_COLOR,
        });

        let (body_min, body_max) = self.layout.model_rect(self.model_bounds);
        quads.push(Quad {
            min: to_screen(transform, body_min),
            max: to_screen(transform, body_max),
            color: BODY_COLOR,
        });

        let size = body_max - body_min;
        let tilt = Vec2::new(model.value(&self.ids.angle_x), -model.value(&self.ids.angle_y))
            * HEAD_TILT_PX
            * self.layout.model_scale;
        let feature = |center: [f32; 2], extent: Vec2, color: [f32; 4]| {
            let c = body_min + Vec2::from(center) * size + tilt;
            let half = extent * size * 0.5;
            Quad {
                min: to_screen(transform, c - half),
                max: to_screen(transform, c + half),
                color,
            }
        };

        let blush = (model.value(&self.ids.blush) - BLUSH_REST) / (BLUSH_DRAG - BLUSH_REST);
        let blush_alpha = blush.clamp(0.0, 1.0) * BLUSH_MAX_ALPHA;
        if blush_alpha > 0.0 {
            let [r, g, b] = BLUSH_COLOR;
            for c in CHEEK_CENTERS {
                quads.push(feature(c, Vec2::from(CHEEK_SIZE), [r, g, b, blush_alpha]));
            }
        }

        let openness = [
            model.value(&self.ids.eye_r_open),
            model.value(&self.ids.eye_l_open),
        ];
        for (c, open) in EYE_CENTERS.into_iter().zip(openness) {
            let extent = Vec2::new(EYE_SIZE[0], EYE_SIZE[1] * open.clamp(0.05, 1.0));
            quads.push(feature(c, extent, EYE_COLOR));
        }

        DrawList {
            quads,
            ribbon: ribbon(overlay.trail_points(), TRAIL_WIDTH),
            ribbon_color: TRAIL_COLOR,
        }
    }
}
