//! Pointer trail: a fixed ring of recent pointer samples and the smoothed rope
//! curve derived from it with cubic Hermite interpolation.

use crate::error::{OverlayError, Result};
use crate::interaction::InteractionState;
use glam::Vec2;

/// Fixed-capacity ring of samples. Index 0 is the newest sample.
#[derive(Clone, Debug)]
pub struct History {
    samples: Box<[Vec2]>,
    head: usize,
}

impl History {
    /// Every slot starts at `fill`, so an untouched history is a single repeated point.
    pub fn filled(len: usize, fill: Vec2) -> Self {
        Self {
            samples: vec![fill; len].into_boxed_slice(),
            head: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample `i` steps back in time; out-of-range indices clamp to the ends.
    #[inline]
    pub fn get(&self, i: isize) -> Vec2 {
        let last = self.samples.len() as isize - 1;
        let i = i.clamp(0, last) as usize;
        self.samples[(self.head + i) % self.samples.len()]
    }

    /// Insert a new sample at index 0, overwriting the oldest.
    pub fn push_front(&mut self, sample: Vec2) {
        let len = self.samples.len();
        self.head = (self.head + len - 1) % len;
        self.samples[self.head] = sample;
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.samples.len() as isize).map(move |i| self.get(i))
    }

    /// Hermite interpolation at fractional history index `t`.
    pub fn interpolate(&self, t: f32) -> Vec2 {
        hermite(|i| self.get(i), t)
    }
}

/// Cubic Hermite interpolation over a scalar sequence at fractional index `t`.
///
/// Indices outside the slice clamp to its ends. An empty slice yields 0.0.
pub fn cubic_interpolation(values: &[f32], t: f32) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let last = values.len() as isize - 1;
    hermite(|i| Vec2::splat(values[i.clamp(0, last) as usize]), t).x
}

// Tangent at k is the centred difference of its clamped neighbours.
fn hermite(sample: impl Fn(isize) -> Vec2, t: f32) -> Vec2 {
    let k = t.floor();
    let ki = k as isize;
    let tangent = |j: isize| (sample(j + 1) - sample(j - 1)) * 0.5;

    let p0 = sample(ki);
    let p1 = sample(ki + 1);
    let m0 = tangent(ki);
    let m1 = tangent(ki + 1);

    let u = (t - k).clamp(0.0, 1.0);
    let u2 = u * u;
    let u3 = u2 * u;
    let h00 = 2.0 * u3 - 3.0 * u2 + 1.0;
    let h10 = u3 - 2.0 * u2 + u;
    let h01 = -2.0 * u3 + 3.0 * u2;
    let h11 = u3 - u2;

    p0 * h00 + m0 * h10 + p1 * h01 + m1 * h11
}

/// Keeps the pointer history and the rope points the renderer draws.
#[derive(Clone, Debug)]
pub struct TrailInterpolator {
    history: History,
    points: Vec<Vec2>,
}

impl TrailInterpolator {
    /// `origin` is the model's initial position; the history and every curve point start there.
    pub fn new(history_size: usize, rope_size: usize, origin: Vec2) -> Result<Self> {
        if history_size == 0 || rope_size == 0 {
            return Err(OverlayError::EmptyTrail {
                history: history_size,
                rope: rope_size,
            });
        }
        let mut trail = Self {
            history: History::filled(history_size, origin),
            points: vec![origin; rope_size],
        };
        trail.recompute();
        Ok(trail)
    }

    /// Push the latest pointer sample and rebuild the curve. No-op until a pointer
    /// sample exists or when the frame delta is not positive.
    pub fn tick(&mut self, interaction: &InteractionState, frame_delta: f32) {
        if !(frame_delta > 0.0) {
            return;
        }
        let Some(pointer) = interaction.pointer else {
            return;
        };
        self.history.push_front(pointer);
        self.recompute();
    }

    fn recompute(&mut self) {
        let rope = self.points.len() as f32;
        let span = self.history.len() as f32;
        for (i, p) in self.points.iter_mut().enumerate() {
            let t = (i as f32 / rope) * span;
            *p = self.history.interpolate(t);
        }
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }
}
