//! Configuration errors. Ticks and pointer handlers never fail; only construction does.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OverlayError {
    #[error("trail needs a non-empty history and rope (history={history}, rope={rope})")]
    EmptyTrail { history: usize, rope: usize },

    #[error("camera script has no keyframes")]
    EmptyScript,

    #[error("keyframe {index}: {reason}")]
    InvalidKeyframe { index: usize, reason: &'static str },

    #[error("invalid {which} size {width}x{height}")]
    InvalidSize {
        which: &'static str,
        width: f32,
        height: f32,
    },
}

pub type Result<T> = std::result::Result<T, OverlayError>;
