// Host-side tests for constants and their relationships with the engine defaults.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use overlay_core::{FRAME_MS, MODEL_CURSOR};

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_clamp_allows_several_frames() {
    assert!(MAX_FRAME_MS > FRAME_MS * 4.0);
}

#[test]
fn cursor_defaults_are_css() {
    assert_eq!(DEFAULT_CURSOR, "auto");
    assert!(MODEL_CURSOR.ends_with(", auto"));
    assert!(!CANVAS_ID.is_empty());
    assert_eq!(PRIMARY_BUTTON, 0);
}
