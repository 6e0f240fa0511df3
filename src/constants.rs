// Web front-end constants. Engine tuning lives in overlay-core.

pub const CANVAS_ID: &str = "app-canvas";

// Longer gaps (tab switch, debugger pause) count as a single frame of this length
pub const MAX_FRAME_MS: f32 = 250.0;

pub const PRIMARY_BUTTON: i16 = 0;
pub const DEFAULT_CURSOR: &str = "auto";
