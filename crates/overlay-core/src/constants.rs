// Shared tuning constants for the overlay engine. Hosts read these too.

// Trail
pub const HISTORY_SIZE: usize = 20; // pointer samples kept for the trail
pub const ROPE_SIZE: usize = 100; // interpolated points handed to the rope renderer

// Frame-delta conventions (renderer delta of 1.0 == one 60 Hz frame)
pub const FRAME_MS: f32 = 1000.0 / 60.0;
pub const IDLE_MS_PER_FRAME: f32 = 16.67; // blink timer scale
pub const CAMERA_MS_PER_FRAME: f32 = 16.0; // sequencer clock scale

// Idle motion
pub const SMOOTHING_SPEED: f32 = 0.1; // fraction of the remaining gap closed per tick
pub const BLINK_CLOSED_THRESHOLD: f32 = 0.01;
pub const FIRST_BLINK_INTERVAL_MS: f32 = 4000.0;
pub const EYE_OPEN: f32 = 1.0;
pub const EYE_CLOSED: f32 = 0.0;
pub const BLUSH_REST: f32 = -5.0;
pub const BLUSH_DRAG: f32 = 10.0;

// Drag
pub const DRAG_SENSITIVITY: f32 = 0.09; // rotation units per pixel

// Model parameter ids
pub const PARAM_EYE_R_OPEN: &str = "ParamEyeROpen";
pub const PARAM_EYE_L_OPEN: &str = "ParamEyeLOpen";
pub const PARAM_BLUSH: &str = "blush";
pub const PARAM_ANGLE_X: &str = "ParamAngleX";
pub const PARAM_ANGLE_Y: &str = "ParamAngleY";

// Camera choreography is authored against this screen size
pub const DESIGN_WIDTH: f32 = 1920.0;
pub const DESIGN_HEIGHT: f32 = 1080.0;

// Layout
pub const MODEL_SCALE_MARGIN: f32 = 1.1;
pub const MODEL_ORIGIN: [f32; 2] = [-50.0, -130.0];
pub const BACKGROUND_SIZE: [f32; 2] = [2560.0, 1440.0]; // lobby backdrop art
pub const MODEL_BOUNDS: [f32; 2] = [2048.0, 2048.0]; // model canvas, unscaled

// Pointer capabilities
pub const MODEL_CURSOR: &str = "url(\"/images/custom_cursor.png\") 16 16, auto";
