use glam::Vec2;

/// Drag anchor captured on pointer-down; only meaningful while dragging.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        pointer_start: Vec2,
        model_start: Vec2,
    },
}

/// Pointer and drag state shared between event handlers and ticks.
///
/// Event handlers only write here; the interpolation and smoothing work happens
/// in the components' tick functions, which read it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractionState {
    /// Latest pointer location in screen space, `None` until the first move.
    pub pointer: Option<Vec2>,
    pub drag: DragState,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    #[inline]
    pub fn record_pointer(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }
}
