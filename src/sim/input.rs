//! Per-frame input snapshot
//!
//! The platform layer polls its devices once per frame and freezes the
//! result here. The simulation only ever sees this snapshot, so every
//! component works from the same view of the frame's input.

use glam::Vec2;

/// Input state for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Pointer position in screen coordinates
    pub pointer: Vec2,
    /// Left pointer button currently held
    pub pointer_down: bool,
    /// "Move left" key currently held
    pub move_left: bool,
    /// "Move right" key currently held
    pub move_right: bool,
    /// Jump key went down this frame (edge-triggered, not held state)
    pub jump_pressed: bool,
}

impl FrameInput {
    /// Snapshot with the pointer at the given position and nothing pressed
    pub fn at_pointer(x: f32, y: f32) -> Self {
        Self {
            pointer: Vec2::new(x, y),
            ..Self::default()
        }
    }
}
