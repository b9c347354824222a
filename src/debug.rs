//! Debug overlay model
//!
//! Produces the overlay's text lines; font rendering and right-aligned
//! layout belong to the external text renderer. The app layer toggles the
//! overlay with TAB.

use crate::sim::FrameInput;

/// Information overlay state
#[derive(Debug, Clone, Default)]
pub struct DebugOverlay {
    /// Whether the overlay is drawn this frame
    pub active: bool,
}

impl DebugOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.active = !self.active;
        log::debug!("debug overlay {}", if self.active { "on" } else { "off" });
    }

    /// Text lines for the current frame, top to bottom. Empty while the
    /// overlay is inactive.
    pub fn lines(&self, fps: u32, input: &FrameInput) -> Vec<String> {
        if !self.active {
            return Vec::new();
        }
        vec![
            format!("FPS: {}", fps),
            format!("Mouse: {},{}", input.pointer.x as i32, input.pointer.y as i32),
        ]
    }
}
