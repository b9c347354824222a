//! Talisman - a tile-based 2D sandbox/platformer prototype
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, terrain, collisions)
//! - `clock`: Frame timing with a target-framerate cap
//! - `render`: Draw-list interface consumed by an external renderer
//! - `debug`: Debug overlay text model (toggled with TAB)
//! - `settings`: User preferences persisted as JSON

pub mod clock;
pub mod debug;
pub mod render;
pub mod settings;
pub mod sim;

pub use clock::FrameClock;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Window dimensions (the renderer owns the actual surface)
    pub const SCREEN_WIDTH: f32 = 1920.0;
    pub const SCREEN_HEIGHT: f32 = 1080.0;
    pub const SCREEN_TITLE: &str = "Project Talisman";

    /// Frame-rate cap (frames per second)
    pub const TARGET_FPS: u32 = 120;

    /// Gravity added to vertical velocity each frame while falling.
    /// Accumulates per frame, not per second, with no terminal cap.
    pub const GRAVITY: f32 = 10.0;

    /// Terrain tile edge length in pixels
    pub const TILE_SIZE: f32 = 32.0;

    /// Player dimensions
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 64.0;
    /// Fixed horizontal speed (pixels/second)
    pub const PLAYER_SPEED: f32 = 250.0;
    /// Jump impulse applied to vertical velocity (screen Y grows downward)
    pub const JUMP_IMPULSE: f32 = -500.0;

    /// Edge distance below which an overlapping pair snaps together
    pub const SNAP_TOLERANCE: f32 = 10.0;
    /// Max gap between player feet and ground top before going airborne
    pub const GROUND_PROBE_TOLERANCE: f32 = 5.0;
    /// Max horizontal offset from a tile before it no longer counts as ground
    pub const GROUND_PROBE_REACH: f32 = 32.0;
}

/// RGBA color as exposed to the renderer (the core never formats pixels)
pub type Rgba = [u8; 4];

/// Clear color for the frame background
pub const BLACK: Rgba = [0, 0, 0, 255];
/// Player fill color
pub const WHITE: Rgba = [255, 255, 255, 255];
/// Fixed color for log tiles
pub const LOG_BROWN: Rgba = [64, 40, 13, 255];
