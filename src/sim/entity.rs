//! World entities: terrain tiles and the player
//!
//! Terrain tiles are anchored at their top-left corner; the player is
//! anchored at its center. The collision code assumes this asymmetry, so
//! both anchors are part of the contract, not an implementation detail.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::input::FrameInput;
use super::rect::Aabb;
use crate::consts::*;
use crate::{LOG_BROWN, Rgba, WHITE};

/// Terrain tile variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerrainKind {
    /// Default tile the world is built out of
    Block,
    /// Tree trunk tile, spawned in vertical stacks
    Log,
}

impl TerrainKind {
    /// Color for a freshly spawned tile. Blocks get a random green shade,
    /// logs are a fixed brown.
    pub fn spawn_color(&self, rng: &mut Pcg32) -> Rgba {
        match self {
            TerrainKind::Block => [0, rng.random_range(0..=255), 0, 255],
            TerrainKind::Log => LOG_BROWN,
        }
    }
}

/// A static terrain tile (32x32, top-left anchored)
#[derive(Debug, Clone)]
pub struct TerrainEntity {
    pub id: u32,
    pub kind: TerrainKind,
    /// Top-left corner in world coordinates
    pub pos: Vec2,
    /// Fill color handed to the renderer
    pub color: Rgba,
    /// Pointer was inside the tile on the last update
    pub hovered: bool,
}

impl TerrainEntity {
    pub fn new(id: u32, kind: TerrainKind, pos: Vec2, rng: &mut Pcg32) -> Self {
        let color = kind.spawn_color(rng);
        Self {
            id,
            kind,
            pos,
            color,
            hovered: false,
        }
    }

    /// Bounding rect, derived from the top-left anchor
    pub fn rect(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(TILE_SIZE))
    }

    /// Hover/click interaction for one frame.
    ///
    /// Returns `true` when the tile should be removed from its owning set.
    /// Removal itself is left to the owner so the set is never mutated
    /// while it is being iterated.
    pub fn update(&mut self, input: &FrameInput) -> bool {
        self.hovered = self.rect().contains_point_exclusive(input.pointer);
        self.hovered && input.pointer_down
    }
}

/// The player character (32x64, center anchored)
#[derive(Debug, Clone)]
pub struct Player {
    /// Center position in world coordinates
    pub pos: Vec2,
    /// Velocity in pixels/second
    pub vel: Vec2,
    /// Fixed horizontal speed magnitude
    pub speed: f32,
    /// True whenever the player is not supported by terrain
    pub falling: bool,
    pub color: Rgba,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            speed: PLAYER_SPEED,
            falling: true,
            color: WHITE,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Bounding rect, derived from the center anchor
    pub fn rect(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size())
    }

    /// Move the player so its rect's bottom edge sits at `y`
    pub fn snap_bottom(&mut self, y: f32) {
        self.pos.y = y - PLAYER_HEIGHT / 2.0;
    }

    /// Move the player so its rect's top edge sits at `y`
    pub fn snap_top(&mut self, y: f32) {
        self.pos.y = y + PLAYER_HEIGHT / 2.0;
    }

    /// Move the player so its rect's left edge sits at `x`
    pub fn snap_left(&mut self, x: f32) {
        self.pos.x = x + PLAYER_WIDTH / 2.0;
    }

    /// Move the player so its rect's right edge sits at `x`
    pub fn snap_right(&mut self, x: f32) {
        self.pos.x = x - PLAYER_WIDTH / 2.0;
    }
}
