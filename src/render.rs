//! Render-target interface
//!
//! The core never formats pixels. It hands the external renderer a flat
//! draw list of colored rectangles, back to front, and the renderer owns
//! everything from there (surface, pipeline, fonts).

use glam::Vec2;

use crate::Rgba;
use crate::sim::World;

/// One colored rectangle for the renderer to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    /// Top-left corner in world coordinates
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Rgba,
}

/// Build the frame's draw list: terrain first, player on top
pub fn draw_list(world: &World) -> Vec<Sprite> {
    let mut sprites: Vec<Sprite> = world
        .terrain
        .iter()
        .map(|tile| {
            let rect = tile.rect();
            Sprite {
                pos: rect.pos,
                size: rect.size,
                color: tile.color,
            }
        })
        .collect();

    let player_rect = world.player.rect();
    sprites.push(Sprite {
        pos: player_rect.pos,
        size: player_rect.size,
        color: world.player.color,
    });

    sprites
}
