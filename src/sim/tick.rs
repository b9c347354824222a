//! Per-frame world update
//!
//! One tick is one frame: integrate the player, reconcile against terrain,
//! then let tiles handle hover/click removal. The caller owns quitting and
//! the debug-overlay toggle; neither belongs to the simulation.

use super::collision::resolve_collisions;
use super::input::FrameInput;
use super::player;
use super::state::World;

/// Advance the world by one frame
pub fn tick(world: &mut World, input: &FrameInput, dt: f32) {
    player::integrate(&mut world.player, input, dt);
    resolve_collisions(&mut world.player, &world.terrain);
    world.terrain.update(input);
    world.frames += 1;
}
