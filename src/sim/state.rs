//! World state and terrain generation
//!
//! The world owns the player, the terrain set, and the seeded RNG that
//! drives generation, so two worlds built from the same seed are identical.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{Player, TerrainKind};
use super::terrain::TerrainSet;
use crate::consts::*;

/// Number of log tiles in the shortest and tallest tree
const TREE_MIN_HEIGHT: u32 = 3;
const TREE_MAX_HEIGHT: u32 = 5;
/// Trees per generated world
const TREE_COUNT: u32 = 4;

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    /// Generation seed, kept for reproducibility
    pub seed: u64,
    pub player: Player,
    pub terrain: TerrainSet,
    /// Frames simulated so far
    pub frames: u64,
    rng: Pcg32,
}

impl World {
    /// Empty world: a player floating over no terrain
    pub fn new(seed: u64) -> Self {
        let spawn_y = Self::ground_y() - PLAYER_HEIGHT;
        Self {
            seed,
            player: Player::new(SCREEN_WIDTH / 2.0, spawn_y),
            terrain: TerrainSet::new(),
            frames: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Top edge of the ground strip
    pub fn ground_y() -> f32 {
        SCREEN_HEIGHT - 2.0 * TILE_SIZE
    }

    /// World with generated terrain: a full-width ground strip of blocks
    /// plus a handful of log "trees" on random columns.
    pub fn generate(seed: u64) -> Self {
        let mut world = Self::new(seed);
        world.generate_ground();
        world.generate_trees();
        log::info!(
            "generated world seed={} with {} terrain tiles",
            seed,
            world.terrain.len()
        );
        world
    }

    fn generate_ground(&mut self) {
        let cols = (SCREEN_WIDTH / TILE_SIZE) as u32;
        let y = Self::ground_y();
        for col in 0..cols {
            let pos = Vec2::new(col as f32 * TILE_SIZE, y);
            self.terrain.spawn(TerrainKind::Block, pos, &mut self.rng);
        }
    }

    fn generate_trees(&mut self) {
        let cols = (SCREEN_WIDTH / TILE_SIZE) as u32;
        for _ in 0..TREE_COUNT {
            let col = self.rng.random_range(0..cols);
            let height = self.rng.random_range(TREE_MIN_HEIGHT..=TREE_MAX_HEIGHT);
            for level in 1..=height {
                let pos = Vec2::new(
                    col as f32 * TILE_SIZE,
                    Self::ground_y() - level as f32 * TILE_SIZE,
                );
                self.terrain.spawn(TerrainKind::Log, pos, &mut self.rng);
            }
        }
    }

    /// RNG handle for callers that spawn tiles directly (tests, tools)
    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        let a = World::generate(99);
        let b = World::generate(99);
        assert_eq!(a.terrain.len(), b.terrain.len());
        for (ta, tb) in a.terrain.iter().zip(b.terrain.iter()) {
            assert_eq!(ta.id, tb.id);
            assert_eq!(ta.kind, tb.kind);
            assert_eq!(ta.pos, tb.pos);
            assert_eq!(ta.color, tb.color);
        }
    }

    #[test]
    fn test_ground_spans_screen_width() {
        let world = World::generate(1);
        let cols = (SCREEN_WIDTH / TILE_SIZE) as usize;
        let ground: Vec<_> = world
            .terrain
            .iter()
            .filter(|t| t.kind == TerrainKind::Block && t.pos.y == World::ground_y())
            .collect();
        assert_eq!(ground.len(), cols);
    }

    #[test]
    fn test_trees_are_vertical_log_stacks() {
        let world = World::generate(2);
        let logs: Vec<_> = world
            .terrain
            .iter()
            .filter(|t| t.kind == TerrainKind::Log)
            .collect();
        assert!(!logs.is_empty());
        for tile in &logs {
            // Column-aligned and strictly above the ground strip
            assert_eq!(tile.pos.x % TILE_SIZE, 0.0);
            assert!(tile.pos.y < World::ground_y());
            assert_eq!((World::ground_y() - tile.pos.y) % TILE_SIZE, 0.0);
        }
    }

    #[test]
    fn test_player_spawns_above_ground() {
        let world = World::new(0);
        assert!(world.player.rect().bottom() <= World::ground_y());
        assert!(world.player.falling);
    }
}
