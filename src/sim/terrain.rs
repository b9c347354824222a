//! Terrain collection
//!
//! A flat bag of tiles with id-based identity. Overlapping tiles are
//! allowed; nothing deduplicates by position. A linear scan per query is
//! fine at prototype scale (a few hundred tiles) and is the documented
//! scalability limit of this core.

use glam::Vec2;
use rand_pcg::Pcg32;

use super::entity::{TerrainEntity, TerrainKind};
use super::input::FrameInput;

/// All terrain tiles forming the level geometry
#[derive(Debug, Clone, Default)]
pub struct TerrainSet {
    tiles: Vec<TerrainEntity>,
    next_id: u32,
}

impl TerrainSet {
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate an id and insert a new tile, returning its id
    pub fn spawn(&mut self, kind: TerrainKind, pos: Vec2, rng: &mut Pcg32) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.tiles.push(TerrainEntity::new(id, kind, pos, rng));
        id
    }

    /// Remove a tile by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.tiles.len();
        self.tiles.retain(|t| t.id != id);
        self.tiles.len() != before
    }

    pub fn get(&self, id: u32) -> Option<&TerrainEntity> {
        self.tiles.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TerrainEntity> {
        self.tiles.iter()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile whose anchor is nearest to `point` by Euclidean distance.
    ///
    /// Total: returns `None` on an empty set instead of faulting, so the
    /// ground probe can treat "no terrain" as "no ground".
    pub fn nearest(&self, point: Vec2) -> Option<&TerrainEntity> {
        self.tiles.iter().min_by(|a, b| {
            let da = a.pos.distance_squared(point);
            let db = b.pos.distance_squared(point);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    /// Run every tile's hover/click update, then prune the tiles that
    /// asked to be removed. Pruning happens after the pass so updates never
    /// observe a half-mutated set.
    pub fn update(&mut self, input: &FrameInput) {
        let mut removed = 0usize;
        self.tiles.retain_mut(|tile| {
            let remove = tile.update(input);
            if remove {
                log::debug!("removed {:?} tile {} at {}", tile.kind, tile.id, tile.pos);
                removed += 1;
            }
            !remove
        });
        if removed > 0 {
            log::debug!("{} tile(s) removed, {} remain", removed, self.tiles.len());
        }
    }
}
