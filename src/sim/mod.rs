//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Input arrives as an immutable per-frame snapshot
//! - Seeded RNG only (terrain generation, block colors)
//! - Stable iteration order (terrain is a Vec, iterated front to back)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod input;
pub mod player;
pub mod rect;
pub mod state;
pub mod terrain;
pub mod tick;

pub use collision::resolve_collisions;
pub use entity::{Player, TerrainEntity, TerrainKind};
pub use input::FrameInput;
pub use rect::Aabb;
pub use state::World;
pub use terrain::TerrainSet;
pub use tick::tick;
