//! Player/terrain collision resolution
//!
//! Runs once per frame, after player integration. Every terrain tile
//! overlapping the player is resolved independently: the player edge
//! closest to the matching tile edge (within `SNAP_TOLERANCE`) decides the
//! collision axis, the velocity on that axis is zeroed, and the player is
//! snapped flush to the tile. Choosing the smallest edge distance makes
//! corner clips deterministic regardless of tile order.
//!
//! When no tile supported the player from below, a fallback probe asks the
//! terrain for the tile nearest the player's feet and flips `falling` on
//! when that tile is too far away to count as ground.

use glam::Vec2;

use super::entity::{Player, TerrainEntity};
use super::rect::Aabb;
use super::terrain::TerrainSet;
use crate::consts::{GROUND_PROBE_REACH, GROUND_PROBE_TOLERANCE, SNAP_TOLERANCE};

/// Which player edge made contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Contact {
    /// Player left edge against a tile's right edge
    Left,
    /// Player right edge against a tile's left edge
    Right,
    /// Player top edge against a tile's bottom edge (head bump)
    Top,
    /// Player bottom edge against a tile's top edge (landing)
    Bottom,
}

/// Reconcile the player against all overlapping terrain, then re-derive
/// the `falling` flag if nothing supported the player this frame.
pub fn resolve_collisions(player: &mut Player, terrain: &TerrainSet) {
    let mut supported = false;

    for tile in terrain.iter() {
        // Recompute each iteration: an earlier snap may have moved the rect
        let rect = player.rect();
        let tile_rect = tile.rect();
        if !rect.overlaps(&tile_rect) {
            continue;
        }

        match closest_contact(&rect, &tile_rect) {
            Some(Contact::Left) => {
                player.vel.x = 0.0;
                player.snap_left(tile_rect.right());
            }
            Some(Contact::Right) => {
                player.vel.x = 0.0;
                player.snap_right(tile_rect.left());
            }
            Some(Contact::Top) => {
                player.vel.y = 0.0;
                player.snap_top(tile_rect.bottom());
            }
            Some(Contact::Bottom) => {
                player.falling = false;
                player.vel.y = 0.0;
                player.snap_bottom(tile_rect.top());
                supported = true;
            }
            // Overlap deeper than the tolerance on every axis; the
            // prototype accepts this as a gameplay state, not a fault
            None => {}
        }
    }

    if !supported && !player.falling {
        ground_probe(player, terrain);
    }
}

/// Pick the contact whose player/tile edge pair is closest, among the
/// pairs within the snap tolerance. Smallest penetration wins.
fn closest_contact(rect: &Aabb, tile: &Aabb) -> Option<Contact> {
    let candidates = [
        (Contact::Left, (rect.left() - tile.right()).abs()),
        (Contact::Right, (rect.right() - tile.left()).abs()),
        (Contact::Top, (rect.top() - tile.bottom()).abs()),
        (Contact::Bottom, (rect.bottom() - tile.top()).abs()),
    ];

    candidates
        .into_iter()
        .filter(|(_, gap)| *gap < SNAP_TOLERANCE)
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(contact, _)| contact)
}

/// Secondary ground check for frames without a direct landing contact.
///
/// The player stays grounded only while the tile nearest the feet point is
/// both vertically flush (within `GROUND_PROBE_TOLERANCE`) and horizontally
/// within reach. An empty terrain set means there is no ground at all.
fn ground_probe(player: &mut Player, terrain: &TerrainSet) {
    let feet = Vec2::new(player.pos.x, player.rect().bottom());

    match terrain.nearest(feet) {
        None => player.falling = true,
        Some(tile) => {
            if !supports(player, tile) {
                player.falling = true;
            }
        }
    }
}

fn supports(player: &Player, tile: &TerrainEntity) -> bool {
    let gap = (tile.rect().top() - player.rect().bottom()).abs();
    let reach = (tile.pos.x - player.pos.x).abs();
    gap <= GROUND_PROBE_TOLERANCE && reach <= GROUND_PROBE_REACH
}
