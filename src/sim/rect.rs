//! Axis-aligned rectangle geometry
//!
//! Screen coordinates: X grows right, Y grows down, so `top < bottom`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (non-negative)
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Build a rect from its center point
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Strict point containment: points on an edge do not count.
    /// Hover detection uses this, so a pointer resting exactly on a tile
    /// border hovers neither neighbor.
    pub fn contains_point_exclusive(&self, p: Vec2) -> bool {
        self.left() < p.x && p.x < self.right() && self.top() < p.y && p.y < self.bottom()
    }

    /// Strict overlap on both axes; rects that merely share an edge miss
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
