//! Floating entity: one on-screen emoji with its own kinematic state

use glam::Vec2;

use crate::catalog::EmojiItem;

/// One floating emoji instance.
///
/// Plain value owned by the engine; the presentation layer reads snapshots and
/// never holds a mutable handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingEntity {
    /// Unique per spawn batch, monotonically increasing across refreshes
    pub id: u32,
    /// The catalog item this entity displays
    pub item: EmojiItem,
    /// Center position in screen space
    pub pos: Vec2,
    /// Drift velocity in screen units per second
    pub vel: Vec2,
    /// Diameter in screen units
    pub size: f32,
}

impl FloatingEntity {
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    /// Circular tap-target test
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance_squared(point) <= self.radius() * self.radius()
    }
}
