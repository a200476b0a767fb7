//! Collectibles gathered by touching them

use serde::{Serialize, Deserialize};
use torii_physics::Aabb;

use crate::scene::Color;

/// A floating pickup owned by one of the platforms
///
/// The `collected` flag flips false → true exactly once, on the first
/// player overlap, and never reverts until a full scene reset rebuilds
/// the collectible.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Collectible {
    pub aabb: Aabb,
    pub color: Color,
    /// Index of the owning platform
    pub platform: usize,
    collected: bool,
}

impl Collectible {
    /// Create an uncollected collectible
    pub fn new(aabb: Aabb, color: Color, platform: usize) -> Self {
        Self {
            aabb,
            color,
            platform,
            collected: false,
        }
    }

    /// Whether this collectible has been picked up
    #[inline]
    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Collect if the player's box overlaps an uncollected pickup
    ///
    /// Returns true only on the transition; repeated overlaps are no-ops.
    pub fn try_collect(&mut self, player_box: &Aabb) -> bool {
        if !self.collected && self.aabb.intersects(player_box) {
            self.collected = true;
            true
        } else {
            false
        }
    }
}
