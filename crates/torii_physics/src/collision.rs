//! Collision layers and the blocking rule
//!
//! World solids carry a layer so queries can pick which kinds of geometry
//! they care about: horizontal movement collides with walls, platforms,
//! obstacles and feature objects, while the grounded probe looks at the
//! ground slab, platforms and obstacles.

use bitflags::bitflags;
use serde::{Serialize, Deserialize};

use crate::shapes::Aabb;

/// Tolerance below a solid's top face within which the player still counts
/// as standing on it rather than colliding with its side.
///
/// Tuning constant carried over from the original game; it trades a little
/// vertical interpenetration for horizontal movement that does not snag on
/// platform edges.
pub const STAND_TOLERANCE: f32 = 0.5;

bitflags! {
    /// Layers for filtering which solids a collision query considers
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CollisionLayer: u32 {
        /// The ground slab
        const GROUND = 1 << 0;
        /// Boundary walls (always block, no walkable top)
        const WALL = 1 << 1;
        /// The four colored platforms
        const PLATFORM = 1 << 2;
        /// Static and oscillating obstacles
        const OBSTACLE = 1 << 3;
        /// Platform feature objects (torii, pagoda, drum, lantern)
        const FEATURE = 1 << 4;
        /// All layers
        const ALL = 0xFFFFFFFF;
    }
}

impl CollisionLayer {
    /// Layers that block horizontal and upward player movement
    pub const BLOCKING: Self = Self::WALL
        .union(Self::PLATFORM)
        .union(Self::OBSTACLE)
        .union(Self::FEATURE);

    /// Layers the player can stand on
    pub const SUPPORT: Self = Self::GROUND
        .union(Self::PLATFORM)
        .union(Self::OBSTACLE);
}

/// A solid box in the world, tagged with its collision layer
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Solid {
    pub aabb: Aabb,
    pub layer: CollisionLayer,
}

impl Solid {
    /// Create a new solid
    pub fn new(aabb: Aabb, layer: CollisionLayer) -> Self {
        Self { aabb, layer }
    }

    /// Whether this solid blocks a moving box at the given position
    ///
    /// Walls and the ground block on plain overlap. Everything else has a
    /// walkable top: once the mover's bottom edge is within
    /// [`STAND_TOLERANCE`] of the solid's top face, the solid stops
    /// blocking so the mover can walk across it.
    pub fn blocks(&self, mover: &Aabb) -> bool {
        if !self.layer.intersects(CollisionLayer::WALL | CollisionLayer::GROUND)
            && mover.bottom() >= self.aabb.top() - STAND_TOLERANCE
        {
            return false;
        }
        self.aabb.intersects(mover)
    }
}

// Serde for the bitflags layer: stored as the raw bit value.
impl Serialize for CollisionLayer {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for CollisionLayer {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u32::deserialize(deserializer)?;
        Ok(CollisionLayer::from_bits_retain(bits))
    }
}
