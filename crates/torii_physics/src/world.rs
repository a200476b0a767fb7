//! The set of world solids and its collision queries

use slotmap::{new_key_type, SlotMap};

use crate::collision::{CollisionLayer, Solid};
use crate::shapes::Aabb;
use torii_math::Vec3;

new_key_type! {
    /// Key to a solid in the [`SolidSet`]
    ///
    /// Generational, so a key held by a game object (an oscillating
    /// obstacle keeping its box in sync) can never silently alias a slot
    /// that was removed and reused.
    pub struct SolidKey;
}

/// How far below the player the grounded probe reaches
pub const SUPPORT_PROBE: f32 = 0.1;

/// Configuration for the movement simulation
#[derive(Clone, Debug)]
pub struct PhysicsConfig {
    /// Gravity acceleration (applied to Y, negative = down)
    pub gravity: f32,
    /// Upward velocity applied when jumping
    pub jump_velocity: f32,
    /// Minimum player center height; the hard floor clamp
    pub floor_y: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: -25.0,
            jump_velocity: 12.0,
            floor_y: 1.0,
        }
    }
}

/// All solid collision geometry in the world
///
/// Static geometry is inserted once at scene instantiation; moving
/// obstacles keep their key and update their box in place each frame.
#[derive(Default)]
pub struct SolidSet {
    solids: SlotMap<SolidKey, Solid>,
}

impl SolidSet {
    /// Create an empty solid set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a solid and return its key
    pub fn insert(&mut self, solid: Solid) -> SolidKey {
        self.solids.insert(solid)
    }

    /// Remove a solid
    pub fn remove(&mut self, key: SolidKey) -> Option<Solid> {
        self.solids.remove(key)
    }

    /// Get a solid by key
    pub fn get(&self, key: SolidKey) -> Option<&Solid> {
        self.solids.get(key)
    }

    /// Get a mutable solid by key
    pub fn get_mut(&mut self, key: SolidKey) -> Option<&mut Solid> {
        self.solids.get_mut(key)
    }

    /// Move the solid with the given key to a new center
    ///
    /// No-op if the key is stale.
    pub fn set_center(&mut self, key: SolidKey, center: Vec3) {
        if let Some(solid) = self.solids.get_mut(key) {
            solid.aabb.center = center;
        }
    }

    /// Number of solids
    pub fn len(&self) -> usize {
        self.solids.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }

    /// Remove all solids
    pub fn clear(&mut self) {
        self.solids.clear();
    }

    /// Iterate over all solids
    pub fn iter(&self) -> impl Iterator<Item = (SolidKey, &Solid)> {
        self.solids.iter()
    }

    /// Whether any solid in `mask` blocks a box at this position
    ///
    /// Walkable-top geometry (platforms, obstacles, features) stops
    /// blocking once the box's bottom is near or above its top face; see
    /// [`Solid::blocks`].
    pub fn blocked(&self, mover: &Aabb, mask: CollisionLayer) -> bool {
        self.solids
            .values()
            .filter(|s| s.layer.intersects(mask))
            .any(|s| s.blocks(mover))
    }

    /// Whether a box lowered by [`SUPPORT_PROBE`] overlaps any solid in
    /// `mask`; the stand-on-top test
    pub fn supported(&self, mover: &Aabb, mask: CollisionLayer) -> bool {
        let probe = mover.translated(Vec3::new(0.0, -SUPPORT_PROBE, 0.0));
        self.solids
            .values()
            .filter(|s| s.layer.intersects(mask))
            .any(|s| s.aabb.intersects(&probe))
    }
}
