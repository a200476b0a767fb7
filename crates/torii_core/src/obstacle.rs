//! Obstacles: static barriers and single-axis oscillating movers

use serde::{Serialize, Deserialize};
use torii_math::Vec3;
use torii_physics::{SolidKey, SolidSet};

use crate::scene::Color;

/// Horizontal axis a moving obstacle oscillates along
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Z,
}

/// Sinusoidal back-and-forth motion along one axis
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Oscillation {
    pub axis: Axis,
    /// Angular rate in radians per second
    pub speed: f32,
    /// Peak offset from the base position in world units
    pub range: f32,
    /// Accumulated time; a nonzero start desynchronizes movers
    pub t: f32,
}

impl Oscillation {
    /// Current offset from the base position
    #[inline]
    pub fn offset(&self) -> f32 {
        (self.t * self.speed).sin() * self.range
    }
}

/// A hazard box, optionally oscillating around its base position
#[derive(Clone, Copy, Debug)]
pub struct Obstacle {
    /// Key of this obstacle's solid in the collision world
    pub solid: SolidKey,
    /// Rest-position center; the oscillation offset applies on top of this
    pub base: Vec3,
    pub color: Color,
    pub oscillation: Option<Oscillation>,
}

impl Obstacle {
    /// Advance motion and sync the registered solid
    ///
    /// The time accumulator advances unconditionally each frame while the
    /// obstacle is a mover; static obstacles are untouched.
    pub fn update(&mut self, dt: f32, solids: &mut SolidSet) {
        let Some(osc) = self.oscillation.as_mut() else {
            return;
        };
        osc.t += dt;
        let offset = osc.offset();
        let mut center = self.base;
        match osc.axis {
            Axis::X => center.x += offset,
            Axis::Z => center.z += offset,
        }
        solids.set_center(self.solid, center);
    }

    /// Current center, as registered in the collision world
    pub fn center(&self, solids: &SolidSet) -> Vec3 {
        solids
            .get(self.solid)
            .map(|s| s.aabb.center)
            .unwrap_or(self.base)
    }
}
