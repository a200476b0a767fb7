//! Core game types for torii
//!
//! This crate provides the gameplay half of the platformer:
//!
//! - [`Collectible`] - pickup with a one-way collected latch
//! - [`FeatureObj`] - per-platform structure whose animation unlocks
//! - [`Obstacle`] - static or single-axis oscillating hazard
//! - [`SceneSpec`] / [`Scene`] - declarative scene description and its
//!   instantiated form (RON load/save)
//! - [`GameSession`] - the frame-stepped update loop and win/lose machine

mod collectible;
mod feature;
mod obstacle;
mod scene;
mod session;

pub use collectible::Collectible;
pub use feature::{FeatureAnim, FeatureObj, FeaturePose};
pub use obstacle::{Axis, Obstacle, Oscillation};
pub use scene::{
    Color, CollectibleSpec, FeatureSpec, ObstacleSpec, Platform, PlatformSpec, Scene, SceneError,
    SceneLoadError, SceneSaveError, SceneSpec,
};
pub use session::{GameConfig, GameSession, GameState, PLATFORM_COUNT};

// Re-export commonly used types from the lower crates for convenience
pub use torii_math::Vec3;
pub use torii_physics::{Aabb, CollisionLayer, PhysicsConfig, PlayerBody, Solid, SolidKey, SolidSet};
