//! Collision and movement for the torii platformer core
//!
//! This crate provides the physical half of the game:
//! - Axis-aligned bounding boxes and the symmetric overlap test
//! - Collision layers and the walkable-top blocking rule
//! - A keyed set of world solids with blocking/support queries
//! - The player body: per-axis horizontal resolution, gravity, jumping

pub mod collision;
pub mod player;
pub mod shapes;
pub mod world;

// Re-export commonly used types
pub use collision::{CollisionLayer, Solid, STAND_TOLERANCE};
pub use player::{PlayerBody, DEFAULT_PLAYER_HALF};
pub use shapes::Aabb;
pub use world::{PhysicsConfig, SolidKey, SolidSet, SUPPORT_PROBE};
