//! Math types for the torii game core

mod vec3;

pub use vec3::Vec3;
