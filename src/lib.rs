//! torii - headless 3D platformer core
//!
//! The library half of the driver binary: configuration loading, input
//! mapping, and the simulation system that feeds a
//! [`torii_core::GameSession`].

pub mod config;
pub mod input;
pub mod systems;
