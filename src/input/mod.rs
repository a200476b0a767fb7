//! Input handling module
//!
//! Provides input mapping from raw key events to held movement state and
//! semantic actions.

mod input_mapper;

pub use input_mapper::{InputAction, InputMapper, KeyEvent, MoveKeys};
