//! Input mapping from raw key events to semantic actions
//!
//! Movement keys (WASD) accumulate into a held [`MoveKeys`] set that the
//! simulation samples every frame; everything else maps to a one-shot
//! [`InputAction`].

use bitflags::bitflags;

bitflags! {
    /// Currently held movement keys
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MoveKeys: u8 {
        const FORWARD = 1 << 0;
        const BACK = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl MoveKeys {
    /// Normalized horizontal move direction for the held set
    ///
    /// Forward is -Z. Opposing keys cancel; a diagonal is unit length so
    /// strafing is not faster than walking straight.
    pub fn direction(&self) -> (f32, f32) {
        let mut dx = 0.0f32;
        let mut dz = 0.0f32;
        if self.contains(MoveKeys::FORWARD) {
            dz -= 1.0;
        }
        if self.contains(MoveKeys::BACK) {
            dz += 1.0;
        }
        if self.contains(MoveKeys::LEFT) {
            dx -= 1.0;
        }
        if self.contains(MoveKeys::RIGHT) {
            dx += 1.0;
        }
        let len = (dx * dx + dz * dz).sqrt();
        if len > 0.0 {
            (dx / len, dz / len)
        } else {
            (0.0, 0.0)
        }
    }
}

/// Whether a key went down or came back up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed,
    Released,
}

/// Actions triggered by special input (not movement)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Jump (Space)
    Jump,
    /// Restart the session (Escape)
    Reset,
    /// Toggle the feature animation on one platform (R/B/G/Y keys)
    ToggleFeature(usize),
}

/// Maps raw key events to held movement state and semantic actions
///
/// Holds the WASD state itself; special keys are returned as actions for
/// the caller to dispatch.
#[derive(Debug, Default)]
pub struct InputMapper {
    held: MoveKeys,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Movement keys currently held
    pub fn move_keys(&self) -> MoveKeys {
        self.held
    }

    /// Drop all held keys, e.g. when the session resets
    pub fn clear(&mut self) {
        self.held = MoveKeys::empty();
    }

    /// Feed a key event; returns `Some(action)` for special keys on press
    ///
    /// Movement keys update the held set and return `None`. Key repeat is
    /// harmless: re-pressing a held key is a no-op.
    pub fn map_key(&mut self, key: char, event: KeyEvent) -> Option<InputAction> {
        if let Some(flag) = Self::move_flag(key) {
            match event {
                KeyEvent::Pressed => self.held.insert(flag),
                KeyEvent::Released => self.held.remove(flag),
            }
            return None;
        }

        // Only handle key presses, not releases
        if event != KeyEvent::Pressed {
            return None;
        }

        match key.to_ascii_lowercase() {
            ' ' => Some(InputAction::Jump),
            '\x1b' => Some(InputAction::Reset),
            'r' => Some(InputAction::ToggleFeature(0)),
            'b' => Some(InputAction::ToggleFeature(1)),
            'g' => Some(InputAction::ToggleFeature(2)),
            'y' => Some(InputAction::ToggleFeature(3)),
            _ => None,
        }
    }

    fn move_flag(key: char) -> Option<MoveKeys> {
        match key.to_ascii_lowercase() {
            'w' => Some(MoveKeys::FORWARD),
            's' => Some(MoveKeys::BACK),
            'a' => Some(MoveKeys::LEFT),
            'd' => Some(MoveKeys::RIGHT),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_movement_keys_accumulate() {
        let mut mapper = InputMapper::new();
        assert_eq!(mapper.map_key('w', KeyEvent::Pressed), None);
        assert_eq!(mapper.map_key('d', KeyEvent::Pressed), None);
        assert_eq!(mapper.move_keys(), MoveKeys::FORWARD | MoveKeys::RIGHT);

        mapper.map_key('w', KeyEvent::Released);
        assert_eq!(mapper.move_keys(), MoveKeys::RIGHT);
    }

    #[test]
    fn test_forward_is_negative_z() {
        let (dx, dz) = MoveKeys::FORWARD.direction();
        assert!((dx).abs() < EPSILON);
        assert!((dz + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_diagonal_is_unit_length() {
        let (dx, dz) = (MoveKeys::FORWARD | MoveKeys::RIGHT).direction();
        let len = (dx * dx + dz * dz).sqrt();
        assert!((len - 1.0).abs() < EPSILON);
        assert!(dx > 0.0 && dz < 0.0);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let held = MoveKeys::LEFT | MoveKeys::RIGHT;
        assert_eq!(held.direction(), (0.0, 0.0));
    }

    #[test]
    fn test_special_keys() {
        let mut mapper = InputMapper::new();
        assert_eq!(mapper.map_key(' ', KeyEvent::Pressed), Some(InputAction::Jump));
        assert_eq!(mapper.map_key('\x1b', KeyEvent::Pressed), Some(InputAction::Reset));
        assert_eq!(mapper.map_key('r', KeyEvent::Pressed), Some(InputAction::ToggleFeature(0)));
        assert_eq!(mapper.map_key('b', KeyEvent::Pressed), Some(InputAction::ToggleFeature(1)));
        assert_eq!(mapper.map_key('g', KeyEvent::Pressed), Some(InputAction::ToggleFeature(2)));
        assert_eq!(mapper.map_key('Y', KeyEvent::Pressed), Some(InputAction::ToggleFeature(3)));
    }

    #[test]
    fn test_key_release_ignored_for_actions() {
        let mut mapper = InputMapper::new();
        assert_eq!(mapper.map_key(' ', KeyEvent::Released), None);
        assert_eq!(mapper.map_key('r', KeyEvent::Released), None);
    }

    #[test]
    fn test_unmapped_key_does_nothing() {
        let mut mapper = InputMapper::new();
        assert_eq!(mapper.map_key('q', KeyEvent::Pressed), None);
        assert!(mapper.move_keys().is_empty());
    }

    #[test]
    fn test_clear_drops_held_keys() {
        let mut mapper = InputMapper::new();
        mapper.map_key('w', KeyEvent::Pressed);
        mapper.clear();
        assert!(mapper.move_keys().is_empty());
    }
}
