//! Game simulation system
//!
//! Manages the game loop simulation including:
//! - Delta time calculation
//! - Input → player movement
//! - Session stepping

use std::time::Instant;
use torii_core::GameSession;

use crate::input::MoveKeys;

/// Manages the game simulation loop
///
/// Converts held movement keys into per-frame player moves and steps the
/// session. Works from wall-clock time via [`update`](Self::update) or a
/// caller-supplied timestep via [`advance`](Self::advance).
pub struct SimulationSystem {
    last_frame: Instant,
    move_speed: f32,
}

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new(move_speed: f32) -> Self {
        Self {
            last_frame: Instant::now(),
            move_speed,
        }
    }

    /// Run one simulation frame using wall-clock delta time
    ///
    /// Returns the delta time actually applied.
    pub fn update(&mut self, session: &mut GameSession, held: MoveKeys) -> f32 {
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f32();
        // Cap dt to prevent spiral of death on first frame or after a pause
        let dt = raw_dt.min(0.25);
        self.last_frame = now;

        self.advance(session, held, dt);
        dt
    }

    /// Run one simulation frame with an explicit timestep
    pub fn advance(&self, session: &mut GameSession, held: MoveKeys, dt: f32) {
        let (dx, dz) = held.direction();
        if dx != 0.0 || dz != 0.0 {
            session.try_move(dx * self.move_speed * dt, dz * self.move_speed * dt);
        }
        session.update(dt);
    }
}
