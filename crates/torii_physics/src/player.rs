//! Player body: horizontal movement resolution and the vertical integrator

use crate::collision::CollisionLayer;
use crate::shapes::Aabb;
use crate::world::{PhysicsConfig, SolidSet};
use torii_math::Vec3;

/// Default player box half extents
pub const DEFAULT_PLAYER_HALF: Vec3 = Vec3::new(0.7, 1.0, 0.7);

/// The player's physical state
///
/// Horizontal movement resolves X and Z independently so a blocked axis
/// does not stop the other (sliding along walls). Vertical motion is a
/// plain gravity integrator with a jump impulse and a hard floor clamp.
#[derive(Clone, Debug)]
pub struct PlayerBody {
    /// Box center in world space
    pub position: Vec3,
    /// Facing angle in degrees, derived from the last committed move
    pub yaw_deg: f32,
    /// Vertical velocity (units per second)
    pub vel_y: f32,
    /// Whether the player is standing on the ground, a platform or an obstacle
    pub grounded: bool,
    /// Box half extents
    pub half: Vec3,
}

impl PlayerBody {
    /// Create a player at the given position
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw_deg: 0.0,
            vel_y: 0.0,
            grounded: true,
            half: DEFAULT_PLAYER_HALF,
        }
    }

    /// The player's collision box at its current position
    pub fn collider(&self) -> Aabb {
        Aabb::new(self.position, self.half)
    }

    /// Attempt a horizontal displacement, resolving each axis independently
    ///
    /// An axis commits only if the moved box is not blocked by any solid in
    /// the blocking mask; the other axis may still succeed. Facing turns
    /// toward the attempted direction whenever at least one axis commits.
    /// Returns true if the player moved at all.
    pub fn try_move(&mut self, solids: &SolidSet, dx: f32, dz: f32) -> bool {
        let mut moved = false;

        let attempt = self.collider().translated(Vec3::new(dx, 0.0, 0.0));
        if !solids.blocked(&attempt, CollisionLayer::BLOCKING) {
            self.position.x += dx;
            moved = true;
        }

        let attempt = self.collider().translated(Vec3::new(0.0, 0.0, dz));
        if !solids.blocked(&attempt, CollisionLayer::BLOCKING) {
            self.position.z += dz;
            moved = true;
        }

        if moved && (dx != 0.0 || dz != 0.0) {
            // -Z is forward
            self.yaw_deg = dx.atan2(-dz).to_degrees();
        }

        moved
    }

    /// Start a jump if grounded; returns whether the impulse was applied
    pub fn jump(&mut self, config: &PhysicsConfig) -> bool {
        if self.grounded {
            self.vel_y = config.jump_velocity;
            self.grounded = false;
            true
        } else {
            false
        }
    }

    /// Advance the vertical integrator by `dt` seconds
    ///
    /// Re-derives grounded from the support probe, accumulates gravity while
    /// airborne, and accepts the candidate Y if it is unobstructed or a
    /// downward move (so the player never wedges inside geometry). The floor
    /// clamp guarantees the center never drops below `config.floor_y`.
    pub fn step(&mut self, solids: &SolidSet, dt: f32, config: &PhysicsConfig) {
        self.grounded = solids.supported(&self.collider(), CollisionLayer::SUPPORT);

        if !self.grounded {
            self.vel_y += config.gravity * dt;
        } else if self.vel_y < 0.0 {
            self.vel_y = 0.0;
        }

        let next_y = self.position.y + self.vel_y * dt;
        let mut candidate = self.collider();
        candidate.center.y = next_y;

        if !solids.blocked(&candidate, CollisionLayer::BLOCKING) || next_y < self.position.y {
            self.position.y = next_y;

            if self.position.y < config.floor_y {
                self.position.y = config.floor_y;
                self.vel_y = 0.0;
                self.grounded = true;
            }
        } else if self.vel_y > 0.0 {
            // Hit a ceiling or an overhang
            self.vel_y = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::Solid;

    const EPSILON: f32 = 0.0001;

    fn world_with_ground() -> SolidSet {
        let mut set = SolidSet::new();
        set.insert(Solid::new(
            Aabb::new(Vec3::ZERO, Vec3::new(40.0, 0.2, 40.0)),
            CollisionLayer::GROUND,
        ));
        set
    }

    fn spawn() -> PlayerBody {
        PlayerBody::new(Vec3::new(0.0, 1.0, 0.0))
    }

    #[test]
    fn test_free_move_commits_both_axes() {
        let solids = world_with_ground();
        let mut player = spawn();

        assert!(player.try_move(&solids, 1.0, -2.0));
        assert_eq!(player.position.x, 1.0);
        assert_eq!(player.position.z, -2.0);
    }

    #[test]
    fn test_wall_slide() {
        let mut solids = world_with_ground();
        // Wall to the +X of the player
        solids.insert(Solid::new(
            Aabb::new(Vec3::new(2.0, 2.0, 0.0), Vec3::new(1.0, 2.0, 40.0)),
            CollisionLayer::WALL,
        ));
        let mut player = spawn();

        // X is blocked, Z still commits
        assert!(player.try_move(&solids, 1.0, 1.5));
        assert_eq!(player.position.x, 0.0);
        assert_eq!(player.position.z, 1.5);
    }

    #[test]
    fn test_fully_blocked_keeps_yaw() {
        let mut solids = world_with_ground();
        solids.insert(Solid::new(
            Aabb::new(Vec3::new(2.0, 2.0, 0.0), Vec3::new(1.0, 2.0, 40.0)),
            CollisionLayer::WALL,
        ));
        let mut player = spawn();
        player.yaw_deg = 42.0;

        assert!(!player.try_move(&solids, 1.0, 0.0));
        assert_eq!(player.position.x, 0.0);
        assert!((player.yaw_deg - 42.0).abs() < EPSILON);
    }

    #[test]
    fn test_yaw_faces_move_direction() {
        let solids = world_with_ground();
        let mut player = spawn();

        // Forward is -Z
        player.try_move(&solids, 0.0, -1.0);
        assert!(player.yaw_deg.abs() < EPSILON);

        player.try_move(&solids, 1.0, 0.0);
        assert!((player.yaw_deg - 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_platform_tolerance_gates_horizontal_movement() {
        let mut solids = world_with_ground();
        // Thin slab platform, top face at y = 0.6
        solids.insert(Solid::new(
            Aabb::new(Vec3::new(3.0, 0.3, 0.0), Vec3::new(2.0, 0.3, 2.0)),
            CollisionLayer::PLATFORM,
        ));

        // Bottom at 0.15 is above top - tolerance (0.1): movement into the
        // platform's column is not snagged.
        let mut on_top = PlayerBody::new(Vec3::new(0.0, 1.15, 0.0));
        assert!(on_top.try_move(&solids, 1.5, 0.0));
        assert_eq!(on_top.position.x, 1.5);

        // Bottom at 0.0 is below the tolerance line: blocked from the side.
        let mut too_low = PlayerBody::new(Vec3::new(0.0, 1.0, 0.0));
        assert!(!too_low.try_move(&solids, 1.5, 0.0));
        assert_eq!(too_low.position.x, 0.0);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let config = PhysicsConfig::default();
        let mut player = spawn();

        player.grounded = true;
        assert!(player.jump(&config));
        assert_eq!(player.vel_y, config.jump_velocity);
        assert!(!player.grounded);

        // Airborne: no double jump
        assert!(!player.jump(&config));
    }

    #[test]
    fn test_gravity_while_airborne() {
        let solids = world_with_ground();
        let config = PhysicsConfig::default();
        let mut player = PlayerBody::new(Vec3::new(0.0, 10.0, 0.0));

        player.step(&solids, 0.1, &config);
        assert!(!player.grounded);
        assert!(player.vel_y < 0.0);
        assert!(player.position.y < 10.0);
    }

    #[test]
    fn test_floor_clamp_without_support() {
        // No solids at all, so only the hard clamp can stop the fall
        let solids = SolidSet::new();
        let config = PhysicsConfig::default();
        let mut player = PlayerBody::new(Vec3::new(0.0, 1.2, 0.0));
        player.vel_y = -30.0;

        player.step(&solids, 0.1, &config);
        assert!((player.position.y - config.floor_y).abs() < EPSILON);
        assert_eq!(player.vel_y, 0.0);
        assert!(player.grounded);
    }

    #[test]
    fn test_jump_and_land_on_ground() {
        let solids = world_with_ground();
        let config = PhysicsConfig::default();
        let mut player = spawn();
        player.grounded = true;

        assert!(player.jump(&config));
        // 200 steps (3.2s) comfortably covers the full arc
        let mut peak = player.position.y;
        for _ in 0..200 {
            player.step(&solids, 0.016, &config);
            peak = peak.max(player.position.y);
        }

        assert!(player.grounded);
        assert!(peak > 2.0);
        // Rest height is wherever the support probe first caught the ground:
        // between the clamp floor and ground top + probe + half height
        assert!(player.position.y >= config.floor_y - EPSILON);
        assert!(player.position.y <= 1.3 + EPSILON);
    }

    #[test]
    fn test_land_on_platform() {
        let mut solids = world_with_ground();
        solids.insert(Solid::new(
            Aabb::new(Vec3::new(0.0, 0.5, 0.0), Vec3::new(7.0, 0.5, 7.0)),
            CollisionLayer::PLATFORM,
        ));
        let config = PhysicsConfig::default();
        let mut player = PlayerBody::new(Vec3::new(0.0, 5.0, 0.0));

        for _ in 0..300 {
            player.step(&solids, 0.016, &config);
            if player.grounded {
                break;
            }
        }

        assert!(player.grounded);
        // Resting on or slightly inside the platform surface (top at 1.0,
        // so center around 2.0), never clamped all the way to the floor
        assert!(player.position.y > config.floor_y);
    }

    #[test]
    fn test_ceiling_zeroes_upward_velocity() {
        let mut solids = world_with_ground();
        // Low obstacle roof right above the player's head
        solids.insert(Solid::new(
            Aabb::new(Vec3::new(0.0, 3.0, 0.0), Vec3::new(2.0, 0.5, 2.0)),
            CollisionLayer::OBSTACLE,
        ));
        let config = PhysicsConfig::default();
        let mut player = spawn();
        player.grounded = true;
        player.jump(&config);

        player.step(&solids, 0.05, &config);
        // Upward move into the roof was rejected and velocity cleared
        assert_eq!(player.vel_y, 0.0);
    }
}
