//! The frame-stepped game session
//!
//! One [`GameSession`] owns the instantiated scene, the player body, the
//! per-platform collection counters and the countdown clock, and applies
//! all state transitions in a fixed per-tick order:
//!
//! 1. countdown (Playing only; reaching zero latches Lost)
//! 2. player vertical physics
//! 3. collectible sweep and unlock/win latching
//! 4. feature animation time advance
//! 5. obstacle oscillation and solid sync
//!
//! Horizontal movement and jumping arrive between ticks through
//! [`GameSession::try_move`] and [`GameSession::try_jump`], driven by
//! whatever input layer sits above.

use torii_math::Vec3;
use torii_physics::{PhysicsConfig, PlayerBody};

use crate::feature::FeatureObj;
use crate::scene::{Scene, SceneError, SceneSpec};

/// Number of platforms in a playable scene
pub const PLATFORM_COUNT: usize = 4;

/// Top-level game state
///
/// `Won` and `Lost` are terminal: no transition leaves them except a full
/// [`GameSession::reset`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

/// Gameplay tuning knobs
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Countdown duration in seconds
    pub countdown_secs: f32,
    /// Collectibles needed to complete one platform
    pub collect_target: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            countdown_secs: 120.0,
            collect_target: 3,
        }
    }
}

/// A running game: scene, player, counters, clock and state machine
pub struct GameSession {
    spec: SceneSpec,
    scene: Scene,
    player: PlayerBody,
    physics: PhysicsConfig,
    game: GameConfig,
    collected: [u32; PLATFORM_COUNT],
    state: GameState,
    time_left: f32,
}

impl GameSession {
    /// Create a session from a scene spec
    ///
    /// The spec is validated once here; reset re-instantiates it without
    /// re-validating.
    pub fn new(
        spec: SceneSpec,
        physics: PhysicsConfig,
        game: GameConfig,
    ) -> Result<Self, SceneError> {
        spec.validate()?;
        let scene = spec.instantiate();
        let player = PlayerBody::new(scene.player_spawn);
        let time_left = game.countdown_secs;
        Ok(Self {
            spec,
            scene,
            player,
            physics,
            game,
            collected: [0; PLATFORM_COUNT],
            state: GameState::Playing,
            time_left,
        })
    }

    /// A session on the standard level with default tuning
    pub fn standard() -> Self {
        // The built-in scene always validates
        Self::new(
            SceneSpec::standard(),
            PhysicsConfig::default(),
            GameConfig::default(),
        )
        .expect("standard scene is valid")
    }

    /// Restart: re-instantiate the scene and reset every piece of state
    pub fn reset(&mut self) {
        self.scene = self.spec.instantiate();
        self.player = PlayerBody::new(self.scene.player_spawn);
        self.collected = [0; PLATFORM_COUNT];
        self.state = GameState::Playing;
        self.time_left = self.game.countdown_secs;
        log::info!("session reset: scene '{}' restarted", self.spec.name);
    }

    /// Advance the simulation by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        if self.state == GameState::Playing {
            self.time_left -= dt;
            if self.time_left <= 0.0 {
                self.time_left = 0.0;
                self.state = GameState::Lost;
                log::info!("countdown expired, game lost");
            }
        }

        // A lost game freezes: no physics, no collection, no animation
        if self.state == GameState::Lost {
            return;
        }

        self.player.step(&self.scene.solids, dt, &self.physics);
        self.sweep_collectibles();

        for (_, feature) in &mut self.scene.features {
            feature.advance(dt);
        }
        for obstacle in &mut self.scene.obstacles {
            obstacle.update(dt, &mut self.scene.solids);
        }
    }

    /// Attempt a horizontal displacement; ignored once the game is lost
    ///
    /// Returns whether the player moved on at least one axis.
    pub fn try_move(&mut self, dx: f32, dz: f32) -> bool {
        if self.state == GameState::Lost {
            return false;
        }
        self.player.try_move(&self.scene.solids, dx, dz)
    }

    /// Attempt a jump; allowed while Playing or after winning, never when lost
    pub fn try_jump(&mut self) -> bool {
        match self.state {
            GameState::Playing | GameState::Won => self.player.jump(&self.physics),
            GameState::Lost => false,
        }
    }

    /// Toggle a platform feature's animation
    ///
    /// Only applies once the feature's unlock latch is set; returns whether
    /// anything changed.
    pub fn toggle_feature_anim(&mut self, platform: usize) -> bool {
        let toggled = self
            .scene
            .features
            .iter_mut()
            .find(|(p, _)| *p == platform)
            .map(|(_, f)| f.toggle_anim())
            .unwrap_or(false);
        if toggled {
            log::debug!("feature animation on platform {} toggled", platform);
        }
        toggled
    }

    fn sweep_collectibles(&mut self) {
        let player_box = self.player.collider();
        for collectible in &mut self.scene.collectibles {
            if collectible.try_collect(&player_box) {
                self.collected[collectible.platform] += 1;
                log::info!(
                    "collected on platform {} ({}/{})",
                    collectible.platform,
                    self.collected[collectible.platform],
                    self.game.collect_target
                );
            }
        }

        for platform in 0..PLATFORM_COUNT {
            if self.collected[platform] >= self.game.collect_target {
                if let Some((_, feature)) = self
                    .scene
                    .features
                    .iter_mut()
                    .find(|(p, _)| *p == platform)
                {
                    if !feature.is_unlocked() {
                        feature.unlock();
                        log::info!("platform {} complete, feature animation unlocked", platform);
                    }
                }
            }
        }

        let all_complete = self
            .collected
            .iter()
            .all(|&c| c >= self.game.collect_target);
        if all_complete && self.state == GameState::Playing {
            self.state = GameState::Won;
            log::info!("all platforms complete, game won");
        }
    }

    // --- queries ---

    /// Current game state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Seconds remaining on the countdown
    pub fn time_left(&self) -> f32 {
        self.time_left
    }

    /// Collected count for one platform
    pub fn collected_on(&self, platform: usize) -> u32 {
        self.collected.get(platform).copied().unwrap_or(0)
    }

    /// Total collected across all platforms
    pub fn collected_total(&self) -> u32 {
        self.collected.iter().sum()
    }

    /// Collectibles needed per platform
    pub fn collect_target(&self) -> u32 {
        self.game.collect_target
    }

    /// Whether the player is standing on a surface
    pub fn is_grounded(&self) -> bool {
        self.player.grounded
    }

    /// Player box center
    pub fn player_position(&self) -> Vec3 {
        self.player.position
    }

    /// Player facing angle in degrees
    pub fn player_yaw_deg(&self) -> f32 {
        self.player.yaw_deg
    }

    /// The feature on the given platform
    pub fn feature_on(&self, platform: usize) -> Option<&FeatureObj> {
        self.scene.feature_for_platform(platform)
    }

    /// The live scene (entities and collision world)
    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}
