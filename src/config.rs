//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`TORII_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Physics configuration
    #[serde(default)]
    pub physics: PhysicsConfig,
    /// Player configuration
    #[serde(default)]
    pub player: PlayerConfig,
    /// Game rules configuration
    #[serde(default)]
    pub game: GameConfig,
    /// Scene configuration
    #[serde(default)]
    pub scene: SceneConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`TORII_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // User config is optional
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // TORII_GAME__COUNTDOWN_SECS=60 -> game.countdown_secs = 60
        figment = figment.merge(Env::prefixed("TORII_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Physics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Downward acceleration (negative pulls down)
    pub gravity: f32,
    /// Initial upward velocity of a jump
    pub jump_velocity: f32,
    /// Minimum player center height over open ground
    pub floor_y: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: -25.0,
            jump_velocity: 12.0,
            floor_y: 1.0,
        }
    }
}

impl PhysicsConfig {
    /// Convert to the physics crate's config type
    pub fn to_physics_config(&self) -> torii_physics::PhysicsConfig {
        torii_physics::PhysicsConfig {
            gravity: self.gravity,
            jump_velocity: self.jump_velocity,
            floor_y: self.floor_y,
        }
    }
}

/// Player configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Horizontal movement speed in units per second
    pub move_speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { move_speed: 12.0 }
    }
}

/// Game rules configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
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

impl GameConfig {
    /// Convert to the core crate's config type
    pub fn to_game_config(&self) -> torii_core::GameConfig {
        torii_core::GameConfig {
            countdown_secs: self.countdown_secs,
            collect_target: self.collect_target,
        }
    }
}

/// Scene configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Path to a RON scene file; the built-in standard scene when unset
    #[serde(default)]
    pub path: Option<String>,
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.physics.gravity, -25.0);
        assert_eq!(config.player.move_speed, 12.0);
        assert_eq!(config.game.countdown_secs, 120.0);
        assert_eq!(config.game.collect_target, 3);
        assert!(config.scene.path.is_none());
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("gravity"));
        assert!(toml.contains("countdown_secs"));
        assert!(toml.contains("move_speed"));
    }

    #[test]
    fn test_bridges_to_engine_configs() {
        let config = AppConfig::default();
        let physics = config.physics.to_physics_config();
        assert_eq!(physics.jump_velocity, 12.0);
        assert_eq!(physics.floor_y, 1.0);
        let game = config.game.to_game_config();
        assert_eq!(game.collect_target, 3);
    }

    #[test]
    fn test_load_from_missing_dir_uses_defaults() {
        let config = AppConfig::load_from("does/not/exist").unwrap();
        assert_eq!(config.physics.gravity, -25.0);
    }
}
