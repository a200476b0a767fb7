//! Torii - headless collect-them-all platformer
//!
//! Drives a [`GameSession`] from a scripted key tape at a fixed timestep and
//! logs the session's progress. The same config, input, and simulation
//! layers would sit under an interactive frontend.

use torii_core::{GameSession, GameState, SceneSpec};

use torii::config::AppConfig;
use torii::input::{InputAction, InputMapper, KeyEvent};
use torii::systems::SimulationSystem;

const DT: f32 = 1.0 / 60.0;

/// Application state
struct App {
    session: GameSession,
    mapper: InputMapper,
    sim: SimulationSystem,
}

impl App {
    fn new(config: AppConfig) -> Self {
        // Load scene from the configured path, or fall back to the built-in
        let spec = match &config.scene.path {
            Some(path) => SceneSpec::load(path)
                .unwrap_or_else(|e| panic!("Failed to load scene '{}': {}", path, e)),
            None => SceneSpec::standard(),
        };

        let session = GameSession::new(
            spec,
            config.physics.to_physics_config(),
            config.game.to_game_config(),
        )
        .unwrap_or_else(|e| panic!("Invalid scene: {}", e));

        let sim = SimulationSystem::new(config.player.move_speed);

        Self {
            session,
            mapper: InputMapper::new(),
            sim,
        }
    }

    /// Feed one key event into the session
    fn handle_key(&mut self, key: char, event: KeyEvent) {
        match self.mapper.map_key(key, event) {
            Some(InputAction::Jump) => {
                self.session.try_jump();
            }
            Some(InputAction::Reset) => {
                log::info!("Session reset");
                self.session.reset();
                self.mapper.clear();
            }
            Some(InputAction::ToggleFeature(platform)) => {
                let on = self.session.toggle_feature_anim(platform);
                log::info!("Feature animation on platform {}: {}", platform, on);
            }
            None => {}
        }
    }

    /// Advance one fixed-timestep frame
    fn frame(&mut self) {
        self.sim
            .advance(&mut self.session, self.mapper.move_keys(), DT);
    }

    fn log_status(&self) {
        log::info!(
            "t={:>5.1}s state={:?} collected={}/{} pos=({:.1}, {:.1}, {:.1})",
            self.session.time_left(),
            self.session.state(),
            self.session.collected_total(),
            torii_core::PLATFORM_COUNT as u32 * self.session.collect_target(),
            self.session.player_position().x,
            self.session.player_position().y,
            self.session.player_position().z,
        );
    }
}

/// One entry of the demo tape: hold a key for a number of frames
struct TapeStep {
    key: char,
    frames: u32,
}

fn demo_tape() -> Vec<TapeStep> {
    vec![
        TapeStep { key: 'w', frames: 90 },
        TapeStep { key: ' ', frames: 1 },
        TapeStep { key: 'w', frames: 30 },
        TapeStep { key: 'a', frames: 60 },
        TapeStep { key: ' ', frames: 1 },
        TapeStep { key: 'a', frames: 45 },
        TapeStep { key: 's', frames: 90 },
        TapeStep { key: 'd', frames: 120 },
        TapeStep { key: 'r', frames: 1 },
    ]
}

fn main() {
    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    // Configured level is the default; RUST_LOG still overrides it
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    log::info!("Starting Torii");
    let mut app = App::new(config);
    app.log_status();

    for step in demo_tape() {
        app.handle_key(step.key, KeyEvent::Pressed);
        for _ in 0..step.frames {
            app.frame();
        }
        app.handle_key(step.key, KeyEvent::Released);
        app.log_status();

        if app.session.state() != GameState::Playing {
            break;
        }
    }

    log::info!("Demo finished in state {:?}", app.session.state());
}
