//! Scene description and instantiation
//!
//! A [`SceneSpec`] is the declarative, serializable description of a level:
//! ground slab, boundary walls, platforms, obstacles, collectibles and
//! feature objects. Specs load from and save to RON files. Instantiating a
//! spec registers every solid in a fresh [`SolidSet`] and produces the live
//! entity collections; instantiation is repeatable, which is what a full
//! game reset does.

use serde::{Serialize, Deserialize};
use std::fs;
use std::io;
use std::path::Path;

use torii_math::Vec3;
use torii_physics::{Aabb, CollisionLayer, Solid, SolidKey, SolidSet};

use crate::collectible::Collectible;
use crate::feature::{FeatureAnim, FeatureObj};
use crate::obstacle::{Axis, Obstacle, Oscillation};
use crate::session::PLATFORM_COUNT;

/// RGB color, each component in 0.0..=1.0
pub type Color = [f32; 3];

/// Platform description: a static colored slab
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub aabb: Aabb,
    pub color: Color,
}

/// Obstacle description, optionally with oscillating motion
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ObstacleSpec {
    pub aabb: Aabb,
    pub color: Color,
    #[serde(default)]
    pub oscillation: Option<Oscillation>,
}

/// Collectible description
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CollectibleSpec {
    /// Index of the owning platform
    pub platform: usize,
    pub aabb: Aabb,
    pub color: Color,
}

/// Feature object description
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FeatureSpec {
    /// Index of the platform this feature belongs to
    pub platform: usize,
    pub aabb: Aabb,
    pub color: Color,
    pub anim: FeatureAnim,
}

/// A serializable scene
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneSpec {
    /// Scene name (for display/debugging)
    pub name: String,
    /// Playable area half extent on X and Z
    pub world_half: f32,
    /// Player spawn position
    pub player_spawn: [f32; 3],
    /// The ground slab
    pub ground: Aabb,
    /// Boundary walls
    pub walls: Vec<Aabb>,
    pub platforms: Vec<PlatformSpec>,
    pub obstacles: Vec<ObstacleSpec>,
    pub collectibles: Vec<CollectibleSpec>,
    pub features: Vec<FeatureSpec>,
}

impl SceneSpec {
    /// Load a scene spec from a RON file and validate it
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneLoadError> {
        let contents = fs::read_to_string(path)?;
        let spec: SceneSpec = ron::from_str(&contents)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Save a scene spec to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SceneSaveError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Check structural consistency
    ///
    /// A playable scene has exactly [`PLATFORM_COUNT`] platforms, one
    /// feature per platform, and no collectible or feature referencing a
    /// platform that does not exist.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.platforms.len() != PLATFORM_COUNT {
            return Err(SceneError::PlatformCount { found: self.platforms.len() });
        }
        if self.features.len() != PLATFORM_COUNT {
            return Err(SceneError::FeatureCount { found: self.features.len() });
        }
        for (i, feature) in self.features.iter().enumerate() {
            if feature.platform >= self.platforms.len() {
                return Err(SceneError::BadPlatformIndex {
                    object: "feature",
                    index: i,
                    platform: feature.platform,
                });
            }
        }
        for (i, collectible) in self.collectibles.iter().enumerate() {
            if collectible.platform >= self.platforms.len() {
                return Err(SceneError::BadPlatformIndex {
                    object: "collectible",
                    index: i,
                    platform: collectible.platform,
                });
            }
        }
        Ok(())
    }

    /// Build the live scene: register all solids and construct entities
    pub fn instantiate(&self) -> Scene {
        let mut solids = SolidSet::new();

        solids.insert(Solid::new(self.ground, CollisionLayer::GROUND));
        for wall in &self.walls {
            solids.insert(Solid::new(*wall, CollisionLayer::WALL));
        }

        let platforms = self
            .platforms
            .iter()
            .map(|p| Platform {
                solid: solids.insert(Solid::new(p.aabb, CollisionLayer::PLATFORM)),
                aabb: p.aabb,
                color: p.color,
            })
            .collect();

        let obstacles = self
            .obstacles
            .iter()
            .map(|o| Obstacle {
                solid: solids.insert(Solid::new(o.aabb, CollisionLayer::OBSTACLE)),
                base: o.aabb.center,
                color: o.color,
                oscillation: o.oscillation,
            })
            .collect();

        let features = self
            .features
            .iter()
            .map(|f| {
                solids.insert(Solid::new(f.aabb, CollisionLayer::FEATURE));
                (f.platform, FeatureObj::new(f.aabb, f.color, f.anim))
            })
            .collect();

        let collectibles = self
            .collectibles
            .iter()
            .map(|c| Collectible::new(c.aabb, c.color, c.platform))
            .collect();

        log::debug!(
            "instantiated scene '{}': {} solids, {} collectibles",
            self.name,
            solids.len(),
            self.collectibles.len()
        );

        Scene {
            solids,
            platforms,
            obstacles,
            features,
            collectibles,
            player_spawn: Vec3::from(self.player_spawn),
        }
    }

    /// The standard four-platform garden level
    ///
    /// An 80x80 walled courtyard with four colored quadrant platforms at
    /// staggered heights, three collectibles each, obstacle courses per
    /// platform (the green platform's movers oscillate on X), and one
    /// feature structure per platform.
    pub fn standard() -> Self {
        const WORLD_HALF: f32 = 40.0;

        let platforms = vec![
            // Red, lowest
            PlatformSpec {
                aabb: Aabb::new(Vec3::new(-20.0, 0.3, -20.0), Vec3::new(8.0, 0.3, 6.0)),
                color: [0.8, 0.2, 0.2],
            },
            // Blue
            PlatformSpec {
                aabb: Aabb::new(Vec3::new(20.0, 0.4, -15.0), Vec3::new(6.0, 0.4, 8.0)),
                color: [0.2, 0.6, 0.9],
            },
            // Green, highest
            PlatformSpec {
                aabb: Aabb::new(Vec3::new(-18.0, 0.5, 20.0), Vec3::new(7.0, 0.5, 7.0)),
                color: [0.2, 0.8, 0.3],
            },
            // Yellow
            PlatformSpec {
                aabb: Aabb::new(Vec3::new(18.0, 0.35, 18.0), Vec3::new(9.0, 0.35, 5.0)),
                color: [0.9, 0.8, 0.2],
            },
        ];

        let obstacles = vec![
            // Red quadrant: barrier walls
            ObstacleSpec {
                aabb: Aabb::new(Vec3::new(-23.0, 1.5, -20.0), Vec3::new(0.5, 1.2, 2.0)),
                color: [0.6, 0.15, 0.15],
                oscillation: None,
            },
            ObstacleSpec {
                aabb: Aabb::new(Vec3::new(-17.0, 1.5, -20.0), Vec3::new(0.5, 1.2, 2.0)),
                color: [0.6, 0.15, 0.15],
                oscillation: None,
            },
            ObstacleSpec {
                aabb: Aabb::new(Vec3::new(-20.0, 1.0, -17.0), Vec3::new(3.0, 0.7, 0.5)),
                color: [0.6, 0.15, 0.15],
                oscillation: None,
            },
            // Blue quadrant: stair-like elevated sections
            ObstacleSpec {
                aabb: Aabb::new(Vec3::new(17.5, 1.5, -15.0), Vec3::new(2.0, 1.2, 2.5)),
                color: [0.15, 0.4, 0.7],
                oscillation: None,
            },
            ObstacleSpec {
                aabb: Aabb::new(Vec3::new(21.0, 2.5, -15.0), Vec3::new(2.0, 2.2, 2.5)),
                color: [0.15, 0.4, 0.7],
                oscillation: None,
            },
            ObstacleSpec {
                aabb: Aabb::new(Vec3::new(24.0, 3.5, -15.0), Vec3::new(2.0, 3.2, 2.5)),
                color: [0.15, 0.4, 0.7],
                oscillation: None,
            },
            // Green quadrant: horizontal movers
            ObstacleSpec {
                aabb: Aabb::new(Vec3::new(-18.0, 1.5, 18.0), Vec3::new(1.5, 1.2, 0.5)),
                color: [0.15, 0.6, 0.2],
                oscillation: Some(Oscillation { axis: Axis::X, speed: 3.0, range: 4.0, t: 0.0 }),
            },
            ObstacleSpec {
                aabb: Aabb::new(Vec3::new(-18.0, 1.5, 22.0), Vec3::new(1.5, 1.2, 0.5)),
                color: [0.15, 0.6, 0.2],
                oscillation: Some(Oscillation { axis: Axis::X, speed: 2.5, range: 3.5, t: 1.5 }),
            },
            // Yellow quadrant: mixed barriers and ledges
            ObstacleSpec {
                aabb: Aabb::new(Vec3::new(15.0, 2.0, 18.0), Vec3::new(2.5, 1.7, 2.0)),
                color: [0.7, 0.6, 0.15],
                oscillation: None,
            },
            ObstacleSpec {
                aabb: Aabb::new(Vec3::new(21.0, 1.2, 16.0), Vec3::new(1.0, 0.9, 1.0)),
                color: [0.7, 0.6, 0.15],
                oscillation: None,
            },
            ObstacleSpec {
                aabb: Aabb::new(Vec3::new(18.0, 1.0, 21.0), Vec3::new(2.0, 0.7, 0.5)),
                color: [0.7, 0.6, 0.15],
                oscillation: None,
            },
        ];

        let features = vec![
            // Torii gate on the red platform, resting on the ground
            FeatureSpec {
                platform: 0,
                aabb: Aabb::new(Vec3::new(-20.0, 0.0, -20.0), Vec3::new(1.6, 2.6, 1.0)),
                color: [0.8, 0.15, 0.15],
                anim: FeatureAnim::rotate(),
            },
            // Pagoda floating above the blue platform
            FeatureSpec {
                platform: 1,
                aabb: Aabb::new(Vec3::new(20.0, 3.0, -15.0), Vec3::new(1.6, 2.6, 1.6)),
                color: [0.7, 0.4, 0.9],
                anim: FeatureAnim::scale(),
            },
            // Taiko drum above the green platform
            FeatureSpec {
                platform: 2,
                aabb: Aabb::new(Vec3::new(-18.0, 2.5, 20.0), Vec3::new(1.6, 2.0, 1.6)),
                color: [0.9, 0.3, 0.3],
                anim: FeatureAnim::translate(),
            },
            // Stone lantern above the yellow platform
            FeatureSpec {
                platform: 3,
                aabb: Aabb::new(Vec3::new(18.0, 3.5, 18.0), Vec3::new(1.6, 2.2, 1.6)),
                color: [0.6, 0.6, 0.7],
                anim: FeatureAnim::color_cycle(),
            },
        ];

        // Three collectibles per platform, offset from the platform center
        // and floating above its top surface.
        let mut collectibles = Vec::new();
        let mut add = |platform: usize, offx: f32, offz: f32, height: f32, color: Color| {
            let p = &platforms[platform];
            let center = Vec3::new(
                p.aabb.center.x + offx,
                p.aabb.top() + height,
                p.aabb.center.z + offz,
            );
            collectibles.push(CollectibleSpec {
                platform,
                aabb: Aabb::new(center, Vec3::new(0.18, 0.35, 0.18)),
                color,
            });
        };

        add(0, -2.0, -1.5, 0.25, [0.9, 0.3, 0.3]);
        add(0, 2.2, -1.2, 0.65, [0.9, 0.5, 0.3]);
        add(0, 0.0, 2.0, 1.2, [0.9, 0.3, 0.5]);

        add(1, -4.0, -5.0, 0.35, [0.3, 0.7, 0.9]);
        add(1, 4.0, -5.0, 1.0, [0.3, 0.9, 0.7]);
        add(1, 0.0, 5.0, 1.6, [0.5, 0.8, 0.9]);

        add(2, -2.0, 1.4, 0.35, [0.2, 0.9, 0.3]);
        add(2, 2.0, 0.0, 0.7, [0.2, 0.7, 0.4]);
        add(2, 0.0, -1.8, 1.2, [0.2, 0.9, 0.6]);

        add(3, -7.0, 0.0, 0.4, [0.9, 0.9, 0.3]);
        add(3, 6.0, 0.0, 1.1, [0.9, 0.8, 0.2]);
        add(3, 0.0, -4.0, 0.8, [0.9, 0.7, 0.2]);

        Self {
            name: "standard".to_string(),
            world_half: WORLD_HALF,
            player_spawn: [0.0, 1.0, 0.0],
            ground: Aabb::new(Vec3::ZERO, Vec3::new(WORLD_HALF, 0.2, WORLD_HALF)),
            // U-shaped enclosure: back, left, right
            walls: vec![
                Aabb::new(
                    Vec3::new(0.0, 2.0, -WORLD_HALF + 1.0),
                    Vec3::new(WORLD_HALF, 2.0, 1.0),
                ),
                Aabb::new(
                    Vec3::new(-WORLD_HALF + 1.0, 2.0, 0.0),
                    Vec3::new(1.0, 2.0, WORLD_HALF),
                ),
                Aabb::new(
                    Vec3::new(WORLD_HALF - 1.0, 2.0, 0.0),
                    Vec3::new(1.0, 2.0, WORLD_HALF),
                ),
            ],
            platforms,
            obstacles,
            collectibles,
            features,
        }
    }
}

/// A platform in the instantiated scene
#[derive(Clone, Copy, Debug)]
pub struct Platform {
    /// Key of the platform's solid in the collision world
    pub solid: SolidKey,
    pub aabb: Aabb,
    pub color: Color,
}

/// The instantiated scene: collision world plus live entities
pub struct Scene {
    pub solids: SolidSet,
    pub platforms: Vec<Platform>,
    pub obstacles: Vec<Obstacle>,
    /// Features paired with their owning platform index
    pub features: Vec<(usize, FeatureObj)>,
    pub collectibles: Vec<Collectible>,
    pub player_spawn: Vec3,
}

impl Scene {
    /// Feature belonging to the given platform, if any
    pub fn feature_for_platform(&self, platform: usize) -> Option<&FeatureObj> {
        self.features
            .iter()
            .find(|(p, _)| *p == platform)
            .map(|(_, f)| f)
    }
}

/// Structural problem with a scene spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The scene does not have exactly the required number of platforms
    PlatformCount { found: usize },
    /// The scene does not have one feature per platform
    FeatureCount { found: usize },
    /// A collectible or feature references a platform that does not exist
    BadPlatformIndex {
        object: &'static str,
        index: usize,
        platform: usize,
    },
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::PlatformCount { found } => {
                write!(f, "scene needs exactly {} platforms, found {}", PLATFORM_COUNT, found)
            }
            SceneError::FeatureCount { found } => {
                write!(f, "scene needs exactly {} features, found {}", PLATFORM_COUNT, found)
            }
            SceneError::BadPlatformIndex { object, index, platform } => {
                write!(f, "{} #{} references missing platform {}", object, index, platform)
            }
        }
    }
}

impl std::error::Error for SceneError {}

/// Error loading a scene spec
#[derive(Debug)]
pub enum SceneLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
    /// The file parsed but describes an inconsistent scene
    Invalid(SceneError),
}

impl From<io::Error> for SceneLoadError {
    fn from(e: io::Error) -> Self {
        SceneLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SceneLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneLoadError::Parse(e)
    }
}

impl From<SceneError> for SceneLoadError {
    fn from(e: SceneError) -> Self {
        SceneLoadError::Invalid(e)
    }
}

impl std::fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneLoadError::Io(e) => write!(f, "IO error: {}", e),
            SceneLoadError::Parse(e) => write!(f, "Parse error: {}", e),
            SceneLoadError::Invalid(e) => write!(f, "Invalid scene: {}", e),
        }
    }
}

impl std::error::Error for SceneLoadError {}

/// Error saving a scene spec
#[derive(Debug)]
pub enum SceneSaveError {
    /// IO error (permission denied, disk full, etc.)
    Io(io::Error),
    /// Serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for SceneSaveError {
    fn from(e: io::Error) -> Self {
        SceneSaveError::Io(e)
    }
}

impl From<ron::Error> for SceneSaveError {
    fn from(e: ron::Error) -> Self {
        SceneSaveError::Serialize(e)
    }
}

impl std::fmt::Display for SceneSaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneSaveError::Io(e) => write!(f, "IO error: {}", e),
            SceneSaveError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for SceneSaveError {}
