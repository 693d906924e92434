//! Configuration types for loading game scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – window/viewport and frame pacing options
//! - [`ParametersConfig`] – physics tunables and the random seed
//! - [`PlayerConfig`]     – the craft's starting state
//! - [`PlanetConfig`] / [`BlackHoleConfig`] – one entry per body
//! - [`TexturesConfig`]   – texture names per body category
//! - [`ScenarioConfig`]   – top-level wrapper used to load from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   window: [1280.0, 720.0]   # viewport width, height in pixels
//!   target_fps: 120.0         # soft frame-rate cap
//!   time_scale: 0.2           # simulation seconds per wall-clock second
//!   star_count: 100           # background stars
//!
//! parameters:
//!   g: 1000000.0              # gravitational constant
//!   force_min: 10.0           # forces below this are skipped
//!   safe_margin: 5.0          # no-force zone past each body's radius
//!   unit_scale: 1.0           # global force-to-velocity scaling
//!   thrust: 800.0             # craft thrust acceleration
//!   angular_accel: 100.0      # steering angular acceleration
//!   rotation_damping: 0.0     # 0.0 = rotation free-drifts
//!   boost_tick: 1.0           # boost seconds per particle spawn event
//!   mass_law: "linear"        # or "quadratic": planet mass from radius
//!   seed: 42                  # deterministic seed
//!
//! player:
//!   x: [0.0, 0.0]
//!   mass: 2.0
//!
//! planets:
//!   - x: [400.0, 400.0]
//!     radius: 30.0
//!
//! black_holes:
//!   - x: [2000.0, 2000.0]
//!     radius: 75.0
//!     mass: 300.0
//!
//! textures:
//!   planets: ["planet_rock.png", "planet_gas.png"]
//!   black_holes: ["black_hole.png"]
//! ```
//!
//! Every section except `player`, `planets`, `black_holes`, and `textures`
//! is optional and falls back to the built-in defaults. The engine maps
//! this configuration into its internal runtime scenario representation.

use serde::Deserialize;

use crate::simulation::engine::Engine;
use crate::simulation::forces::MassLaw;
use crate::simulation::params::Parameters;

/// Window and pacing configuration. Missing fields use `Engine` defaults.
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub window: Option<[f64; 2]>, // viewport [width, height] in pixels
    pub target_fps: Option<f64>, // soft frame-rate cap
    pub time_scale: Option<f64>, // simulation seconds per wall-clock second
    pub star_count: Option<usize>, // background star population
}

impl EngineConfig {
    pub fn into_engine(self) -> Engine {
        let d = Engine::default();
        let window = self.window.unwrap_or([d.width, d.height]);
        Engine {
            width: window[0],
            height: window[1],
            target_fps: self.target_fps.unwrap_or(d.target_fps),
            time_scale: self.time_scale.unwrap_or(d.time_scale),
            star_count: self.star_count.unwrap_or(d.star_count),
        }
    }
}

/// Physics tunables. Missing fields use `Parameters` defaults.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub g: Option<f64>, // gravitational constant
    pub force_min: Option<f64>, // negligible-force cutoff
    pub safe_margin: Option<f64>, // near-field cutoff margin
    pub unit_scale: Option<f64>, // force-to-velocity unit scaling
    pub thrust: Option<f64>, // craft thrust acceleration
    pub angular_accel: Option<f64>, // steering angular acceleration
    pub rotation_damping: Option<f64>, // angular velocity damping
    pub boost_tick: Option<f64>, // seconds of boost per spawn event
    pub mass_law: Option<MassLaw>, // planet mass from radius
    pub seed: Option<u64>, // deterministic seed
}

impl ParametersConfig {
    pub fn into_parameters(self) -> Parameters {
        let d = Parameters::default();
        Parameters {
            g: self.g.unwrap_or(d.g),
            force_min: self.force_min.unwrap_or(d.force_min),
            safe_margin: self.safe_margin.unwrap_or(d.safe_margin),
            unit_scale: self.unit_scale.unwrap_or(d.unit_scale),
            thrust: self.thrust.unwrap_or(d.thrust),
            angular_accel: self.angular_accel.unwrap_or(d.angular_accel),
            rotation_damping: self.rotation_damping.unwrap_or(d.rotation_damping),
            boost_tick: self.boost_tick.unwrap_or(d.boost_tick),
            mass_law: self.mass_law.unwrap_or(d.mass_law),
            seed: self.seed.unwrap_or(d.seed),
        }
    }
}

/// The craft's initial state.
#[derive(Deserialize, Debug, Clone)]
pub struct PlayerConfig {
    pub x: [f64; 2], // starting world position
    pub mass: f64,
}

/// One planet: mass is derived from radius via the scenario's mass law.
#[derive(Deserialize, Debug, Clone)]
pub struct PlanetConfig {
    pub x: [f64; 2],
    pub radius: f64,
}

/// One black hole: mass independent of size.
#[derive(Deserialize, Debug, Clone)]
pub struct BlackHoleConfig {
    pub x: [f64; 2],
    pub radius: f64,
    pub mass: f64,
}

/// Texture names available per body category. Both lists must be
/// non-empty; scenario build fails fast otherwise.
#[derive(Deserialize, Debug, Clone)]
pub struct TexturesConfig {
    pub planets: Vec<String>,
    pub black_holes: Vec<String>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: Option<EngineConfig>,
    pub parameters: Option<ParametersConfig>,
    pub player: PlayerConfig,
    pub planets: Vec<PlanetConfig>,
    pub black_holes: Vec<BlackHoleConfig>,
    pub textures: TexturesConfig,
}

impl Default for ScenarioConfig {
    /// The built-in scene: four planets, one distant black hole, the
    /// default starfield, craft at the origin.
    fn default() -> Self {
        Self {
            engine: None,
            parameters: None,
            player: PlayerConfig {
                x: [0.0, 0.0],
                mass: 2.0,
            },
            planets: vec![
                PlanetConfig { x: [400.0, 400.0], radius: 30.0 },
                PlanetConfig { x: [600.0, 300.0], radius: 15.0 },
                PlanetConfig { x: [1000.0, 600.0], radius: 25.0 },
                PlanetConfig { x: [700.0, 200.0], radius: 20.0 },
            ],
            black_holes: vec![BlackHoleConfig {
                x: [2000.0, 2000.0],
                radius: 75.0,
                mass: 300.0,
            }],
            textures: TexturesConfig {
                planets: vec![
                    "planet_rock.png".to_string(),
                    "planet_gas.png".to_string(),
                    "planet_ice.png".to_string(),
                    "planet_lava.png".to_string(),
                ],
                black_holes: vec!["black_hole.png".to_string()],
            },
        }
    }
}
