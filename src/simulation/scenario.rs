//! Build fully-initialized game scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! consumed by the frame loop:
//! - engine settings (`Engine`)
//! - physics parameters (`Parameters`)
//! - world state (`World`: field chunk + player craft)
//! - a seeded RNG shared by every randomized operation
//!
//! The scenario is inserted into Bevy as a `Resource` and driven by the
//! input, physics, and draw systems once per frame.

use anyhow::{ensure, Context, Result};
use bevy::prelude::Resource;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::assets::Catalog;
use crate::simulation::canvas::{Camera, Canvas, Viewport};
use crate::simulation::chunk::{Chunk, Entity};
use crate::simulation::craft::{Craft, InputState};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{BlackHole, Planet};
use crate::simulation::params::Parameters;
use crate::simulation::star::BackgroundStar;
use crate::simulation::states::NVec2;

/// Everything that exists in the world: the shared field chunk (stars,
/// planets, black holes) and the player craft with its private exhaust.
pub struct World {
    pub field: Chunk<Box<dyn Entity + Send + Sync>>,
    pub craft: Craft,
}

impl World {
    /// One simulation step. The craft container updates first (motion
    /// integration and particle lifecycle), then the field applies gravity
    /// to the craft. Update always completes before any drawing.
    pub fn step(&mut self, dt: f64, params: &Parameters, rng: &mut ChaCha8Rng) {
        self.craft.update(dt, params, rng);
        self.field.update(dt, &mut self.craft, params);
    }

    /// Draw the whole world through `camera`: field chunk first, then the
    /// player (exhaust behind the ship triangle).
    pub fn draw(&mut self, camera: &Camera, canvas: &mut dyn Canvas, rng: &mut ChaCha8Rng) {
        self.field.draw(camera, canvas, rng);
        self.craft.draw(camera, canvas);
    }
}

/// Bevy resource holding a fully-initialized game scenario.
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub world: World,
    pub rng: ChaCha8Rng,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let engine = cfg.engine.map(|e| e.into_engine()).unwrap_or_default();
        let parameters = cfg
            .parameters
            .map(|p| p.into_parameters())
            .unwrap_or_default();
        ensure!(parameters.boost_tick > 0.0, "boost_tick must be positive");
        ensure!(engine.time_scale > 0.0, "time_scale must be positive");

        let mut rng = ChaCha8Rng::seed_from_u64(parameters.seed);
        let mut catalog = Catalog::new(cfg.textures.planets, cfg.textures.black_holes)
            .context("building texture catalog")?;

        let craft = Craft::new(NVec2::new(cfg.player.x[0], cfg.player.x[1]), cfg.player.mass);

        // Container order is draw order: stars go in first so every body
        // renders above the starfield.
        let mut field: Chunk<Box<dyn Entity + Send + Sync>> = Chunk::new();
        let camera = Camera::new(craft.kin.x, engine_viewport(&engine));
        for _ in 0..engine.star_count {
            field.insert(Box::new(BackgroundStar::generate(&camera, &mut rng)));
        }

        for (i, pc) in cfg.planets.iter().enumerate() {
            ensure!(pc.radius > 0.0, "planet {i} has non-positive radius");
            field.insert(Box::new(Planet::new(
                NVec2::new(pc.x[0], pc.x[1]),
                pc.radius,
                &parameters,
                &mut catalog,
                &mut rng,
            )));
        }
        for (i, bc) in cfg.black_holes.iter().enumerate() {
            ensure!(bc.radius > 0.0, "black hole {i} has non-positive radius");
            ensure!(bc.mass > 0.0, "black hole {i} has non-positive mass");
            field.insert(Box::new(BlackHole::new(
                NVec2::new(bc.x[0], bc.x[1]),
                bc.radius,
                bc.mass,
                &mut catalog,
                &mut rng,
            )));
        }

        log::info!(
            "built scenario: {} planets, {} black holes, {} stars",
            cfg.planets.len(),
            cfg.black_holes.len(),
            engine.star_count
        );

        Ok(Self {
            engine,
            parameters,
            world: World { field, craft },
            rng,
        })
    }

    /// Apply one frame of control input; `dt_raw` is wall-clock seconds.
    pub fn apply_input(&mut self, input: &InputState, dt_raw: f64) {
        let dt = dt_raw * self.engine.time_scale;
        self.world.craft.apply_input(input, dt, &self.parameters);
    }

    /// Advance the simulation by one frame; `dt_raw` is wall-clock seconds.
    pub fn step(&mut self, dt_raw: f64) {
        let dt = dt_raw * self.engine.time_scale;
        self.world.step(dt, &self.parameters, &mut self.rng);
    }

    /// Draw one frame with the camera anchored on the craft.
    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        let camera = self.camera();
        self.world.draw(&camera, canvas, &mut self.rng);
    }

    /// Current camera: craft position centered in the viewport.
    pub fn camera(&self) -> Camera {
        Camera::new(self.world.craft.kin.x, engine_viewport(&self.engine))
    }
}

fn engine_viewport(engine: &Engine) -> Viewport {
    Viewport {
        width: engine.width,
        height: engine.height,
    }
}
