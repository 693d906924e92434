//! Gravitating bodies: planets and black holes
//!
//! Gravity in this world is deliberately one-directional: stationary bodies
//! pull the player craft, never each other and never the particles. Each
//! body applies an inverse-square pull with two cutoffs:
//!
//! - a near-field "safe landing zone" inside `radius + safe_margin`, where
//!   no force is applied at all (this also absorbs the degenerate case of
//!   zero separation before any division happens),
//! - a minimum force threshold below which the contribution is treated as
//!   negligible and skipped, so distant bodies do not accumulate noise.

use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

use crate::simulation::assets::{Catalog, Category};
use crate::simulation::canvas::{Camera, Canvas};
use crate::simulation::chunk::{Entity, Vitality};
use crate::simulation::craft::Craft;
use crate::simulation::params::Parameters;
use crate::simulation::states::NVec2;

/// How a planet's mass is derived from its radius.
///
/// The original went back and forth between the two; neither variant is
/// authoritative, so it is a scenario tunable.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassLaw {
    #[serde(rename = "linear")] // mass = radius
    Linear,
    #[serde(rename = "quadratic")] // mass = radius^2
    Quadratic,
}

impl MassLaw {
    pub fn mass_for(self, radius: f64) -> f64 {
        match self {
            MassLaw::Linear => radius,
            MassLaw::Quadratic => radius * radius,
        }
    }
}

/// State shared by every celestial body: a stationary gravity source with
/// a render texture.
#[derive(Debug, Clone)]
pub struct GravityWell {
    pub x: NVec2, // world position (never moves)
    pub radius: f64, // half-size for rendering and the near-field cutoff
    pub mass: f64,
    pub texture: String, // catalog texture name
}

impl GravityWell {
    /// Apply this body's pull to the craft for one time step.
    pub fn pull(&self, craft: &mut Craft, dt: f64, params: &Parameters) {
        let r = self.x - craft.kin.x;
        let d2 = r.norm_squared();
        let d = d2.sqrt();

        // Safe landing zone: no force near or inside the body. Covers
        // d == 0 exactly, so the division below is always sound.
        if d <= self.radius + params.safe_margin {
            return;
        }

        let force = params.g * self.mass / d2;
        if force < params.force_min {
            return;
        }

        // Attraction: velocity delta points from the craft toward the body.
        craft.kin.v += (r / d) * force * dt * params.unit_scale;
    }

    fn draw(&self, camera: &Camera, canvas: &mut dyn Canvas) {
        let s = camera.to_screen(self.x);
        canvas.image(&self.texture, s.x, s.y, 2.0 * self.radius);
    }
}

/// A planet: mass derived from radius via the scenario's [`MassLaw`].
pub struct Planet {
    pub well: GravityWell,
}

impl Planet {
    pub fn new(
        x: NVec2,
        radius: f64,
        params: &Parameters,
        catalog: &mut Catalog,
        rng: &mut ChaCha8Rng,
    ) -> Self {
        Self {
            well: GravityWell {
                x,
                radius,
                mass: params.mass_law.mass_for(radius),
                texture: catalog.draw(Category::Planet, rng),
            },
        }
    }
}

impl Entity for Planet {
    fn update(&mut self, dt: f64, craft: &mut Craft, params: &Parameters) -> Vitality {
        self.well.pull(craft, dt, params);
        Vitality::Alive
    }

    fn draw(&mut self, camera: &Camera, canvas: &mut dyn Canvas, _rng: &mut ChaCha8Rng) {
        self.well.draw(camera, canvas);
    }
}

/// A black hole: mass is an independent parameter, not tied to size.
pub struct BlackHole {
    pub well: GravityWell,
}

impl BlackHole {
    pub fn new(
        x: NVec2,
        radius: f64,
        mass: f64,
        catalog: &mut Catalog,
        rng: &mut ChaCha8Rng,
    ) -> Self {
        Self {
            well: GravityWell {
                x,
                radius,
                mass,
                texture: catalog.draw(Category::BlackHole, rng),
            },
        }
    }
}

impl Entity for BlackHole {
    fn update(&mut self, dt: f64, craft: &mut Craft, params: &Parameters) -> Vitality {
        self.well.pull(craft, dt, params);
        Vitality::Alive
    }

    fn draw(&mut self, camera: &Camera, canvas: &mut dyn Canvas, _rng: &mut ChaCha8Rng) {
        self.well.draw(camera, canvas);
    }
}
