//! The player craft
//!
//! The controlled entity: integrates velocity, position, and angular
//! velocity, owns its private exhaust-particle container, and paces
//! particle emission with a boost-time accumulator. Rotation free-drifts
//! by default (angular velocity persists until counter-steered), with an
//! optional damping coefficient in `Parameters`.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::simulation::canvas::{Camera, Canvas, Tint};
use crate::simulation::chunk::Chunk;
use crate::simulation::params::Parameters;
use crate::simulation::particle::{Particle, TIERS};
use crate::simulation::states::{Kinematics, NVec2};

use std::f64::consts::PI;

/// Logical key states for one frame, as reported by the input source.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub thrust: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub quit: bool,
}

pub struct Craft {
    pub kin: Kinematics,
    pub mass: f64,
    pub rotation: f64, // angular velocity (rad/s)
    pub boosting: bool,
    boost_accumulator: f64, // boost seconds since the last spawn event
    pub particles: Chunk<Particle>,
}

impl Craft {
    pub fn new(x: NVec2, mass: f64) -> Self {
        Self {
            kin: Kinematics::at(x),
            mass,
            rotation: 0.0,
            boosting: false,
            boost_accumulator: 0.0,
            particles: Chunk::new(),
        }
    }

    /// Boost seconds accumulated toward the next spawn event.
    pub fn boost_accumulator(&self) -> f64 {
        self.boost_accumulator
    }

    /// Apply one frame of control input.
    ///
    /// Thrust accelerates along the current heading; steering changes the
    /// angular velocity, which is never reset on key release.
    pub fn apply_input(&mut self, input: &InputState, dt: f64, params: &Parameters) {
        self.boosting = input.thrust;
        if input.thrust {
            self.kin.v += self.kin.heading() * params.thrust * dt;
        }
        if input.rotate_left {
            self.rotation -= params.angular_accel * dt;
        }
        if input.rotate_right {
            self.rotation += params.angular_accel * dt;
        }
    }

    /// One simulation step: integrate motion, decay existing exhaust, then
    /// emit new exhaust if boosting.
    pub fn update(&mut self, dt: f64, params: &Parameters, rng: &mut ChaCha8Rng) {
        self.kin.x += self.kin.v * dt;
        self.kin.angle += self.rotation * dt;
        self.rotation -= self.rotation * params.rotation_damping * dt;

        // Existing particles keep decaying whether or not we still boost.
        self.particles.update_each(|p| p.step(dt));

        if self.boosting {
            self.boost_accumulator += dt;
            let events = (self.boost_accumulator / params.boost_tick).floor();
            if events >= 1.0 {
                // Keep the fractional remainder so slow frames do not
                // undercount spawn events.
                self.boost_accumulator -= events * params.boost_tick;
                for _ in 0..events as usize {
                    self.spawn_event(rng);
                }
            }
        }
    }

    /// One spawn event: a random tier, that tier's count of particles.
    fn spawn_event(&mut self, rng: &mut ChaCha8Rng) {
        let tier = &TIERS[rng.gen_range(0..TIERS.len())];
        for _ in 0..tier.count {
            let particle = Particle::spawn(tier, &self.kin, rng);
            self.particles.insert(particle);
        }
    }

    /// Draw the exhaust first (behind the ship), then the craft itself as
    /// a fixed-size triangle at the exact viewport center, oriented by the
    /// current angle. The camera follows the craft 1:1.
    pub fn draw(&mut self, camera: &Camera, canvas: &mut dyn Canvas) {
        let cam = *camera;
        self.particles.draw_each(|p| p.draw(&cam, canvas));

        let c = camera.viewport.center();
        let a = self.kin.angle;
        let nose = (c.x + 10.0 * a.cos(), c.y + 10.0 * a.sin());
        let left = (
            c.x + 5.0 * (a + 2.0 * PI / 3.0).cos(),
            c.y + 5.0 * (a + 2.0 * PI / 3.0).sin(),
        );
        let right = (
            c.x + 5.0 * (a + 4.0 * PI / 3.0).cos(),
            c.y + 5.0 * (a + 4.0 * PI / 3.0).sin(),
        );
        canvas.fill_triangle([nose, left, right], Tint::WHITE);
    }
}
