//! Thruster exhaust particles
//!
//! Particles are short-lived entities spawned behind the craft while it
//! boosts. Each one carries a fixed velocity (inherited from the craft at
//! spawn, never re-integrated by gravity) and a decay timer: the rendered
//! radius shrinks linearly from its original value to exactly zero at the
//! end of the particle's lifetime, at which point it removes itself from
//! its container.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::simulation::canvas::{Camera, Canvas, Tint};
use crate::simulation::chunk::Vitality;
use crate::simulation::states::{Kinematics, NVec2};

use std::f64::consts::PI;

/// Visual tier tag of an exhaust particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleColor {
    Yellow,
    Orange,
    Red,
}

impl ParticleColor {
    pub fn tint(self) -> Tint {
        match self {
            ParticleColor::Yellow => Tint::YELLOW,
            ParticleColor::Orange => Tint::ORANGE,
            ParticleColor::Red => Tint::RED,
        }
    }
}

/// Per-tier spawn configuration: count per spawn event plus the sampling
/// ranges for size, lifetime, and ejection speed.
#[derive(Debug, Clone, Copy)]
pub struct Tier {
    pub color: ParticleColor,
    pub count: usize,
    pub radius: (f64, f64),
    pub time_to_live: (f64, f64),
    pub speed: (f64, f64),
}

/// The three exhaust tiers: many small fast-decaying sparks down to a
/// single large slow ember.
pub const TIERS: [Tier; 3] = [
    Tier {
        color: ParticleColor::Yellow,
        count: 3,
        radius: (1.0, 2.0),
        time_to_live: (0.3, 0.6),
        speed: (120.0, 180.0),
    },
    Tier {
        color: ParticleColor::Orange,
        count: 2,
        radius: (2.0, 3.5),
        time_to_live: (0.6, 1.2),
        speed: (80.0, 140.0),
    },
    Tier {
        color: ParticleColor::Red,
        count: 1,
        radius: (3.5, 5.0),
        time_to_live: (1.2, 2.0),
        speed: (50.0, 100.0),
    },
];

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: NVec2,
    pub v: NVec2, // fixed at spawn
    pub radius: f64, // current (shrinking)
    pub original_radius: f64,
    pub color: ParticleColor,
    pub time_to_live: f64,
    pub time_alive: f64,
}

impl Particle {
    /// Spawn one particle of `tier` behind the craft: ejected opposite the
    /// facing direction at a tier-random speed, plus the craft's current
    /// velocity so exhaust inherits its motion.
    pub fn spawn(tier: &Tier, craft: &Kinematics, rng: &mut ChaCha8Rng) -> Self {
        let radius = rng.gen_range(tier.radius.0..tier.radius.1);
        let speed = rng.gen_range(tier.speed.0..tier.speed.1);
        let back = craft.angle + PI;
        let v = NVec2::new(back.cos(), back.sin()) * speed + craft.v;
        Self {
            x: craft.x,
            v,
            radius,
            original_radius: radius,
            color: tier.color,
            time_to_live: rng.gen_range(tier.time_to_live.0..tier.time_to_live.1),
            time_alive: 0.0,
        }
    }

    /// Advance position and decay; expired once the lifetime is used up.
    pub fn step(&mut self, dt: f64) -> Vitality {
        self.x += self.v * dt;
        self.time_alive += dt;
        let remaining = (self.time_to_live - self.time_alive) / self.time_to_live;
        self.radius = self.original_radius * remaining.max(0.0);
        if self.time_alive >= self.time_to_live {
            Vitality::Expired
        } else {
            Vitality::Alive
        }
    }

    pub fn draw(&self, camera: &Camera, canvas: &mut dyn Canvas) {
        let s = camera.to_screen(self.x);
        canvas.fill_circle(s.x, s.y, self.radius, self.color.tint());
    }
}
