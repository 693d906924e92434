//! Physical and gameplay parameters for the simulation
//!
//! `Parameters` holds every physics tunable in one place:
//! - gravitational constant and the force cutoffs,
//! - safe-zone margin around bodies,
//! - thrust / angular acceleration / rotation damping for the craft,
//! - particle emission tick,
//! - planet mass law and the random seed

use crate::simulation::forces::MassLaw;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub force_min: f64, // forces below this are treated as negligible
    pub safe_margin: f64, // near-field cutoff margin past a body's radius
    pub unit_scale: f64, // global force-to-velocity unit scaling (k)
    pub thrust: f64, // craft thrust acceleration
    pub angular_accel: f64, // steering angular acceleration (rad/s^2)
    pub rotation_damping: f64, // 0.0 = free drift (source behavior)
    pub boost_tick: f64, // seconds of boost per particle spawn event
    pub mass_law: MassLaw, // planet mass derived from radius
    pub seed: u64, // deterministic seed to make runs reproducible
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: 1_000_000.0,
            force_min: 10.0,
            safe_margin: 5.0,
            unit_scale: 1.0,
            thrust: 800.0,
            angular_accel: 100.0,
            rotation_damping: 0.0,
            boost_tick: 1.0,
            mass_law: MassLaw::Linear,
            seed: 42,
        }
    }
}
