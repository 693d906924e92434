//! Core state types for the simulation.
//!
//! Defines the 2D vector alias used everywhere and the kinematic state
//! shared by every moving entity:
//! - `NVec2`      2D world-space vector (`f64`)
//! - `Kinematics` position, velocity, orientation
//!
//! Positions are unbounded world coordinates; the orientation angle is in
//! radians and never normalized to [0, 2pi).

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Kinematics {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub angle: f64, // orientation (radians, unbounded)
}

impl Kinematics {
    /// At-rest state at `x`, facing along +x.
    pub fn at(x: NVec2) -> Self {
        Self {
            x,
            v: NVec2::zeros(),
            angle: 0.0,
        }
    }

    /// Unit vector along the current orientation.
    pub fn heading(&self) -> NVec2 {
        NVec2::new(self.angle.cos(), self.angle.sin())
    }
}
