//! Decorative background starfield
//!
//! Stars have no mass or velocity; they exist to make camera motion
//! visible. A star that drifts more than a fixed margin outside the
//! viewport is not drawn that frame: it relocates to a freshly randomized
//! position in a narrow band just outside the opposite edge and re-rolls
//! its radius, so the finite star population recycles forever.
//!
//! Stars live in the camera's top-left-origin frame: screen position is
//! the raw offset from the camera focus, and spawn bands are expressed in
//! viewport coordinates plus the focus.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::simulation::canvas::{Camera, Canvas, Tint};
use crate::simulation::chunk::{Entity, Vitality};
use crate::simulation::craft::Craft;
use crate::simulation::params::Parameters;
use crate::simulation::states::NVec2;

/// How far past the viewport a star may drift before recycling.
const RECYCLE_MARGIN: f64 = 20.0;

/// Offset of the respawn band outside the viewport edge.
const SPAWN_BAND: f64 = 10.0;

#[derive(Debug, Clone)]
pub struct BackgroundStar {
    pub x: NVec2,
    pub radius: f64, // cosmetic, 1..=3
}

impl BackgroundStar {
    /// Generate a star somewhere inside the viewport around the camera
    /// focus.
    pub fn generate(camera: &Camera, rng: &mut ChaCha8Rng) -> Self {
        let x = NVec2::new(
            rng.gen_range(0.0..camera.viewport.width) + camera.focus.x,
            rng.gen_range(0.0..camera.viewport.height) + camera.focus.y,
        );
        Self {
            x,
            radius: rng.gen_range(1..=3) as f64,
        }
    }

    fn relocate(&mut self, edge: Edge, camera: &Camera, rng: &mut ChaCha8Rng) {
        let w = camera.viewport.width;
        let h = camera.viewport.height;
        let band = match edge {
            Edge::Top => NVec2::new(rng.gen_range(0.0..w), -SPAWN_BAND),
            Edge::Bottom => NVec2::new(rng.gen_range(0.0..w), h + SPAWN_BAND),
            Edge::Left => NVec2::new(-SPAWN_BAND, rng.gen_range(0.0..h)),
            Edge::Right => NVec2::new(w + SPAWN_BAND, rng.gen_range(0.0..h)),
        };
        self.x = band + camera.focus;
        self.radius = rng.gen_range(1..=3) as f64;
    }
}

#[derive(Debug, Clone, Copy)]
enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Entity for BackgroundStar {
    fn update(&mut self, _dt: f64, _craft: &mut Craft, _params: &Parameters) -> Vitality {
        Vitality::Alive
    }

    fn draw(&mut self, camera: &Camera, canvas: &mut dyn Canvas, rng: &mut ChaCha8Rng) {
        let s = camera.offset(self.x);
        let w = camera.viewport.width;
        let h = camera.viewport.height;

        // Fixed priority order: bottom, top, right, left. First match
        // wins, so a star lost past a corner is reassigned to one edge.
        if s.y > h + RECYCLE_MARGIN {
            self.relocate(Edge::Top, camera, rng);
        } else if s.y < -RECYCLE_MARGIN {
            self.relocate(Edge::Bottom, camera, rng);
        } else if s.x > w + RECYCLE_MARGIN {
            self.relocate(Edge::Left, camera, rng);
        } else if s.x < -RECYCLE_MARGIN {
            self.relocate(Edge::Right, camera, rng);
        } else {
            canvas.fill_circle(s.x, s.y, self.radius, Tint::STAR);
        }
    }
}
