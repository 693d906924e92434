//! Camera transform and the renderer boundary
//!
//! The simulation core never talks to a windowing backend directly: every
//! draw call goes through the [`Canvas`] trait with explicit screen-space
//! pixel coordinates (origin top-left), and every world-to-screen mapping
//! goes through [`Camera`]. The Bevy viewer implements `Canvas` over
//! gizmos; tests implement it with a recording stub.

use crate::simulation::states::NVec2;

/// Screen dimensions in pixels, origin top-left.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn center(&self) -> NVec2 {
        NVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// World-to-screen transform, anchored 1:1 on the player craft.
///
/// `focus` is the craft's world position; the craft itself always renders
/// at the exact viewport center and the world is drawn offset by `focus`.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub focus: NVec2,
    pub viewport: Viewport,
}

impl Camera {
    pub fn new(focus: NVec2, viewport: Viewport) -> Self {
        Self { focus, viewport }
    }

    /// Screen position of a world point, centered in the viewport.
    pub fn to_screen(&self, world: NVec2) -> NVec2 {
        self.viewport.center() + (world - self.focus)
    }

    /// Raw offset from the camera focus, without re-centering. The
    /// starfield lives in this top-left-origin frame.
    pub fn offset(&self, world: NVec2) -> NVec2 {
        world - self.focus
    }
}

/// Small RGB color value handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Tint {
    pub const WHITE: Tint = Tint { r: 1.0, g: 1.0, b: 1.0 };
    pub const YELLOW: Tint = Tint { r: 1.0, g: 0.9, b: 0.2 };
    pub const ORANGE: Tint = Tint { r: 1.0, g: 0.55, b: 0.1 };
    pub const RED: Tint = Tint { r: 0.9, g: 0.15, b: 0.1 };
    pub const STAR: Tint = Tint { r: 1.0, g: 1.0, b: 0.6 };
}

/// Primitive renderer the core draws through.
///
/// All coordinates are screen-space pixels with origin top-left.
pub trait Canvas {
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, tint: Tint);

    fn fill_triangle(&mut self, points: [(f64, f64); 3], tint: Tint);

    /// Blit a catalog texture centered at `(cx, cy)`, scaled to `size`
    /// pixels square.
    fn image(&mut self, texture: &str, cx: f64, cy: f64, size: f64);
}
