//! High-level runtime engine settings
//!
//! Viewport size, frame pacing, and the time scale applied to raw frame
//! deltas before they reach the simulation, used when building and running
//! a `Scenario`

#[derive(Debug, Clone)]
pub struct Engine {
    pub width: f64, // viewport width in pixels
    pub height: f64, // viewport height in pixels
    pub target_fps: f64, // soft frame-rate cap
    pub time_scale: f64, // simulation seconds per wall-clock second
    pub star_count: usize, // background stars generated at build
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            target_fps: 120.0,
            // The original clock ticked at 120 fps and divided milliseconds
            // by 5000, i.e. one fifth of real seconds.
            time_scale: 0.2,
            star_count: 100,
        }
    }
}
