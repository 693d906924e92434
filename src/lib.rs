pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Kinematics, NVec2};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::chunk::{Chunk, Entity, Handle, Vitality};
pub use simulation::canvas::{Camera, Canvas, Tint, Viewport};
pub use simulation::forces::{BlackHole, GravityWell, MassLaw, Planet};
pub use simulation::particle::{Particle, ParticleColor, Tier, TIERS};
pub use simulation::craft::{Craft, InputState};
pub use simulation::star::BackgroundStar;
pub use simulation::assets::{Catalog, Category};
pub use simulation::scenario::{Scenario, World};

pub use configuration::config::{
    BlackHoleConfig, EngineConfig, ParametersConfig, PlanetConfig, PlayerConfig, ScenarioConfig,
    TexturesConfig,
};

pub use visualization::view2d::run_game;

pub use benchmark::benchmark::{bench_gravity, bench_particles};
