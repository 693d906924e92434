pub mod states;
pub mod params;
pub mod engine;
pub mod chunk;
pub mod canvas;
pub mod forces;
pub mod particle;
pub mod craft;
pub mod star;
pub mod assets;
pub mod scenario;
