//! Micro benchmarks for the simulation core
//!
//! Wall-clock timings printed as a table, no harness. Run with
//! `stardrift --bench`.

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::simulation::chunk::{Chunk, Entity};
use crate::simulation::craft::Craft;
use crate::simulation::forces::{GravityWell, Planet};
use crate::simulation::params::Parameters;
use crate::simulation::states::NVec2;

/// Time one field-update pass (gravity applied to the craft) for growing
/// body counts.
pub fn bench_gravity() {
    let ns = [200, 400, 800, 1600, 3200, 6400];

    let params = Parameters {
        force_min: 0.0, // keep every body contributing
        ..Parameters::default()
    };

    for n in ns {
        // Deterministic scatter of planets around the craft, no rand needed
        let mut field: Chunk<Box<dyn Entity + Send + Sync>> = Chunk::new();
        for i in 0..n {
            let i_f = i as f64;
            field.insert(Box::new(Planet {
                well: GravityWell {
                    x: NVec2::new((i_f * 0.37).sin() * 5000.0, (i_f * 0.13).cos() * 5000.0),
                    radius: 10.0,
                    mass: 25.0,
                    texture: String::new(),
                },
            }));
        }
        let mut craft = Craft::new(NVec2::zeros(), 2.0);

        // Warm up
        field.update(0.001, &mut craft, &params);

        let t0 = Instant::now();
        field.update(0.001, &mut craft, &params);
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, field update = {dt:8.6} s");
    }
}

/// Time the exhaust spawn/decay churn for a craft boosting continuously at
/// several emission tick rates.
pub fn bench_particles() {
    let ticks = [1.0, 0.25, 0.05, 0.01];
    let frames = 10_000;
    let dt = 1.0 / 120.0;

    for tick in ticks {
        let params = Parameters {
            boost_tick: tick,
            ..Parameters::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
        let mut craft = Craft::new(NVec2::zeros(), 2.0);
        craft.rotation = rng.gen_range(0.1..1.0);

        let t0 = Instant::now();
        for _ in 0..frames {
            craft.boosting = true;
            craft.update(dt, &params, &mut rng);
        }
        let elapsed = t0.elapsed().as_secs_f64();

        println!(
            "tick = {tick:5.2}, {frames} frames = {elapsed:8.6} s, live particles = {}",
            craft.particles.len()
        );
    }
}
