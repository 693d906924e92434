use stardrift::{
    BackgroundStar, BlackHoleConfig, Camera, Canvas, Catalog, Category, Chunk, Craft, Entity,
    GravityWell, InputState, MassLaw, Parameters, Particle, ParticleColor, Planet, Scenario,
    ScenarioConfig, Tint, Viewport, Vitality, World, NVec2, TIERS,
};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Physics parameters with every cutoff disabled unless a test enables it
pub fn test_params() -> Parameters {
    Parameters {
        g: 1.0,
        force_min: 0.0,
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

pub fn test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

/// A stationary body at `x` with an explicit mass
pub fn well(x: NVec2, radius: f64, mass: f64) -> GravityWell {
    GravityWell {
        x,
        radius,
        mass,
        texture: "tex.png".to_string(),
    }
}

pub fn test_viewport() -> Viewport {
    Viewport {
        width: 1280.0,
        height: 720.0,
    }
}

pub fn camera_at(focus: NVec2) -> Camera {
    Camera::new(focus, test_viewport())
}

/// Canvas stub recording every primitive call
#[derive(Debug, PartialEq)]
pub enum Op {
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        tint: Tint,
    },
    Triangle {
        points: [(f64, f64); 3],
        tint: Tint,
    },
    Image {
        texture: String,
        cx: f64,
        cy: f64,
        size: f64,
    },
}

#[derive(Default)]
pub struct RecordingCanvas {
    pub ops: Vec<Op>,
}

impl Canvas for RecordingCanvas {
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, tint: Tint) {
        self.ops.push(Op::Circle { x, y, radius, tint });
    }

    fn fill_triangle(&mut self, points: [(f64, f64); 3], tint: Tint) {
        self.ops.push(Op::Triangle { points, tint });
    }

    fn image(&mut self, texture: &str, cx: f64, cy: f64, size: f64) {
        self.ops.push(Op::Image {
            texture: texture.to_string(),
            cx,
            cy,
            size,
        });
    }
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_inverse_square_exact() {
    let p = test_params();
    let body = well(NVec2::new(30.0, 0.0), 10.0, 900.0);
    let mut craft = Craft::new(NVec2::zeros(), 2.0);

    body.pull(&mut craft, 1.0, &p);

    // F = G * m / d^2 = 1 * 900 / 900 = 1, applied along +x for dt = 1
    assert!((craft.kin.v.x - 1.0).abs() < 1e-12, "got {}", craft.kin.v.x);
    assert!(craft.kin.v.y.abs() < 1e-12);
}

#[test]
fn gravity_doubling_distance_quarters_force() {
    let p = test_params();
    let near = well(NVec2::new(40.0, 0.0), 1.0, 500.0);
    let far = well(NVec2::new(80.0, 0.0), 1.0, 500.0);

    let mut craft_near = Craft::new(NVec2::zeros(), 2.0);
    let mut craft_far = Craft::new(NVec2::zeros(), 2.0);
    near.pull(&mut craft_near, 1.0, &p);
    far.pull(&mut craft_far, 1.0, &p);

    let ratio = craft_near.kin.v.norm() / craft_far.kin.v.norm();
    assert!((ratio - 4.0).abs() < 1e-9, "expected 4x, got {ratio}");
}

#[test]
fn gravity_safe_zone_applies_no_force() {
    let p = test_params();
    let body = well(NVec2::zeros(), 10.0, 900.0);

    // Exactly on the cutoff boundary: radius + margin = 15
    let mut craft = Craft::new(NVec2::new(15.0, 0.0), 2.0);
    body.pull(&mut craft, 1.0, &p);
    assert_eq!(craft.kin.v.norm(), 0.0);

    // Deep inside the body
    let mut craft = Craft::new(NVec2::new(2.0, -1.0), 2.0);
    body.pull(&mut craft, 1.0, &p);
    assert_eq!(craft.kin.v.norm(), 0.0);

    // Degenerate: exactly at the body's center, no division blowup
    let mut craft = Craft::new(NVec2::zeros(), 2.0);
    body.pull(&mut craft, 1.0, &p);
    assert_eq!(craft.kin.v.norm(), 0.0);

    // Just past the boundary the pull resumes
    let mut craft = Craft::new(NVec2::new(15.1, 0.0), 2.0);
    body.pull(&mut craft, 1.0, &p);
    assert!(craft.kin.v.norm() > 0.0);
}

#[test]
fn gravity_negligible_force_skipped() {
    let mut p = test_params();
    p.force_min = 10.0;

    // F = 999 / 100 = 9.99, just under the threshold
    let body = well(NVec2::new(10.0, 0.0), 1.0, 999.0);
    let mut craft = Craft::new(NVec2::zeros(), 2.0);
    body.pull(&mut craft, 1.0, &p);
    assert_eq!(craft.kin.v.norm(), 0.0);

    // F = 1001 / 100 = 10.01, just over
    let body = well(NVec2::new(10.0, 0.0), 1.0, 1001.0);
    body.pull(&mut craft, 1.0, &p);
    assert!(craft.kin.v.norm() > 0.0);
}

#[test]
fn gravity_points_toward_body() {
    let p = test_params();
    let body = well(NVec2::new(300.0, -400.0), 10.0, 1000.0);
    let mut craft = Craft::new(NVec2::zeros(), 2.0);

    body.pull(&mut craft, 1.0, &p);

    let toward = body.x - NVec2::zeros();
    assert!(craft.kin.v.dot(&toward) > 0.0, "pull is not attractive");
    // Velocity delta is exactly parallel to the displacement
    let cross = craft.kin.v.x * toward.y - craft.kin.v.y * toward.x;
    assert!(cross.abs() < 1e-9);
}

#[test]
fn gravity_bodies_never_move() {
    let p = test_params();
    let mut planet = Planet {
        well: well(NVec2::new(100.0, 0.0), 10.0, 900.0),
    };
    let mut craft = Craft::new(NVec2::zeros(), 2.0);

    for _ in 0..50 {
        planet.update(0.1, &mut craft, &p);
    }
    assert_eq!(planet.well.x, NVec2::new(100.0, 0.0));
}

#[test]
fn scenario_single_planet_pull_after_one_step() {
    // Stationary craft at the origin, one planet of mass 900 at distance
    // 30 (beyond its safe radius). After one dt = 1 step the velocity
    // magnitude is exactly G * 900 / 30^2, directed at the planet.
    let p = test_params();
    let mut rng = test_rng();

    let mut field: Chunk<Box<dyn Entity + Send + Sync>> = Chunk::new();
    field.insert(Box::new(Planet {
        well: well(NVec2::new(30.0, 0.0), 10.0, 900.0),
    }));
    let mut world = World {
        field,
        craft: Craft::new(NVec2::zeros(), 2.0),
    };

    world.step(1.0, &p, &mut rng);

    let expected = p.g * 900.0 / (30.0 * 30.0);
    let v = world.craft.kin.v;
    assert!((v.norm() - expected).abs() < 1e-12, "got {}", v.norm());
    assert!(v.x > 0.0 && v.y.abs() < 1e-12, "not directed at the planet");
}

#[test]
fn mass_law_variants() {
    assert_eq!(MassLaw::Linear.mass_for(30.0), 30.0);
    assert_eq!(MassLaw::Quadratic.mass_for(30.0), 900.0);
}

// ==================================================================================
// Particle tests
// ==================================================================================

#[test]
fn particle_decay_is_monotone_and_exact() {
    let mut particle = Particle {
        x: NVec2::zeros(),
        v: NVec2::new(10.0, 0.0),
        radius: 4.0,
        original_radius: 4.0,
        color: ParticleColor::Red,
        time_to_live: 1.0,
        time_alive: 0.0,
    };

    let mut last = particle.radius;
    for _ in 0..3 {
        assert_eq!(particle.step(0.25), Vitality::Alive);
        assert!(particle.radius < last, "radius did not strictly decrease");
        last = particle.radius;
    }

    // Fourth quarter step lands exactly on the lifetime
    assert_eq!(particle.step(0.25), Vitality::Expired);
    assert_eq!(particle.radius, 0.0);
}

#[test]
fn particle_inherits_craft_motion() {
    let mut rng = test_rng();
    let mut craft = Craft::new(NVec2::zeros(), 2.0);
    craft.kin.v = NVec2::new(50.0, 0.0);

    // Red tier ejects at 50..100 units/s opposite the facing direction
    let particle = Particle::spawn(&TIERS[2], &craft.kin, &mut rng);

    assert!(particle.v.x < 50.0 - 50.0 + 1e-9, "not ejected backward");
    assert!(particle.v.x > 50.0 - 100.0, "ejection speed out of range");
    assert!(particle.v.y.abs() < 1e-9);
    assert_eq!(particle.color, ParticleColor::Red);
}

#[test]
fn particle_chunk_prunes_expired() {
    let mut rng = test_rng();
    let craft = Craft::new(NVec2::zeros(), 2.0);

    let mut chunk: Chunk<Particle> = Chunk::new();
    for tier in &TIERS {
        chunk.insert(Particle::spawn(tier, &craft.kin, &mut rng));
    }
    assert_eq!(chunk.len(), 3);

    // Longest tier lifetime is under 2 seconds
    chunk.update_each(|p| p.step(2.5));
    assert_eq!(chunk.len(), 0);
}

// ==================================================================================
// Container tests
// ==================================================================================

#[test]
fn chunk_self_removal_mid_pass_updates_everyone_once() {
    let mut chunk: Chunk<(u32, u32)> = Chunk::new();
    for i in 0..5 {
        chunk.insert((i, 0));
    }

    // Member 2 expires itself during the pass
    chunk.update_each(|(i, calls)| {
        *calls += 1;
        if *i == 2 {
            Vitality::Expired
        } else {
            Vitality::Alive
        }
    });

    assert_eq!(chunk.len(), 4);
    for (i, calls) in chunk.iter() {
        assert_eq!(*calls, 1, "member {i} updated {calls} times");
        assert_ne!(*i, 2);
    }

    // Survivors all get exactly one call on the next pass too
    chunk.update_each(|(_, calls)| {
        *calls += 1;
        Vitality::Alive
    });
    for (_, calls) in chunk.iter() {
        assert_eq!(*calls, 2);
    }
}

#[test]
fn chunk_handles_survive_sibling_removal() {
    let mut chunk: Chunk<&str> = Chunk::new();
    let a = chunk.insert("a");
    let b = chunk.insert("b");
    let c = chunk.insert("c");

    assert_eq!(chunk.remove(b), Some("b"));
    assert_eq!(chunk.get(a), Some(&"a"));
    assert_eq!(chunk.get(c), Some(&"c"));
    assert_eq!(chunk.get(b), None);

    // Slot reuse must not resurrect the stale handle
    let d = chunk.insert("d");
    assert_eq!(chunk.get(b), None);
    assert_eq!(chunk.remove(b), None);
    assert_eq!(chunk.get(d), Some(&"d"));
    assert_eq!(chunk.len(), 3);

    *chunk.get_mut(a).unwrap() = "a2";
    assert_eq!(chunk.get(a), Some(&"a2"));
    assert!(chunk.get_mut(b).is_none());
}

#[test]
fn chunk_draw_order_is_container_order() {
    let mut chunk: Chunk<u32> = Chunk::new();
    for i in 0..4 {
        chunk.insert(i);
    }
    let mut seen = Vec::new();
    chunk.draw_each(|i| seen.push(*i));
    assert_eq!(seen, vec![0, 1, 2, 3]);
}

// ==================================================================================
// Craft tests
// ==================================================================================

#[test]
fn boost_single_tick_spawns_one_event() {
    let p = test_params();
    let mut rng = test_rng();
    let mut craft = Craft::new(NVec2::zeros(), 2.0);

    craft.apply_input(
        &InputState {
            thrust: true,
            ..Default::default()
        },
        1.0,
        &p,
    );
    craft.update(1.0, &p, &mut rng);

    // Exactly one spawn event: 1 to 3 particles depending on the tier
    let n = craft.particles.len();
    assert!((1..=3).contains(&n), "spawned {n} particles");
    for particle in craft.particles.iter() {
        assert!(particle.original_radius >= 1.0 && particle.original_radius <= 5.0);
        assert!(particle.time_to_live >= 0.3 && particle.time_to_live <= 2.0);
    }
}

#[test]
fn boost_three_seconds_spawns_three_events() {
    let p = test_params();
    let mut rng = test_rng();
    let mut craft = Craft::new(NVec2::zeros(), 2.0);
    let thrust = InputState {
        thrust: true,
        ..Default::default()
    };

    for _ in 0..3 {
        craft.apply_input(&thrust, 1.0, &p);
        craft.update(1.0, &p, &mut rng);
    }

    // Three events of 1..=3 particles each; some may have expired already
    assert!(craft.particles.len() >= 1);
    assert!(craft.particles.len() <= 9);
    // All whole ticks were consumed
    assert!(craft.boost_accumulator().abs() < 1e-9);
}

#[test]
fn boost_accumulator_retains_fraction() {
    let p = test_params();
    let mut rng = test_rng();
    let mut craft = Craft::new(NVec2::zeros(), 2.0);
    let thrust = InputState {
        thrust: true,
        ..Default::default()
    };

    // 0.7s steps against a 1.0s tick: events at 1.4 and 2.1 accumulated
    craft.apply_input(&thrust, 0.7, &p);
    craft.update(0.7, &p, &mut rng);
    assert_eq!(craft.particles.len(), 0);
    assert!((craft.boost_accumulator() - 0.7).abs() < 1e-9);

    craft.apply_input(&thrust, 0.7, &p);
    craft.update(0.7, &p, &mut rng);
    assert!(craft.particles.len() >= 1);
    assert!((craft.boost_accumulator() - 0.4).abs() < 1e-9);

    craft.apply_input(&thrust, 0.7, &p);
    craft.update(0.7, &p, &mut rng);
    assert!(
        (craft.boost_accumulator() - 0.1).abs() < 1e-9,
        "remainder lost: {}",
        craft.boost_accumulator()
    );
}

#[test]
fn particles_keep_decaying_after_boost_stops() {
    let p = test_params();
    let mut rng = test_rng();
    let mut craft = Craft::new(NVec2::zeros(), 2.0);

    craft.apply_input(
        &InputState {
            thrust: true,
            ..Default::default()
        },
        1.0,
        &p,
    );
    craft.update(1.0, &p, &mut rng);
    assert!(craft.particles.len() >= 1);

    // Boost released; exhaust must still run out on its own
    craft.apply_input(&InputState::default(), 0.2, &p);
    for _ in 0..12 {
        craft.update(0.2, &p, &mut rng);
    }
    assert_eq!(craft.particles.len(), 0);
}

#[test]
fn rotation_free_drifts_without_damping() {
    let p = test_params();
    let mut rng = test_rng();
    let mut craft = Craft::new(NVec2::zeros(), 2.0);

    craft.apply_input(
        &InputState {
            rotate_right: true,
            ..Default::default()
        },
        0.1,
        &p,
    );
    assert!((craft.rotation - 10.0).abs() < 1e-12);

    // No further input: the craft keeps spinning at the same rate
    for _ in 0..10 {
        craft.update(0.1, &p, &mut rng);
    }
    assert!((craft.rotation - 10.0).abs() < 1e-12);
    assert!((craft.kin.angle - 10.0).abs() < 1e-9);
}

#[test]
fn rotation_damping_bleeds_spin() {
    let mut p = test_params();
    p.rotation_damping = 0.5;
    let mut rng = test_rng();
    let mut craft = Craft::new(NVec2::zeros(), 2.0);
    craft.rotation = 10.0;

    for _ in 0..10 {
        craft.update(0.1, &p, &mut rng);
    }
    assert!(craft.rotation < 10.0);
    assert!(craft.rotation > 0.0);
}

#[test]
fn thrust_accelerates_along_heading() {
    let p = test_params();
    let mut craft = Craft::new(NVec2::zeros(), 2.0);
    craft.kin.angle = std::f64::consts::FRAC_PI_2;

    craft.apply_input(
        &InputState {
            thrust: true,
            ..Default::default()
        },
        0.1,
        &p,
    );

    assert!((craft.kin.v.y - 80.0).abs() < 1e-9);
    assert!(craft.kin.v.x.abs() < 1e-9);
}

#[test]
fn craft_draws_centered_triangle_over_exhaust() {
    let p = test_params();
    let mut rng = test_rng();
    let mut craft = Craft::new(NVec2::new(500.0, 500.0), 2.0);

    craft.apply_input(
        &InputState {
            thrust: true,
            ..Default::default()
        },
        1.0,
        &p,
    );
    craft.update(1.0, &p, &mut rng);

    let camera = camera_at(craft.kin.x);
    let mut canvas = RecordingCanvas::default();
    craft.draw(&camera, &mut canvas);

    // Exhaust circles first, ship triangle last
    assert!(canvas.ops.len() >= 2);
    match canvas.ops.last().unwrap() {
        Op::Triangle { points, tint } => {
            assert_eq!(*tint, Tint::WHITE);
            // Nose sits 10 units from the viewport center
            let center = test_viewport().center();
            let (nx, ny) = points[0];
            let d = ((nx - center.x).powi(2) + (ny - center.y).powi(2)).sqrt();
            assert!((d - 10.0).abs() < 1e-9);
        }
        other => panic!("expected ship triangle last, got {other:?}"),
    }
    assert!(matches!(canvas.ops[0], Op::Circle { .. }));
}

// ==================================================================================
// Star recycling tests
// ==================================================================================

fn recycle(star: &mut BackgroundStar, focus: NVec2) -> RecordingCanvas {
    let mut canvas = RecordingCanvas::default();
    let mut rng = test_rng();
    let camera = camera_at(focus);
    Entity::draw(star, &camera, &mut canvas, &mut rng);
    canvas
}

#[test]
fn star_past_bottom_respawns_above_top() {
    let focus = NVec2::new(1000.0, 1000.0);
    let mut star = BackgroundStar {
        x: focus + NVec2::new(600.0, 720.0 + 21.0),
        radius: 2.0,
    };
    let before = star.x;

    let canvas = recycle(&mut star, focus);

    assert!(canvas.ops.is_empty(), "recycled star must not be drawn");
    assert_ne!(star.x, before);
    assert_eq!(star.x.y - focus.y, -10.0);
    let sx = star.x.x - focus.x;
    assert!((0.0..1280.0).contains(&sx));
    assert!(star.radius >= 1.0 && star.radius <= 3.0);
}

#[test]
fn star_past_top_respawns_below_bottom() {
    let focus = NVec2::zeros();
    let mut star = BackgroundStar {
        x: NVec2::new(600.0, -21.0),
        radius: 1.0,
    };

    let canvas = recycle(&mut star, focus);

    assert!(canvas.ops.is_empty());
    assert_eq!(star.x.y, 730.0);
    assert!((0.0..1280.0).contains(&star.x.x));
}

#[test]
fn star_past_right_respawns_left() {
    let focus = NVec2::zeros();
    let mut star = BackgroundStar {
        x: NVec2::new(1280.0 + 21.0, 300.0),
        radius: 3.0,
    };

    let canvas = recycle(&mut star, focus);

    assert!(canvas.ops.is_empty());
    assert_eq!(star.x.x, -10.0);
    assert!((0.0..720.0).contains(&star.x.y));
}

#[test]
fn star_past_left_respawns_right() {
    let focus = NVec2::zeros();
    let mut star = BackgroundStar {
        x: NVec2::new(-21.0, 300.0),
        radius: 3.0,
    };

    let canvas = recycle(&mut star, focus);

    assert!(canvas.ops.is_empty());
    assert_eq!(star.x.x, 1290.0);
    assert!((0.0..720.0).contains(&star.x.y));
}

#[test]
fn star_lost_past_a_corner_recycles_on_one_edge_only() {
    // Past bottom AND right: the bottom check wins, so the star respawns
    // in the top band with its x re-rolled inside the viewport
    let focus = NVec2::zeros();
    let mut star = BackgroundStar {
        x: NVec2::new(1280.0 + 50.0, 720.0 + 50.0),
        radius: 2.0,
    };

    let canvas = recycle(&mut star, focus);

    assert!(canvas.ops.is_empty());
    assert_eq!(star.x.y, -10.0);
    assert!((0.0..1280.0).contains(&star.x.x));
}

#[test]
fn star_inside_view_is_drawn_in_place() {
    let focus = NVec2::new(40.0, 40.0);
    let mut star = BackgroundStar {
        x: NVec2::new(140.0, 240.0),
        radius: 2.0,
    };

    let canvas = recycle(&mut star, focus);

    assert_eq!(canvas.ops.len(), 1);
    match &canvas.ops[0] {
        Op::Circle { x, y, radius, .. } => {
            assert_eq!((*x, *y), (100.0, 200.0));
            assert_eq!(*radius, 2.0);
        }
        other => panic!("expected a circle, got {other:?}"),
    }
    assert_eq!(star.x, NVec2::new(140.0, 240.0), "star must not move");
}

// ==================================================================================
// Camera tests
// ==================================================================================

#[test]
fn camera_centers_focus_in_viewport() {
    let camera = camera_at(NVec2::new(100.0, 50.0));
    let s = camera.to_screen(NVec2::new(100.0, 50.0));
    assert_eq!((s.x, s.y), (640.0, 360.0));

    let s = camera.to_screen(NVec2::new(130.0, 40.0));
    assert_eq!((s.x, s.y), (670.0, 350.0));

    let o = camera.offset(NVec2::new(100.0, 50.0));
    assert_eq!((o.x, o.y), (0.0, 0.0));
}

// ==================================================================================
// Catalog tests
// ==================================================================================

#[test]
fn catalog_rejects_empty_categories() {
    assert!(Catalog::new(vec![], vec!["bh.png".into()]).is_err());
    assert!(Catalog::new(vec!["p.png".into()], vec![]).is_err());
    assert!(Catalog::new(vec!["p.png".into()], vec!["bh.png".into()]).is_ok());
}

#[test]
fn catalog_draws_without_replacement_until_exhausted() {
    let names: Vec<String> = ["a.png", "b.png", "c.png", "d.png"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let mut catalog = Catalog::new(names.clone(), vec!["bh.png".into()]).unwrap();
    let mut rng = test_rng();

    let mut first_round: Vec<String> = (0..4)
        .map(|_| catalog.draw(Category::Planet, &mut rng))
        .collect();
    first_round.sort();
    assert_eq!(first_round, names, "a texture repeated before exhaustion");

    // Pool refills for the next round
    let mut second_round: Vec<String> = (0..4)
        .map(|_| catalog.draw(Category::Planet, &mut rng))
        .collect();
    second_round.sort();
    assert_eq!(second_round, names);
}

// ==================================================================================
// Scenario tests
// ==================================================================================

#[test]
fn default_scenario_builds_the_original_scene() {
    let scenario = Scenario::build_scenario(ScenarioConfig::default()).unwrap();

    // 100 stars + 4 planets + 1 black hole
    assert_eq!(scenario.world.field.len(), 105);
    assert_eq!(scenario.world.craft.kin.x, NVec2::zeros());
    assert_eq!(scenario.world.craft.particles.len(), 0);
}

#[test]
fn scenario_rejects_bad_bodies() {
    let mut cfg = ScenarioConfig::default();
    cfg.planets[0].radius = -3.0;
    assert!(Scenario::build_scenario(cfg).is_err());

    let mut cfg = ScenarioConfig::default();
    cfg.black_holes = vec![BlackHoleConfig {
        x: [0.0, 0.0],
        radius: 10.0,
        mass: 0.0,
    }];
    assert!(Scenario::build_scenario(cfg).is_err());

    let mut cfg = ScenarioConfig::default();
    cfg.textures.planets.clear();
    assert!(Scenario::build_scenario(cfg).is_err());
}

#[test]
fn scenario_step_scales_time_and_moves_the_craft() {
    let mut scenario = Scenario::build_scenario(ScenarioConfig::default()).unwrap();
    scenario.world.craft.kin.v = NVec2::new(10.0, 0.0);
    scenario.world.craft.kin.x = NVec2::new(-5000.0, -5000.0); // far from all bodies

    // Default time scale is 0.2 simulation seconds per wall second
    scenario.step(1.0);
    assert!((scenario.world.craft.kin.x.x - (-4998.0)).abs() < 1e-9);
}

#[test]
fn scenario_draw_renders_world_then_craft() {
    let mut scenario = Scenario::build_scenario(ScenarioConfig::default()).unwrap();
    let mut canvas = RecordingCanvas::default();

    scenario.draw(&mut canvas);

    // The ship triangle is the final primitive of the frame
    assert!(matches!(canvas.ops.last(), Some(Op::Triangle { .. })));
    // Bodies blit after the starfield (stars first in container order)
    let first_image = canvas.ops.iter().position(|op| matches!(op, Op::Image { .. }));
    let first_circle = canvas
        .ops
        .iter()
        .position(|op| matches!(op, Op::Circle { .. }));
    assert!(first_image.is_some(), "no body was drawn");
    assert!(first_circle.unwrap() < first_image.unwrap());
}

#[test]
fn scenario_yaml_round_trip() {
    let yaml = r#"
engine:
  star_count: 3
parameters:
  mass_law: "quadratic"
  seed: 9
player:
  x: [1.0, 2.0]
  mass: 2.0
planets:
  - x: [400.0, 400.0]
    radius: 30.0
black_holes: []
textures:
  planets: ["p.png"]
  black_holes: ["bh.png"]
"#;
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    let scenario = Scenario::build_scenario(cfg).unwrap();

    assert_eq!(scenario.world.field.len(), 4); // 3 stars + 1 planet
    assert_eq!(scenario.parameters.mass_law, MassLaw::Quadratic);
    assert_eq!(scenario.world.craft.kin.x, NVec2::new(1.0, 2.0));
}
