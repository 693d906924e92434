//! Bevy 2D viewer for the game
//!
//! The simulation core is windowing-agnostic; this module supplies the
//! thin collaborators around it: a window, key polling, the frame clock,
//! and a [`Canvas`] implementation over Bevy's immediate-mode gizmos.
//! Per frame the chained systems run input -> physics step -> draw, so the
//! update phase always completes before anything is rendered.

use bevy::app::AppExit;
use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use crate::simulation::canvas::{Canvas, Tint, Viewport};
use crate::simulation::craft::InputState;
use crate::simulation::scenario::Scenario;

/// Palette used to stand in for body textures in the gizmo backend.
const BODY_PALETTE: [Tint; 6] = [
    Tint { r: 0.76, g: 0.60, b: 0.42 }, // rock
    Tint { r: 0.85, g: 0.72, b: 0.45 }, // gas
    Tint { r: 0.62, g: 0.80, b: 0.88 }, // ice
    Tint { r: 0.85, g: 0.35, b: 0.20 }, // lava
    Tint { r: 0.45, g: 0.75, b: 0.50 }, // verdant
    Tint { r: 0.55, g: 0.25, b: 0.75 }, // event horizon
];

pub fn run_game(scenario: Scenario) {
    println!(
        "run_game: starting Bevy viewer with {} field entities",
        scenario.world.field.len()
    );

    let (width, height) = (scenario.engine.width as f32, scenario.engine.height as f32);
    App::new()
        // The original deep-space blue backdrop (0, 0, 50)
        .insert_resource(ClearColor(Color::srgb(0.0, 0.0, 0.196)))
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "stardrift".to_string(),
                resolution: WindowResolution::new(width, height),
                present_mode: PresentMode::AutoVsync,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_camera_system)
        .add_systems(
            Update,
            (input_system, physics_step_system, draw_scene_system).chain(),
        )
        .run();
}

fn setup_camera_system(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

/// Poll logical key states and apply them to the craft. Escape requests a
/// quit, which Bevy honors after the current frame completes.
fn input_system(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut scenario: ResMut<Scenario>,
    mut exit: EventWriter<AppExit>,
) {
    let input = InputState {
        thrust: keys.pressed(KeyCode::Space) || keys.pressed(KeyCode::ArrowUp),
        rotate_left: keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft),
        rotate_right: keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight),
        quit: keys.pressed(KeyCode::Escape),
    };
    if input.quit {
        exit.send(AppExit::Success);
    }
    scenario.apply_input(&input, time.delta_seconds() as f64);
}

fn physics_step_system(time: Res<Time>, mut scenario: ResMut<Scenario>) {
    scenario.step(time.delta_seconds() as f64);
}

fn draw_scene_system(mut scenario: ResMut<Scenario>, mut gizmos: Gizmos) {
    let viewport = Viewport {
        width: scenario.engine.width,
        height: scenario.engine.height,
    };
    let mut canvas = GizmoCanvas {
        gizmos: &mut gizmos,
        viewport,
    };
    scenario.draw(&mut canvas);
}

/// [`Canvas`] over Bevy gizmos. Converts the core's top-left-origin
/// screen coordinates into Bevy's centered, y-up world frame.
struct GizmoCanvas<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    viewport: Viewport,
}

impl<'a, 'w, 's> GizmoCanvas<'a, 'w, 's> {
    fn to_bevy(&self, x: f64, y: f64) -> Vec2 {
        Vec2::new(
            (x - self.viewport.width / 2.0) as f32,
            (self.viewport.height / 2.0 - y) as f32,
        )
    }
}

fn color(tint: Tint) -> Color {
    Color::srgb(tint.r, tint.g, tint.b)
}

impl<'a, 'w, 's> Canvas for GizmoCanvas<'a, 'w, 's> {
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, tint: Tint) {
        self.gizmos
            .circle_2d(self.to_bevy(x, y), radius as f32, color(tint));
    }

    fn fill_triangle(&mut self, points: [(f64, f64); 3], tint: Tint) {
        let [a, b, c] = points.map(|(x, y)| self.to_bevy(x, y));
        self.gizmos.linestrip_2d([a, b, c, a], color(tint));
    }

    fn image(&mut self, texture: &str, cx: f64, cy: f64, size: f64) {
        // Texture names are opaque to the core; map each to a stable
        // palette tint and render the body as concentric circles.
        let hash: usize = texture.bytes().map(usize::from).sum();
        let tint = BODY_PALETTE[hash % BODY_PALETTE.len()];
        let center = self.to_bevy(cx, cy);
        let radius = (size / 2.0) as f32;
        self.gizmos.circle_2d(center, radius, color(tint));
        self.gizmos.circle_2d(center, radius * 0.55, color(tint));
    }
}
