use bevy::prelude::*;
use sciscape_sim::LabSession;

/// Visual radius of the ball (the physics treats it as a point)
const BALL_RADIUS: f32 = 0.4;

/// Velocity arrows are drawn at this fraction of their m/s length
const VECTOR_SCALE: f32 = 0.3;

/// Graph panel placement, in world units behind the arena
const GRAPH_LEFT: f32 = -10.0;
const GRAPH_WIDTH: f32 = 20.0;
const GRAPH_BASE_Y: f32 = 11.0;
const GRAPH_HEIGHT: f32 = 3.0;
const GRAPH_Z: f32 = -2.0;

/// Marker for the ball mesh
#[derive(Component)]
pub struct Ball;

/// Spawn the floor, the two walls and the ball
pub fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    session: Res<LabSession>,
) {
    let config = &session.config;
    let ground_y = config.ground_y as f32;
    let span = (config.wall_max_x - config.wall_min_x) as f32;

    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(span + 10.0, 0.1, 6.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.89, 0.91, 0.94))),
        Transform::from_xyz(0.0, ground_y - 0.05, 0.0),
    ));

    let wall_material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.8, 0.84, 0.88, 0.5),
        alpha_mode: AlphaMode::Blend,
        ..default()
    });
    let wall_mesh = meshes.add(Cuboid::new(0.2, 10.0, 2.0));
    for x in [config.wall_min_x, config.wall_max_x] {
        commands.spawn((
            Mesh3d(wall_mesh.clone()),
            MeshMaterial3d(wall_material.clone()),
            Transform::from_xyz(x as f32, ground_y + 5.0, 0.0),
        ));
    }

    let pos = session.state.position;
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(BALL_RADIUS).mesh().uv(32, 18))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.55, 0.36, 0.96),
            perceptual_roughness: 0.2,
            metallic: 0.8,
            ..default()
        })),
        Transform::from_xyz(pos.x as f32, pos.y as f32, 0.0),
        Ball,
    ));
}

/// Move the ball mesh to the simulated position
pub fn update_ball(session: Res<LabSession>, mut query: Query<&mut Transform, With<Ball>>) {
    let pos = session.state.position;
    for mut transform in query.iter_mut() {
        transform.translation.x = pos.x as f32;
        transform.translation.y = pos.y as f32;
    }
}

/// Trail polyline and velocity arrow
pub fn draw_overlays(session: Res<LabSession>, mut gizmos: Gizmos) {
    let state = &session.state;

    if session.show_trail && state.trail.len() > 1 {
        gizmos.linestrip(
            state.trail.iter().map(|p| Vec3::new(p.x as f32, p.y as f32, 0.0)),
            Color::srgba(0.55, 0.36, 0.96, 0.6),
        );
    }

    if session.show_vectors {
        let start = Vec3::new(state.position.x as f32, state.position.y as f32, 0.0);
        let tip = Vec3::new(state.velocity.x as f32, state.velocity.y as f32, 0.0) * VECTOR_SCALE;
        if tip.length_squared() > 1e-6 {
            gizmos.arrow(start, start + tip, Color::srgb(0.13, 0.77, 0.37));
        }
    }
}

/// Position and vertical velocity over the recent history window,
/// drawn as two line series on a panel above the arena
pub fn draw_graph(session: Res<LabSession>, mut gizmos: Gizmos) {
    let samples: Vec<_> = session.history.window(sciscape_core::GRAPH_WINDOW).collect();
    if samples.len() < 2 {
        return;
    }

    let t0 = samples[0].time;
    let t1 = samples[samples.len() - 1].time;
    let t_span = (t1 - t0).max(1e-6);

    let frame = Color::srgba(0.5, 0.5, 0.5, 0.4);
    let bottom_left = Vec3::new(GRAPH_LEFT, GRAPH_BASE_Y, GRAPH_Z);
    gizmos.line(bottom_left, bottom_left + Vec3::X * GRAPH_WIDTH, frame);
    gizmos.line(bottom_left, bottom_left + Vec3::Y * GRAPH_HEIGHT, frame);

    let series = |value: &dyn Fn(&sciscape_core::DataPoint) -> f64| {
        let (lo, hi) = samples.iter().fold((f64::MAX, f64::MIN), |(lo, hi), p| {
            let v = value(p);
            (lo.min(v), hi.max(v))
        });
        let range = if hi - lo > 1e-9 { hi - lo } else { 1.0 };
        samples
            .iter()
            .map(|p| {
                let x = GRAPH_LEFT + ((p.time - t0) / t_span) as f32 * GRAPH_WIDTH;
                let y = GRAPH_BASE_Y + ((value(p) - lo) / range) as f32 * GRAPH_HEIGHT;
                Vec3::new(x, y, GRAPH_Z)
            })
            .collect::<Vec<_>>()
    };

    gizmos.linestrip(series(&|p| p.position.y), Color::srgb(0.39, 0.4, 0.95));
    gizmos.linestrip(series(&|p| p.velocity.y), Color::srgb(0.93, 0.27, 0.52));
}
