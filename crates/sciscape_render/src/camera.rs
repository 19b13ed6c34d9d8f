use bevy::prelude::*;

/// Where the camera looks: mid-height of the arena
const FOCUS: Vec3 = Vec3::new(0.0, 4.0, 0.0);

/// Marker for the lab camera
#[derive(Component)]
pub struct LabCamera;

/// Fixed three-quarter view of the arena with a key light
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 6.0, 22.0).looking_at(FOCUS, Vec3::Y),
        LabCamera,
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
    });
}
