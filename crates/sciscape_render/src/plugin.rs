use bevy::prelude::*;

use super::camera;
use super::scene;
use super::ui;

/// Main render plugin for the physics lab
pub struct LabRenderPlugin;

impl Plugin for LabRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ui::HudThrottle>()
            .add_systems(
                Startup,
                (camera::spawn_camera, scene::spawn_scene, ui::spawn_hud),
            )
            .add_systems(
                Update,
                (
                    ui::lab_control_system,
                    ui::experiment_io_system,
                    scene::update_ball.after(ui::lab_control_system),
                    scene::draw_overlays,
                    scene::draw_graph,
                    ui::update_hud,
                ),
            );
    }
}
