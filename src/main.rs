use bevy::prelude::*;
use sciscape_core::{InitialConditions, SimulationConfig};
use sciscape_render::plugin::LabRenderPlugin;
use sciscape_render::ui::Experiments;
use sciscape_sim::LabSession;
use sciscape_sim::pipeline::SimulationPlugin;

fn main() {
    let session = match LabSession::new(SimulationConfig::default(), InitialConditions::default())
    {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Failed to start the lab: {e}");
            return;
        }
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "SciScape | Physics Lab".into(),
                resolution: (1600.0, 900.0).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.04, 0.05, 0.09)))
        .insert_resource(session)
        .insert_resource(Experiments::open("experiments"))
        .add_plugins(SimulationPlugin)
        .add_plugins(LabRenderPlugin)
        .run();
}
