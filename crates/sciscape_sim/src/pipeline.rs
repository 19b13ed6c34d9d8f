use bevy::prelude::*;

use super::session::LabSession;

/// Bevy plugin that drives the lab's integrator from the frame clock.
/// Drawing lives in the render crate; this only decides when to step.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, simulation_tick);
    }
}

/// Main simulation tick: one integrator step per frame while playing
fn simulation_tick(mut session: ResMut<LabSession>, time: Res<Time>) {
    let dt = time.delta_secs_f64();
    if let Err(e) = session.advance_frame(dt) {
        warn!("Simulation step rejected: {e}");
        session.set_playing(false);
    }
}
