use bevy::prelude::*;
use sciscape_core::EnvironmentPreset;
use sciscape_physics::energy;
use sciscape_sim::LabSession;
use sciscape_storage::{ExperimentRecord, ExperimentStore};

/// Marker for the readout panel
#[derive(Component)]
pub struct HudText;

/// Marker for the key help line
#[derive(Component)]
pub struct HelpText;

/// Saved-experiment store, absent when its directory could not be opened
#[derive(Resource)]
pub struct Experiments {
    pub store: Option<ExperimentStore>,
}

impl Experiments {
    pub fn open(dir: &str) -> Self {
        match ExperimentStore::open(dir) {
            Ok(store) => Self { store: Some(store) },
            Err(e) => {
                error!("Experiment store unavailable at {dir}: {e}");
                Self { store: None }
            }
        }
    }
}

/// HUD frame counter for throttling
#[derive(Resource, Default)]
pub struct HudThrottle {
    pub frame: u32,
}

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("Physics Lab"),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgba(0.9, 0.9, 1.0, 0.95)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));

    commands.spawn((
        Text::new(
            "[Space] Play/Pause  [Right] Step  [R] Reset  [1-6] Environment\n\
             [Up/Down] Gravity  [ [ / ] ] Bounciness  [-/=] Drag  [T] Trail  [V] Vectors\n\
             [PgUp/PgDn] Start height  [N/M] Mass  [A/D] Launch Vx  [S/W] Launch Vy\n\
             [F5] Save experiment  [F9] Load latest",
        ),
        TextFont {
            font_size: 13.0,
            ..default()
        },
        TextColor(Color::srgba(0.7, 0.7, 0.8, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HelpText,
    ));
}

/// Live readouts, refreshed every 5th frame
pub fn update_hud(
    session: Res<LabSession>,
    mut throttle: ResMut<HudThrottle>,
    mut hud_query: Query<&mut Text, With<HudText>>,
) {
    throttle.frame = throttle.frame.wrapping_add(1);
    if throttle.frame % 5 != 0 {
        return;
    }
    let Ok(mut text) = hud_query.get_single_mut() else {
        return;
    };

    let state = &session.state;
    let config = &session.config;
    let kinetic = energy::kinetic_energy(state);
    let potential = energy::potential_energy(state, config);
    let status = if session.playing { "PLAYING" } else { "PAUSED" };

    **text = format!(
        "PHYSICS LAB [{}]\n\
         Time: {:.2} s | Height: {:.2} m | X: {:.2} m\n\
         Speed: {:.2} m/s | Vx: {:.2} | Vy: {:.2}\n\
         \n\
         Energy (J)  Kinetic: {:.2}  Potential: {:.2}  Total: {:.2}\n\
         \n\
         {} ({}) | g = {:.2} m/s²\n\
         Bounciness: {:.2} | Drag: {:.3} | Mass: {:.1} kg\n\
         Launch: h = {:.1} m | v = ({:.1}, {:.1}) m/s\n\
         Trail: {}/{} | Samples: {}/{}",
        status,
        state.time,
        state.position.y,
        state.position.x,
        energy::speed(state),
        state.velocity.x,
        state.velocity.y,
        kinetic,
        potential,
        kinetic + potential,
        session.preset.name(),
        session.preset.description(),
        config.gravity,
        config.bounciness,
        config.air_resistance,
        state.mass,
        session.initial.position.y,
        session.initial.velocity.x,
        session.initial.velocity.y,
        state.trail.len(),
        config.max_trail_length,
        session.history.len(),
        session.history.capacity(),
    );
}

/// Keyboard controls for playback and environment
pub fn lab_control_system(keyboard: Res<ButtonInput<KeyCode>>, mut session: ResMut<LabSession>) {
    if keyboard.just_pressed(KeyCode::Space) {
        session.toggle_play();
    }
    if keyboard.just_pressed(KeyCode::ArrowRight) {
        if let Err(e) = session.step_once() {
            warn!("Step rejected: {e}");
        }
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        if let Err(e) = session.reset() {
            warn!("Reset failed: {e}");
        }
    }

    let preset_keys = [
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
    ];
    for (key, preset) in preset_keys.into_iter().zip(EnvironmentPreset::ALL) {
        if keyboard.just_pressed(key) {
            session.select_preset(preset);
            info!("Environment: {} ({})", preset.name(), preset.description());
        }
    }

    if keyboard.just_pressed(KeyCode::ArrowUp) {
        session.adjust_gravity(0.5);
    }
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        session.adjust_gravity(-0.5);
    }
    if keyboard.just_pressed(KeyCode::BracketRight) {
        session.adjust_bounciness(0.05);
    }
    if keyboard.just_pressed(KeyCode::BracketLeft) {
        session.adjust_bounciness(-0.05);
    }

    let mut adjustments = Vec::new();
    if keyboard.just_pressed(KeyCode::Equal) {
        adjustments.push(session.adjust_air_resistance(0.005));
    }
    if keyboard.just_pressed(KeyCode::Minus) {
        adjustments.push(session.adjust_air_resistance(-0.005));
    }
    if keyboard.just_pressed(KeyCode::PageUp) {
        adjustments.push(session.adjust_start_height(0.5));
    }
    if keyboard.just_pressed(KeyCode::PageDown) {
        adjustments.push(session.adjust_start_height(-0.5));
    }
    if keyboard.just_pressed(KeyCode::KeyM) {
        adjustments.push(session.adjust_mass(0.5));
    }
    if keyboard.just_pressed(KeyCode::KeyN) {
        adjustments.push(session.adjust_mass(-0.5));
    }
    if keyboard.just_pressed(KeyCode::KeyD) {
        adjustments.push(session.adjust_launch_velocity(1.0, 0.0));
    }
    if keyboard.just_pressed(KeyCode::KeyA) {
        adjustments.push(session.adjust_launch_velocity(-1.0, 0.0));
    }
    if keyboard.just_pressed(KeyCode::KeyW) {
        adjustments.push(session.adjust_launch_velocity(0.0, 1.0));
    }
    if keyboard.just_pressed(KeyCode::KeyS) {
        adjustments.push(session.adjust_launch_velocity(0.0, -1.0));
    }
    for e in adjustments.into_iter().filter_map(Result::err) {
        warn!("Adjustment rejected: {e}");
    }

    if keyboard.just_pressed(KeyCode::KeyT) {
        session.show_trail = !session.show_trail;
    }
    if keyboard.just_pressed(KeyCode::KeyV) {
        session.show_vectors = !session.show_vectors;
    }
}

/// F5 saves the current inputs and samples; F9 reloads the newest save
pub fn experiment_io_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    experiments: Res<Experiments>,
    mut session: ResMut<LabSession>,
) {
    let Some(store) = experiments.store.as_ref() else {
        return;
    };

    if keyboard.just_pressed(KeyCode::F5) {
        let name = store
            .next_name()
            .unwrap_or_else(|_| "Experiment".to_string());
        let record =
            ExperimentRecord::capture(name, &session.config, &session.initial, session.history.iter());
        match store.save(&record) {
            Ok(path) => info!("Experiment '{}' saved: {}", record.name, path.display()),
            Err(e) => error!("Failed to save experiment: {e}"),
        }
    }

    if keyboard.just_pressed(KeyCode::F9) {
        match store.latest() {
            Ok(Some(record)) => {
                let (config, initial) = record.restore();
                if let Err(e) = session.load(config, initial) {
                    error!("Experiment '{}' could not be applied: {e}", record.name);
                }
            }
            Ok(None) => info!("No saved experiments"),
            Err(e) => error!("Failed to read experiments: {e}"),
        }
    }
}
