use bevy::prelude::*;
use sciscape_core::{
    AIR_RESISTANCE_RANGE, BOUNCINESS_RANGE, EnvironmentPreset, FIXED_DT, GRAVITY_RANGE,
    InitialConditions, LAUNCH_VX_RANGE, LAUNCH_VY_RANGE, LabResult, MASS_RANGE, MAX_FRAME_DT,
    START_HEIGHT_RANGE, SimulationConfig, SimulationState,
};
use sciscape_physics::integrator;

use crate::history::History;

/// The running lab: current inputs, live state and graph history.
/// Owned by the app as a Bevy Resource and threaded through `integrator::step`.
#[derive(Resource)]
pub struct LabSession {
    pub config: SimulationConfig,
    /// What `reset` re-seeds from
    pub initial: InitialConditions,
    pub state: SimulationState,
    pub history: History,
    /// Continuous play vs paused (manual stepping)
    pub playing: bool,
    pub preset: EnvironmentPreset,
    pub show_trail: bool,
    pub show_vectors: bool,
}

impl LabSession {
    pub fn new(config: SimulationConfig, initial: InitialConditions) -> LabResult<Self> {
        config.validate()?;
        let state = SimulationState::from_initial(&initial)?;
        let mut history = History::default();
        history.record(&state);
        Ok(Self {
            config,
            initial,
            state,
            history,
            playing: false,
            preset: EnvironmentPreset::Earth,
            show_trail: true,
            show_vectors: true,
        })
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Called once per rendered frame with the wall-clock delta.
    /// Steps only while playing; returns whether the state advanced.
    pub fn advance_frame(&mut self, wall_dt: f64) -> LabResult<bool> {
        if !self.playing {
            return Ok(false);
        }
        let dt = clamp_frame_dt(wall_dt);
        if dt == 0.0 {
            return Ok(false);
        }
        self.advance(dt)?;
        Ok(true)
    }

    /// One fixed step. Ignored while playing.
    pub fn step_once(&mut self) -> LabResult<bool> {
        if self.playing {
            return Ok(false);
        }
        self.advance(FIXED_DT)?;
        Ok(true)
    }

    fn advance(&mut self, dt: f64) -> LabResult<()> {
        self.state = integrator::step(&self.state, &self.config, dt)?;
        self.history.record(&self.state);
        Ok(())
    }

    /// Pause and start over from the initial conditions.
    /// On error the run is left paused but otherwise untouched.
    pub fn reset(&mut self) -> LabResult<()> {
        self.playing = false;
        self.state = SimulationState::from_initial(&self.initial)?;
        self.history.clear();
        self.history.record(&self.state);
        Ok(())
    }

    /// Swap the environment. The run continues with the new settings.
    pub fn set_config(&mut self, config: SimulationConfig) -> LabResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// New launch parameters take effect immediately through a reset
    pub fn set_initial(&mut self, initial: InitialConditions) -> LabResult<()> {
        initial.validate()?;
        self.initial = initial;
        self.reset()
    }

    /// Replace both inputs wholesale, e.g. from a saved experiment
    pub fn load(&mut self, config: SimulationConfig, initial: InitialConditions) -> LabResult<()> {
        config.validate()?;
        initial.validate()?;
        self.config = config;
        self.initial = initial;
        self.preset = EnvironmentPreset::Custom;
        self.reset()?;
        info!(
            "Loaded experiment: g={:.2} bounciness={:.2} start=({:.1}, {:.1})",
            self.config.gravity,
            self.config.bounciness,
            self.initial.position.x,
            self.initial.position.y
        );
        Ok(())
    }

    pub fn select_preset(&mut self, preset: EnvironmentPreset) {
        self.preset = preset;
        if let Some(gravity) = preset.gravity() {
            self.config.gravity = gravity;
        }
    }

    pub fn adjust_gravity(&mut self, delta: f64) {
        self.config.gravity = (self.config.gravity + delta).clamp(GRAVITY_RANGE.0, GRAVITY_RANGE.1);
        self.preset = EnvironmentPreset::Custom;
    }

    pub fn adjust_bounciness(&mut self, delta: f64) {
        self.config.bounciness =
            (self.config.bounciness + delta).clamp(BOUNCINESS_RANGE.0, BOUNCINESS_RANGE.1);
    }

    pub fn adjust_air_resistance(&mut self, delta: f64) -> LabResult<()> {
        let config = SimulationConfig {
            air_resistance: (self.config.air_resistance + delta)
                .clamp(AIR_RESISTANCE_RANGE.0, AIR_RESISTANCE_RANGE.1),
            ..self.config.clone()
        };
        self.set_config(config)
    }

    // Launch adjusters go through `set_initial`, so each one restarts the run.

    pub fn adjust_start_height(&mut self, delta: f64) -> LabResult<()> {
        let mut initial = self.initial.clone();
        initial.position.y =
            (initial.position.y + delta).clamp(START_HEIGHT_RANGE.0, START_HEIGHT_RANGE.1);
        self.set_initial(initial)
    }

    pub fn adjust_mass(&mut self, delta: f64) -> LabResult<()> {
        let mut initial = self.initial.clone();
        initial.mass = (initial.mass + delta).clamp(MASS_RANGE.0, MASS_RANGE.1);
        self.set_initial(initial)
    }

    pub fn adjust_launch_velocity(&mut self, dvx: f64, dvy: f64) -> LabResult<()> {
        let mut initial = self.initial.clone();
        initial.velocity.x = (initial.velocity.x + dvx).clamp(LAUNCH_VX_RANGE.0, LAUNCH_VX_RANGE.1);
        initial.velocity.y = (initial.velocity.y + dvy).clamp(LAUNCH_VY_RANGE.0, LAUNCH_VY_RANGE.1);
        self.set_initial(initial)
    }
}

/// Wall-clock deltas are clamped so a stalled frame cannot take one huge
/// explicit step. Negative or non-finite deltas count as no time.
pub fn clamp_frame_dt(wall_dt: f64) -> f64 {
    if !wall_dt.is_finite() || wall_dt <= 0.0 {
        return 0.0;
    }
    wall_dt.min(MAX_FRAME_DT)
}
