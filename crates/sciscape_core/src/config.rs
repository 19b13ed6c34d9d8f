use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TRAIL_LENGTH, EARTH_GRAVITY, WALL_MAX_X, WALL_MIN_X};
use crate::error::{LabError, LabResult};
use crate::types::Vec2;

/// Environment the ball moves in. Fixed for a run, may change between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Downward acceleration magnitude (m/s²)
    pub gravity: f64,
    /// Quadratic drag coefficient
    pub air_resistance: f64,
    /// Coefficient of restitution applied on every collision
    pub bounciness: f64,
    /// Height of the floor plane (m)
    pub ground_y: f64,
    /// Cap on retained trail positions
    pub max_trail_length: usize,
    /// Left wall (m)
    pub wall_min_x: f64,
    /// Right wall (m)
    pub wall_max_x: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: EARTH_GRAVITY,
            air_resistance: 0.0,
            bounciness: 0.8,
            ground_y: 0.0,
            max_trail_length: DEFAULT_TRAIL_LENGTH,
            wall_min_x: WALL_MIN_X,
            wall_max_x: WALL_MAX_X,
        }
    }
}

impl SimulationConfig {
    /// Reject settings the integrator cannot honor.
    ///
    /// Gravity, drag and bounciness are deliberately left unchecked: the
    /// control sliders bound them, and a bounciness above 1 is a valid
    /// (energy-gaining) experiment.
    pub fn validate(&self) -> LabResult<()> {
        if self.max_trail_length == 0 {
            return Err(LabError::invalid_configuration(
                "max_trail_length must be at least 1",
            ));
        }
        if !self.wall_min_x.is_finite() || !self.wall_max_x.is_finite() {
            return Err(LabError::invalid_configuration("walls must be finite"));
        }
        if self.wall_min_x >= self.wall_max_x {
            return Err(LabError::invalid_configuration(format!(
                "wall_min_x ({}) must be left of wall_max_x ({})",
                self.wall_min_x, self.wall_max_x
            )));
        }
        Ok(())
    }
}

/// Launch parameters a run is seeded from. This is what gets persisted;
/// a live state can always be rebuilt from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialConditions {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Kilograms, must be positive
    pub mass: f64,
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            position: Vec2::new(0.0, 5.0),
            velocity: Vec2::ZERO,
            mass: 1.0,
        }
    }
}

impl InitialConditions {
    /// Launch from `start_height` above the origin with the given velocity
    pub fn launch(start_height: f64, velocity: Vec2, mass: f64) -> Self {
        Self {
            position: Vec2::new(0.0, start_height),
            velocity,
            mass,
        }
    }

    pub fn validate(&self) -> LabResult<()> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(LabError::invalid_configuration(format!(
                "mass must be positive, got {}",
                self.mass
            )));
        }
        Ok(())
    }
}
