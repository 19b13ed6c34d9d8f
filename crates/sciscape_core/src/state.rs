use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::config::InitialConditions;
use crate::error::LabResult;
use crate::types::{DataPoint, Vec2};

/// Live state of one simulated ball.
///
/// Produced by the integrator one step at a time; the previous value should
/// not be stepped again once a newer one exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Recomputed every step, never integrated
    pub acceleration: Vec2,
    pub mass: f64,
    /// Elapsed simulation time (s)
    pub time: f64,
    /// Recent positions, oldest first
    pub trail: VecDeque<Vec2>,
}

impl SimulationState {
    /// Fresh state at `time = 0` with the trail seeded by the start position.
    /// Fails when `mass` is not a positive finite number.
    pub fn new(position: Vec2, velocity: Vec2, mass: f64) -> LabResult<Self> {
        Self::from_initial(&InitialConditions {
            position,
            velocity,
            mass,
        })
    }

    pub fn from_initial(initial: &InitialConditions) -> LabResult<Self> {
        initial.validate()?;
        let mut trail = VecDeque::new();
        trail.push_back(initial.position);
        Ok(Self {
            position: initial.position,
            velocity: initial.velocity,
            acceleration: Vec2::ZERO,
            mass: initial.mass,
            time: 0.0,
            trail,
        })
    }

    /// Snapshot for the graphing history
    pub fn sample(&self) -> DataPoint {
        DataPoint {
            time: self.time,
            position: self.position,
            velocity: self.velocity,
        }
    }
}
