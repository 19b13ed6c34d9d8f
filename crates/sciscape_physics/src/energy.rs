use sciscape_core::{SimulationConfig, SimulationState};

/// KE = ½mv²
pub fn kinetic_energy(state: &SimulationState) -> f64 {
    0.5 * state.mass * state.velocity.length_squared()
}

/// PE = mgh, with h measured from the floor
pub fn potential_energy(state: &SimulationState, config: &SimulationConfig) -> f64 {
    state.mass * config.gravity * (state.position.y - config.ground_y)
}

pub fn mechanical_energy(state: &SimulationState, config: &SimulationConfig) -> f64 {
    kinetic_energy(state) + potential_energy(state, config)
}

pub fn speed(state: &SimulationState) -> f64 {
    state.velocity.length()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sciscape_core::Vec2;

    #[test]
    fn test_energy_terms() {
        let config = SimulationConfig::default();
        let state = SimulationState::new(Vec2::new(0.0, 2.0), Vec2::new(3.0, 4.0), 2.0).unwrap();
        assert!((kinetic_energy(&state) - 25.0).abs() < 1e-12);
        assert!((potential_energy(&state, &config) - 2.0 * 9.81 * 2.0).abs() < 1e-12);
        assert!((mechanical_energy(&state, &config) - (25.0 + 39.24)).abs() < 1e-9);
        assert!((speed(&state) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_potential_measured_from_floor() {
        let config = SimulationConfig {
            ground_y: 1.0,
            ..SimulationConfig::default()
        };
        let state = SimulationState::new(Vec2::new(0.0, 1.0), Vec2::ZERO, 5.0).unwrap();
        assert_eq!(potential_energy(&state, &config), 0.0);
    }
}
