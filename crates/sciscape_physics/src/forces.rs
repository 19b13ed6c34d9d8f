use sciscape_core::{SimulationConfig, Vec2};

/// Quadratic drag, per axis: -c * v * |v|.
/// Signed by the velocity itself so it always opposes motion.
pub fn drag_force(velocity: Vec2, air_resistance: f64) -> Vec2 {
    Vec2::new(
        -air_resistance * velocity.x * velocity.x.abs(),
        -air_resistance * velocity.y * velocity.y.abs(),
    )
}

/// Net acceleration from gravity plus drag, recomputed from scratch each step
pub fn acceleration(velocity: Vec2, mass: f64, config: &SimulationConfig) -> Vec2 {
    let drag = drag_force(velocity, config.air_resistance);
    Vec2::new(drag.x / mass, -config.gravity + drag.y / mass)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_opposes_motion() {
        let drag = drag_force(Vec2::new(3.0, -2.0), 0.1);
        assert!(drag.x < 0.0);
        assert!(drag.y > 0.0);
        assert!((drag.x + 0.9).abs() < 1e-12);
        assert!((drag.y - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_no_drag_at_rest() {
        assert_eq!(drag_force(Vec2::ZERO, 0.5), Vec2::new(-0.0, -0.0));
    }

    #[test]
    fn test_gravity_only_without_drag() {
        let config = SimulationConfig::default();
        let a = acceleration(Vec2::new(4.0, 7.0), 2.0, &config);
        assert_eq!(a.x, -0.0);
        assert_eq!(a.y, -9.81);
    }

    #[test]
    fn test_drag_scales_with_inverse_mass() {
        let config = SimulationConfig {
            gravity: 0.0,
            air_resistance: 0.05,
            ..SimulationConfig::default()
        };
        let light = acceleration(Vec2::new(10.0, 0.0), 1.0, &config);
        let heavy = acceleration(Vec2::new(10.0, 0.0), 4.0, &config);
        assert!((light.x / heavy.x - 4.0).abs() < 1e-12);
    }
}
