//! Semi-implicit Euler integrator for a single projectile.
//!
//! Each step recomputes acceleration from gravity and quadratic drag, updates
//! velocity, then moves the ball with the *new* velocity:
//!
//! ```text
//! a  = (drag / m) + (0, -g)
//! v' = v + a*dt
//! p' = p + v'*dt
//! ```
//!
//! Ground and wall contacts are resolved on the new position, the trail is
//! extended and trimmed, and the clock advances by exactly `dt`.

use sciscape_core::{LabError, LabResult, SimulationConfig, SimulationState};

use crate::collision::{resolve_ground, resolve_walls};
use crate::forces::acceleration;

/// Advance `state` by `dt` seconds under `config`.
///
/// `dt` must be finite and non-negative; otherwise the call fails and the
/// input is left as it was. A zero `dt` returns an equivalent state without
/// touching the trail. Mass is assumed valid, as guaranteed by
/// [`SimulationState::new`].
pub fn step(
    state: &SimulationState,
    config: &SimulationConfig,
    dt: f64,
) -> LabResult<SimulationState> {
    if !dt.is_finite() || dt < 0.0 {
        return Err(LabError::invalid_argument(format!(
            "time step must be finite and non-negative, got {dt}"
        )));
    }
    if dt == 0.0 {
        return Ok(state.clone());
    }

    let accel = acceleration(state.velocity, state.mass, config);
    let mut velocity = state.velocity + accel * dt;
    let mut position = state.position + velocity * dt;

    // Orthogonal axes, so the order of these two does not matter
    resolve_ground(&mut position, &mut velocity, config);
    resolve_walls(&mut position, &mut velocity, config);

    let mut trail = state.trail.clone();
    trail.push_back(position);
    while trail.len() > config.max_trail_length {
        trail.pop_front();
    }

    Ok(SimulationState {
        position,
        velocity,
        acceleration: accel,
        mass: state.mass,
        time: state.time + dt,
        trail,
    })
}

/// Advance by `steps` consecutive steps of `dt`.
/// Total time advanced is `steps * dt`.
pub fn step_n(
    state: &SimulationState,
    config: &SimulationConfig,
    dt: f64,
    steps: usize,
) -> LabResult<SimulationState> {
    let mut current = state.clone();
    for _ in 0..steps {
        current = step(&current, config, dt)?;
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::mechanical_energy;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use sciscape_core::{FIXED_DT, Vec2};

    fn ball(x: f64, y: f64, vx: f64, vy: f64) -> SimulationState {
        SimulationState::new(Vec2::new(x, y), Vec2::new(vx, vy), 1.0).unwrap()
    }

    fn no_drag() -> SimulationConfig {
        SimulationConfig {
            air_resistance: 0.0,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn test_semi_implicit_update() {
        let config = no_drag();
        let state = ball(0.0, 5.0, 2.0, 0.0);
        let next = step(&state, &config, 0.1).unwrap();

        let vy = -9.81 * 0.1;
        assert!((next.velocity.y - vy).abs() < 1e-12);
        // Position uses the already-updated velocity
        assert!((next.position.y - (5.0 + vy * 0.1)).abs() < 1e-12);
        assert!((next.position.x - 0.2).abs() < 1e-12);
        assert_eq!(next.acceleration.y, -9.81);
        assert_eq!(next.mass, 1.0);
        assert_eq!(next.trail.len(), 2);
        assert_eq!(*next.trail.back().unwrap(), next.position);
    }

    #[test]
    fn test_rejects_bad_dt() {
        let config = no_drag();
        let state = ball(0.0, 5.0, 0.0, 0.0);
        for dt in [-0.01, f64::NAN, f64::INFINITY] {
            let err = step(&state, &config, dt).unwrap_err();
            assert!(matches!(err, LabError::InvalidArgument { .. }));
        }
        // Input is still usable
        assert!(step(&state, &config, FIXED_DT).is_ok());
    }

    #[test]
    fn test_zero_dt_is_a_no_op() {
        let config = no_drag();
        let state = ball(1.0, 5.0, 3.0, -2.0);
        let next = step(&state, &config, 0.0).unwrap();
        assert_eq!(next, state);
    }

    #[test]
    fn test_energy_conserved_in_flight() {
        let config = no_drag();
        let start = ball(0.0, 100.0, 3.0, 0.0);
        let e0 = mechanical_energy(&start, &config);

        let drift = |dt: f64| {
            let steps = (1.0 / dt).round() as usize;
            let mut state = start.clone();
            let mut worst: f64 = 0.0;
            for _ in 0..steps {
                state = step(&state, &config, dt).unwrap();
                assert!(state.position.y > config.ground_y);
                worst = worst.max((mechanical_energy(&state, &config) - e0).abs());
            }
            worst
        };

        let coarse = drift(1.0 / 60.0);
        let fine = drift(1.0 / 240.0);
        assert!(coarse / e0 < 1e-2, "relative drift {}", coarse / e0);
        assert!(fine < coarse, "drift should shrink with dt: {fine} vs {coarse}");
    }

    #[test]
    fn test_ground_clamp_is_exact() {
        let config = SimulationConfig {
            ground_y: 0.25,
            ..no_drag()
        };
        let state = ball(0.0, 0.3, 0.0, -8.0);
        let next = step(&state, &config, FIXED_DT).unwrap();
        assert_eq!(next.position.y, 0.25);
    }

    #[test]
    fn test_bounce_scales_incoming_velocity() {
        let config = SimulationConfig {
            bounciness: 0.7,
            ..no_drag()
        };
        let state = ball(0.0, 0.01, 0.0, -5.0);
        let incoming = state.velocity.y - config.gravity * FIXED_DT;
        let next = step(&state, &config, FIXED_DT).unwrap();
        assert!((next.velocity.y - (-0.7 * incoming)).abs() < 1e-12);
    }

    #[test]
    fn test_wall_bounce_scenario() {
        let config = SimulationConfig {
            bounciness: 1.0,
            ..no_drag()
        };
        let state = ball(9.95, 1.0, 5.0, 0.0);
        let next = step(&state, &config, 0.1).unwrap();
        assert_eq!(next.position.x, 10.0);
        assert_eq!(next.velocity.x, -5.0);
    }

    #[test]
    fn test_wall_mirror_symmetry() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let config = SimulationConfig {
                bounciness: rng.gen_range(0.0..1.0),
                air_resistance: rng.gen_range(0.0..0.1),
                ..SimulationConfig::default()
            };
            let x = rng.gen_range(9.0..10.0);
            let y = rng.gen_range(0.0..8.0);
            let vx = rng.gen_range(1.0..40.0);
            let vy = rng.gen_range(-10.0..10.0);
            let dt = rng.gen_range(0.001..0.05);

            let right = step(&ball(x, y, vx, vy), &config, dt).unwrap();
            let left = step(&ball(-x, y, -vx, vy), &config, dt).unwrap();

            assert_eq!(right.position.x, -left.position.x);
            assert_eq!(right.velocity.x, -left.velocity.x);
            assert_eq!(right.position.y, left.position.y);
            assert_eq!(right.velocity.y, left.velocity.y);
        }
    }

    #[test]
    fn test_corner_contact_applies_both() {
        let config = SimulationConfig {
            bounciness: 0.5,
            ..no_drag()
        };
        let state = ball(9.9, 0.05, 6.0, -6.0);
        let next = step(&state, &config, 0.05).unwrap();
        assert_eq!(next.position.x, 10.0);
        assert_eq!(next.position.y, 0.0);
        // Ground friction and wall reflection both scale vx
        assert!((next.velocity.x - (-6.0 * 0.95 * 0.5)).abs() < 1e-12);
        assert!(next.velocity.y > 0.0);
    }

    #[test]
    fn test_trail_drops_oldest_first() {
        let config = SimulationConfig {
            max_trail_length: 3,
            ..no_drag()
        };
        let mut state = ball(-5.0, 9.0, 1.0, 0.0);
        let mut positions = vec![state.position];
        for _ in 0..5 {
            state = step(&state, &config, FIXED_DT).unwrap();
            positions.push(state.position);
        }
        let trail: Vec<Vec2> = state.trail.iter().copied().collect();
        assert_eq!(trail, positions[positions.len() - 3..].to_vec());
    }

    #[test]
    fn test_time_is_exact_running_sum() {
        let config = no_drag();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut state = ball(0.0, 5.0, 1.0, 2.0);
        let mut expected = 0.0;
        for _ in 0..500 {
            let dt = rng.gen_range(0.0001..0.05);
            expected += dt;
            state = step(&state, &config, dt).unwrap();
            assert_eq!(state.time, expected);
        }
    }

    #[test]
    fn test_free_fall_scenario() {
        let config = SimulationConfig {
            gravity: 9.81,
            air_resistance: 0.0,
            bounciness: 0.8,
            ground_y: 0.0,
            ..SimulationConfig::default()
        };
        let mut state = ball(0.0, 5.0, 0.0, 0.0);
        let mut steps = 0;
        while state.position.y > 0.0 {
            state = step(&state, &config, FIXED_DT).unwrap();
            steps += 1;
            assert!(steps < 1_000, "ball never landed");
        }
        let analytic = (2.0 * 5.0 / 9.81_f64).sqrt();
        assert!(
            (state.time - analytic).abs() < 2.0 * FIXED_DT,
            "landed at {} vs {}",
            state.time,
            analytic
        );
    }

    #[test]
    fn test_rest_settling_scenario() {
        let config = SimulationConfig {
            bounciness: 0.1,
            ..no_drag()
        };
        let mut state = ball(0.0, 1.0, 0.0, 0.0);
        let mut snapped = false;
        for _ in 0..300 {
            let prev_vy = state.velocity.y;
            state = step(&state, &config, FIXED_DT).unwrap();
            if state.position.y == 0.0 && state.velocity.y == 0.0 && prev_vy != 0.0 {
                snapped = true;
            }
        }
        assert!(snapped);
        assert_eq!(state.position.y, 0.0);
        assert_eq!(state.velocity.y, 0.0);

        // Stays put on further steps
        let next = step(&state, &config, FIXED_DT).unwrap();
        assert_eq!(next.position.y, 0.0);
        assert_eq!(next.velocity.y, 0.0);
    }

    #[test]
    fn test_invariants_hold_for_random_launches() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        for _ in 0..50 {
            let config = SimulationConfig {
                gravity: rng.gen_range(0.0..30.0),
                air_resistance: rng.gen_range(0.0..0.1),
                bounciness: rng.gen_range(0.0..1.0),
                max_trail_length: rng.gen_range(1..64),
                ..SimulationConfig::default()
            };
            let mut state = ball(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(0.5..9.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-15.0..15.0),
            );
            for _ in 0..240 {
                state = step(&state, &config, FIXED_DT).unwrap();
                assert!(state.position.y >= config.ground_y);
                assert!(state.position.x >= config.wall_min_x);
                assert!(state.position.x <= config.wall_max_x);
                assert!(state.trail.len() <= config.max_trail_length);
            }
        }
    }

    #[test]
    fn test_step_n_matches_repeated_step() {
        let config = SimulationConfig::default();
        let start = ball(0.0, 5.0, 2.0, 3.0);
        let mut manual = start.clone();
        for _ in 0..30 {
            manual = step(&manual, &config, FIXED_DT).unwrap();
        }
        assert_eq!(step_n(&start, &config, FIXED_DT, 30).unwrap(), manual);
    }
}
