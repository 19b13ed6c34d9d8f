//! Headless trajectory report.
//! Flies a standard launch in every environment, then a seeded Monte Carlo
//! sweep of random launches, and prints flight statistics.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sciscape_core::{
    EnvironmentPreset, FIXED_DT, InitialConditions, LabResult, SimulationConfig, SimulationState,
    Vec2,
};
use sciscape_physics::integrator;
use std::process::ExitCode;

/// Longest simulated flight per launch (s)
const MAX_FLIGHT_TIME: f64 = 30.0;

const MONTE_CARLO_LAUNCHES: usize = 1_000;
const MONTE_CARLO_SEED: u64 = 42;

/// What happened to one launch
struct FlightSummary {
    first_contact: Option<f64>,
    landing_x: Option<f64>,
    apex: f64,
    bounces: u32,
    wall_hits: u32,
    settled_at: Option<f64>,
}

/// On the floor with less kinetic energy per kilogram than g·(g·dt²).
/// A resting ball keeps alternating between vy = 0 and a small rebound
/// from the one-step gravity kick; both phases pass this test.
fn at_rest(state: &SimulationState, config: &SimulationConfig) -> bool {
    let kick = config.gravity * FIXED_DT;
    state.position.y == config.ground_y && 0.5 * state.velocity.length_squared() < kick * kick
}

fn fly(
    config: &SimulationConfig,
    initial: &InitialConditions,
    max_time: f64,
) -> LabResult<FlightSummary> {
    let mut state = SimulationState::from_initial(initial)?;
    let mut summary = FlightSummary {
        first_contact: None,
        landing_x: None,
        apex: state.position.y,
        bounces: 0,
        wall_hits: 0,
        settled_at: None,
    };

    while state.time < max_time {
        let airborne = state.position.y > config.ground_y;
        let moving_x = state.velocity.x;
        state = integrator::step(&state, config, FIXED_DT)?;
        summary.apex = summary.apex.max(state.position.y);

        let on_ground = state.position.y == config.ground_y;
        if airborne && on_ground {
            summary.bounces += 1;
            if summary.first_contact.is_none() {
                summary.first_contact = Some(state.time);
                summary.landing_x = Some(state.position.x);
            }
        }
        let at_wall = state.position.x == config.wall_min_x || state.position.x == config.wall_max_x;
        if at_wall && state.velocity.x.signum() != moving_x.signum() && moving_x != 0.0 {
            summary.wall_hits += 1;
        }

        if at_rest(&state, config) {
            if summary.settled_at.is_none() {
                summary.settled_at = Some(state.time);
            }
        } else {
            summary.settled_at = None;
        }
    }

    Ok(summary)
}

fn fmt_time(t: Option<f64>) -> String {
    t.map_or_else(|| "never".to_string(), |t| format!("{t:.2} s"))
}

fn environment_report() -> LabResult<()> {
    let launch = InitialConditions::launch(5.0, Vec2::new(3.0, 4.0), 1.0);

    println!("STANDARD LAUNCH: h=5.0 m, v=(3.0, 4.0) m/s, bounciness 0.8");
    println!(
        "  {:10} {:>8} {:>12} {:>8} {:>8} {:>6} {:>12}",
        "World", "g", "1st contact", "apex", "bounces", "walls", "settled"
    );
    for preset in EnvironmentPreset::ALL {
        let Some(gravity) = preset.gravity() else {
            continue;
        };
        let config = SimulationConfig {
            gravity,
            ..SimulationConfig::default()
        };
        let s = fly(&config, &launch, MAX_FLIGHT_TIME)?;
        println!(
            "  {:10} {:>8.2} {:>12} {:>7.2}m {:>8} {:>6} {:>12}",
            preset.name(),
            gravity,
            fmt_time(s.first_contact),
            s.apex,
            s.bounces,
            s.wall_hits,
            fmt_time(s.settled_at),
        );
    }
    println!();
    Ok(())
}

fn monte_carlo_report() -> LabResult<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(MONTE_CARLO_SEED);
    let config = SimulationConfig {
        air_resistance: 0.02,
        ..SimulationConfig::default()
    };

    eprintln!("Flying {MONTE_CARLO_LAUNCHES} random launches...");

    let mut ranges = Vec::with_capacity(MONTE_CARLO_LAUNCHES);
    let mut flight_times = Vec::with_capacity(MONTE_CARLO_LAUNCHES);
    let mut wall_launches = 0u32;

    for i in 0..MONTE_CARLO_LAUNCHES {
        let initial = InitialConditions::launch(
            rng.gen_range(0.5..9.0),
            Vec2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-15.0..15.0)),
            rng.gen_range(0.1..10.0),
        );
        let s = fly(&config, &initial, MAX_FLIGHT_TIME)?;
        if let (Some(t), Some(x)) = (s.first_contact, s.landing_x) {
            flight_times.push(t);
            ranges.push((x - initial.position.x).abs());
        }
        if s.wall_hits > 0 {
            wall_launches += 1;
        }
        if (i + 1) % 250 == 0 {
            eprint!("  {}/{}...\r", i + 1, MONTE_CARLO_LAUNCHES);
        }
    }
    eprintln!();

    println!(
        "MONTE CARLO: {} launches, seed {}, drag {:.3}",
        MONTE_CARLO_LAUNCHES, MONTE_CARLO_SEED, config.air_resistance
    );
    print_stats("range (m)", &ranges);
    print_stats("flight time (s)", &flight_times);
    println!(
        "  wall contacts: {} of {} launches ({:.1}%)",
        wall_launches,
        MONTE_CARLO_LAUNCHES,
        wall_launches as f64 / MONTE_CARLO_LAUNCHES as f64 * 100.0
    );
    Ok(())
}

fn print_stats(label: &str, values: &[f64]) {
    if values.is_empty() {
        println!("  {label}: no data");
        return;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    println!("  {label:16} mean {mean:>7.2}  min {min:>7.2}  max {max:>7.2}");
}

fn main() -> ExitCode {
    let run = environment_report().and_then(|()| monte_carlo_report());
    match run {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Trajectory report failed: {e}");
            ExitCode::FAILURE
        }
    }
}
