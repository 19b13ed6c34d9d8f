//! Axis-aligned boundary handling for the floor and the two side walls.
//!
//! Contacts are detected after the position update rather than swept, so a
//! fast ball can tunnel slightly into a boundary within one step before it is
//! clamped back.

use sciscape_core::{GROUND_FRICTION, REST_VELOCITY_THRESHOLD, SimulationConfig, Vec2};

/// Which wall a ball hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
}

/// Clamp to the floor and bounce. Returns true on contact.
///
/// The bounce reflects vertical velocity scaled by bounciness, bleeds
/// horizontal speed through ground friction, and zeroes residual vertical
/// speed under the rest threshold.
pub fn resolve_ground(position: &mut Vec2, velocity: &mut Vec2, config: &SimulationConfig) -> bool {
    if position.y > config.ground_y {
        return false;
    }

    position.y = config.ground_y;
    velocity.y = -velocity.y * config.bounciness;
    velocity.x *= GROUND_FRICTION;

    if velocity.y.abs() < REST_VELOCITY_THRESHOLD {
        velocity.y = 0.0;
    }
    true
}

/// Clamp between the walls and bounce. No friction and no rest snap here.
pub fn resolve_walls(
    position: &mut Vec2,
    velocity: &mut Vec2,
    config: &SimulationConfig,
) -> Option<Wall> {
    if position.x < config.wall_min_x {
        position.x = config.wall_min_x;
        velocity.x = -velocity.x * config.bounciness;
        Some(Wall::Left)
    } else if position.x > config.wall_max_x {
        position.x = config.wall_max_x;
        velocity.x = -velocity.x * config.bounciness;
        Some(Wall::Right)
    } else {
        None
    }
}
