// Physical and tuning constants for the projectile lab.
// Units are SI throughout: meters, seconds, kilograms.

/// Standard Earth gravity (m/s²)
pub const EARTH_GRAVITY: f64 = 9.81;

/// Left wall of the arena (m)
pub const WALL_MIN_X: f64 = -10.0;

/// Right wall of the arena (m)
pub const WALL_MAX_X: f64 = 10.0;

/// Horizontal velocity retained per ground contact
pub const GROUND_FRICTION: f64 = 0.95;

/// Vertical speed below which a ground bounce settles to rest (m/s)
pub const REST_VELOCITY_THRESHOLD: f64 = 0.1;

/// Fixed time step for manual stepping (s)
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Upper bound on a wall-clock frame delta fed to the integrator (s)
pub const MAX_FRAME_DT: f64 = 0.05;

/// Default cap on retained trail positions
pub const DEFAULT_TRAIL_LENGTH: usize = 500;

/// Default cap on retained graph samples
pub const HISTORY_CAPACITY: usize = 200;

/// Samples shown by the graph view
pub const GRAPH_WINDOW: usize = 150;

/// Samples kept when an experiment is persisted
pub const MAX_RECORDED_SAMPLES: usize = 100;

/// Slider range for gravity (m/s²)
pub const GRAVITY_RANGE: (f64, f64) = (0.0, 30.0);

/// Slider range for the coefficient of restitution
pub const BOUNCINESS_RANGE: (f64, f64) = (0.0, 1.0);

/// Slider range for the quadratic drag coefficient
pub const AIR_RESISTANCE_RANGE: (f64, f64) = (0.0, 0.1);

/// Slider range for the launch height (m)
pub const START_HEIGHT_RANGE: (f64, f64) = (0.5, 9.0);

/// Slider range for the ball mass (kg)
pub const MASS_RANGE: (f64, f64) = (0.1, 10.0);

/// Slider ranges for the launch velocity components (m/s)
pub const LAUNCH_VX_RANGE: (f64, f64) = (-10.0, 10.0);
pub const LAUNCH_VY_RANGE: (f64, f64) = (-15.0, 15.0);
