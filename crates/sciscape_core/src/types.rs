use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A planar vector in meters (positions) or meters per second (velocities).
/// X is horizontal, Y is vertical with positive up.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// One graphing sample: where the ball was and how fast it moved at `time`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub time: f64,
    pub position: Vec2,
    pub velocity: Vec2,
}

impl DataPoint {
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }
}

/// Gravity presets offered by the environment selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EnvironmentPreset {
    #[default]
    Earth,
    Moon,
    Mars,
    Jupiter,
    ZeroG,
    /// Keeps whatever gravity the user dialed in
    Custom,
}

impl EnvironmentPreset {
    pub const ALL: [EnvironmentPreset; 6] = [
        Self::Earth,
        Self::Moon,
        Self::Mars,
        Self::Jupiter,
        Self::ZeroG,
        Self::Custom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Earth => "Earth",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::ZeroG => "Zero-G",
            Self::Custom => "Custom",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Earth => "Standard Earth gravity",
            Self::Moon => "Lunar surface gravity",
            Self::Mars => "Martian surface gravity",
            Self::Jupiter => "Jupiter surface gravity",
            Self::ZeroG => "No gravity (space)",
            Self::Custom => "Set your own value",
        }
    }

    /// Surface gravity in m/s², or `None` for Custom
    pub fn gravity(&self) -> Option<f64> {
        match self {
            Self::Earth => Some(9.81),
            Self::Moon => Some(1.62),
            Self::Mars => Some(3.71),
            Self::Jupiter => Some(24.79),
            Self::ZeroG => Some(0.0),
            Self::Custom => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }
}
