//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_READING, MIN_READING};
use crate::enums::SensorKind;

/// Position and heading of an entity in arena space.
///
/// Screen frame: x grows right, y grows down. Heading is in degrees, 0 along
/// +x, increasing clockwise on screen, and always kept in [0, 360).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
}

/// Left/right wheel speeds. Negative values drive the wheel backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WheelVelocity {
    pub left: f64,
    pub right: f64,
}

/// RGB display color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks run since the arena was last built.
    pub tick: u64,
}

/// Bounded analog reading accumulated from every visible source each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub kind: SensorKind,
    reading: f64,
    /// Base of the inverse-exponential distance falloff.
    pub sensitivity: f64,
}

/// Wrap an angle in degrees into [0, 360).
pub fn wrap_heading(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

impl Pose {
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self {
            x,
            y,
            heading: wrap_heading(heading),
        }
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn set_position(&mut self, position: DVec2) {
        self.x = position.x;
        self.y = position.y;
    }

    /// Center-to-center distance.
    pub fn distance_to(&self, other: &Pose) -> f64 {
        self.position().distance(other.position())
    }

    pub fn heading_radians(&self) -> f64 {
        self.heading.to_radians()
    }

    /// Turn by `delta` degrees, keeping the heading wrapped.
    pub fn rotate(&mut self, delta: f64) {
        self.heading = wrap_heading(self.heading + delta);
    }

    /// Point on the circle of `radius` around this pose, `angle` degrees off
    /// the current heading. The returned heading points outward.
    pub fn rim_point(&self, angle: f64, radius: f64) -> Pose {
        let heading = wrap_heading(self.heading + angle);
        let direction = DVec2::from_angle(heading.to_radians());
        let point = self.position() + direction * radius;
        Pose {
            x: point.x,
            y: point.y,
            heading,
        }
    }
}

impl WheelVelocity {
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Both wheels at the same speed.
    pub fn uniform(speed: f64) -> Self {
        Self {
            left: speed,
            right: speed,
        }
    }

    /// Forward speed of the body center.
    pub fn linear(&self) -> f64 {
        (self.left + self.right) / 2.0
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }
}

impl Sensor {
    pub fn new(kind: SensorKind, sensitivity: f64) -> Self {
        Self {
            kind,
            reading: MIN_READING,
            sensitivity,
        }
    }

    pub fn reading(&self) -> f64 {
        self.reading
    }

    /// Store `reading`, clamped to [MIN_READING, MAX_READING]. NaN reads as 0.
    pub fn set_reading(&mut self, reading: f64) {
        self.reading = if reading.is_nan() {
            MIN_READING
        } else {
            reading.clamp(MIN_READING, MAX_READING)
        };
    }

    pub fn zero_reading(&mut self) {
        self.reading = MIN_READING;
    }
}
