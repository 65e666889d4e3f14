//! Sensor stimulus model.
//!
//! A source contributes `SENSOR_FALLOFF_GAIN / base^d` to a sensor, where `d`
//! is the gap between the sensor and the source's edge. Contributions from
//! every source seen in a tick are summed, then clamped by the sensor.

use braitenberg_core::constants::*;
use braitenberg_core::types::{Pose, Sensor};

/// Which side of the robot a sensor is mounted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Mounting angle relative to the robot heading, in degrees.
    pub fn angle(self) -> f64 {
        match self {
            Side::Left => LEFT_SENSOR_ANGLE,
            Side::Right => RIGHT_SENSOR_ANGLE,
        }
    }
}

/// Stimulus from a source whose edge is `distance` away.
pub fn falloff(distance: f64, base: f64) -> f64 {
    SENSOR_FALLOFF_GAIN / base.powf(distance.max(0.0))
}

/// Gap between a sensor and the edge of a circular source (never negative).
pub fn edge_distance(source: &Pose, source_radius: f64, sensor: &Pose) -> f64 {
    (sensor.distance_to(source) - source_radius).max(0.0)
}

/// Add one source's contribution to `sensor`.
pub fn calculate_reading(sensor: &mut Sensor, source: &Pose, source_radius: f64, at: &Pose) {
    let distance = edge_distance(source, source_radius, at);
    let stimulus = falloff(distance, sensor.sensitivity);
    sensor.set_reading(sensor.reading() + stimulus);
}

/// Where a sensor sits on a robot of `radius` at `robot`.
pub fn sensor_pose(robot: &Pose, radius: f64, side: Side) -> Pose {
    robot.rim_point(side.angle(), radius)
}
