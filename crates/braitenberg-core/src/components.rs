//! ECS components for hecs entities.
//!
//! Components are plain data. Control laws and integration live in the
//! behavior crate; orchestration lives in the sim systems.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LIGHT_SENSOR_BASE, FOOD_SENSOR_BASE};
use crate::enums::*;
use crate::types::{Color, Sensor, WheelVelocity};

/// Shape and identity shared by every arena entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    /// Stable id within one arena population (rebuilt on reset).
    pub id: u32,
    pub kind: EntityKind,
    pub radius: f64,
    pub color: Color,
}

/// Wheel state of a mobile entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Motion {
    /// Wheel speeds applied on the last tick.
    pub velocity: WheelVelocity,
    /// Magnitude cap for policy-computed wheel speeds.
    pub max_speed: f64,
    pub recovery: Recovery,
}

/// The four sensors mounted on a robot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RobotSensors {
    pub light_left: Sensor,
    pub light_right: Sensor,
    pub food_left: Sensor,
    pub food_right: Sensor,
}

/// Robot-only state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Robot {
    pub behavior: BehaviorKind,
    /// Ticks since the robot last fed.
    pub hunger: u32,
    pub status: GameStatus,
    /// Whether hunger drives behavior and starvation.
    pub food_enabled: bool,
    pub sensors: RobotSensors,
}

/// Light-only state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Light {
    /// Wheel speed while wandering, and during its reverse arc.
    pub speed: f64,
}

/// Food-only state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Food {
    /// Set once any robot has fed here. Display only.
    pub captured: bool,
}

impl RobotSensors {
    /// Fresh, zeroed sensors; light sensors use `light_sensitivity` as base.
    pub fn new(light_sensitivity: f64) -> Self {
        Self {
            light_left: Sensor::new(SensorKind::Light, light_sensitivity),
            light_right: Sensor::new(SensorKind::Light, light_sensitivity),
            food_left: Sensor::new(SensorKind::Food, FOOD_SENSOR_BASE),
            food_right: Sensor::new(SensorKind::Food, FOOD_SENSOR_BASE),
        }
    }

    /// Zero all four readings.
    pub fn zero(&mut self) {
        self.light_left.zero_reading();
        self.light_right.zero_reading();
        self.food_left.zero_reading();
        self.food_right.zero_reading();
    }
}

impl Default for RobotSensors {
    fn default() -> Self {
        Self::new(DEFAULT_LIGHT_SENSOR_BASE)
    }
}
