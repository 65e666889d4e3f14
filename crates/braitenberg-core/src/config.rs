//! Arena configuration and its validation.
//!
//! `ArenaParams` is captured at construction and reused verbatim by every
//! reset, so it is validated once up front.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Errors reported for an arena configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("arena dimensions must be finite and positive, got {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },
    #[error("arena {width}x{height} exceeds the maximum dimension of {max}")]
    ArenaTooLarge { width: f64, height: f64, max: f64 },
    #[error("arena {width}x{height} is too small to hold an entity of radius {radius}")]
    ArenaTooSmall { width: f64, height: f64, radius: f64 },
    #[error("{kind} count {count} exceeds the maximum of {max}")]
    TooMany {
        kind: &'static str,
        count: u32,
        max: u32,
    },
    #[error("{name} must be a percentage in 0..=100, got {value}")]
    InvalidPercentage { name: &'static str, value: u32 },
}

/// Parameters used to build (and rebuild) an arena population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaParams {
    pub width: f64,
    pub height: f64,
    pub robot_count: u32,
    /// Percentage of robots built as Fear; the rest are Explorers.
    pub fear_ratio: u32,
    /// Light sensor sensitivity percentage.
    pub light_sensitivity: u32,
    pub light_count: u32,
    /// Ignored while `food_enabled` is false.
    pub food_count: u32,
    pub food_enabled: bool,
    /// RNG seed for spawn positions, radii, and headings.
    pub seed: u64,
    /// Upper bound for each of robot, light, and food counts.
    pub max_per_kind: u32,
}

impl Default for ArenaParams {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            robot_count: DEFAULT_ROBOT_COUNT,
            fear_ratio: DEFAULT_FEAR_RATIO,
            light_sensitivity: DEFAULT_LIGHT_SENSITIVITY,
            light_count: DEFAULT_LIGHT_COUNT,
            food_count: DEFAULT_FOOD_COUNT,
            food_enabled: true,
            seed: DEFAULT_SEED,
            max_per_kind: DEFAULT_MAX_PER_KIND,
        }
    }
}

impl ArenaParams {
    /// Check every field, reporting the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = self.width.is_finite() && self.height.is_finite();
        if !finite || self.width <= 0.0 || self.height <= 0.0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        if self.width > MAX_ARENA_DIMENSION || self.height > MAX_ARENA_DIMENSION {
            return Err(ConfigError::ArenaTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_ARENA_DIMENSION,
            });
        }
        // Every entity must fit between two wall margins.
        let largest = LIGHT_MAX_RADIUS.max(ROBOT_MAX_RADIUS).max(FOOD_RADIUS);
        let span = 2.0 * (largest + COLLISION_MARGIN);
        if self.width <= span || self.height <= span {
            return Err(ConfigError::ArenaTooSmall {
                width: self.width,
                height: self.height,
                radius: largest,
            });
        }

        for (kind, count) in [
            ("robot", self.robot_count),
            ("light", self.light_count),
            ("food", self.food_count),
        ] {
            if count > self.max_per_kind {
                return Err(ConfigError::TooMany {
                    kind,
                    count,
                    max: self.max_per_kind,
                });
            }
        }

        for (name, value) in [
            ("fear_ratio", self.fear_ratio),
            ("light_sensitivity", self.light_sensitivity),
        ] {
            if value > 100 {
                return Err(ConfigError::InvalidPercentage { name, value });
            }
        }

        Ok(())
    }

    /// Number of robots built with the Fear behavior (rounded down).
    pub fn fear_count(&self) -> u32 {
        let fear = u64::from(self.robot_count) * u64::from(self.fear_ratio.min(100)) / 100;
        fear as u32
    }

    /// Light sensor falloff base for the configured sensitivity percentage.
    pub fn light_sensor_base(&self) -> f64 {
        1.001 + f64::from(self.light_sensitivity) / 1000.0
    }

    /// Food entities actually spawned.
    pub fn spawned_food(&self) -> u32 {
        if self.food_enabled {
            self.food_count
        } else {
            0
        }
    }
}
