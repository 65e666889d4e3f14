//! Simulation constants and tuning parameters.

use crate::types::Color;

// --- Arena ---

/// Default arena width in world units.
pub const ARENA_WIDTH: f64 = 1024.0;

/// Default arena height in world units.
pub const ARENA_HEIGHT: f64 = 768.0;

/// Largest accepted arena width or height.
pub const MAX_ARENA_DIMENSION: f64 = 100_000.0;

/// Gap left between an entity's edge and whatever it was pushed away from.
pub const COLLISION_MARGIN: f64 = 5.0;

/// Fixed integration step. The wall-clock dt handed to the arena only
/// gates whether a tick runs; it is never integrated.
pub const TICK_DT: f64 = 1.0;

/// Wall-clock seconds the controller accumulates before forwarding a tick.
pub const CONTROLLER_TICK_THRESHOLD_SECS: f64 = 0.05;

// --- Default population ---

pub const DEFAULT_ROBOT_COUNT: u32 = 10;
pub const DEFAULT_LIGHT_COUNT: u32 = 4;
pub const DEFAULT_FOOD_COUNT: u32 = 4;

/// Percentage of robots built with the Fear behavior.
pub const DEFAULT_FEAR_RATIO: u32 = 50;

/// Light sensor sensitivity as a percentage (0..=100).
pub const DEFAULT_LIGHT_SENSITIVITY: u32 = 80;

/// Upper bound on entities of any one kind.
pub const DEFAULT_MAX_PER_KIND: u32 = 64;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

// --- Spawn grid ---

/// Offset of the first grid line from the arena edge.
pub const SPAWN_GRID_OFFSET: f64 = 30.0;

/// Spacing between spawn grid lines.
pub const SPAWN_GRID_SPACING: f64 = 50.0;

// --- Hunger (in ticks) ---

/// Above this hunger level robots blend food seeking into their behavior.
pub const HUNGRY: u32 = 600;

/// At or above this hunger level robots only seek food.
pub const STARVE: u32 = 2400;

/// A robot whose hunger reaches this level while food is enabled dies.
pub const DEAD: u32 = 3000;

/// Maximum edge-to-edge gap at which a robot feeds on a food item.
pub const FEEDING_DISTANCE: f64 = 5.0;

// --- Robot ---

pub const ROBOT_MIN_RADIUS: f64 = 8.0;
pub const ROBOT_MAX_RADIUS: f64 = 14.0;
pub const ROBOT_MAX_SPEED: f64 = 10.0;

/// Wheel speed magnitude during and right after a robot's reverse arc.
pub const ROBOT_RECOVERY_SPEED: f64 = 5.0;

pub const ROBOT_COLOR: Color = Color::rgb(0, 0, 255);

// --- Light ---

pub const LIGHT_MIN_RADIUS: f64 = 10.0;
pub const LIGHT_MAX_RADIUS: f64 = 50.0;

/// Constant cruising wheel speed of a light.
pub const LIGHT_SPEED: f64 = 4.0;

pub const LIGHT_COLOR: Color = Color::rgb(255, 255, 255);

// --- Food ---

pub const FOOD_RADIUS: f64 = 20.0;
pub const FOOD_COLOR: Color = Color::rgb(255, 0, 0);

/// Display color of a food item some robot has fed on.
pub const FOOD_CAPTURED_COLOR: Color = Color::rgb(255, 100, 20);

// --- Reverse arc ---

/// Ticks spent reversing after a collision (60° in 3° steps).
pub const REVERSE_ARC_STEPS: u32 = 20;

/// Heading change per reverse-arc tick, in degrees.
pub const REVERSE_ARC_TURN_DEGREES: f64 = -3.0;

// --- Sensors ---

pub const MIN_READING: f64 = 0.0;
pub const MAX_READING: f64 = 1000.0;

/// Numerator of the inverse-exponential falloff.
pub const SENSOR_FALLOFF_GAIN: f64 = 1200.0;

/// Light sensor falloff base when none is configured.
pub const DEFAULT_LIGHT_SENSOR_BASE: f64 = 1.08;

/// Food sensor falloff base (not configurable).
pub const FOOD_SENSOR_BASE: f64 = 1.01;

/// Sensor mounting angles relative to heading, in degrees.
pub const LEFT_SENSOR_ANGLE: f64 = -40.0;
pub const RIGHT_SENSOR_ANGLE: f64 = 40.0;

// --- Motion handler blending ---

/// Share of the explore response while an Explorer is hungry.
pub const EXPLORER_HUNGRY_WEIGHT: f64 = 0.5;

/// Share of the fear response while a Fear robot is hungry.
pub const FEAR_HUNGRY_WEIGHT: f64 = 0.6;
