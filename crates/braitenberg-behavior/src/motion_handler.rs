//! Reactive motion policies.
//!
//! Pure functions mapping sensor readings and hunger to wheel speeds.
//! The robot's `BehaviorKind` picks the light response; hunger blends in
//! (or fully replaces it with) aggressive food seeking.
//!
//! Wiring, per wheel (a faster wheel turns the body toward its own side):
//! - Fear: excitatory (`left ← left light`), steers toward light.
//! - Explorer: inhibitory (`left ← 1 − left light`), steers away from light.
//! - Aggressive: excitatory (`left ← left food`), steers toward food.

use braitenberg_core::constants::*;
use braitenberg_core::enums::BehaviorKind;
use braitenberg_core::types::WheelVelocity;

/// Input to a motion policy for a single robot.
#[derive(Debug, Clone, Copy)]
pub struct PolicyContext {
    pub behavior: BehaviorKind,
    pub light_left: f64,
    pub light_right: f64,
    pub food_left: f64,
    pub food_right: f64,
    pub hunger: u32,
    pub food_enabled: bool,
    pub max_speed: f64,
}

/// How strongly hunger currently steers the robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HungerLevel {
    /// Light response only.
    Sated,
    /// Light response blended with food seeking.
    Hungry,
    /// Food seeking only.
    Starving,
}

/// Classify `hunger`. Disabled food always reads as sated.
pub fn hunger_level(hunger: u32, food_enabled: bool) -> HungerLevel {
    if !food_enabled {
        HungerLevel::Sated
    } else if hunger >= STARVE {
        HungerLevel::Starving
    } else if hunger > HUNGRY {
        HungerLevel::Hungry
    } else {
        HungerLevel::Sated
    }
}

/// Compute this tick's wheel speeds.
pub fn update_velocity(ctx: &PolicyContext) -> WheelVelocity {
    let clamp = |speed: f64| clamp_speed(speed, ctx.max_speed);

    let light = light_response(ctx);
    let food = aggressive(ctx);

    let (left, right) = match hunger_level(ctx.hunger, ctx.food_enabled) {
        HungerLevel::Sated => light,
        HungerLevel::Starving => food,
        HungerLevel::Hungry => {
            let w = hungry_weight(ctx.behavior);
            (
                w * light.0 + (1.0 - w) * food.0,
                w * light.1 + (1.0 - w) * food.1,
            )
        }
    };

    WheelVelocity::new(clamp(left), clamp(right))
}

/// Clamp a wheel speed to ±`max_speed`. NaN stops the wheel.
pub fn clamp_speed(speed: f64, max_speed: f64) -> f64 {
    if speed.is_nan() {
        return 0.0;
    }
    let max = max_speed.abs();
    speed.clamp(-max, max)
}

/// Share of the light response kept while hungry.
pub fn hungry_weight(behavior: BehaviorKind) -> f64 {
    match behavior {
        BehaviorKind::Fear => FEAR_HUNGRY_WEIGHT,
        BehaviorKind::Explorer => EXPLORER_HUNGRY_WEIGHT,
    }
}

/// Per-wheel light response (each wheel already clamped).
fn light_response(ctx: &PolicyContext) -> (f64, f64) {
    let clamp = |speed: f64| clamp_speed(speed, ctx.max_speed);
    match ctx.behavior {
        BehaviorKind::Fear => (
            clamp(ROBOT_MAX_SPEED * normalized(ctx.light_left)),
            clamp(ROBOT_MAX_SPEED * normalized(ctx.light_right)),
        ),
        BehaviorKind::Explorer => (
            clamp(ROBOT_MAX_SPEED * (1.0 - normalized(ctx.light_left))),
            clamp(ROBOT_MAX_SPEED * (1.0 - normalized(ctx.light_right))),
        ),
    }
}

/// Per-wheel food seeking (each wheel already clamped).
fn aggressive(ctx: &PolicyContext) -> (f64, f64) {
    let clamp = |speed: f64| clamp_speed(speed, ctx.max_speed);
    (
        clamp(ROBOT_MAX_SPEED * normalized(ctx.food_left)),
        clamp(ROBOT_MAX_SPEED * normalized(ctx.food_right)),
    )
}

fn normalized(reading: f64) -> f64 {
    reading / MAX_READING
}
