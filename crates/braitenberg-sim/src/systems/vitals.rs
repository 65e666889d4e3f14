//! Robot vitals: starvation and the hunger counter.

use hecs::{Entity, World};

use braitenberg_core::components::Robot;
use braitenberg_core::constants::DEAD;
use braitenberg_core::enums::GameStatus;

use crate::systems::movement;

/// Whether `robot` has starved: hunger at or past `DEAD` with food enabled.
pub fn is_dead(robot: &Robot) -> bool {
    robot.food_enabled && robot.hunger >= DEAD
}

/// One robot tick: a starved robot turns Lost and stays put, any other
/// robot moves. Hunger grows either way. Returns the robot's status.
pub fn robot_tick(world: &mut World, entity: Entity, dt: f64) -> GameStatus {
    let alive = match world.get::<&mut Robot>(entity) {
        Ok(mut robot) => {
            if is_dead(&robot) {
                robot.status = GameStatus::Lost;
            }
            robot.status != GameStatus::Lost
        }
        Err(_) => return GameStatus::Playing,
    };

    if alive {
        movement::timestep_update::<Robot>(world, entity, dt);
    }

    match world.get::<&mut Robot>(entity) {
        Ok(mut robot) => {
            robot.hunger = robot.hunger.saturating_add(1);
            robot.status
        }
        Err(_) => GameStatus::Playing,
    }
}

/// Propagate a food toggle to every robot. Turning food back on starts
/// hunger over, so time spent with food off never counts toward starving.
pub fn set_food_enabled(world: &mut World, enabled: bool) {
    for (_entity, robot) in world.query_mut::<&mut Robot>() {
        if enabled && !robot.food_enabled {
            robot.hunger = 0;
        }
        robot.food_enabled = enabled;
    }
}
