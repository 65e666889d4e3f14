//! Sensor notification and feeding.
//!
//! Robot sensors are zeroed once per tick, then every light and food item
//! adds its stimulus in insertion order. Food items also feed any robot
//! close enough to them.

use hecs::{Entity, World};

use braitenberg_behavior::sensor::{calculate_reading, sensor_pose, Side};
use braitenberg_core::components::{Body, Food, Robot};
use braitenberg_core::constants::{FEEDING_DISTANCE, FOOD_CAPTURED_COLOR};
use braitenberg_core::events::ArenaEvent;
use braitenberg_core::types::Pose;

/// Zero all four sensors of every robot.
pub fn zero_sensors(world: &mut World) {
    for (_entity, robot) in world.query_mut::<&mut Robot>() {
        robot.sensors.zero();
    }
}

/// Add one light's stimulus to every robot's light sensors.
pub fn notify_light(world: &mut World, light: &Pose, light_radius: f64) {
    for (_entity, (pose, body, robot)) in world.query_mut::<(&Pose, &Body, &mut Robot)>() {
        let left = sensor_pose(pose, body.radius, Side::Left);
        let right = sensor_pose(pose, body.radius, Side::Right);
        calculate_reading(&mut robot.sensors.light_left, light, light_radius, &left);
        calculate_reading(&mut robot.sensors.light_right, light, light_radius, &right);
    }
}

/// Add one food item's stimulus to every robot's food sensors and feed the
/// robots touching it.
pub fn notify_food(
    world: &mut World,
    robots: &[Entity],
    food: Entity,
    events: &mut Vec<ArenaEvent>,
) {
    let (food_pose, food_body) = match (world.get::<&Pose>(food), world.get::<&Body>(food)) {
        (Ok(pose), Ok(body)) => (*pose, *body),
        _ => return,
    };

    let mut fed = false;
    for &entity in robots {
        let Ok((pose, body, robot)) = world.query_one_mut::<(&Pose, &Body, &mut Robot)>(entity)
        else {
            continue;
        };

        let left = sensor_pose(pose, body.radius, Side::Left);
        let right = sensor_pose(pose, body.radius, Side::Right);
        calculate_reading(&mut robot.sensors.food_left, &food_pose, food_body.radius, &left);
        calculate_reading(&mut robot.sensors.food_right, &food_pose, food_body.radius, &right);

        if is_feeding(pose, body.radius, &food_pose, food_body.radius) {
            robot.hunger = 0;
            fed = true;
            events.push(ArenaEvent::RobotFed {
                robot_id: body.id,
                food_id: food_body.id,
            });
        }
    }

    if fed {
        mark_captured(world, food);
    }
}

/// Whether a robot's edge is within feeding distance of a food item's edge.
pub fn is_feeding(robot: &Pose, robot_radius: f64, food: &Pose, food_radius: f64) -> bool {
    robot.distance_to(food) - food_radius - robot_radius <= FEEDING_DISTANCE
}

/// Flag a food item as captured and recolor it. Display only.
fn mark_captured(world: &mut World, food: Entity) {
    if let Ok((body, item)) = world.query_one_mut::<(&mut Body, &mut Food)>(food) {
        item.captured = true;
        body.color = FOOD_CAPTURED_COLOR;
    }
}
