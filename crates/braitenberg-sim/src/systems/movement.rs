//! Kinematic update for mobile entities.
//!
//! Robots and lights share one integrator. Each provides its own cruise
//! control law through `Mobile`; the reverse-arc recovery that follows a
//! collision is common to both and overrides the control law while active.

use hecs::{Entity, World};

use braitenberg_behavior::kinematics;
use braitenberg_behavior::motion_handler::{update_velocity, PolicyContext};
use braitenberg_behavior::reverse_arc;
use braitenberg_core::components::{Body, Light, Motion, Robot};
use braitenberg_core::constants::ROBOT_RECOVERY_SPEED;
use braitenberg_core::types::{Pose, WheelVelocity};

/// A component that steers a mobile entity.
pub trait Mobile: hecs::Component {
    /// Wheel speeds requested by the entity's own control law.
    fn cruise_velocity(&self, motion: &Motion) -> WheelVelocity;

    /// Wheel speed magnitude used while reversing and for the kick after.
    fn recovery_speed(&self) -> f64;
}

impl Mobile for Robot {
    fn cruise_velocity(&self, motion: &Motion) -> WheelVelocity {
        update_velocity(&PolicyContext {
            behavior: self.behavior,
            light_left: self.sensors.light_left.reading(),
            light_right: self.sensors.light_right.reading(),
            food_left: self.sensors.food_left.reading(),
            food_right: self.sensors.food_right.reading(),
            hunger: self.hunger,
            food_enabled: self.food_enabled,
            max_speed: motion.max_speed,
        })
    }

    fn recovery_speed(&self) -> f64 {
        ROBOT_RECOVERY_SPEED
    }
}

impl Mobile for Light {
    fn cruise_velocity(&self, _motion: &Motion) -> WheelVelocity {
        WheelVelocity::uniform(self.speed)
    }

    fn recovery_speed(&self) -> f64 {
        self.speed
    }
}

/// Advance one mobile entity by `dt`. Entities without `M` are skipped.
pub fn timestep_update<M: Mobile>(world: &mut World, entity: Entity, dt: f64) {
    let Ok((pose, body, motion, mobile)) =
        world.query_one_mut::<(&mut Pose, &Body, &mut Motion, &M)>(entity)
    else {
        return;
    };

    let update = reverse_arc::step(motion.recovery, mobile.recovery_speed());
    motion.recovery = update.recovery;
    pose.rotate(update.heading_delta);
    let velocity = match update.velocity {
        Some(velocity) => velocity,
        None => mobile.cruise_velocity(motion),
    };
    motion.velocity = velocity;

    *pose = kinematics::update_pose(pose, body.radius, dt, motion.velocity);
}

/// Start (or keep) the reverse arc after a collision.
pub fn handle_collision(world: &mut World, entity: Entity) {
    if let Ok(mut motion) = world.get::<&mut Motion>(entity) {
        motion.recovery = reverse_arc::handle_collision(motion.recovery);
    }
}
