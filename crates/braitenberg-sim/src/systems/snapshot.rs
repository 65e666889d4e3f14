//! Snapshot system: reads the arena world into an `ArenaSnapshot`.
//!
//! Read-only; never modifies the world.

use hecs::{Entity, World};

use braitenberg_core::components::*;
use braitenberg_core::enums::*;
use braitenberg_core::state::*;
use braitenberg_core::types::{Pose, SimTime};

/// Arena-wide flags copied into the snapshot.
#[derive(Debug, Clone, Copy)]
pub struct ArenaFlags {
    pub time: SimTime,
    pub status: GameStatus,
    pub paused: bool,
    pub food_enabled: bool,
    pub width: f64,
    pub height: f64,
}

/// Build a snapshot listing `order`'s entities in sequence.
pub fn build_snapshot(world: &World, order: &[Entity], flags: ArenaFlags) -> ArenaSnapshot {
    ArenaSnapshot {
        time: flags.time,
        status: flags.status,
        paused: flags.paused,
        food_enabled: flags.food_enabled,
        width: flags.width,
        height: flags.height,
        entities: order
            .iter()
            .filter_map(|&entity| build_entity(world, entity))
            .collect(),
    }
}

fn build_entity(world: &World, entity: Entity) -> Option<EntityView> {
    let pose = *world.get::<&Pose>(entity).ok()?;
    let body = *world.get::<&Body>(entity).ok()?;
    let motion = world.get::<&Motion>(entity).ok().map(|m| *m);
    let robot = world.get::<&Robot>(entity).ok().map(|r| build_robot(&r));
    let captured = world.get::<&Food>(entity).ok().map(|f| f.captured);

    Some(EntityView {
        id: body.id,
        kind: body.kind,
        pose,
        radius: body.radius,
        color: body.color,
        name: display_name(&body, robot.as_ref().map(|r| r.behavior)),
        velocity: motion.map(|m| m.velocity),
        reversing: motion.is_some_and(|m| m.recovery.is_reversing()),
        robot,
        captured,
    })
}

fn build_robot(robot: &Robot) -> RobotView {
    RobotView {
        behavior: robot.behavior,
        hunger: robot.hunger,
        status: robot.status,
        light_left: robot.sensors.light_left.reading(),
        light_right: robot.sensors.light_right.reading(),
        food_left: robot.sensors.food_left.reading(),
        food_right: robot.sensors.food_right.reading(),
    }
}

/// Label drawn on an entity: "E"/"C" for Explorer/Fear robots.
pub fn display_name(body: &Body, behavior: Option<BehaviorKind>) -> String {
    match (body.kind, behavior) {
        (EntityKind::Robot, Some(BehaviorKind::Explorer)) => "E".to_string(),
        (EntityKind::Robot, _) => "C".to_string(),
        (EntityKind::Light, _) => format!("Light{}", body.id),
        (EntityKind::Food, _) => "Food".to_string(),
    }
}
