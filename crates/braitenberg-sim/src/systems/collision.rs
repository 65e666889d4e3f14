//! Collision detection and resolution for mobile entities.
//!
//! Each mobile entity, in order, is first pushed off any wall it touches and
//! then pushed out of every same-kind entity it overlaps. Adjustments are
//! applied in place, so later checks see earlier corrections. Robot–light
//! and anything–food overlaps are left alone.

use glam::DVec2;
use hecs::{Entity, World};

use braitenberg_core::components::Body;
use braitenberg_core::constants::COLLISION_MARGIN;
use braitenberg_core::enums::{EntityKind, Wall};
use braitenberg_core::events::ArenaEvent;
use braitenberg_core::types::Pose;

use crate::systems::movement;

/// Arena bounds used for wall checks.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

/// Resolve collisions for every mobile entity.
pub fn run(
    world: &mut World,
    mobiles: &[Entity],
    order: &[Entity],
    bounds: Bounds,
    events: &mut Vec<ArenaEvent>,
) {
    for &entity in mobiles {
        resolve_walls(world, entity, bounds, events);
        resolve_pairs(world, entity, order, bounds, events);
    }
}

/// Walls touched by a circle, at most one per axis.
pub fn touching_walls(pose: &Pose, radius: f64, bounds: Bounds) -> impl Iterator<Item = Wall> {
    let horizontal = if pose.x + radius >= bounds.width {
        Some(Wall::Right)
    } else if pose.x - radius <= 0.0 {
        Some(Wall::Left)
    } else {
        None
    };
    let vertical = if pose.y + radius >= bounds.height {
        Some(Wall::Bottom)
    } else if pose.y - radius <= 0.0 {
        Some(Wall::Top)
    } else {
        None
    };
    [horizontal, vertical].into_iter().flatten()
}

/// Whether two circles touch or overlap.
pub fn is_colliding(a: &Pose, a_radius: f64, b: &Pose, b_radius: f64) -> bool {
    a.distance_to(b) <= a_radius + b_radius
}

/// Whether an overlap between these kinds is resolved at all.
pub fn resolves(a: EntityKind, b: EntityKind) -> bool {
    a == b && a.is_mobile()
}

/// Position that moves `mobile` out of `other` along their center line,
/// leaving `COLLISION_MARGIN` between the two edges.
pub fn separate(mobile: &Pose, mobile_radius: f64, other: &Pose, other_radius: f64) -> DVec2 {
    let delta = mobile.position() - other.position();
    let push = mobile_radius + other_radius - delta.length() + COLLISION_MARGIN;
    let angle = delta.y.atan2(delta.x);
    mobile.position() + DVec2::from_angle(angle) * push
}

fn resolve_walls(world: &mut World, entity: Entity, bounds: Bounds, events: &mut Vec<ArenaEvent>) {
    let Ok((pose, body)) = world.query_one_mut::<(&mut Pose, &Body)>(entity) else {
        return;
    };

    let inset = body.radius + COLLISION_MARGIN;
    let mut hit = false;
    for wall in touching_walls(pose, body.radius, bounds).collect::<Vec<_>>() {
        match wall {
            Wall::Right => pose.x = bounds.width - inset,
            Wall::Left => pose.x = inset,
            Wall::Bottom => pose.y = bounds.height - inset,
            Wall::Top => pose.y = inset,
        }
        events.push(ArenaEvent::WallCollision {
            entity_id: body.id,
            wall,
        });
        hit = true;
    }

    if hit {
        movement::handle_collision(world, entity);
    }
}

fn resolve_pairs(
    world: &mut World,
    entity: Entity,
    order: &[Entity],
    bounds: Bounds,
    events: &mut Vec<ArenaEvent>,
) {
    for &other in order {
        if other == entity {
            continue;
        }

        let (mobile_pose, mobile_body) = match read(world, entity) {
            Some(found) => found,
            None => return,
        };
        let Some((other_pose, other_body)) = read(world, other) else {
            continue;
        };

        if !resolves(mobile_body.kind, other_body.kind)
            || !is_colliding(&mobile_pose, mobile_body.radius, &other_pose, other_body.radius)
        {
            continue;
        }

        let target = separate(&mobile_pose, mobile_body.radius, &other_pose, other_body.radius);
        if let Ok(mut pose) = world.get::<&mut Pose>(entity) {
            pose.set_position(clamp_inside(target, mobile_body.radius, bounds));
        }
        movement::handle_collision(world, entity);
        events.push(ArenaEvent::EntityCollision {
            entity_id: mobile_body.id,
            other_id: other_body.id,
        });
    }
}

/// Keep a pushed circle inside the walls, `COLLISION_MARGIN` clear of them.
fn clamp_inside(position: DVec2, radius: f64, bounds: Bounds) -> DVec2 {
    let inset = radius + COLLISION_MARGIN;
    DVec2::new(
        position.x.clamp(inset, (bounds.width - inset).max(inset)),
        position.y.clamp(inset, (bounds.height - inset).max(inset)),
    )
}

fn read(world: &World, entity: Entity) -> Option<(Pose, Body)> {
    let pose = *world.get::<&Pose>(entity).ok()?;
    let body = *world.get::<&Body>(entity).ok()?;
    Some((pose, body))
}
