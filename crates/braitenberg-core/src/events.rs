//! Events emitted by the arena during a tick, for logging and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::Wall;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ArenaEvent {
    /// A robot came within feeding distance of a food item.
    RobotFed { robot_id: u32, food_id: u32 },
    /// A robot starved; the game is lost.
    RobotStarved { robot_id: u32, tick: u64 },
    /// A mobile entity was pushed back off a wall.
    WallCollision { entity_id: u32, wall: Wall },
    /// A mobile entity was pushed out of another of its kind.
    EntityCollision { entity_id: u32, other_id: u32 },
}
