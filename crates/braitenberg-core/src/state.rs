//! Arena snapshot: the complete visible state handed to a renderer.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Color, Pose, SimTime, WheelVelocity};

/// Everything a renderer needs after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub time: SimTime,
    pub status: GameStatus,
    pub paused: bool,
    pub food_enabled: bool,
    pub width: f64,
    pub height: f64,
    /// Entities in construction order: robots, then lights, then food.
    pub entities: Vec<EntityView>,
}

/// One entity as drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: u32,
    pub kind: EntityKind,
    pub pose: Pose,
    pub radius: f64,
    pub color: Color,
    /// Short label drawn on the entity.
    pub name: String,
    pub velocity: Option<WheelVelocity>,
    pub reversing: bool,
    pub robot: Option<RobotView>,
    /// Food only.
    pub captured: Option<bool>,
}

/// Robot details for inspection overlays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotView {
    pub behavior: BehaviorKind,
    pub hunger: u32,
    pub status: GameStatus,
    pub light_left: f64,
    pub light_right: f64,
    pub food_left: f64,
    pub food_right: f64,
}

impl ArenaSnapshot {
    /// Number of entities of `kind`.
    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind == kind).count()
    }
}
