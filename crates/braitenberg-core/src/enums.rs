//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::REVERSE_ARC_STEPS;

/// What an arena entity is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Robot,
    Light,
    Food,
}

/// Reactive control law a robot follows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BehaviorKind {
    /// Speeds up the wheel on the side that sees more light.
    #[default]
    Fear,
    /// Slows the wheel on the side that sees more light.
    Explorer,
}

/// Arena-wide and per-robot game status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No transition reaches this yet.
    Won,
    /// A robot starved. Terminal until the arena is reset.
    Lost,
    #[default]
    Playing,
}

/// Stimulus a sensor responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorKind {
    Light,
    Food,
}

/// One of the four arena boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wall {
    /// x = 0
    Left,
    /// x = width
    Right,
    /// y = 0
    Top,
    /// y = height
    Bottom,
}

/// Collision recovery sub-state of a mobile entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recovery {
    /// Driven by its own control law.
    #[default]
    Normal,
    /// Backing away on a scripted arc; `steps_remaining` reverse ticks left.
    ReverseArc { steps_remaining: u32 },
}

impl EntityKind {
    /// Whether entities of this kind move and take part in collision response.
    pub fn is_mobile(self) -> bool {
        matches!(self, EntityKind::Robot | EntityKind::Light)
    }
}

impl Recovery {
    /// The state entered on a fresh collision.
    pub fn start() -> Self {
        Recovery::ReverseArc {
            steps_remaining: REVERSE_ARC_STEPS,
        }
    }

    pub fn is_reversing(self) -> bool {
        matches!(self, Recovery::ReverseArc { .. })
    }
}
