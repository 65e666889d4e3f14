//! Commands sent from the boundary driver to the arena.
//!
//! Commands apply between ticks, never in the middle of one.

use serde::{Deserialize, Serialize};

/// All possible user actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Resume ticking.
    Play,
    /// Stop ticking until `Play`.
    Pause,
    /// Rebuild every entity from the last configuration.
    Reset,
    /// Enable hunger, starvation, and food seeking.
    FoodOn,
    /// Disable hunger effects; robots only react to light.
    FoodOff,
    /// Nothing to do. Unknown input maps here.
    #[default]
    None,

    // --- Reserved for manual control; no effect on the arena ---
    KeyUp,
    KeyDown,
    KeyLeft,
    KeyRight,
}
