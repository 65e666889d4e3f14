//! Per-tick systems operating on the arena world.
//!
//! Systems are free functions over `&mut World` (or `&World` when read-only)
//! plus the arena's entity indices. All state lives in components.

pub mod collision;
pub mod movement;
pub mod sensing;
pub mod snapshot;
pub mod vitals;
