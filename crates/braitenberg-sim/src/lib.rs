//! Arena simulation for Braitenberg robots.
//!
//! Owns the hecs ECS world, runs the per-tick pipeline at a fixed step,
//! and produces `ArenaSnapshot`s for whatever draws them.

pub mod arena;
pub mod factory;
pub mod systems;

pub use arena::Arena;
pub use braitenberg_core as core;

#[cfg(test)]
mod tests;
