//! Headless driver for the Braitenberg arena.
//!
//! Wraps the arena in a `Controller` that paces wall-clock time into
//! simulation ticks, and runs it on a dedicated loop thread fed by a
//! command channel.

pub mod controller;
pub mod game_loop;
pub mod state;

pub use braitenberg_core as core;
