//! Core types and definitions for the BRAITENBERG arena simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! poses, components, commands, configuration, snapshots, events, and
//! constants. It has no dependency on the ECS or any runtime.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
