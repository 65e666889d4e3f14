//! Robot and light behavior for BRAITENBERG.
//!
//! Sensor falloff, reactive motion policies, differential-drive
//! kinematics, and the reverse-arc recovery state machine.
//! No ECS dependency; operates on plain data.

pub mod kinematics;
pub mod motion_handler;
pub mod reverse_arc;
pub mod sensor;

pub use braitenberg_core as core;
