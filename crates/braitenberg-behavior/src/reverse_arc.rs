//! Reverse-arc collision recovery state machine.
//!
//! After a collision an entity backs up for `REVERSE_ARC_STEPS` ticks,
//! turning `REVERSE_ARC_TURN_DEGREES` each tick (60° in total). The tick
//! after the last reverse step it drives forward at its recovery speed and
//! control returns to its own policy on the following tick.

use braitenberg_core::constants::REVERSE_ARC_TURN_DEGREES;
use braitenberg_core::enums::Recovery;
use braitenberg_core::types::WheelVelocity;

/// Output of one recovery step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecoveryUpdate {
    pub recovery: Recovery,
    /// Wheel speeds to apply this tick, or `None` to let the policy decide.
    pub velocity: Option<WheelVelocity>,
    /// Heading change to apply before integrating, in degrees.
    pub heading_delta: f64,
}

/// React to a collision. A collision during recovery does not restart it.
pub fn handle_collision(recovery: Recovery) -> Recovery {
    match recovery {
        Recovery::Normal => Recovery::start(),
        reversing @ Recovery::ReverseArc { .. } => reversing,
    }
}

/// Advance the recovery machine by one tick. `speed` is the magnitude used
/// both for reversing and for the forward kick that ends the arc.
pub fn step(recovery: Recovery, speed: f64) -> RecoveryUpdate {
    match recovery {
        Recovery::Normal => RecoveryUpdate {
            recovery,
            velocity: None,
            heading_delta: 0.0,
        },
        Recovery::ReverseArc { steps_remaining: 0 } => RecoveryUpdate {
            recovery: Recovery::Normal,
            velocity: Some(WheelVelocity::uniform(speed)),
            heading_delta: 0.0,
        },
        Recovery::ReverseArc { steps_remaining } => RecoveryUpdate {
            recovery: Recovery::ReverseArc {
                steps_remaining: steps_remaining - 1,
            },
            velocity: Some(WheelVelocity::uniform(-speed)),
            heading_delta: REVERSE_ARC_TURN_DEGREES,
        },
    }
}
