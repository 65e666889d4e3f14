//! Controller: routes driver intents into the arena and paces ticks.
//!
//! The arena always integrates a fixed step, so the controller decides
//! when a step happens: wall-clock time accumulates until it passes
//! `CONTROLLER_TICK_THRESHOLD_SECS`, then one tick runs and the
//! accumulator restarts.

use tracing::debug;

use braitenberg_core::commands::Command;
use braitenberg_core::config::{ArenaParams, ConfigError};
use braitenberg_core::constants::CONTROLLER_TICK_THRESHOLD_SECS;
use braitenberg_core::events::ArenaEvent;
use braitenberg_core::state::ArenaSnapshot;
use braitenberg_sim::Arena;

pub struct Controller {
    arena: Arena,
    /// Wall-clock seconds not yet turned into a tick.
    pending: f64,
}

impl Controller {
    pub fn new(params: ArenaParams) -> Result<Self, ConfigError> {
        Ok(Self {
            arena: Arena::new(params)?,
            pending: 0.0,
        })
    }

    /// Feed `dt` seconds of wall-clock time. Returns true when a tick was
    /// forwarded to the arena.
    pub fn advance_time(&mut self, dt: f64) -> bool {
        if dt.is_nan() || dt <= 0.0 {
            return false;
        }
        if self.pending + dt <= CONTROLLER_TICK_THRESHOLD_SECS {
            self.pending += dt;
            return false;
        }
        self.pending = 0.0;
        self.arena.advance_time(dt);
        true
    }

    /// Forward a driver command. Directional keys have no arena effect.
    pub fn accept_command(&mut self, command: Command) {
        let command = match command {
            Command::KeyUp | Command::KeyDown | Command::KeyLeft | Command::KeyRight => {
                Command::None
            }
            other => other,
        };
        self.arena.accept_command(command);
    }

    /// Replace the arena configuration and start over. On error the
    /// running arena is kept.
    pub fn new_game(&mut self, params: ArenaParams) -> Result<(), ConfigError> {
        debug!(?params, "new game");
        self.arena.reconfigure(params)?;
        self.pending = 0.0;
        Ok(())
    }

    pub fn snapshot(&self) -> ArenaSnapshot {
        self.arena.snapshot()
    }

    pub fn drain_events(&mut self) -> Vec<ArenaEvent> {
        self.arena.drain_events()
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }
}
