//! State shared between the driver and the loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use braitenberg_core::commands::Command;
use braitenberg_core::config::ArenaParams;
use braitenberg_core::state::ArenaSnapshot;

/// Messages sent from the driver to the loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A user command to forward to the controller.
    Command(Command),
    /// Rebuild the arena with new parameters.
    NewGame(ArenaParams),
    /// Shut down the loop thread gracefully.
    Shutdown,
}

/// Driver-side handle to a running loop thread.
///
/// The loop owns the controller outright; the driver only sends commands
/// and reads the latest snapshot, which the loop replaces after each tick.
pub struct LoopHandle {
    pub command_tx: mpsc::Sender<LoopCommand>,
    pub latest_snapshot: Arc<Mutex<Option<ArenaSnapshot>>>,
    pub thread: JoinHandle<()>,
}

impl LoopHandle {
    /// Queue a command. Returns false once the loop has stopped.
    pub fn send(&self, command: LoopCommand) -> bool {
        self.command_tx.send(command).is_ok()
    }

    /// Copy of the most recently published snapshot.
    pub fn snapshot(&self) -> Option<ArenaSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    /// Ask the loop to stop and wait for it.
    pub fn shutdown(self) -> std::thread::Result<()> {
        let _ = self.command_tx.send(LoopCommand::Shutdown);
        self.thread.join()
    }
}
