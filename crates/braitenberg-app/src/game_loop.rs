//! Loop thread: feeds wall-clock time to the controller and publishes
//! snapshots.
//!
//! The controller is moved into the thread, which owns it for its whole
//! life. Commands arrive over an `mpsc` channel and are drained before
//! every frame. After each forwarded tick the snapshot is stored in shared
//! state for polling and the tick's events are logged.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use braitenberg_core::events::ArenaEvent;
use braitenberg_core::state::ArenaSnapshot;

use crate::controller::Controller;
use crate::state::{LoopCommand, LoopHandle};

/// Wall-clock time between frames (about 60 Hz).
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Spawn the loop thread around `controller`.
pub fn spawn_game_loop(controller: Controller) -> io::Result<LoopHandle> {
    let (command_tx, command_rx) = mpsc::channel::<LoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(Some(controller.snapshot())));
    let shared = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("braitenberg-loop".into())
        .spawn(move || run_game_loop(controller, command_rx, &shared))?;

    Ok(LoopHandle {
        command_tx,
        latest_snapshot,
        thread,
    })
}

/// The loop. Runs until Shutdown or channel disconnect.
fn run_game_loop(
    mut controller: Controller,
    command_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<ArenaSnapshot>>,
) {
    let mut last_frame = Instant::now();

    loop {
        // 1. Drain all pending commands.
        loop {
            match command_rx.try_recv() {
                Ok(command) => {
                    if !apply(&mut controller, command) {
                        return;
                    }
                    publish(latest_snapshot, controller.snapshot());
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Hand elapsed wall-clock time to the controller.
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;

        if controller.advance_time(dt) {
            for event in controller.drain_events() {
                log_event(&event);
            }
            publish(latest_snapshot, controller.snapshot());
        }

        std::thread::sleep(FRAME_DURATION);
    }
}

/// Apply one loop command. Returns false when the loop should stop.
fn apply(controller: &mut Controller, command: LoopCommand) -> bool {
    match command {
        LoopCommand::Command(command) => controller.accept_command(command),
        LoopCommand::NewGame(params) => {
            if let Err(err) = controller.new_game(params) {
                warn!(%err, "new game rejected, keeping the current arena");
            }
        }
        LoopCommand::Shutdown => return false,
    }
    true
}

fn publish(latest_snapshot: &Mutex<Option<ArenaSnapshot>>, snapshot: ArenaSnapshot) {
    if let Ok(mut lock) = latest_snapshot.lock() {
        *lock = Some(snapshot);
    }
}

fn log_event(event: &ArenaEvent) {
    match event {
        ArenaEvent::RobotStarved { robot_id, tick } => {
            info!(robot_id, tick, "robot starved");
        }
        ArenaEvent::RobotFed { robot_id, food_id } => {
            debug!(robot_id, food_id, "robot fed");
        }
        ArenaEvent::WallCollision { entity_id, wall } => {
            debug!(entity_id, ?wall, "wall collision");
        }
        ArenaEvent::EntityCollision {
            entity_id,
            other_id,
        } => {
            debug!(entity_id, other_id, "entity collision");
        }
    }
}
