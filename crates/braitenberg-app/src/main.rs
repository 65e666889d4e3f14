use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use tracing::{info, warn};

use braitenberg_app::controller::Controller;
use braitenberg_app::game_loop;
use braitenberg_app::state::LoopCommand;
use braitenberg_core::commands::Command;
use braitenberg_core::config::ArenaParams;
use braitenberg_core::enums::{EntityKind, GameStatus};
use braitenberg_core::state::ArenaSnapshot;

/// How long the headless run lasts unless the game is lost first.
const RUN_DURATION: Duration = Duration::from_secs(30);

/// Interval between status lines.
const REPORT_INTERVAL: Duration = Duration::from_secs(1);

fn main() -> Result<()> {
    init_tracing();

    let params = match std::env::args().nth(1) {
        Some(path) => load_params(Path::new(&path))?,
        None => ArenaParams::default(),
    };
    let controller = Controller::new(params).context("invalid arena parameters")?;
    info!("Starting Braitenberg arena");

    let handle = game_loop::spawn_game_loop(controller).context("failed to start loop thread")?;
    handle.send(LoopCommand::Command(Command::Play));

    let started = Instant::now();
    while started.elapsed() < RUN_DURATION {
        std::thread::sleep(REPORT_INTERVAL);
        let Some(snapshot) = handle.snapshot() else {
            continue;
        };
        report(&snapshot);
        if snapshot.status == GameStatus::Lost {
            warn!(tick = snapshot.time.tick, "game lost");
            break;
        }
    }

    handle
        .shutdown()
        .map_err(|_| anyhow!("loop thread panicked"))?;
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_params(path: &Path) -> Result<ArenaParams> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let params = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(params)
}

fn report(snapshot: &ArenaSnapshot) {
    let hungriest = snapshot
        .entities
        .iter()
        .filter_map(|e| e.robot.as_ref())
        .map(|r| r.hunger)
        .max()
        .unwrap_or(0);
    info!(
        tick = snapshot.time.tick,
        status = ?snapshot.status,
        robots = snapshot.count(EntityKind::Robot),
        lights = snapshot.count(EntityKind::Light),
        food = snapshot.count(EntityKind::Food),
        hungriest,
        "arena status"
    );
}
