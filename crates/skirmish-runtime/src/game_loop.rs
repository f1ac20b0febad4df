//! Fixed-rate game loop thread.
//!
//! Runs the simulation at `TICK_RATE` Hz on a dedicated thread, draining
//! queued commands each tick and publishing the latest snapshot for readers.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::sync::{mpsc, Arc, Mutex};
use std::time::{Duration, Instant};

use skirmish_core::constants::TICK_RATE;
use skirmish_core::state::SkirmishSnapshot;
use skirmish_sim::{SkirmishConfig, SkirmishEngine};

use crate::state::LoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawn the game loop on its own thread and return the command channel.
pub fn spawn_game_loop(
    config: SkirmishConfig,
    latest_snapshot: Arc<Mutex<Option<SkirmishSnapshot>>>,
) -> Sender<LoopCommand> {
    let (command_tx, command_rx) = mpsc::channel();
    std::thread::Builder::new()
        .name("skirmish-game-loop".to_string())
        .spawn(move || run_game_loop(command_rx, latest_snapshot, config))
        .expect("Failed to spawn game loop thread");
    command_tx
}

fn run_game_loop(
    command_rx: Receiver<LoopCommand>,
    latest_snapshot: Arc<Mutex<Option<SkirmishSnapshot>>>,
    config: SkirmishConfig,
) {
    let mut engine = SkirmishEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // Drain everything that arrived since the last tick
        loop {
            match command_rx.try_recv() {
                Ok(LoopCommand::Player(command)) => engine.queue_command(command),
                Ok(LoopCommand::Shutdown) => return,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return,
            }
        }

        let snapshot = engine.tick();
        if let Ok(mut slot) = latest_snapshot.lock() {
            *slot = Some(snapshot);
        }

        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now.duration_since(next_tick_time) > TICK_DURATION * 2 {
            // Fell too far behind; resynchronize instead of bursting
            next_tick_time = now;
        }
    }
}
