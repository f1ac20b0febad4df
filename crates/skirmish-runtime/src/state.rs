//! Shared state between the session facade and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use skirmish_core::commands::PlayerCommand;
use skirmish_core::state::SkirmishSnapshot;

/// Messages sent from the session facade to the game loop thread.
pub enum LoopCommand {
    /// A player command to queue into the engine.
    Player(PlayerCommand),
    /// Stop the game loop thread.
    Shutdown,
}

/// Handles owned by the session facade.
#[derive(Default)]
pub struct SessionState {
    /// Channel to the running game loop, if any.
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Latest snapshot published by the game loop.
    pub latest_snapshot: Arc<Mutex<Option<SkirmishSnapshot>>>,
    /// Whether a loop thread has been started.
    pub running: Mutex<bool>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }
}
