//! Session facade over the game loop thread.
//!
//! Frontends hold one `SkirmishSession` and talk to the simulation through
//! it: start a loop, send commands, poll snapshots, shut down. All methods
//! surface failures as strings for direct display.

use std::sync::Arc;

use skirmish_core::commands::PlayerCommand;
use skirmish_core::state::SkirmishSnapshot;
use skirmish_sim::SkirmishConfig;

use crate::game_loop;
use crate::state::{LoopCommand, SessionState};

pub struct SkirmishSession {
    state: SessionState,
}

impl SkirmishSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::new(),
        }
    }

    /// Start the game loop thread. Fails if a session is already running.
    pub fn start(&self, config: SkirmishConfig) -> Result<(), String> {
        let mut running = self.state.running.lock().map_err(|e| e.to_string())?;
        if *running {
            return Err("Skirmish already running".into());
        }
        let command_tx =
            game_loop::spawn_game_loop(config, Arc::clone(&self.state.latest_snapshot));
        *self.state.command_tx.lock().map_err(|e| e.to_string())? = Some(command_tx);
        *running = true;
        Ok(())
    }

    /// Forward a player command to the running loop.
    pub fn send(&self, command: PlayerCommand) -> Result<(), String> {
        let command_tx = self.state.command_tx.lock().map_err(|e| e.to_string())?;
        match command_tx.as_ref() {
            Some(tx) => tx
                .send(LoopCommand::Player(command))
                .map_err(|e| format!("Failed to send command: {}", e)),
            None => Err("Skirmish not started".into()),
        }
    }

    /// The most recent snapshot published by the loop, if any yet.
    pub fn snapshot(&self) -> Result<Option<SkirmishSnapshot>, String> {
        Ok(self
            .state
            .latest_snapshot
            .lock()
            .map_err(|e| e.to_string())?
            .clone())
    }

    /// Stop the loop thread. Safe to call when nothing is running.
    pub fn shutdown(&self) -> Result<(), String> {
        let sender = {
            let mut command_tx = self.state.command_tx.lock().map_err(|e| e.to_string())?;
            command_tx.take()
        };
        if let Some(tx) = sender {
            // The loop may already have exited; a closed channel is fine
            let _ = tx.send(LoopCommand::Shutdown);
        }
        *self.state.running.lock().map_err(|e| e.to_string())? = false;
        Ok(())
    }
}

impl Default for SkirmishSession {
    fn default() -> Self {
        Self::new()
    }
}
