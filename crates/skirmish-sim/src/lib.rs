//! Simulation engine for the skirmish game.
//!
//! Owns the hecs ECS world, resolves turn actions, runs systems at a fixed
//! tick rate, and produces `SkirmishSnapshot`s for frontends. Completely
//! headless: frontends feed it `PlayerCommand`s and render snapshots.

pub mod actions;
pub mod announce;
pub mod combat;
pub mod engine;
pub mod preset;
pub mod scheduler;
pub mod systems;
pub mod walls;
pub mod world_setup;

pub use engine::{CombatantSetup, SkirmishConfig, SkirmishEngine, TurnState};
pub use skirmish_core as core;
