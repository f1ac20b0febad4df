//! Skirmish runtime host.
//!
//! This crate wires the simulation crates together and runs them on a
//! fixed-rate loop thread. Frontends drive the engine through a
//! [`SkirmishSession`]: commands go in over a channel, snapshots come
//! back from a shared slot the loop refreshes every tick.

pub mod game_loop;
pub mod session;
pub mod state;

pub use session::SkirmishSession;

pub use skirmish_core as core;
pub use skirmish_sim as sim;
