//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions over `&mut World` plus the engine-owned board
//! resources. They do not own state.

pub mod projectiles;
pub mod snapshot;
pub mod vision;
