//! Map documents for the skirmish simulation.
//!
//! JSON map loading and validation, the builtin layout,
//! and sprite resolution for frontends.

pub use skirmish_core as core;

pub mod builtin;
pub mod catalog;
pub mod document;

// Re-export key types for convenience.
pub use builtin::blackwood;
pub use catalog::SpriteCatalog;
pub use document::{load_map, parse_map, MapDocument, MapLayout};
