//! Skirmish snapshot — the complete visible state published after each tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SkirmishEvent;
use crate::types::{GridCell, SimTime};

/// Complete skirmish state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkirmishSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub turn: TurnView,
    pub winner: Option<PlayerSlot>,
    pub units: Vec<UnitView>,
    pub walls: Vec<WallView>,
    pub grass: Vec<GridCell>,
    pub projectiles: Vec<ProjectileView>,
    pub beams: Vec<BeamView>,
    pub cross_beam: Option<CrossBeamView>,
    pub vision: VisionView,
    pub announcements: Vec<String>,
    pub mana_input: u32,
    pub pending_purchase: Option<SkillId>,
    pub events: Vec<SkirmishEvent>,
}

/// Turn counter and active side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnView {
    pub number: u32,
    pub active: PlayerSlot,
}

/// One combatant's visible stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub slot: PlayerSlot,
    pub class: CharacterClass,
    pub cell: GridCell,
    pub hp: u32,
    pub max_hp: u32,
    pub mana: u32,
    pub max_mana: u32,
    pub gold: u32,
    pub attack: u32,
    /// Unlocked skills, sorted by slot number.
    pub unlocked: Vec<SkillId>,
}

/// One wall's position and remaining health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallView {
    pub cell: GridCell,
    pub health: u32,
    pub total: u32,
}

/// An in-flight projectile for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub owner: PlayerSlot,
    pub position: DVec2,
    pub direction: DVec2,
    pub piercing: bool,
}

/// A directed beam strike for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamView {
    pub owner: PlayerSlot,
    pub start: DVec2,
    pub end: DVec2,
}

/// A cross-beam sweep for display: the full row and column of `cell`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CrossBeamView {
    pub owner: PlayerSlot,
    pub cell: GridCell,
}

/// Fog-of-war status for the manually controlled side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisionView {
    /// Effective vision radius this tick.
    pub radius: i32,
    pub boost: Option<VisionBoostView>,
    /// Cell exposed by a scout ping, if any.
    pub recon: Option<GridCell>,
    /// All currently visible cells, sorted.
    pub visible_cells: Vec<GridCell>,
}

/// Active vision boost status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisionBoostView {
    pub radius: i32,
    /// Full turn cycles left before the boost expires.
    pub remaining: u32,
}

/// One line of the append-only turn audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnHistoryEntry {
    pub turn: u32,
    pub actor: PlayerSlot,
    pub action: ActionKind,
    /// Free-form detail, e.g. the target cell or spent mana.
    pub extra: String,
    /// Simulation time the turn ended at.
    pub timestamp_secs: f64,
}
