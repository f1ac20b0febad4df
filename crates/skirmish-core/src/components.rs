//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use std::collections::HashSet;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::GridCell;

/// Identity of a combatant entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Combatant {
    pub slot: PlayerSlot,
    pub class: CharacterClass,
}

/// Mutable per-unit resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitStats {
    pub hp: u32,
    pub max_hp: u32,
    pub mana: u32,
    pub max_mana: u32,
    pub gold: u32,
    /// Basic attack strength (projectile count or beam damage).
    pub attack: u32,
}

/// Unlocked skills of one combatant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillBook {
    pub unlocked: HashSet<SkillId>,
}

/// Damage class of a projectile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Stops on the first wall or unit it strikes.
    SingleHit,
    /// Flies through, damaging each wall or unit at most once.
    Piercing { hit_cells: HashSet<GridCell> },
}

/// An in-flight projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: ProjectileKind,
    pub owner: PlayerSlot,
    /// Pixel-space position.
    pub position: DVec2,
    /// Unit direction of travel.
    pub direction: DVec2,
    /// Speed in pixels per tick.
    pub speed: f64,
}

/// A directed beam strike, kept alive briefly for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamEffect {
    pub owner: PlayerSlot,
    /// Pixel-space origin (the attacker's cell center).
    pub start: DVec2,
    /// Pixel-space endpoint where the ray stopped.
    pub end: DVec2,
    /// Tick the beam was fired on.
    pub spawned_tick: u64,
}

// GridCell doubles as the position component for combatant entities.
