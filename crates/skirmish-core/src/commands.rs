//! Player commands sent from the frontend to the simulation.
//!
//! Commands are validated and queued for processing at the next tick boundary.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::GridCell;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Lifecycle ---
    /// Start a new skirmish (also rematches from the complete phase).
    StartSkirmish,

    // --- Movement & melee ---
    /// Step to an adjacent cell.
    Move { target: GridCell },
    /// Basic attack on an adjacent wall or the opposing unit.
    Attack { target: GridCell },

    // --- Skills ---
    /// Slot 1: fire the mana input's worth of projectiles along a direction.
    FireBarrage { direction: DVec2 },
    /// Slot 2 (Gunner): fire one piercing projectile along a direction.
    FirePiercingBolt { direction: DVec2 },
    /// Slot 2 (Lancer): sweep the target cell's full row and column.
    CastCrossBeam { target: GridCell },
    /// Slot 3: trade the mana input for an equal vision radius and duration.
    ActivateFarsight,
    /// Slot 4: teleport within the mana input's radius.
    Blink { target: GridCell },

    // --- Terrain & economy ---
    /// Raise a wall whose health equals the mana input.
    BuildWall { target: GridCell },
    /// Reveal the opposing unit's cell until the automated turn ends.
    Scout,
    /// First request marks the skill pending, a second confirms the purchase.
    PurchaseSkill { skill: SkillId },

    // --- Input state ---
    /// Nudge the mana input selector up or down.
    AdjustManaInput { delta: i32 },
    /// Clear the pending purchase.
    Cancel,
}
