//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::GridCell;

/// Transient events raised during a tick and cleared after snapshot delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SkirmishEvent {
    /// A wall fell and its bounty was paid out.
    WallDestroyed {
        cell: GridCell,
        bounty: u32,
        credited_to: PlayerSlot,
    },
    /// A unit took damage.
    UnitDamaged { slot: PlayerSlot, hp_remaining: u32 },
    /// A purchase unlocked a skill.
    SkillUnlocked { slot: PlayerSlot, skill: SkillId },
    /// A confirmed purchase failed for lack of gold.
    SkillPurchaseFailed { slot: PlayerSlot, skill: SkillId },
    /// A combatant finished its turn.
    TurnEnded {
        turn: u32,
        by: PlayerSlot,
        action: ActionKind,
    },
    /// A unit fell; the skirmish is decided.
    SkirmishOver { winner: PlayerSlot },
}
