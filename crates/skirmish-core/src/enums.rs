//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// One of the two combatant slots.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum PlayerSlot {
    #[default]
    P1,
    P2,
}

impl PlayerSlot {
    /// The other slot.
    pub fn opponent(&self) -> PlayerSlot {
        match self {
            PlayerSlot::P1 => PlayerSlot::P2,
            PlayerSlot::P2 => PlayerSlot::P1,
        }
    }
}

/// Combat style of a unit. Decides how a basic attack resolves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    /// Fires a volley of ballistic projectiles.
    #[default]
    Gunner,
    /// Strikes instantly along a beam.
    Lancer,
}

impl CharacterClass {
    /// Basic attack strength (projectile count for Gunner, beam damage for Lancer).
    pub fn attack_power(&self) -> u32 {
        match self {
            CharacterClass::Gunner => 1,
            CharacterClass::Lancer => 2,
        }
    }

    /// Name used in announcements.
    pub fn display_name(&self) -> &'static str {
        match self {
            CharacterClass::Gunner => "Gunner",
            CharacterClass::Lancer => "Lancer",
        }
    }
}

/// Purchasable skill slots.
///
/// The second slot's effect depends on class: a Gunner fires a piercing
/// bolt, a Lancer sweeps a cross beam. The unlock itself is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillId {
    /// Slot 1: mana-priced volley of single-hit projectiles.
    Barrage,
    /// Slot 2: piercing bolt (Gunner) or cross beam (Lancer).
    PiercingBolt,
    /// Slot 3: temporary vision radius boost.
    Farsight,
    /// Slot 4: short-range teleport.
    Blink,
}

impl SkillId {
    /// One-based slot number used in purchase announcements.
    pub fn slot_number(&self) -> u32 {
        match self {
            SkillId::Barrage => 1,
            SkillId::PiercingBolt => 2,
            SkillId::Farsight => 3,
            SkillId::Blink => 4,
        }
    }
}

/// Skirmish phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No skirmish running yet.
    #[default]
    Idle,
    /// Skirmish in progress.
    Active,
    /// A unit fell; only a fresh start is accepted.
    Complete,
}

/// What a combatant did with its turn. Drives announcements and history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    Move,
    Build,
    Barrage,
    PiercingBolt,
    Blink,
    BasicAttack,
    Farsight,
    Scout,
    CrossBeam,
    AutomatedMove,
}
