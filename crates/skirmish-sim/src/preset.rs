//! Built-in skirmish presets.
//!
//! Both presets run on the Blackwood board. The manual side and the rosters
//! differ, giving one symmetric training bout and one asymmetric duel.

use skirmish_core::enums::{CharacterClass, PlayerSlot};
use skirmish_map::blackwood;

use crate::engine::{CombatantSetup, SkirmishConfig};

/// Gunner versus Gunner, with the player driving P2 against a better
/// provisioned patrol.
pub fn mirror_match() -> SkirmishConfig {
    SkirmishConfig {
        layout: blackwood().layout(),
        manual_slot: PlayerSlot::P2,
        p1: CombatantSetup {
            class: CharacterClass::Gunner,
            hp: 20,
            max_hp: 20,
            mana: 25,
            max_mana: 25,
            gold: 100,
        },
        p2: CombatantSetup {
            class: CharacterClass::Gunner,
            hp: 20,
            max_hp: 20,
            mana: 10,
            max_mana: 10,
            gold: 100,
        },
    }
}

/// Gunner versus Lancer, with the player driving the P1 Gunner. The Lancer
/// patrol starts mana-starved but with a deep reserve to grow into.
pub fn duel_match() -> SkirmishConfig {
    SkirmishConfig {
        layout: blackwood().layout(),
        manual_slot: PlayerSlot::P1,
        p1: CombatantSetup {
            class: CharacterClass::Gunner,
            hp: 20,
            max_hp: 20,
            mana: 20,
            max_mana: 20,
            gold: 100,
        },
        p2: CombatantSetup {
            class: CharacterClass::Lancer,
            hp: 20,
            max_hp: 20,
            mana: 1,
            max_mana: 99,
            gold: 100,
        },
    }
}
