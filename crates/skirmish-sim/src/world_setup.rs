//! Entity spawn factories for setting up the skirmish world.

use hecs::{Entity, World};

use skirmish_core::components::{Combatant, SkillBook, UnitStats};
use skirmish_core::enums::PlayerSlot;
use skirmish_core::types::GridCell;

use crate::engine::SkirmishConfig;

/// Spawn both combatants at their configured spawn cells.
pub fn setup_skirmish(world: &mut World, config: &SkirmishConfig) {
    for slot in [PlayerSlot::P1, PlayerSlot::P2] {
        spawn_combatant(world, config, slot);
    }
}

/// Spawn a single combatant entity for `slot`.
pub fn spawn_combatant(world: &mut World, config: &SkirmishConfig, slot: PlayerSlot) -> Entity {
    let setup = config.combatant(slot);
    world.spawn((
        Combatant {
            slot,
            class: setup.class,
        },
        config.layout.spawn(slot),
        UnitStats {
            hp: setup.hp,
            max_hp: setup.max_hp,
            mana: setup.mana,
            max_mana: setup.max_mana,
            gold: setup.gold,
            attack: setup.class.attack_power(),
        },
        SkillBook::default(),
    ))
}

/// Find the combatant entity for a slot.
pub fn find_unit(world: &World, slot: PlayerSlot) -> Option<Entity> {
    world
        .query::<&Combatant>()
        .iter()
        .find(|(_, combatant)| combatant.slot == slot)
        .map(|(entity, _)| entity)
}

/// The grid cell a combatant currently stands on.
pub fn unit_cell(world: &World, slot: PlayerSlot) -> Option<GridCell> {
    world
        .query::<(&Combatant, &GridCell)>()
        .iter()
        .find(|(_, (combatant, _))| combatant.slot == slot)
        .map(|(_, (_, cell))| *cell)
}
