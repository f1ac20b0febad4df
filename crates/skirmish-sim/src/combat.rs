//! Damage and resource bookkeeping shared by action resolvers and the
//! projectile system.

use hecs::World;

use skirmish_core::components::UnitStats;
use skirmish_core::enums::PlayerSlot;
use skirmish_core::events::SkirmishEvent;
use skirmish_core::types::GridCell;

use crate::walls::WallGrid;
use crate::world_setup;

/// Deal damage to the wall at `cell`, if any. On destruction the attacker
/// collects the bounty and a `WallDestroyed` event is emitted.
pub fn strike_wall(
    world: &mut World,
    walls: &mut WallGrid,
    cell: &GridCell,
    damage: u32,
    attacker: PlayerSlot,
    events: &mut Vec<SkirmishEvent>,
) {
    if let Some(bounty) = walls.damage(cell, damage) {
        award_gold(world, attacker, bounty);
        events.push(SkirmishEvent::WallDestroyed {
            cell: *cell,
            bounty,
            credited_to: attacker,
        });
    }
}

/// Deal damage to a combatant, saturating at zero hp. Emits `UnitDamaged`;
/// defeat detection is the engine's job.
pub fn strike_unit(
    world: &mut World,
    target: PlayerSlot,
    damage: u32,
    events: &mut Vec<SkirmishEvent>,
) {
    if let Some(entity) = world_setup::find_unit(world, target) {
        if let Ok(mut stats) = world.get::<&mut UnitStats>(entity) {
            stats.hp = stats.hp.saturating_sub(damage);
            events.push(SkirmishEvent::UnitDamaged {
                slot: target,
                hp_remaining: stats.hp,
            });
        }
    }
}

pub fn award_gold(world: &mut World, slot: PlayerSlot, amount: u32) {
    if let Some(entity) = world_setup::find_unit(world, slot) {
        if let Ok(mut stats) = world.get::<&mut UnitStats>(entity) {
            stats.gold = stats.gold.saturating_add(amount);
        }
    }
}

/// Return mana to a combatant, clamped to their maximum.
pub fn refund_mana(world: &mut World, slot: PlayerSlot, amount: u32) {
    if let Some(entity) = world_setup::find_unit(world, slot) {
        if let Ok(mut stats) = world.get::<&mut UnitStats>(entity) {
            stats.mana = stats.mana.saturating_add(amount).min(stats.max_mana);
        }
    }
}
