//! Turn action resolution.
//!
//! Every resolver validates first and mutates only once the action is known
//! to succeed. A resolver returns `Some(ActionOutcome)` when the action
//! consumed the turn; `None` leaves the turn with the acting side. Resource
//! shortfalls on mana-priced utilities announce themselves; every other
//! rejection is silent.

use std::collections::VecDeque;

use glam::DVec2;
use hecs::World;

use skirmish_core::components::{BeamEffect, Combatant, SkillBook, UnitStats};
use skirmish_core::constants::{
    ATTACK_RADIUS, BEAM_DURATION_TICKS, BEAM_MAX_RANGE_PX, CROSS_BEAM_COST, CROSS_BEAM_DAMAGE,
    MAP_HEIGHT, MAP_WIDTH, MOVEMENT_RADIUS, ORTHOGONAL_MOVE_REFUND, PIERCING_BOLT_COST,
    SCOUT_COST, SKILL_PROJECTILE_SPEED, VOLLEY_PROJECTILE_SPEED,
};
use skirmish_core::enums::{ActionKind, CharacterClass, PlayerSlot, SkillId};
use skirmish_core::events::SkirmishEvent;
use skirmish_core::types::GridCell;

use crate::announce::{self, AnnouncementLog};
use crate::combat;
use crate::scheduler::{Scheduler, TaskKind};
use crate::systems::projectiles::{self, BeamHit, QueuedProjectile};
use crate::systems::vision::{CrossBeamMark, VisionBoost};
use crate::walls::WallGrid;
use crate::world_setup::{find_unit, unit_cell};

/// Borrowed engine state handed to action resolvers.
///
/// The engine lends out exactly the parts an action may touch; everything a
/// resolver does is visible in this struct.
pub struct ActionCtx<'a> {
    pub world: &'a mut World,
    pub walls: &'a mut WallGrid,
    pub scheduler: &'a mut Scheduler,
    pub spawn_queue: &'a mut VecDeque<QueuedProjectile>,
    pub vision_boost: &'a mut Option<VisionBoost>,
    pub recon: &'a mut Option<GridCell>,
    pub cross_beam: &'a mut Option<CrossBeamMark>,
    pub events: &'a mut Vec<SkirmishEvent>,
    pub announcements: &'a mut AnnouncementLog,
    pub mana_input: &'a mut u32,
    /// The side this action acts for.
    pub slot: PlayerSlot,
    pub tick: u64,
}

/// How a completed action is recorded in the turn history.
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    pub kind: ActionKind,
    pub extra: String,
}

impl ActionOutcome {
    pub fn new(kind: ActionKind, extra: String) -> Self {
        Self { kind, extra }
    }
}

pub fn resolve_move(ctx: &mut ActionCtx<'_>, target: GridCell) -> Option<ActionOutcome> {
    let entity = find_unit(ctx.world, ctx.slot)?;
    let from = *ctx.world.get::<&GridCell>(entity).ok()?;
    let opponent_cell = unit_cell(ctx.world, ctx.slot.opponent())?;

    if !target.in_bounds()
        || target == from
        || target == opponent_cell
        || ctx.walls.contains(&target)
        || from.chebyshev_to(&target) > MOVEMENT_RADIUS
    {
        return None;
    }

    if let Ok(mut cell) = ctx.world.get::<&mut GridCell>(entity) {
        *cell = target;
    }
    // Cardinal steps recover a point of mana
    if from.is_orthogonal_to(&target) {
        combat::refund_mana(ctx.world, ctx.slot, ORTHOGONAL_MOVE_REFUND);
    }
    Some(ActionOutcome::new(ActionKind::Move, format!("to {}", cell_text(&target))))
}

pub fn resolve_attack(ctx: &mut ActionCtx<'_>, target: GridCell) -> Option<ActionOutcome> {
    let entity = find_unit(ctx.world, ctx.slot)?;
    let class = ctx.world.get::<&Combatant>(entity).ok()?.class;
    let from = *ctx.world.get::<&GridCell>(entity).ok()?;
    let opponent = ctx.slot.opponent();
    let opponent_cell = unit_cell(ctx.world, opponent)?;

    let valid_target = ctx.walls.contains(&target) || target == opponent_cell;
    if !valid_target || from.chebyshev_to(&target) > ATTACK_RADIUS {
        return None;
    }

    let attack = ctx.world.get::<&UnitStats>(entity).ok()?.attack;
    let origin = from.center_px();
    let direction = normalized_direction(target.center_px() - origin)?;

    match class {
        CharacterClass::Gunner => {
            // A volley of slow single-hit rounds, one per point of attack
            for _ in 0..attack {
                ctx.spawn_queue.push_back(QueuedProjectile {
                    position: origin,
                    direction,
                    speed: VOLLEY_PROJECTILE_SPEED,
                    piercing: false,
                    owner: ctx.slot,
                });
            }
        }
        CharacterClass::Lancer => {
            let (end, hit) = projectiles::cast_beam(
                ctx.walls,
                opponent_cell,
                origin,
                direction,
                BEAM_MAX_RANGE_PX,
            );
            match hit {
                Some(BeamHit::Wall(cell)) => {
                    combat::strike_wall(ctx.world, ctx.walls, &cell, attack, ctx.slot, ctx.events);
                }
                Some(BeamHit::Unit) => {
                    combat::strike_unit(ctx.world, opponent, attack, ctx.events);
                }
                None => {}
            }
            let beam = ctx.world.spawn((BeamEffect {
                owner: ctx.slot,
                start: origin,
                end,
                spawned_tick: ctx.tick,
            },));
            ctx.scheduler
                .schedule(ctx.tick + BEAM_DURATION_TICKS, TaskKind::ExpireBeam(beam));
        }
    }

    Some(ActionOutcome::new(
        ActionKind::BasicAttack,
        format!("at {}", cell_text(&target)),
    ))
}

pub fn resolve_barrage(ctx: &mut ActionCtx<'_>, direction: DVec2) -> Option<ActionOutcome> {
    let count = *ctx.mana_input;
    if count == 0 {
        return None;
    }
    let entity = find_unit(ctx.world, ctx.slot)?;
    if !skill_unlocked(ctx.world, entity, SkillId::Barrage) {
        return None;
    }
    let direction = normalized_direction(direction)?;
    let origin = unit_cell(ctx.world, ctx.slot)?.center_px();
    if !try_spend_mana(ctx.world, entity, count) {
        return None;
    }

    for _ in 0..count {
        ctx.spawn_queue.push_back(QueuedProjectile {
            position: origin,
            direction,
            speed: SKILL_PROJECTILE_SPEED,
            piercing: false,
            owner: ctx.slot,
        });
    }
    *ctx.mana_input = 0;
    Some(ActionOutcome::new(
        ActionKind::Barrage,
        format!("of {count} bolts"),
    ))
}

pub fn resolve_piercing_bolt(ctx: &mut ActionCtx<'_>, direction: DVec2) -> Option<ActionOutcome> {
    let entity = find_unit(ctx.world, ctx.slot)?;
    let class = ctx.world.get::<&Combatant>(entity).ok()?.class;
    if class != CharacterClass::Gunner {
        return None;
    }
    if !skill_unlocked(ctx.world, entity, SkillId::PiercingBolt) {
        return None;
    }
    let direction = normalized_direction(direction)?;
    let origin = unit_cell(ctx.world, ctx.slot)?.center_px();
    if !try_spend_mana(ctx.world, entity, PIERCING_BOLT_COST) {
        return None;
    }

    ctx.spawn_queue.push_back(QueuedProjectile {
        position: origin,
        direction,
        speed: SKILL_PROJECTILE_SPEED,
        piercing: true,
        owner: ctx.slot,
    });
    Some(ActionOutcome::new(ActionKind::PiercingBolt, String::new()))
}

pub fn resolve_cross_beam(ctx: &mut ActionCtx<'_>, target: GridCell) -> Option<ActionOutcome> {
    let entity = find_unit(ctx.world, ctx.slot)?;
    let class = ctx.world.get::<&Combatant>(entity).ok()?.class;
    if class != CharacterClass::Lancer {
        return None;
    }
    // Shares the second skill slot with the Gunner's piercing bolt
    if !skill_unlocked(ctx.world, entity, SkillId::PiercingBolt) {
        return None;
    }
    if !target.in_bounds() {
        return None;
    }
    if ctx.world.get::<&UnitStats>(entity).ok()?.mana < CROSS_BEAM_COST {
        ctx.announcements
            .push(announce::describe_mana_shortfall(ctx.slot, class, "a cross beam"));
        return None;
    }
    if !try_spend_mana(ctx.world, entity, CROSS_BEAM_COST) {
        return None;
    }

    // One point of damage to every wall on the swept row and column; the
    // intersection cell is counted once.
    let mut swept: Vec<GridCell> = Vec::new();
    for x in 0..MAP_WIDTH {
        swept.push(GridCell::new(x, target.y));
    }
    for y in 0..MAP_HEIGHT {
        if y != target.y {
            swept.push(GridCell::new(target.x, y));
        }
    }
    for cell in &swept {
        combat::strike_wall(ctx.world, ctx.walls, cell, CROSS_BEAM_DAMAGE, ctx.slot, ctx.events);
    }

    let opponent = ctx.slot.opponent();
    if let Some(opponent_cell) = unit_cell(ctx.world, opponent) {
        if opponent_cell.x == target.x || opponent_cell.y == target.y {
            combat::strike_unit(ctx.world, opponent, CROSS_BEAM_DAMAGE, ctx.events);
        }
    }

    *ctx.cross_beam = Some(CrossBeamMark {
        owner: ctx.slot,
        cell: target,
        expires_tick: ctx.tick + BEAM_DURATION_TICKS,
    });
    ctx.scheduler
        .schedule(ctx.tick + BEAM_DURATION_TICKS, TaskKind::ExpireCrossBeam);

    Some(ActionOutcome::new(
        ActionKind::CrossBeam,
        format!("at {}", cell_text(&target)),
    ))
}

pub fn resolve_farsight(ctx: &mut ActionCtx<'_>) -> Option<ActionOutcome> {
    let strength = *ctx.mana_input;
    if strength == 0 {
        return None;
    }
    let entity = find_unit(ctx.world, ctx.slot)?;
    if !skill_unlocked(ctx.world, entity, SkillId::Farsight) {
        return None;
    }
    if !try_spend_mana(ctx.world, entity, strength) {
        return None;
    }

    // Replaces any running boost outright, even a stronger one
    *ctx.vision_boost = Some(VisionBoost {
        radius: strength as i32,
        remaining: strength,
    });
    Some(ActionOutcome::new(
        ActionKind::Farsight,
        format!("vision radius {strength} for {strength} turns"),
    ))
}

pub fn resolve_blink(ctx: &mut ActionCtx<'_>, target: GridCell) -> Option<ActionOutcome> {
    let range = *ctx.mana_input;
    if range == 0 {
        return None;
    }
    let entity = find_unit(ctx.world, ctx.slot)?;
    if !skill_unlocked(ctx.world, entity, SkillId::Blink) {
        return None;
    }
    let from = *ctx.world.get::<&GridCell>(entity).ok()?;
    // Unlike a step, a blink may land on the opposing unit's cell
    if !target.in_bounds()
        || ctx.walls.contains(&target)
        || from.chebyshev_to(&target) > range as i32
    {
        return None;
    }
    if !try_spend_mana(ctx.world, entity, range) {
        return None;
    }

    if let Ok(mut cell) = ctx.world.get::<&mut GridCell>(entity) {
        *cell = target;
    }
    Some(ActionOutcome::new(
        ActionKind::Blink,
        format!("to {}", cell_text(&target)),
    ))
}

pub fn resolve_build(ctx: &mut ActionCtx<'_>, target: GridCell) -> Option<ActionOutcome> {
    let strength = *ctx.mana_input;
    if strength == 0 {
        return None;
    }
    let entity = find_unit(ctx.world, ctx.slot)?;
    let from = *ctx.world.get::<&GridCell>(entity).ok()?;
    let opponent_cell = unit_cell(ctx.world, ctx.slot.opponent())?;

    if !target.in_bounds()
        || target == from
        || target == opponent_cell
        || ctx.walls.contains(&target)
        || from.chebyshev_to(&target) > strength as i32
    {
        return None;
    }
    if !try_spend_mana(ctx.world, entity, strength) {
        return None;
    }

    ctx.walls.build(target, strength);
    Some(ActionOutcome::new(
        ActionKind::Build,
        format!("of strength {strength} at {}", cell_text(&target)),
    ))
}

pub fn resolve_scout(ctx: &mut ActionCtx<'_>) -> Option<ActionOutcome> {
    let entity = find_unit(ctx.world, ctx.slot)?;
    let class = ctx.world.get::<&Combatant>(entity).ok()?.class;
    let opponent_cell = unit_cell(ctx.world, ctx.slot.opponent())?;

    // A stale ping is dropped whether or not the new one can be paid for
    *ctx.recon = None;
    if ctx.world.get::<&UnitStats>(entity).ok()?.mana < SCOUT_COST {
        ctx.announcements
            .push(announce::describe_mana_shortfall(ctx.slot, class, "a scout ping"));
        return None;
    }
    if !try_spend_mana(ctx.world, entity, SCOUT_COST) {
        return None;
    }

    *ctx.recon = Some(opponent_cell);
    Some(ActionOutcome::new(ActionKind::Scout, String::new()))
}

/// Reject zero and non-finite direction inputs, normalize the rest.
fn normalized_direction(direction: DVec2) -> Option<DVec2> {
    if !direction.is_finite() {
        return None;
    }
    let normalized = direction.normalize_or_zero();
    if normalized == DVec2::ZERO {
        return None;
    }
    Some(normalized)
}

fn skill_unlocked(world: &World, entity: hecs::Entity, skill: SkillId) -> bool {
    world
        .get::<&SkillBook>(entity)
        .map(|book| book.unlocked.contains(&skill))
        .unwrap_or(false)
}

/// Spend mana if the unit can afford it, leaving it untouched otherwise.
fn try_spend_mana(world: &mut World, entity: hecs::Entity, cost: u32) -> bool {
    match world.get::<&mut UnitStats>(entity) {
        Ok(mut stats) if stats.mana >= cost => {
            stats.mana -= cost;
            true
        }
        _ => false,
    }
}

fn cell_text(cell: &GridCell) -> String {
    format!("({}, {})", cell.x, cell.y)
}
