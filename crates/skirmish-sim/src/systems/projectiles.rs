//! Projectile spawning, flight, and collision.
//!
//! Queued rounds leave the spawn queue one at a time on a fixed cadence, fly
//! in pixel space, and collide against the wall grid and the opposing unit
//! in cell space. Piercing bolts keep flying after a hit but damage any one
//! cell at most once.

use std::collections::{HashSet, VecDeque};

use glam::DVec2;
use hecs::World;

use skirmish_core::components::{Combatant, Projectile, ProjectileKind};
use skirmish_core::constants::SPAWN_INTERVAL_TICKS;
use skirmish_core::enums::PlayerSlot;
use skirmish_core::events::SkirmishEvent;
use skirmish_core::types::GridCell;

use crate::combat;
use crate::walls::WallGrid;

/// A round waiting in the spawn queue.
#[derive(Debug, Clone)]
pub struct QueuedProjectile {
    pub position: DVec2,
    pub direction: DVec2,
    pub speed: f64,
    pub piercing: bool,
    pub owner: PlayerSlot,
}

/// What a beam ray stopped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeamHit {
    Wall(GridCell),
    Unit,
}

/// Run projectile spawning and flight for one tick.
pub fn run(
    world: &mut World,
    walls: &mut WallGrid,
    spawn_queue: &mut VecDeque<QueuedProjectile>,
    last_spawn_tick: &mut Option<u64>,
    events: &mut Vec<SkirmishEvent>,
    despawn_buffer: &mut Vec<hecs::Entity>,
    tick: u64,
) {
    spawn_due(world, spawn_queue, last_spawn_tick, tick);
    advance_and_collide(world, walls, events, despawn_buffer);
}

/// Release at most one queued round per spawn interval. The first round of
/// a fresh skirmish spawns immediately.
fn spawn_due(
    world: &mut World,
    spawn_queue: &mut VecDeque<QueuedProjectile>,
    last_spawn_tick: &mut Option<u64>,
    tick: u64,
) {
    if spawn_queue.is_empty() {
        return;
    }
    let ready = match *last_spawn_tick {
        None => true,
        Some(last) => tick.saturating_sub(last) >= SPAWN_INTERVAL_TICKS,
    };
    if !ready {
        return;
    }
    if let Some(queued) = spawn_queue.pop_front() {
        let kind = if queued.piercing {
            ProjectileKind::Piercing {
                hit_cells: HashSet::new(),
            }
        } else {
            ProjectileKind::SingleHit
        };
        world.spawn((Projectile {
            kind,
            owner: queued.owner,
            position: queued.position,
            direction: queued.direction,
            speed: queued.speed,
        },));
        *last_spawn_tick = Some(tick);
    }
}

fn advance_and_collide(
    world: &mut World,
    walls: &mut WallGrid,
    events: &mut Vec<SkirmishEvent>,
    despawn_buffer: &mut Vec<hecs::Entity>,
) {
    // Unit positions, captured before taking the mutable projectile borrow
    let unit_cells: Vec<(PlayerSlot, GridCell)> = world
        .query::<(&Combatant, &GridCell)>()
        .iter()
        .map(|(_, (combatant, cell))| (combatant.slot, *cell))
        .collect();
    let cell_of = |slot: PlayerSlot| {
        unit_cells
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, cell)| *cell)
    };

    // Damage against units and gold/mana awards touch the world, so they
    // are deferred until the projectile borrow is released.
    let mut unit_hits: Vec<PlayerSlot> = Vec::new();
    let mut gold_awards: Vec<(PlayerSlot, u32)> = Vec::new();
    let mut mana_refunds: Vec<PlayerSlot> = Vec::new();

    for (entity, projectile) in world.query_mut::<&mut Projectile>() {
        projectile.position += projectile.direction * projectile.speed;
        let cell = GridCell::from_px(projectile.position);

        if !cell.in_bounds() {
            despawn_buffer.push(entity);
            continue;
        }

        let opponent = projectile.owner.opponent();
        let on_opponent = cell_of(opponent) == Some(cell);

        match &mut projectile.kind {
            ProjectileKind::SingleHit => {
                if walls.contains(&cell) {
                    if let Some(bounty) = walls.damage(&cell, 1) {
                        gold_awards.push((projectile.owner, bounty));
                        events.push(SkirmishEvent::WallDestroyed {
                            cell,
                            bounty,
                            credited_to: projectile.owner,
                        });
                    }
                    despawn_buffer.push(entity);
                } else if on_opponent {
                    unit_hits.push(opponent);
                    despawn_buffer.push(entity);
                }
            }
            ProjectileKind::Piercing { hit_cells } => {
                // Each cell is damaged at most once, and the bolt flies on
                if hit_cells.contains(&cell) {
                    continue;
                }
                if walls.contains(&cell) {
                    hit_cells.insert(cell);
                    if let Some(bounty) = walls.damage(&cell, 1) {
                        gold_awards.push((projectile.owner, bounty));
                        events.push(SkirmishEvent::WallDestroyed {
                            cell,
                            bounty,
                            credited_to: projectile.owner,
                        });
                    }
                } else if on_opponent {
                    hit_cells.insert(cell);
                    unit_hits.push(opponent);
                    mana_refunds.push(projectile.owner);
                }
            }
        }
    }

    for (slot, amount) in gold_awards {
        combat::award_gold(world, slot, amount);
    }
    for slot in unit_hits {
        combat::strike_unit(world, slot, 1, events);
    }
    for slot in mana_refunds {
        combat::refund_mana(world, slot, 1);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// March a ray from `origin` one pixel at a time until it leaves the grid,
/// reaches a wall, or reaches the opposing unit's cell. Returns the stop
/// point and what was hit. `direction` must be a unit vector.
pub fn cast_beam(
    walls: &WallGrid,
    opponent_cell: GridCell,
    origin: DVec2,
    direction: DVec2,
    max_range_px: f64,
) -> (DVec2, Option<BeamHit>) {
    let mut position = origin;
    for _ in 0..max_range_px as u32 {
        position += direction;
        let cell = GridCell::from_px(position);
        if !cell.in_bounds() {
            return (position, None);
        }
        if walls.contains(&cell) {
            return (position, Some(BeamHit::Wall(cell)));
        }
        if cell == opponent_cell {
            return (position, Some(BeamHit::Unit));
        }
    }
    (position, None)
}
