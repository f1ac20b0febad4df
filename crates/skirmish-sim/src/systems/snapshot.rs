//! Snapshot generation: serializes sim state for frontends.

use hecs::World;

use skirmish_core::components::{
    BeamEffect, Combatant, Projectile, ProjectileKind, SkillBook, UnitStats,
};
use skirmish_core::enums::{GamePhase, PlayerSlot, SkillId};
use skirmish_core::events::SkirmishEvent;
use skirmish_core::state::{
    BeamView, CrossBeamView, ProjectileView, SkirmishSnapshot, TurnView, UnitView, VisionBoostView,
    VisionView, WallView,
};
use skirmish_core::types::{GridCell, SimTime};

use crate::engine::TurnState;
use crate::systems::vision::{self, CrossBeamMark, VisionBoost};
use crate::walls::WallGrid;
use crate::world_setup;

/// Build a complete snapshot of the current skirmish state.
///
/// Every collection is sorted so that identical sim states serialize to
/// identical snapshots.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: SimTime,
    phase: GamePhase,
    turn: TurnState,
    winner: Option<PlayerSlot>,
    walls: &WallGrid,
    grass: &[GridCell],
    vision_boost: Option<&VisionBoost>,
    recon: Option<&GridCell>,
    cross_beam: Option<&CrossBeamMark>,
    manual_slot: PlayerSlot,
    announcements: Vec<String>,
    mana_input: u32,
    pending_purchase: Option<SkillId>,
    events: Vec<SkirmishEvent>,
) -> SkirmishSnapshot {
    let mut units: Vec<UnitView> = world
        .query::<(&Combatant, &GridCell, &UnitStats, &SkillBook)>()
        .iter()
        .map(|(_, (combatant, cell, stats, book))| {
            let mut unlocked: Vec<SkillId> = book.unlocked.iter().copied().collect();
            unlocked.sort();
            UnitView {
                slot: combatant.slot,
                class: combatant.class,
                cell: *cell,
                hp: stats.hp,
                max_hp: stats.max_hp,
                mana: stats.mana,
                max_mana: stats.max_mana,
                gold: stats.gold,
                attack: stats.attack,
                unlocked,
            }
        })
        .collect();
    units.sort_by_key(|unit| unit.slot);

    let mut wall_views: Vec<WallView> = walls
        .iter()
        .map(|(cell, state)| WallView {
            cell: *cell,
            health: state.health,
            total: state.total,
        })
        .collect();
    wall_views.sort_by_key(|wall| wall.cell);

    let mut grass_cells: Vec<GridCell> = grass.to_vec();
    grass_cells.sort();

    let mut projectiles: Vec<ProjectileView> = world
        .query::<&Projectile>()
        .iter()
        .map(|(_, projectile)| ProjectileView {
            owner: projectile.owner,
            position: projectile.position,
            direction: projectile.direction,
            piercing: matches!(projectile.kind, ProjectileKind::Piercing { .. }),
        })
        .collect();
    projectiles.sort_by(|a, b| {
        a.owner
            .cmp(&b.owner)
            .then(a.position.x.total_cmp(&b.position.x))
            .then(a.position.y.total_cmp(&b.position.y))
    });

    let mut beams: Vec<BeamView> = world
        .query::<&BeamEffect>()
        .iter()
        .map(|(_, beam)| BeamView {
            owner: beam.owner,
            start: beam.start,
            end: beam.end,
        })
        .collect();
    beams.sort_by(|a, b| {
        a.start
            .x
            .total_cmp(&b.start.x)
            .then(a.start.y.total_cmp(&b.start.y))
            .then(a.end.x.total_cmp(&b.end.x))
            .then(a.end.y.total_cmp(&b.end.y))
    });

    let cross_beam_view = cross_beam.map(|mark| CrossBeamView {
        owner: mark.owner,
        cell: mark.cell,
    });

    // Fog only applies while the observing unit is on the board
    let vision_view = match world_setup::unit_cell(world, manual_slot) {
        Some(center) => {
            let radius = vision::effective_radius(vision_boost);
            VisionView {
                radius,
                boost: vision_boost.map(|boost| VisionBoostView {
                    radius: boost.radius,
                    remaining: boost.remaining,
                }),
                recon: recon.copied(),
                visible_cells: vision::visible_cells(&center, radius, recon, cross_beam),
            }
        }
        None => VisionView::default(),
    };

    SkirmishSnapshot {
        time,
        phase,
        turn: TurnView {
            number: turn.number,
            active: turn.active,
        },
        winner,
        units,
        walls: wall_views,
        grass: grass_cells,
        projectiles,
        beams,
        cross_beam: cross_beam_view,
        vision: vision_view,
        announcements,
        mana_input,
        pending_purchase,
        events,
    }
}
