//! Simulation engine: the core of the skirmish.
//!
//! `SkirmishEngine` owns the hecs ECS world, processes player commands, runs
//! all systems at the fixed tick rate, and produces `SkirmishSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use serde::{Deserialize, Serialize};

use skirmish_core::commands::PlayerCommand;
use skirmish_core::components::{Combatant, SkillBook, UnitStats};
use skirmish_core::constants::{AUTOMATED_TURN_DELAY_TICKS, MANA_INPUT_CAP, SKILL_PRICE};
use skirmish_core::enums::{ActionKind, CharacterClass, GamePhase, PlayerSlot, SkillId};
use skirmish_core::events::SkirmishEvent;
use skirmish_core::state::{SkirmishSnapshot, TurnHistoryEntry};
use skirmish_core::types::{GridCell, SimTime};
use skirmish_map::MapLayout;

use crate::actions::{self, ActionCtx, ActionOutcome};
use crate::announce::{self, AnnouncementLog};
use crate::scheduler::{Scheduler, TaskKind};
use crate::systems;
use crate::systems::projectiles::QueuedProjectile;
use crate::systems::vision::{CrossBeamMark, VisionBoost};
use crate::walls::WallGrid;
use crate::world_setup;

/// Starting resources for one side of a skirmish.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CombatantSetup {
    pub class: CharacterClass,
    pub hp: u32,
    pub max_hp: u32,
    pub mana: u32,
    pub max_mana: u32,
    pub gold: u32,
}

/// Configuration for a skirmish: the map, the roster, and which side the
/// player drives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkirmishConfig {
    pub layout: MapLayout,
    /// The slot the player controls; the other side runs the patrol.
    pub manual_slot: PlayerSlot,
    pub p1: CombatantSetup,
    pub p2: CombatantSetup,
}

impl SkirmishConfig {
    pub fn combatant(&self, slot: PlayerSlot) -> &CombatantSetup {
        match slot {
            PlayerSlot::P1 => &self.p1,
            PlayerSlot::P2 => &self.p2,
        }
    }

    /// The slot driven by the built-in patrol.
    pub fn automated_slot(&self) -> PlayerSlot {
        self.manual_slot.opponent()
    }
}

impl Default for SkirmishConfig {
    fn default() -> Self {
        crate::preset::mirror_match()
    }
}

/// Whose turn it is and how many full cycles have passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    /// Starts at 1 and increments each time control returns to the manual
    /// side.
    pub number: u32,
    pub active: PlayerSlot,
}

/// The headless simulation engine.
pub struct SkirmishEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    config: SkirmishConfig,
    winner: Option<PlayerSlot>,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SkirmishEvent>,

    // Board state lives on the engine, not in the ECS world
    turn: TurnState,
    walls: WallGrid,
    grass: Vec<GridCell>,
    scheduler: Scheduler,
    spawn_queue: VecDeque<QueuedProjectile>,
    last_spawn_tick: Option<u64>,
    patrol_direction: i32,
    vision_boost: Option<VisionBoost>,
    recon: Option<GridCell>,
    cross_beam: Option<CrossBeamMark>,
    mana_input: u32,
    pending_purchase: Option<SkillId>,
    announcements: AnnouncementLog,
    history: Vec<TurnHistoryEntry>,
}

impl SkirmishEngine {
    pub fn new(config: SkirmishConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::Idle,
            turn: TurnState {
                number: 1,
                active: config.manual_slot,
            },
            config,
            winner: None,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            walls: WallGrid::default(),
            grass: Vec::new(),
            scheduler: Scheduler::default(),
            spawn_queue: VecDeque::new(),
            last_spawn_tick: None,
            patrol_direction: 1,
            vision_boost: None,
            recon: None,
            cross_beam: None,
            mana_input: 0,
            pending_purchase: None,
            announcements: AnnouncementLog::new(),
            history: Vec::new(),
        }
    }

    /// Queue a command for processing on the next tick.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SkirmishSnapshot {
        self.process_commands();
        self.check_defeat();

        if self.phase == GamePhase::Active {
            self.run_scheduled_tasks();
            self.run_systems();
            self.check_defeat();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            self.time,
            self.phase,
            self.turn,
            self.winner,
            &self.walls,
            &self.grass,
            self.vision_boost.as_ref(),
            self.recon.as_ref(),
            self.cross_beam.as_ref(),
            self.config.manual_slot,
            self.announcements.visible(),
            self.mana_input,
            self.pending_purchase,
            events,
        )
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSkirmish => {
                if matches!(self.phase, GamePhase::Idle | GamePhase::Complete) {
                    self.start_skirmish();
                }
            }
            // Everything else acts for the manual side on its own turn
            _ if self.phase != GamePhase::Active
                || self.turn.active != self.config.manual_slot => {}
            PlayerCommand::Cancel => {
                self.pending_purchase = None;
            }
            PlayerCommand::AdjustManaInput { delta } => {
                self.adjust_mana_input(delta);
            }
            PlayerCommand::PurchaseSkill { skill } => {
                self.purchase_skill(skill);
            }
            command => self.resolve_player_action(command),
        }
    }

    fn resolve_player_action(&mut self, command: PlayerCommand) {
        let mut ctx = ActionCtx {
            world: &mut self.world,
            walls: &mut self.walls,
            scheduler: &mut self.scheduler,
            spawn_queue: &mut self.spawn_queue,
            vision_boost: &mut self.vision_boost,
            recon: &mut self.recon,
            cross_beam: &mut self.cross_beam,
            events: &mut self.events,
            announcements: &mut self.announcements,
            mana_input: &mut self.mana_input,
            slot: self.turn.active,
            tick: self.time.tick,
        };
        let outcome = match command {
            PlayerCommand::Move { target } => actions::resolve_move(&mut ctx, target),
            PlayerCommand::Attack { target } => actions::resolve_attack(&mut ctx, target),
            PlayerCommand::FireBarrage { direction } => {
                actions::resolve_barrage(&mut ctx, direction)
            }
            PlayerCommand::FirePiercingBolt { direction } => {
                actions::resolve_piercing_bolt(&mut ctx, direction)
            }
            PlayerCommand::CastCrossBeam { target } => {
                actions::resolve_cross_beam(&mut ctx, target)
            }
            PlayerCommand::ActivateFarsight => actions::resolve_farsight(&mut ctx),
            PlayerCommand::Blink { target } => actions::resolve_blink(&mut ctx, target),
            PlayerCommand::BuildWall { target } => actions::resolve_build(&mut ctx, target),
            PlayerCommand::Scout => actions::resolve_scout(&mut ctx),
            _ => None,
        };
        if let Some(outcome) = outcome {
            self.end_turn(outcome);
        }
    }

    fn start_skirmish(&mut self) {
        self.world.clear();
        self.walls = WallGrid::from_layout(&self.config.layout);
        self.grass = self.config.layout.grass.clone();
        self.grass.sort();
        self.scheduler.clear();
        self.spawn_queue.clear();
        self.last_spawn_tick = None;
        self.despawn_buffer.clear();
        self.patrol_direction = 1;
        self.vision_boost = None;
        self.recon = None;
        self.cross_beam = None;
        self.mana_input = 0;
        self.pending_purchase = None;
        self.announcements.clear();
        self.history.clear();
        self.events.clear();
        self.winner = None;
        self.turn = TurnState {
            number: 1,
            active: self.config.manual_slot,
        };
        self.time = SimTime::default();
        world_setup::setup_skirmish(&mut self.world, &self.config);
        self.phase = GamePhase::Active;
    }

    fn run_scheduled_tasks(&mut self) {
        for task in self.scheduler.drain_due(self.time.tick) {
            match task {
                TaskKind::AutomatedTurn => self.automated_turn(),
                TaskKind::ExpireBeam(entity) => {
                    // The entity may already be gone after a restart
                    let _ = self.world.despawn(entity);
                }
                TaskKind::ExpireCrossBeam => {
                    if self
                        .cross_beam
                        .as_ref()
                        .is_some_and(|mark| mark.expires_tick <= self.time.tick)
                    {
                        self.cross_beam = None;
                    }
                }
            }
        }
    }

    fn run_systems(&mut self) {
        systems::projectiles::run(
            &mut self.world,
            &mut self.walls,
            &mut self.spawn_queue,
            &mut self.last_spawn_tick,
            &mut self.events,
            &mut self.despawn_buffer,
            self.time.tick,
        );
    }

    /// The automated side's delayed turn: a one-cell vertical patrol that
    /// reverses only at the board edge.
    fn automated_turn(&mut self) {
        if self.phase != GamePhase::Active || self.turn.active != self.config.automated_slot() {
            return;
        }
        let slot = self.config.automated_slot();
        let entity = match world_setup::find_unit(&self.world, slot) {
            Some(entity) => entity,
            None => return,
        };
        let from = match self.world.get::<&GridCell>(entity) {
            Ok(cell) => *cell,
            Err(_) => return,
        };

        let mut target = GridCell::new(from.x, from.y + self.patrol_direction);
        if !target.in_bounds() {
            self.patrol_direction = -self.patrol_direction;
            target = GridCell::new(from.x, from.y + self.patrol_direction);
        }
        if let Ok(mut cell) = self.world.get::<&mut GridCell>(entity) {
            *cell = target;
        }

        self.end_turn(ActionOutcome::new(
            ActionKind::AutomatedMove,
            format!("to ({}, {})", target.x, target.y),
        ));
    }

    fn end_turn(&mut self, outcome: ActionOutcome) {
        let actor = self.turn.active;
        let class = self.unit_class(actor);

        self.history.push(TurnHistoryEntry {
            turn: self.turn.number,
            actor,
            action: outcome.kind,
            extra: outcome.extra.clone(),
            timestamp_secs: self.time.elapsed_secs,
        });
        self.announcements
            .push(announce::describe_action(actor, class, outcome.kind, &outcome.extra));
        self.announcements.finalize();
        self.events.push(SkirmishEvent::TurnEnded {
            turn: self.turn.number,
            by: actor,
            action: outcome.kind,
        });

        if actor == self.config.manual_slot {
            self.turn.active = self.config.automated_slot();
            self.scheduler.schedule(
                self.time.tick + AUTOMATED_TURN_DELAY_TICKS,
                TaskKind::AutomatedTurn,
            );
        } else {
            // Timed effects wind down when a full cycle completes
            if let Some(boost) = self.vision_boost.as_mut() {
                boost.remaining = boost.remaining.saturating_sub(1);
                if boost.remaining == 0 {
                    self.vision_boost = None;
                }
            }
            self.recon = None;
            self.turn.active = self.config.manual_slot;
            self.turn.number += 1;
        }
    }

    fn check_defeat(&mut self) {
        if self.phase != GamePhase::Active {
            return;
        }
        let fallen: Option<(PlayerSlot, CharacterClass)> = self
            .world
            .query::<(&Combatant, &UnitStats)>()
            .iter()
            .find(|(_, (_, stats))| stats.hp == 0)
            .map(|(_, (combatant, _))| (combatant.slot, combatant.class));

        if let Some((slot, class)) = fallen {
            let winner = slot.opponent();
            self.phase = GamePhase::Complete;
            self.winner = Some(winner);
            self.announcements
                .push(announce::describe_defeat(slot, class, winner));
            self.announcements.finalize();
            self.events.push(SkirmishEvent::SkirmishOver { winner });
        }
    }

    /// Two-step purchase: the first request marks the skill pending, a
    /// repeat confirms it. Never consumes the turn.
    fn purchase_skill(&mut self, skill: SkillId) {
        let slot = self.turn.active;
        let entity = match world_setup::find_unit(&self.world, slot) {
            Some(entity) => entity,
            None => return,
        };
        let already_unlocked = self
            .world
            .get::<&SkillBook>(entity)
            .map(|book| book.unlocked.contains(&skill))
            .unwrap_or(false);
        if already_unlocked {
            return;
        }

        if self.pending_purchase != Some(skill) {
            self.pending_purchase = Some(skill);
            return;
        }
        self.pending_purchase = None;

        let class = self.unit_class(slot);
        let affordable = self
            .world
            .get::<&UnitStats>(entity)
            .map(|stats| stats.gold >= SKILL_PRICE)
            .unwrap_or(false);
        if !affordable {
            self.announcements
                .push(announce::describe_purchase_failure(slot, class, skill));
            self.events
                .push(SkirmishEvent::SkillPurchaseFailed { slot, skill });
            return;
        }

        if let Ok(mut stats) = self.world.get::<&mut UnitStats>(entity) {
            stats.gold -= SKILL_PRICE;
        }
        if let Ok(mut book) = self.world.get::<&mut SkillBook>(entity) {
            book.unlocked.insert(skill);
        }
        self.announcements
            .push(announce::describe_purchase(slot, class, skill));
        self.events.push(SkirmishEvent::SkillUnlocked { slot, skill });
    }

    /// Clamp the shared mana input to what the manual unit can actually
    /// spend, capped at the two-digit display limit.
    fn adjust_mana_input(&mut self, delta: i32) {
        let mana = world_setup::find_unit(&self.world, self.config.manual_slot)
            .and_then(|entity| {
                self.world
                    .get::<&UnitStats>(entity)
                    .map(|stats| stats.mana)
                    .ok()
            })
            .unwrap_or(0);
        let cap = mana.min(MANA_INPUT_CAP);
        let next = self.mana_input as i64 + delta as i64;
        self.mana_input = next.clamp(0, cap as i64) as u32;
    }

    fn unit_class(&self, slot: PlayerSlot) -> CharacterClass {
        self.world
            .query::<&Combatant>()
            .iter()
            .find(|(_, combatant)| combatant.slot == slot)
            .map(|(_, combatant)| combatant.class)
            .unwrap_or_default()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    pub fn winner(&self) -> Option<PlayerSlot> {
        self.winner
    }

    /// Full turn-by-turn audit trail for the current skirmish.
    pub fn history(&self) -> &[TurnHistoryEntry] {
        &self.history
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub fn walls(&self) -> &WallGrid {
        &self.walls
    }

    #[cfg(test)]
    pub fn vision_boost(&self) -> Option<&VisionBoost> {
        self.vision_boost.as_ref()
    }

    #[cfg(test)]
    pub fn recon(&self) -> Option<&GridCell> {
        self.recon.as_ref()
    }

    #[cfg(test)]
    pub fn spawn_queue_len(&self) -> usize {
        self.spawn_queue.len()
    }

    #[cfg(test)]
    pub fn scheduled_task_count(&self) -> usize {
        self.scheduler.len()
    }
}
