//! Human-readable announcements for the event feed.
//!
//! Each turn gets a single pending announcement; repeated pushes within one
//! turn replace it. Ending the turn flushes the pending message into a
//! bounded history, newest first.

use std::collections::VecDeque;

use skirmish_core::constants::ANNOUNCEMENT_HISTORY_LIMIT;
use skirmish_core::enums::{ActionKind, CharacterClass, PlayerSlot, SkillId};

/// Pending announcement plus the recent history shown to players.
#[derive(Debug, Default)]
pub struct AnnouncementLog {
    current: Option<String>,
    history: VecDeque<String>,
}

impl AnnouncementLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending announcement for the turn in progress.
    pub fn push(&mut self, message: String) {
        self.current = Some(message);
    }

    /// Flush the pending announcement into the bounded history.
    pub fn finalize(&mut self) {
        if let Some(message) = self.current.take() {
            self.history.push_front(message);
            self.history.truncate(ANNOUNCEMENT_HISTORY_LIMIT);
        }
    }

    /// Everything currently visible: the pending announcement (if any)
    /// followed by the history, newest first.
    pub fn visible(&self) -> Vec<String> {
        self.current
            .iter()
            .chain(self.history.iter())
            .cloned()
            .collect()
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.history.clear();
    }
}

fn slot_label(slot: PlayerSlot) -> &'static str {
    match slot {
        PlayerSlot::P1 => "P1",
        PlayerSlot::P2 => "P2",
    }
}

fn actor_label(slot: PlayerSlot, class: CharacterClass) -> String {
    format!("{}'s {}", slot_label(slot), class.display_name())
}

/// Render the announcement for a completed turn.
pub fn describe_action(
    slot: PlayerSlot,
    class: CharacterClass,
    kind: ActionKind,
    extra: &str,
) -> String {
    let actor = actor_label(slot, class);
    match kind {
        ActionKind::Move => format!("{actor} moved {extra}"),
        ActionKind::Build => format!("{actor} raised a wall {extra}"),
        ActionKind::Barrage => format!("{actor} loosed a barrage {extra}"),
        ActionKind::PiercingBolt => format!("{actor} fired a piercing bolt"),
        ActionKind::Blink => format!("{actor} blinked {extra}"),
        ActionKind::BasicAttack => format!("{actor} struck {extra}"),
        ActionKind::Farsight => format!("{actor} gained {extra}"),
        ActionKind::Scout => format!("{actor} scouted the enemy position"),
        ActionKind::CrossBeam => format!("{actor} swept a cross beam {extra}"),
        ActionKind::AutomatedMove => format!("{actor} advanced {extra}"),
    }
}

pub fn describe_purchase(slot: PlayerSlot, class: CharacterClass, skill: SkillId) -> String {
    format!(
        "{} unlocked skill {}",
        actor_label(slot, class),
        skill.slot_number()
    )
}

pub fn describe_purchase_failure(
    slot: PlayerSlot,
    class: CharacterClass,
    skill: SkillId,
) -> String {
    format!(
        "{} cannot afford skill {}",
        actor_label(slot, class),
        skill.slot_number()
    )
}

pub fn describe_mana_shortfall(slot: PlayerSlot, class: CharacterClass, what: &str) -> String {
    format!("{} lacks the mana for {}", actor_label(slot, class), what)
}

pub fn describe_defeat(
    fallen: PlayerSlot,
    fallen_class: CharacterClass,
    winner: PlayerSlot,
) -> String {
    format!(
        "{} has fallen. {} wins the skirmish",
        actor_label(fallen, fallen_class),
        slot_label(winner)
    )
}
