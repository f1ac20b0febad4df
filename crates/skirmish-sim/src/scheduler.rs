//! One-shot task scheduling on the tick clock.
//!
//! The turn controller and timed effects never sleep; they register a task
//! with a deadline tick and the engine polls the scheduler once per tick.

/// Work to perform once a deadline tick has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// The automated side takes its delayed patrol turn.
    AutomatedTurn,
    /// A beam effect entity has finished its display window.
    ExpireBeam(hecs::Entity),
    /// The cross-beam exposure lapses.
    ExpireCrossBeam,
}

#[derive(Debug, Clone, Copy)]
struct ScheduledTask {
    due_tick: u64,
    kind: TaskKind,
}

/// Deadline-ordered one-shot task queue.
#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    pub fn schedule(&mut self, due_tick: u64, kind: TaskKind) {
        self.tasks.push(ScheduledTask { due_tick, kind });
    }

    /// Remove and return every task whose deadline has passed, ordered by
    /// deadline (ties keep insertion order).
    pub fn drain_due(&mut self, now: u64) -> Vec<TaskKind> {
        let mut due: Vec<ScheduledTask> = Vec::new();
        self.tasks.retain(|task| {
            if task.due_tick <= now {
                due.push(*task);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|task| task.due_tick);
        due.into_iter().map(|task| task.kind).collect()
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_returns_only_due_tasks() {
        let mut scheduler = Scheduler::default();
        scheduler.schedule(10, TaskKind::AutomatedTurn);
        scheduler.schedule(20, TaskKind::ExpireCrossBeam);

        assert!(scheduler.drain_due(9).is_empty(), "Nothing is due yet");
        assert_eq!(scheduler.drain_due(10), vec![TaskKind::AutomatedTurn]);
        assert_eq!(scheduler.len(), 1, "Undue task should remain queued");
        assert_eq!(scheduler.drain_due(100), vec![TaskKind::ExpireCrossBeam]);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_drain_orders_by_deadline() {
        let mut scheduler = Scheduler::default();
        scheduler.schedule(30, TaskKind::ExpireCrossBeam);
        scheduler.schedule(10, TaskKind::AutomatedTurn);

        let due = scheduler.drain_due(30);
        assert_eq!(due, vec![TaskKind::AutomatedTurn, TaskKind::ExpireCrossBeam]);
    }

    #[test]
    fn test_clear_discards_pending_tasks() {
        let mut scheduler = Scheduler::default();
        scheduler.schedule(5, TaskKind::AutomatedTurn);
        scheduler.clear();
        assert!(scheduler.drain_due(100).is_empty());
    }
}
