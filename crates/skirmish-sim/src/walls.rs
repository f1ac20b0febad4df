//! Destructible wall terrain.
//!
//! Walls are board state, not entities. Stored in `SkirmishEngine`'s wall
//! grid, NOT as ECS components, because every collision query needs the
//! whole grid at once.

use std::collections::HashMap;

use skirmish_core::constants::WALL_BOUNTY_MULTIPLIER;
use skirmish_core::types::GridCell;
use skirmish_map::MapLayout;

/// Remaining and original strength of one wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallState {
    pub health: u32,
    pub total: u32,
}

/// All standing walls, keyed by cell.
#[derive(Debug, Clone, Default)]
pub struct WallGrid {
    walls: HashMap<GridCell, WallState>,
}

impl WallGrid {
    /// Seed the grid from a map layout. Every wall starts at full strength.
    pub fn from_layout(layout: &MapLayout) -> Self {
        let mut walls = HashMap::with_capacity(layout.walls.len());
        for cell in &layout.walls {
            walls.insert(
                *cell,
                WallState {
                    health: layout.wall_health,
                    total: layout.wall_health,
                },
            );
        }
        Self { walls }
    }

    pub fn contains(&self, cell: &GridCell) -> bool {
        self.walls.contains_key(cell)
    }

    pub fn get(&self, cell: &GridCell) -> Option<&WallState> {
        self.walls.get(cell)
    }

    /// Raise a new wall at full strength. Returns false if the cell is
    /// already walled.
    pub fn build(&mut self, cell: GridCell, strength: u32) -> bool {
        if self.walls.contains_key(&cell) {
            return false;
        }
        self.walls.insert(
            cell,
            WallState {
                health: strength,
                total: strength,
            },
        );
        true
    }

    /// Apply damage to the wall at `cell`, if any. A wall reduced to zero
    /// health is removed and its bounty (original strength times the bounty
    /// multiplier) is returned for the attacker to collect.
    pub fn damage(&mut self, cell: &GridCell, amount: u32) -> Option<u32> {
        let wall = self.walls.get_mut(cell)?;
        wall.health = wall.health.saturating_sub(amount);
        if wall.health == 0 {
            let bounty = wall.total.saturating_mul(WALL_BOUNTY_MULTIPLIER);
            self.walls.remove(cell);
            Some(bounty)
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GridCell, &WallState)> {
        self.walls.iter()
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }
}
