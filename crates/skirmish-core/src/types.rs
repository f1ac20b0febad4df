//! Fundamental grid and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{CELL_SIZE_PX, MAP_HEIGHT, MAP_WIDTH};

/// Integer cell coordinate on the skirmish grid.
/// x grows rightward, y grows downward (screen convention).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl GridCell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev (king-move) distance to another cell.
    pub fn chebyshev_to(&self, other: &GridCell) -> i32 {
        (other.x - self.x).abs().max((other.y - self.y).abs())
    }

    /// Whether the cell lies on the playable grid.
    pub fn in_bounds(&self) -> bool {
        self.x >= 0 && self.x < MAP_WIDTH && self.y >= 0 && self.y < MAP_HEIGHT
    }

    /// Pixel-space center of this cell.
    pub fn center_px(&self) -> DVec2 {
        DVec2::new(
            self.x as f64 * CELL_SIZE_PX + CELL_SIZE_PX / 2.0,
            self.y as f64 * CELL_SIZE_PX + CELL_SIZE_PX / 2.0,
        )
    }

    /// Cell containing a pixel-space point.
    pub fn from_px(px: DVec2) -> Self {
        Self {
            x: (px.x / CELL_SIZE_PX).floor() as i32,
            y: (px.y / CELL_SIZE_PX).floor() as i32,
        }
    }

    /// Whether the two cells share a row or column.
    pub fn is_orthogonal_to(&self, other: &GridCell) -> bool {
        self.x == other.x || self.y == other.y
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
