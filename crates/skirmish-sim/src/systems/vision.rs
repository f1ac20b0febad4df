//! Fog-of-war visibility for the manually controlled side.
//!
//! Visibility is Chebyshev distance from the unit's cell, so the visible
//! region is a square. Scout pings and cross-beam sweeps punch holes in the
//! fog independently of the radius.

use skirmish_core::constants::{BASE_VISION_RADIUS, MAP_HEIGHT, MAP_WIDTH};
use skirmish_core::enums::PlayerSlot;
use skirmish_core::types::GridCell;

/// Temporary vision radius override bought with Farsight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisionBoost {
    pub radius: i32,
    /// Full turn cycles left before the boost lapses.
    pub remaining: u32,
}

/// An active cross-beam sweep. The swept row and column stay exposed until
/// `expires_tick`.
#[derive(Debug, Clone, Copy)]
pub struct CrossBeamMark {
    pub owner: PlayerSlot,
    pub cell: GridCell,
    pub expires_tick: u64,
}

/// Chebyshev visibility predicate.
pub fn is_cell_visible(cell: &GridCell, center: &GridCell, radius: i32) -> bool {
    center.chebyshev_to(cell) <= radius
}

/// The radius in effect this tick. A boost replaces the base radius
/// outright, it does not extend it.
pub fn effective_radius(boost: Option<&VisionBoost>) -> i32 {
    match boost {
        Some(boost) => boost.radius,
        None => BASE_VISION_RADIUS,
    }
}

/// Whether `cell` is exposed through fog by a scout ping or a cross-beam
/// sweep, regardless of distance.
pub fn is_exposed(
    cell: &GridCell,
    recon: Option<&GridCell>,
    cross_beam: Option<&CrossBeamMark>,
) -> bool {
    if recon == Some(cell) {
        return true;
    }
    if let Some(mark) = cross_beam {
        if mark.cell.x == cell.x || mark.cell.y == cell.y {
            return true;
        }
    }
    false
}

/// Every in-bounds cell the observing side can currently see, in ascending
/// cell order.
pub fn visible_cells(
    center: &GridCell,
    radius: i32,
    recon: Option<&GridCell>,
    cross_beam: Option<&CrossBeamMark>,
) -> Vec<GridCell> {
    let mut cells = Vec::new();
    for x in 0..MAP_WIDTH {
        for y in 0..MAP_HEIGHT {
            let cell = GridCell::new(x, y);
            if is_cell_visible(&cell, center, radius) || is_exposed(&cell, recon, cross_beam) {
                cells.push(cell);
            }
        }
    }
    cells
}
