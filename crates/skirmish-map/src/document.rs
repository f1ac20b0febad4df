//! JSON map document loader and validation.
//!
//! A map document supplies spawn cells, terrain (walls and grass), and the
//! sprite names a frontend needs to draw it. The simulation consumes the
//! validated [`MapLayout`]; the sprite table feeds the [`SpriteCatalog`].
//!
//! [`SpriteCatalog`]: crate::catalog::SpriteCatalog

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use skirmish_core::enums::PlayerSlot;
use skirmish_core::types::GridCell;

/// A map as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapDocument {
    pub name: String,
    pub spawn_points: SpawnPoints,
    pub terrain: TerrainSection,
    pub resources: ResourceSection,
}

/// Starting cell per slot, `[x, y]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpawnPoints {
    pub p1: [i32; 2],
    pub p2: [i32; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainSection {
    pub grass: GrassSection,
    pub walls: WallSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrassSection {
    pub positions: Vec<[i32; 2]>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallSection {
    pub positions: Vec<[i32; 2]>,
    /// Starting health shared by every wall on the map.
    pub health: u32,
}

/// Sprite names referenced by the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSection {
    pub ground: String,
    pub grass: String,
    pub start: String,
    /// Wall sprite per health tier, keyed by the tier as a decimal string.
    pub walls_by_health: BTreeMap<String, String>,
    /// Fallback wall sprite for tiers without a dedicated image.
    pub wall_default: String,
}

/// Validated runtime layout consumed by the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapLayout {
    pub name: String,
    pub spawn_p1: GridCell,
    pub spawn_p2: GridCell,
    pub walls: Vec<GridCell>,
    pub wall_health: u32,
    pub grass: Vec<GridCell>,
}

impl MapLayout {
    /// Spawn cell for a slot.
    pub fn spawn(&self, slot: PlayerSlot) -> GridCell {
        match slot {
            PlayerSlot::P1 => self.spawn_p1,
            PlayerSlot::P2 => self.spawn_p2,
        }
    }
}

/// Load a map document from a JSON file.
pub fn load_map(path: &Path) -> io::Result<MapDocument> {
    let data = std::fs::read_to_string(path)?;
    parse_map(&data)
}

/// Parse and validate a map document from JSON text.
pub fn parse_map(data: &str) -> io::Result<MapDocument> {
    let doc: MapDocument = serde_json::from_str(data).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Malformed map document: {e}"),
        )
    })?;
    doc.validate()?;
    Ok(doc)
}

impl MapDocument {
    /// Check structural invariants: everything in bounds, spawns distinct
    /// and standing on open ground, walls unique with positive health.
    pub fn validate(&self) -> io::Result<()> {
        let p1 = cell_of(self.spawn_points.p1);
        let p2 = cell_of(self.spawn_points.p2);
        if !p1.in_bounds() || !p2.in_bounds() {
            return Err(invalid("Spawn point out of bounds"));
        }
        if p1 == p2 {
            return Err(invalid("Spawn points must be distinct"));
        }
        if self.terrain.walls.health == 0 {
            return Err(invalid("Wall health must be at least 1"));
        }

        let mut seen = std::collections::HashSet::new();
        for &pos in &self.terrain.walls.positions {
            let cell = cell_of(pos);
            if !cell.in_bounds() {
                return Err(invalid(format!("Wall out of bounds at {pos:?}")));
            }
            if !seen.insert(cell) {
                return Err(invalid(format!("Duplicate wall at {pos:?}")));
            }
            if cell == p1 || cell == p2 {
                return Err(invalid(format!("Wall on a spawn point at {pos:?}")));
            }
        }
        for &pos in &self.terrain.grass.positions {
            if !cell_of(pos).in_bounds() {
                return Err(invalid(format!("Grass out of bounds at {pos:?}")));
            }
        }
        Ok(())
    }

    /// Convert to the runtime layout used by the simulation.
    pub fn layout(&self) -> MapLayout {
        MapLayout {
            name: self.name.clone(),
            spawn_p1: cell_of(self.spawn_points.p1),
            spawn_p2: cell_of(self.spawn_points.p2),
            walls: self.terrain.walls.positions.iter().copied().map(cell_of).collect(),
            wall_health: self.terrain.walls.health,
            grass: self.terrain.grass.positions.iter().copied().map(cell_of).collect(),
        }
    }
}

fn cell_of(pos: [i32; 2]) -> GridCell {
    GridCell::new(pos[0], pos[1])
}

fn invalid(msg: impl Into<String>) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg.into())
}
