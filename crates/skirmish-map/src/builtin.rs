//! The builtin map.

use std::collections::BTreeMap;

use crate::document::{
    GrassSection, MapDocument, ResourceSection, SpawnPoints, TerrainSection, WallSection,
};

/// "Blackwood": the standard 12x9 duel map.
///
/// Grass meadows sit along the top two and bottom two rows, and a
/// six-cell wall column shields each spawn. Spawns face each other
/// across the middle row.
pub fn blackwood() -> MapDocument {
    let mut grass = Vec::new();
    for y in 0..2 {
        for x in 2..5 {
            grass.push([x, y]);
        }
        for x in 7..10 {
            grass.push([x, y]);
        }
    }
    for y in 7..9 {
        for x in 4..8 {
            grass.push([x, y]);
        }
    }

    let mut walls = Vec::new();
    for y in 3..9 {
        walls.push([3, y]);
    }
    for y in 3..9 {
        walls.push([8, y]);
    }

    let mut walls_by_health = BTreeMap::new();
    for tier in 1..=5u32 {
        walls_by_health.insert(tier.to_string(), format!("wall_{tier}.png"));
    }

    MapDocument {
        name: "blackwood".to_string(),
        spawn_points: SpawnPoints {
            p1: [1, 4],
            p2: [10, 4],
        },
        terrain: TerrainSection {
            grass: GrassSection { positions: grass },
            walls: WallSection {
                positions: walls,
                health: 5,
            },
        },
        resources: ResourceSection {
            ground: "ground.png".to_string(),
            grass: "grass.png".to_string(),
            start: "start.png".to_string(),
            walls_by_health,
            wall_default: "wall_default.png".to_string(),
        },
    }
}
