//! Sprite lookup for terrain rendering.

use std::collections::BTreeMap;
use std::io;

use crate::document::MapDocument;

/// Resolves sprite names for a frontend. Wall sprites are tiered by the
/// wall's current health; a tier without a dedicated image falls back to
/// the default wall sprite.
#[derive(Debug, Clone)]
pub struct SpriteCatalog {
    ground: String,
    grass: String,
    start: String,
    walls_by_health: BTreeMap<u32, String>,
    wall_default: String,
}

impl SpriteCatalog {
    /// Build a catalog from a map document's resource table.
    pub fn from_document(doc: &MapDocument) -> io::Result<SpriteCatalog> {
        let mut walls_by_health = BTreeMap::new();
        for (key, sprite) in &doc.resources.walls_by_health {
            let tier: u32 = key.parse().map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("Wall sprite tier is not a number: {key:?}"),
                )
            })?;
            walls_by_health.insert(tier, sprite.clone());
        }
        Ok(SpriteCatalog {
            ground: doc.resources.ground.clone(),
            grass: doc.resources.grass.clone(),
            start: doc.resources.start.clone(),
            walls_by_health,
            wall_default: doc.resources.wall_default.clone(),
        })
    }

    /// Sprite for a wall at the given current health.
    pub fn wall_sprite(&self, health: u32) -> &str {
        self.walls_by_health
            .get(&health)
            .map(String::as_str)
            .unwrap_or(&self.wall_default)
    }

    pub fn ground_sprite(&self) -> &str {
        &self.ground
    }

    pub fn grass_sprite(&self) -> &str {
        &self.grass
    }

    pub fn start_sprite(&self) -> &str {
        &self.start
    }
}
