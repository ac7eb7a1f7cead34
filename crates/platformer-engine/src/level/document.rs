//! JSON level format written by the editor and read by the level scene.
//!
//! ```json
//! { "tile_map": { "tiles": [[{ "x": 0, "y": 0, "texture_name": "" }, ...], ...] } }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::error::LevelError;

/// One grid cell. An empty `texture_name` marks an empty cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TileRecord {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub texture_name: String,
}

impl TileRecord {
    pub fn is_empty(&self) -> bool {
        self.texture_name.is_empty()
    }
}

/// Rows of cells, top row first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TileMapDocument {
    #[serde(default)]
    pub tiles: Vec<Vec<TileRecord>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LevelDocument {
    pub tile_map: TileMapDocument,
}

impl LevelDocument {
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of non-empty cells.
    pub fn tile_count(&self) -> usize {
        self.tile_map
            .tiles
            .iter()
            .flatten()
            .filter(|t| !t.is_empty())
            .count()
    }
}
