//! Tile painting: an editing grid the size of the world plus a tile picker.

pub mod picker;
pub mod scene;

use glam::Vec2;

use crate::api::game::GameConfig;
use crate::assets::registry::TextureRegistry;
use crate::components::tilemap::TileMap;
use crate::core::error::LevelError;
use crate::level::document::LevelDocument;

pub use picker::{Brush, TilePicker};
pub use scene::EditorScene;

/// Result of one click in the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Placed { x: usize, y: usize },
    Erased { x: usize, y: usize },
    Selected(Brush),
    /// The click hit neither the grid nor a picker slot.
    Rejected,
}

#[derive(Debug, Clone)]
pub struct LevelEditor {
    tile_map: TileMap,
    picker: TilePicker,
}

impl LevelEditor {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            tile_map: TileMap::new(config.tiles_x(), config.tiles_y(), config.tile_size),
            picker: TilePicker::new(config),
        }
    }

    /// Start from an existing map instead of an empty grid.
    pub fn with_tile_map(mut self, tile_map: TileMap) -> Self {
        self.tile_map = tile_map;
        self
    }

    pub fn set_tile_map(&mut self, tile_map: TileMap) {
        self.tile_map = tile_map;
    }

    pub fn populate_picker(&mut self, textures: &TextureRegistry) -> usize {
        self.picker.populate(textures)
    }

    pub fn handle_click(&mut self, mouse: Vec2) -> EditOutcome {
        if let Some((x, y)) = self.tile_map.world_to_tile(mouse) {
            return match self.picker.brush() {
                Brush::Paint(name) => {
                    // In bounds: world_to_tile already checked.
                    self.tile_map.paint(x, y, name.as_str());
                    EditOutcome::Placed { x, y }
                }
                Brush::Erase => {
                    self.tile_map.remove_tile(x, y);
                    EditOutcome::Erased { x, y }
                }
            };
        }

        match self.picker.select(mouse) {
            Some(brush) => EditOutcome::Selected(brush.clone()),
            None => {
                log::warn!("click at ({}, {}) placed nothing", mouse.x, mouse.y);
                EditOutcome::Rejected
            }
        }
    }

    pub fn export_json(&self) -> Result<String, LevelError> {
        LevelDocument {
            tile_map: self.tile_map.to_document(),
        }
        .to_json()
    }

    /// Replace the grid with a saved level. The grid keeps its shape; a level
    /// with tiles outside it is rejected and the grid left untouched.
    /// Returns the number of tiles loaded.
    pub fn import_json(&mut self, json: &str) -> Result<usize, LevelError> {
        let document = LevelDocument::from_json(json)?;
        let tile_map = TileMap::from_document(
            &document.tile_map,
            self.tile_map.width,
            self.tile_map.height,
            self.tile_map.tile_size,
        )?;
        self.tile_map = tile_map;
        log::info!("editor loaded {} tiles", self.tile_map.tile_count());
        Ok(self.tile_map.tile_count())
    }

    pub fn tile_map(&self) -> &TileMap {
        &self.tile_map
    }

    pub fn picker(&self) -> &TilePicker {
        &self.picker
    }

    pub fn brush(&self) -> &Brush {
        self.picker.brush()
    }
}
