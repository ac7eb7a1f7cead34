//! Grid of placed tiles, as painted in the level editor.
//!
//! Tiles are stored in row-major order: index = y * width + x.

use glam::Vec2;

use crate::core::error::LevelError;
use crate::level::document::{TileMapDocument, TileRecord};

/// A placed tile: its pixel position and texture.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub x: f32,
    pub y: f32,
    pub texture_name: String,
}

impl Tile {
    pub fn new(pos: Vec2, texture_name: impl Into<String>) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            texture_name: texture_name.into(),
        }
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TileMap {
    /// Width of the map in tiles.
    pub width: usize,
    /// Height of the map in tiles.
    pub height: usize,
    /// Edge length of a tile in pixels.
    pub tile_size: f32,
    /// Top-left corner of tile (0, 0) in pixels.
    pub origin: Vec2,
    tiles: Vec<Option<Tile>>,
}

impl TileMap {
    pub fn new(width: usize, height: usize, tile_size: f32) -> Self {
        Self {
            width,
            height,
            tile_size,
            origin: Vec2::ZERO,
            tiles: vec![None; width * height],
        }
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn is_in_bounds(&self, tile_x: usize, tile_y: usize) -> bool {
        tile_x < self.width && tile_y < self.height
    }

    /// Place a tile. Returns false, leaving the map untouched, when the
    /// coordinates are outside the grid.
    pub fn add_tile(&mut self, tile_x: usize, tile_y: usize, pos: Vec2, texture_name: impl Into<String>) -> bool {
        if !self.is_in_bounds(tile_x, tile_y) {
            return false;
        }
        let tile = Tile::new(pos, texture_name);
        log::debug!("adding tile '{}' at ({}, {})", tile.texture_name, tile_x, tile_y);
        self.tiles[tile_y * self.width + tile_x] = Some(tile);
        true
    }

    /// Place a tile at the grid cell's own pixel position.
    pub fn paint(&mut self, tile_x: usize, tile_y: usize, texture_name: impl Into<String>) -> bool {
        let pos = self.tile_to_world(tile_x, tile_y);
        self.add_tile(tile_x, tile_y, pos, texture_name)
    }

    /// Clear a cell. Returns true if a tile was removed.
    pub fn remove_tile(&mut self, tile_x: usize, tile_y: usize) -> bool {
        if !self.is_in_bounds(tile_x, tile_y) {
            return false;
        }
        self.tiles[tile_y * self.width + tile_x].take().is_some()
    }

    pub fn get_tile(&self, tile_x: usize, tile_y: usize) -> Option<&Tile> {
        if !self.is_in_bounds(tile_x, tile_y) {
            return None;
        }
        self.tiles[tile_y * self.width + tile_x].as_ref()
    }

    /// Grid cell containing a pixel position, if any.
    pub fn world_to_tile(&self, world_pos: Vec2) -> Option<(usize, usize)> {
        let local = world_pos - self.origin;
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        let tx = (local.x / self.tile_size) as usize;
        let ty = (local.y / self.tile_size) as usize;
        self.is_in_bounds(tx, ty).then_some((tx, ty))
    }

    /// Top-left pixel position of a grid cell.
    pub fn tile_to_world(&self, tile_x: usize, tile_y: usize) -> Vec2 {
        self.origin + Vec2::new(tile_x as f32 * self.tile_size, tile_y as f32 * self.tile_size)
    }

    /// Placed tiles with their grid coordinates, row by row.
    pub fn iter_tiles(&self) -> impl Iterator<Item = (usize, usize, &Tile)> {
        let width = self.width;
        self.tiles
            .iter()
            .enumerate()
            .filter_map(move |(i, t)| t.as_ref().map(|t| (i % width, i / width, t)))
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_some()).count()
    }

    pub fn capacity(&self) -> usize {
        self.width * self.height
    }

    pub fn clear(&mut self) {
        self.tiles.fill(None);
    }

    /// Every cell, including empty ones (written with an empty texture name).
    pub fn to_document(&self) -> TileMapDocument {
        let tiles = (0..self.height)
            .map(|ty| {
                (0..self.width)
                    .map(|tx| match self.get_tile(tx, ty) {
                        Some(tile) => TileRecord {
                            x: tile.x,
                            y: tile.y,
                            texture_name: tile.texture_name.clone(),
                        },
                        None => TileRecord::default(),
                    })
                    .collect()
            })
            .collect();
        TileMapDocument { tiles }
    }

    /// Rebuild a map of the given shape from a document. Records with an empty
    /// texture name are empty cells; a non-empty record outside the grid fails.
    pub fn from_document(
        document: &TileMapDocument,
        width: usize,
        height: usize,
        tile_size: f32,
    ) -> Result<Self, LevelError> {
        let mut map = Self::new(width, height, tile_size);
        for (ty, row) in document.tiles.iter().enumerate() {
            for (tx, record) in row.iter().enumerate() {
                if record.is_empty() {
                    continue;
                }
                if !map.add_tile(tx, ty, Vec2::new(record.x, record.y), record.texture_name.as_str()) {
                    return Err(LevelError::TileOutOfBounds { x: tx, y: ty, width, height });
                }
            }
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_map_is_empty() {
        let tm = TileMap::new(16, 12, 50.0);
        assert_eq!(tm.tile_count(), 0);
        assert_eq!(tm.capacity(), 192);
    }

    #[test]
    fn add_and_get_tile() {
        let mut tm = TileMap::new(5, 5, 16.0);
        assert!(tm.add_tile(2, 3, Vec2::new(32.0, 48.0), "tile_winter_ice"));
        let tile = tm.get_tile(2, 3).unwrap();
        assert_eq!(tile.texture_name, "tile_winter_ice");
        assert_eq!(tile.pos(), Vec2::new(32.0, 48.0));
        assert_eq!(tm.tile_count(), 1);
    }

    #[test]
    fn out_of_bounds_placement_reports_false() {
        let mut tm = TileMap::new(5, 5, 16.0);
        assert!(!tm.add_tile(5, 0, Vec2::ZERO, "tile"));
        assert!(!tm.add_tile(0, 5, Vec2::ZERO, "tile"));
        assert_eq!(tm.tile_count(), 0);
        assert!(tm.get_tile(10, 10).is_none());
    }

    #[test]
    fn remove_tile_clears_cell() {
        let mut tm = TileMap::new(4, 4, 10.0);
        tm.paint(1, 1, "tile_winter_ground_1");
        assert!(tm.remove_tile(1, 1));
        assert!(!tm.remove_tile(1, 1));
        assert_eq!(tm.tile_count(), 0);
    }

    #[test]
    fn world_and_tile_coordinates() {
        let tm = TileMap::new(10, 10, 32.0).with_origin(Vec2::new(100.0, 200.0));
        assert_eq!(tm.world_to_tile(Vec2::new(100.0, 200.0)), Some((0, 0)));
        assert_eq!(tm.world_to_tile(Vec2::new(276.0, 376.0)), Some((5, 5)));
        assert!(tm.world_to_tile(Vec2::new(50.0, 50.0)).is_none());
        assert!(tm.world_to_tile(Vec2::new(100.0 + 320.0, 210.0)).is_none());
        assert_eq!(tm.tile_to_world(1, 2), Vec2::new(132.0, 264.0));
    }

    #[test]
    fn document_keeps_empty_cells() {
        let mut tm = TileMap::new(3, 2, 50.0);
        tm.paint(1, 0, "tile_winter_ice");
        let doc = tm.to_document();
        assert_eq!(doc.tiles.len(), 2);
        assert_eq!(doc.tiles[0].len(), 3);
        assert_eq!(doc.tiles[0][1].texture_name, "tile_winter_ice");
        assert_eq!(doc.tiles[0][1].x, 50.0);
        assert!(doc.tiles[1][2].is_empty());

        let back = TileMap::from_document(&doc, 3, 2, 50.0).unwrap();
        assert_eq!(back, tm);
    }

    #[test]
    fn document_larger_than_map_is_rejected() {
        let mut tm = TileMap::new(4, 1, 50.0);
        tm.paint(3, 0, "tile_winter_ice");
        let err = TileMap::from_document(&tm.to_document(), 2, 1, 50.0).unwrap_err();
        assert!(matches!(err, LevelError::TileOutOfBounds { x: 3, y: 0, .. }));
    }

    #[test]
    fn iter_tiles_yields_grid_coordinates() {
        let mut tm = TileMap::new(3, 3, 10.0);
        tm.paint(2, 0, "a");
        tm.paint(0, 2, "b");
        let placed: Vec<_> = tm.iter_tiles().map(|(x, y, t)| (x, y, t.texture_name.clone())).collect();
        assert_eq!(placed, vec![(2, 0, "a".to_string()), (0, 2, "b".to_string())]);
    }
}
