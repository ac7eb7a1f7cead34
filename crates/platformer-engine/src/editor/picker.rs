//! Column of selectable tiles drawn right of the editing grid.

use glam::Vec2;

use crate::api::game::GameConfig;
use crate::assets::registry::TextureRegistry;
use crate::components::tilemap::TileMap;

/// Textures with this prefix are offered in the picker.
pub const TILE_PREFIX: &str = "tile_";

/// Texture selected before the user picks anything.
pub const DEFAULT_TEXTURE: &str = "tile_winter_ice";

/// Slot left empty so clicking it selects the eraser.
pub const ERASER_SLOT: (usize, usize) = (0, 0);

/// What a click on the editing grid does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Brush {
    Paint(String),
    Erase,
}

#[derive(Debug, Clone)]
pub struct TilePicker {
    tile_map: TileMap,
    brush: Brush,
}

impl TilePicker {
    /// Lay the picker out from the config: `tile_picker_width` wide, starting
    /// at the world's right edge, one tile of margin above and below.
    pub fn new(config: &GameConfig) -> Self {
        let columns = (config.tile_picker_width / config.tile_size) as usize;
        let rows = ((config.world_height - 2.0 * config.tile_size) / config.tile_size).max(0.0) as usize;
        let origin = Vec2::new(config.world_width, config.tile_size);
        Self::with_layout(columns, rows, config.tile_size, origin)
    }

    pub fn with_layout(columns: usize, rows: usize, tile_size: f32, origin: Vec2) -> Self {
        Self {
            tile_map: TileMap::new(columns, rows, tile_size).with_origin(origin),
            brush: Brush::Paint(DEFAULT_TEXTURE.to_string()),
        }
    }

    /// Fill the slots after the eraser with every `tile_*` texture, row by
    /// row. Textures that do not fit are left out. Returns the slots filled.
    pub fn populate(&mut self, textures: &TextureRegistry) -> usize {
        self.tile_map.clear();
        let (width, height) = (self.tile_map.width, self.tile_map.height);
        let slots = (0..height)
            .flat_map(move |y| (0..width).map(move |x| (x, y)))
            .filter(|&slot| slot != ERASER_SLOT);

        let mut names = textures.names_with_prefix(TILE_PREFIX);
        let mut filled = 0;
        for ((x, y), name) in slots.zip(names.by_ref()) {
            self.tile_map.paint(x, y, name);
            filled += 1;
        }
        let left_out = names.count();
        if left_out > 0 {
            log::warn!("tile picker is full, {} textures not shown", left_out);
        }
        filled
    }

    pub fn contains(&self, mouse: Vec2) -> bool {
        self.tile_map.world_to_tile(mouse).is_some()
    }

    /// Change the brush from a click. Returns None, keeping the brush, when
    /// the click misses the picker or lands on an empty slot.
    pub fn select(&mut self, mouse: Vec2) -> Option<&Brush> {
        let slot = self.tile_map.world_to_tile(mouse)?;
        if slot == ERASER_SLOT {
            self.brush = Brush::Erase;
        } else {
            let tile = self.tile_map.get_tile(slot.0, slot.1)?;
            self.brush = Brush::Paint(tile.texture_name.clone());
        }
        log::debug!("picker selected {:?}", self.brush);
        Some(&self.brush)
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn tile_map(&self) -> &TileMap {
        &self.tile_map
    }
}
