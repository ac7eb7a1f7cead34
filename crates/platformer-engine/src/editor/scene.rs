//! Editor glue: mirrors the editing grid and the picker into scene entities
//! so the regular draw buffer shows them.

use crate::api::game::{EngineContext, GameConfig};
use crate::api::types::Tag;
use crate::components::render::RenderComponent;
use crate::components::tilemap::TileMap;
use crate::core::error::LevelError;
use crate::editor::{EditOutcome, LevelEditor};
use crate::input::state::InputState;
use crate::level::tile_tag;

/// Tag of the entity drawing picker slot (x, y).
pub fn picker_tag(x: usize, y: usize) -> Tag {
    Tag(format!("picker_{}_{}", x, y))
}

#[derive(Debug, Clone)]
pub struct EditorScene {
    editor: LevelEditor,
    /// Registry size the picker was last filled from.
    picker_source_len: usize,
}

impl EditorScene {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            editor: LevelEditor::new(config),
            picker_source_len: 0,
        }
    }

    pub fn editor(&self) -> &LevelEditor {
        &self.editor
    }

    pub fn tile_map(&self) -> &TileMap {
        self.editor.tile_map()
    }

    pub fn set_tile_map(&mut self, tile_map: TileMap) {
        self.editor.set_tile_map(tile_map);
    }

    /// Replace the engine scene with the grid tiles and the picker.
    /// Editor entities have no collision boxes, so physics leaves them alone.
    pub fn spawn(&mut self, ctx: &mut EngineContext) {
        ctx.scene.clear();
        for (x, y, tile) in self.editor.tile_map().iter_tiles() {
            ctx.scene
                .spawn(tile_tag(x, y))
                .with_position(tile.pos())
                .with_render(RenderComponent::new(tile.texture_name.as_str()));
        }
        self.refresh_picker(ctx);
    }

    /// One editor tick: keep the picker in step with the texture registry,
    /// then apply a click if there was one.
    pub fn update(&mut self, ctx: &mut EngineContext, input: &InputState) -> Option<EditOutcome> {
        if ctx.textures.len() != self.picker_source_len {
            self.refresh_picker(ctx);
        }
        if !input.mouse_clicked() {
            return None;
        }

        let outcome = self.editor.handle_click(input.mouse_position());
        match &outcome {
            EditOutcome::Placed { x, y } | EditOutcome::Erased { x, y } => self.sync_cell(ctx, *x, *y),
            EditOutcome::Selected(brush) => log::debug!("brush is now {:?}", brush),
            EditOutcome::Rejected => {}
        }
        Some(outcome)
    }

    pub fn export_json(&self) -> Result<String, LevelError> {
        self.editor.export_json()
    }

    pub fn import_json(&mut self, ctx: &mut EngineContext, json: &str) -> Result<usize, LevelError> {
        let count = self.editor.import_json(json)?;
        self.spawn(ctx);
        Ok(count)
    }

    fn sync_cell(&self, ctx: &mut EngineContext, x: usize, y: usize) {
        let tag = tile_tag(x, y);
        match self.editor.tile_map().get_tile(x, y) {
            Some(tile) => {
                ctx.scene
                    .spawn(tag)
                    .with_position(tile.pos())
                    .with_render(RenderComponent::new(tile.texture_name.as_str()));
            }
            None => {
                ctx.scene.despawn(&tag);
            }
        }
    }

    fn refresh_picker(&mut self, ctx: &mut EngineContext) {
        let old = self.editor.picker().tile_map();
        let stale: Vec<Tag> = old.iter_tiles().map(|(x, y, _)| picker_tag(x, y)).collect();
        for tag in &stale {
            ctx.scene.despawn(tag);
        }

        self.editor.populate_picker(&ctx.textures);
        self.picker_source_len = ctx.textures.len();

        for (x, y, tile) in self.editor.picker().tile_map().iter_tiles() {
            ctx.scene
                .spawn(picker_tag(x, y))
                .with_position(tile.pos())
                .with_render(RenderComponent::new(tile.texture_name.as_str()));
        }
    }
}
