use platformer_engine::{EditorScene, EngineContext, Game, GameConfig, InputState, LevelError};

/// The editor on its own: paint tiles, export the level as JSON.
pub struct LevelEditorGame {
    scene: EditorScene,
}

impl LevelEditorGame {
    pub fn new() -> Self {
        Self {
            scene: EditorScene::new(&GameConfig::default()),
        }
    }
}

impl Default for LevelEditorGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for LevelEditorGame {
    fn init(&mut self, ctx: &mut EngineContext) {
        self.scene = EditorScene::new(&ctx.config);
        self.scene.spawn(ctx);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputState, _dt: f32) {
        self.scene.update(ctx, input);
    }

    fn export_level(&self) -> Option<String> {
        self.scene
            .export_json()
            .map_err(|err| log::error!("level export failed: {}", err))
            .ok()
    }

    fn import_level(&mut self, ctx: &mut EngineContext, json: &str) -> Result<(), LevelError> {
        let count = self.scene.import_json(ctx, json)?;
        log::info!("imported level with {} tiles", count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use platformer_engine::{InputEvent, LevelDocument};

    fn click(x: f32, y: f32) -> InputState {
        let mut input = InputState::new();
        input.apply(&[InputEvent::PointerDown { x, y }]);
        input
    }

    #[test]
    fn painted_tiles_are_exported() {
        let mut game = LevelEditorGame::new();
        let mut ctx = EngineContext::new();
        game.init(&mut ctx);

        game.update(&mut ctx, &click(10.0, 560.0), 1.0 / 60.0);
        game.update(&mut ctx, &click(60.0, 560.0), 1.0 / 60.0);
        // Outside both grid and picker
        game.update(&mut ctx, &click(950.0, 10.0), 1.0 / 60.0);

        let doc = LevelDocument::from_json(&game.export_level().unwrap()).unwrap();
        assert_eq!(doc.tile_count(), 2);
        assert_eq!(doc.tile_map.tiles.len(), 12);
        assert_eq!(doc.tile_map.tiles[11][1].x, 50.0);
        assert_eq!(*ctx.scene.position("tile_1_11").unwrap(), Vec2::new(50.0, 550.0));
    }

    #[test]
    fn bad_import_is_reported() {
        let mut game = LevelEditorGame::new();
        let mut ctx = EngineContext::new();
        game.init(&mut ctx);
        assert!(game.import_level(&mut ctx, "[]").is_err());
    }
}
