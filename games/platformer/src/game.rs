use platformer_engine::{
    EditorScene, EngineContext, Game, GameConfig, InputState, LevelDocument, LevelError, TileMap,
};

use crate::level::LevelScene;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveScene {
    Level,
    Editor,
}

/// The platformer: play the level, press E to edit it, press E again to play
/// the edited version.
pub struct Platformer {
    level: LevelScene,
    editor: EditorScene,
    active: ActiveScene,
    /// Whether E switches to the editor. On in debug builds.
    editor_toggle: bool,
}

impl Platformer {
    pub fn new() -> Self {
        let config = GameConfig::default();
        Self {
            level: LevelScene::new(&config),
            editor: EditorScene::new(&config),
            active: ActiveScene::Level,
            editor_toggle: cfg!(debug_assertions),
        }
    }

    pub fn with_editor_toggle(mut self, enabled: bool) -> Self {
        self.editor_toggle = enabled;
        self
    }

    pub fn active(&self) -> ActiveScene {
        self.active
    }

    pub fn level(&self) -> &LevelScene {
        &self.level
    }

    fn enter(&mut self, ctx: &mut EngineContext, scene: ActiveScene) {
        match scene {
            ActiveScene::Level => {
                if let Err(err) = self.level.spawn(ctx) {
                    log::error!("level failed to spawn: {}", err);
                }
            }
            ActiveScene::Editor => self.editor.spawn(ctx),
        }
        self.active = scene;
        log::info!("switched to {:?}", scene);
    }

    fn toggle(&mut self, ctx: &mut EngineContext) {
        match self.active {
            ActiveScene::Level => {
                self.editor.set_tile_map(self.level.tile_map().clone());
                self.enter(ctx, ActiveScene::Editor);
            }
            ActiveScene::Editor => {
                self.level.set_tile_map(self.editor.tile_map().clone());
                self.enter(ctx, ActiveScene::Level);
            }
        }
    }
}

impl Default for Platformer {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Platformer {
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.level = LevelScene::new(&ctx.config);
        self.editor = EditorScene::new(&ctx.config);
        self.enter(ctx, ActiveScene::Level);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputState, _dt: f32) {
        if self.editor_toggle && input.toggle_pressed() {
            self.toggle(ctx);
            return;
        }

        match self.active {
            ActiveScene::Level => {
                if let Err(err) = self.level.handle_input(&mut ctx.scene, input) {
                    log::error!("{}", err);
                }
            }
            ActiveScene::Editor => {
                self.editor.update(ctx, input);
            }
        }
    }

    fn export_level(&self) -> Option<String> {
        let json = match self.active {
            ActiveScene::Level => self.level.export_json(),
            ActiveScene::Editor => self.editor.export_json(),
        };
        json.map_err(|err| log::error!("level export failed: {}", err)).ok()
    }

    /// Load a level into both scenes and restart the active one.
    fn import_level(&mut self, ctx: &mut EngineContext, json: &str) -> Result<(), LevelError> {
        let document = LevelDocument::from_json(json)?;
        let tile_map = TileMap::from_document(
            &document.tile_map,
            ctx.config.tiles_x(),
            ctx.config.tiles_y(),
            ctx.config.tile_size,
        )?;
        log::info!("imported level with {} tiles", tile_map.tile_count());

        self.editor.set_tile_map(tile_map.clone());
        self.level.set_tile_map(tile_map);
        self.enter(ctx, self.active);
        Ok(())
    }
}
