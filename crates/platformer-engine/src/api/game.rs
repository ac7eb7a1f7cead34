use serde::{Deserialize, Serialize};

use crate::assets::manifest::AssetManifest;
use crate::assets::registry::TextureRegistry;
use crate::core::error::{ConfigError, LevelError};
use crate::core::physics::{CollisionPair, PhysicsConfig, PhysicsSystem};
use crate::core::scene::Scene;
use crate::core::time::DEFAULT_MAX_STEPS;
use crate::input::state::InputState;
use crate::renderer::instance::{DrawBuffer, DrawInstance};
use crate::systems::animation::{tick_animations, update_animation_states};

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Cap on fixed steps per frame (default: 10).
    pub max_steps_per_frame: u32,
    /// World width in pixels.
    pub world_width: f32,
    /// World height in pixels.
    pub world_height: f32,
    /// Edge length of a level tile in pixels (default: 50).
    pub tile_size: f32,
    /// Width of the editor's tile picker column, right of the world.
    pub tile_picker_width: f32,
    /// Maximum number of draw instances (default: 512).
    pub max_instances: usize,
    pub physics: PhysicsConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_steps_per_frame: DEFAULT_MAX_STEPS,
            world_width: 800.0,
            world_height: 600.0,
            tile_size: 50.0,
            tile_picker_width: 200.0,
            max_instances: 512,
            physics: PhysicsConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse a config, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fixed_dt > 0.0) {
            return Err(ConfigError::InvalidTimestep(self.fixed_dt));
        }
        if !(self.tile_size > 0.0) {
            return Err(ConfigError::InvalidTileSize(self.tile_size));
        }
        Ok(())
    }

    /// Level grid width in whole tiles.
    pub fn tiles_x(&self) -> usize {
        (self.world_width / self.tile_size) as usize
    }

    /// Level grid height in whole tiles.
    pub fn tiles_y(&self) -> usize {
        (self.world_height / self.tile_size) as usize
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed tick of game logic: read input, write movement intent.
    /// The runner steps physics and animations right after.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputState, dt: f32);

    /// Optional read-only render pass for extra draw instances.
    fn render(&self, _ctx: &mut RenderContext) {}

    /// Current level as JSON, if the game has one to save.
    fn export_level(&self) -> Option<String> {
        None
    }

    /// Replace the current level.
    fn import_level(&mut self, _ctx: &mut EngineContext, _json: &str) -> Result<(), LevelError> {
        log::warn!("this game does not import levels");
        Ok(())
    }
}

/// Mutable access to engine state, passed to Game::init and Game::update.
#[derive(Debug)]
pub struct EngineContext {
    pub scene: Scene,
    pub physics: PhysicsSystem,
    pub textures: TextureRegistry,
    pub config: GameConfig,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            scene: Scene::new(),
            physics: PhysicsSystem::new(config.physics),
            textures: TextureRegistry::new(),
            config,
        }
    }

    /// Swap in a new config; physics tunables follow it.
    pub fn set_config(&mut self, config: GameConfig) {
        self.physics.set_config(config.physics);
        self.config = config;
    }

    /// Run one physics tick over the scene.
    /// Called automatically by the game runner after `Game::update()`.
    pub fn step_physics(&mut self, dt: f32) {
        self.physics.step(&mut self.scene, dt);
    }

    /// Pick animation strips from movement, then advance frame timers.
    pub fn step_animations(&mut self, dt: f32) {
        update_animation_states(&mut self.scene);
        tick_animations(&mut self.scene, dt);
    }

    /// Contacts resolved during the most recent physics step.
    pub fn collisions(&self) -> &[CollisionPair] {
        self.physics.collisions()
    }

    /// Register every texture in a manifest. Returns the registry size.
    pub fn load_manifest(&mut self, json: &str) -> Result<usize, serde_json::Error> {
        let manifest = AssetManifest::from_json(json)?;
        for desc in manifest.textures {
            self.textures.insert(desc);
        }
        log::info!("texture registry holds {} textures", self.textures.len());
        Ok(self.textures.len())
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context for optional extra draw instances.
pub struct RenderContext<'a> {
    pub draw_buffer: &'a mut DrawBuffer,
    pub textures: &'a TextureRegistry,
}

impl RenderContext<'_> {
    /// Push a single-frame sprite by texture name. Returns false, drawing
    /// nothing, for unknown names.
    pub fn draw_sprite(&mut self, texture_name: &str, x: f32, y: f32) -> bool {
        match self.textures.get(texture_name) {
            Some(id) => {
                self.draw_buffer.push(DrawInstance::sprite(x, y, id.0));
                true
            }
            None => {
                log::warn!("unknown texture '{}'", texture_name);
                false
            }
        }
    }
}
