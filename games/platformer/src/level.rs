//! The playable level: a player on a floor of tiles.

use glam::Vec2;
use platformer_engine::{
    spawn_level, AnimationComponent, AnimationDef, AnimationState, CollisionBox, EngineContext, GameConfig,
    InputState, LevelDocument, LevelError, MissingComponent, Movement, Scene, TileMap,
};

pub const PLAYER_TAG: &str = "player";

/// Floor tiles either side of the world's centre.
const FLOOR_TILES: usize = 8;

const FLOOR_TEXTURE: &str = "tile_winter_ground_1";
const ICE_TEXTURE: &str = "tile_winter_ice";

const PLAYER_IDLE: &str = "pink_monster_idle";
const PLAYER_RUN: &str = "pink_monster_run";
const PLAYER_SCALE: f32 = 1.3;

/// Enough for a jump of roughly one tile.
const PLAYER_JUMP_FORCE: f32 = 900.0;

/// Per-tick velocity kept while no direction is held on the ground.
const STOPPING_FACTOR: f32 = 0.9;

pub fn player_movement() -> Movement {
    Movement::default().with_jump_force(PLAYER_JUMP_FORCE)
}

/// Hitbox narrower than the sprite, inset 10px from its left edge.
pub fn player_collision() -> CollisionBox {
    CollisionBox::new(20.0, 40.0).with_offset(Vec2::new(10.0, 0.0))
}

pub fn player_animation() -> AnimationComponent {
    AnimationComponent::new(PLAYER_SCALE)
        .with_state(AnimationState::Idle, AnimationDef::strip(PLAYER_IDLE, 4, 0.4))
        .with_state(AnimationState::Running, AnimationDef::strip(PLAYER_RUN, 6, 0.1))
}

/// Starting level: a floor strip along the bottom row, centred, with one
/// ice block on top of it in the middle to walk into.
pub fn default_level(config: &GameConfig) -> TileMap {
    let size = config.tile_size;
    let mut map = TileMap::new(config.tiles_x(), config.tiles_y(), size);
    let bottom = map.height.saturating_sub(1);
    let first = (map.width / 2).saturating_sub(FLOOR_TILES / 2);
    for tx in first..first + FLOOR_TILES {
        map.paint(tx, bottom, FLOOR_TEXTURE);
    }

    let centre = Vec2::new(config.world_width / 2.0 - size / 2.0, config.world_height - size * 2.0);
    if let Some((tx, ty)) = map.world_to_tile(centre) {
        map.add_tile(tx, ty, centre, ICE_TEXTURE);
    }
    map
}

/// Translate held keys into the player's movement intent for this tick.
///
/// Walking and jumping only start from the ground. With no direction held the
/// player slows down on its own on top of the engine's friction.
pub fn apply_player_input(movement: &mut Movement, input: &InputState) {
    let walk = movement.walk_acceleration();

    if input.is_right() && movement.is_grounded {
        movement.acceleration.x = walk;
        movement.is_facing_right = true;
    } else if input.is_left() && movement.is_grounded {
        movement.acceleration.x = -walk;
        movement.is_facing_right = false;
    } else {
        movement.acceleration.x = 0.0;
        if movement.is_grounded {
            movement.velocity.x *= STOPPING_FACTOR;
        }
    }

    if input.is_jump() && movement.is_grounded {
        movement.acceleration.y = movement.jump_force;
    } else if movement.acceleration.y > 0.0 {
        movement.acceleration.y = 0.0;
    }
}

#[derive(Debug, Clone)]
pub struct LevelScene {
    tile_map: TileMap,
}

impl LevelScene {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            tile_map: default_level(config),
        }
    }

    pub fn tile_map(&self) -> &TileMap {
        &self.tile_map
    }

    pub fn set_tile_map(&mut self, tile_map: TileMap) {
        self.tile_map = tile_map;
    }

    /// Replace the engine scene with the player and this level's tiles.
    pub fn spawn(&self, ctx: &mut EngineContext) -> Result<(), MissingComponent> {
        let scene = &mut ctx.scene;
        scene.clear();
        spawn_player(scene, Vec2::new(ctx.config.world_width / 2.0, ctx.config.world_height / 2.0));
        spawn_level(scene, &self.tile_map);
        scene.validate()
    }

    pub fn handle_input(&self, scene: &mut Scene, input: &InputState) -> Result<(), MissingComponent> {
        let movement = scene.movement_mut(PLAYER_TAG)?;
        apply_player_input(movement, input);
        Ok(())
    }

    pub fn export_json(&self) -> Result<String, LevelError> {
        LevelDocument {
            tile_map: self.tile_map.to_document(),
        }
        .to_json()
    }
}

fn spawn_player(scene: &mut Scene, position: Vec2) {
    scene
        .spawn(PLAYER_TAG)
        .with_position(position)
        .with_collision(player_collision())
        .with_movement(player_movement())
        .with_animation(player_animation());
}
