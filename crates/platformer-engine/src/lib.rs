pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod assets;
pub mod level;
#[cfg(feature = "editor")]
pub mod editor;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{Tag, TextureId};
pub use core::error::{ComponentKind, ConfigError, LevelError, MissingComponent};
pub use core::geometry::Rect;
pub use core::physics::{
    Body, CollisionPair, Contact, PhysicsConfig, PhysicsSystem, VelocityResponse, GRAVITY,
};
pub use core::scene::{EntityBuilder, Scene};
pub use core::time::FixedTimestep;
pub use components::Position;
pub use components::animation::{AnimationComponent, AnimationDef, AnimationState};
pub use components::collision::CollisionBox;
pub use components::movement::Movement;
pub use components::render::RenderComponent;
pub use components::tilemap::{Tile, TileMap};
pub use renderer::instance::{DrawBuffer, DrawInstance};
pub use input::{keys, InputEvent, InputQueue, InputState};
pub use assets::manifest::{AssetManifest, TextureDescriptor};
pub use assets::registry::TextureRegistry;
pub use level::{spawn_level, tile_tag, LevelDocument};
pub use systems::animation::{tick_animations, update_animation_states};
pub use systems::render::build_draw_buffer;
#[cfg(feature = "editor")]
pub use editor::{Brush, EditOutcome, EditorScene, LevelEditor, TilePicker};
