//! Level persistence and materialisation into scene entities.

pub mod document;

use crate::api::types::Tag;
use crate::components::collision::CollisionBox;
use crate::components::render::RenderComponent;
use crate::components::tilemap::TileMap;
use crate::core::scene::Scene;

pub use document::{LevelDocument, TileMapDocument, TileRecord};

/// Tag given to the entity spawned for grid cell (x, y).
pub fn tile_tag(tile_x: usize, tile_y: usize) -> Tag {
    Tag(format!("tile_{}_{}", tile_x, tile_y))
}

/// Spawn one static, colliding, drawable entity per placed tile.
/// Returns the number of entities spawned.
pub fn spawn_level(scene: &mut Scene, tile_map: &TileMap) -> usize {
    let mut spawned = 0;
    for (tx, ty, tile) in tile_map.iter_tiles() {
        scene
            .spawn(tile_tag(tx, ty))
            .with_position(tile.pos())
            .with_collision(CollisionBox::square(tile_map.tile_size))
            .with_render(RenderComponent::new(tile.texture_name.as_str()));
        spawned += 1;
    }
    log::info!("spawned {} level tiles", spawned);
    spawned
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn tiles_become_static_colliders() {
        let mut map = TileMap::new(4, 4, 50.0);
        map.paint(0, 3, "tile_winter_ground_1");
        map.paint(1, 3, "tile_winter_ground_1");

        let mut scene = Scene::new();
        assert_eq!(spawn_level(&mut scene, &map), 2);

        let tag = tile_tag(1, 3);
        assert_eq!(*scene.position(&tag).unwrap(), Vec2::new(50.0, 150.0));
        assert_eq!(scene.collision(&tag).unwrap().width, 50.0);
        assert_eq!(scene.render(&tag).unwrap().texture_name, "tile_winter_ground_1");
        assert!(scene.movement(&tag).is_err());
        assert!(scene.validate().is_ok());
    }
}
