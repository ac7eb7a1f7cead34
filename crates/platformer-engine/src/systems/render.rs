use crate::api::types::Tag;
use crate::assets::registry::TextureRegistry;
use crate::core::scene::Scene;
use crate::renderer::instance::{DrawBuffer, DrawInstance};

/// Build the draw buffer from a scene.
/// Static sprites (tiles) go first in tag order, then animated sprites.
/// Sets `static_split` at the boundary.
pub fn build_draw_buffer(scene: &Scene, textures: &TextureRegistry, buffer: &mut DrawBuffer) {
    buffer.clear();

    let mut statics: Vec<(&Tag, _)> = scene.renders.iter().collect();
    statics.sort_by(|a, b| a.0.cmp(b.0));
    for (tag, render) in statics {
        let Some(pos) = scene.positions.get(tag) else {
            log::warn!("'{}' has a render component but no position", tag);
            continue;
        };
        let Some(texture) = textures.get(&render.texture_name) else {
            log::warn!("unknown texture '{}' on '{}'", render.texture_name, tag);
            continue;
        };
        buffer.push(DrawInstance::sprite(pos.x, pos.y, texture.0));
    }

    buffer.set_static_split(buffer.instance_count());

    let mut animated: Vec<(&Tag, _)> = scene.animations.iter().collect();
    animated.sort_by(|a, b| a.0.cmp(b.0));
    for (tag, anim) in animated {
        let Some(pos) = scene.positions.get(tag) else {
            log::warn!("'{}' has an animation but no position", tag);
            continue;
        };
        let (Some(def), Some(frame)) = (anim.current_def(), anim.current_frame()) else {
            continue;
        };
        let Some(texture) = textures.get(&def.texture_name) else {
            log::warn!("unknown texture '{}' on '{}'", def.texture_name, tag);
            continue;
        };
        let facing_right = scene.movements.get(tag).map_or(true, |m| m.is_facing_right);

        buffer.push(DrawInstance {
            frame: frame as f32,
            frame_count: def.frame_count.max(1) as f32,
            scale: anim.scale,
            flip_x: if facing_right { 0.0 } else { 1.0 },
            ..DrawInstance::sprite(pos.x, pos.y, texture.0)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::manifest::{AssetManifest, TextureDescriptor};
    use crate::components::animation::{AnimationComponent, AnimationDef, AnimationState};
    use crate::components::movement::Movement;
    use crate::components::render::RenderComponent;
    use glam::Vec2;

    fn registry() -> TextureRegistry {
        TextureRegistry::from_manifest(&AssetManifest {
            textures: vec![
                TextureDescriptor::new("tile_winter_ground_1", "ground1.png"),
                TextureDescriptor::new("pink_monster_idle", "idle.png").with_frames(4),
            ],
        })
    }

    #[test]
    fn statics_come_before_animated() {
        let mut scene = Scene::new();
        let mut movement = Movement::default();
        movement.is_facing_right = false;
        scene
            .spawn("player")
            .with_position(Vec2::new(400.0, 300.0))
            .with_movement(movement)
            .with_animation(
                AnimationComponent::new(1.3)
                    .with_state(AnimationState::Idle, AnimationDef::strip("pink_monster_idle", 4, 0.4)),
            );
        for (tag, x) in [("tile_1_11", 50.0), ("tile_0_11", 0.0)] {
            scene
                .spawn(tag)
                .with_position(Vec2::new(x, 550.0))
                .with_render(RenderComponent::new("tile_winter_ground_1"));
        }

        let mut buffer = DrawBuffer::new();
        build_draw_buffer(&scene, &registry(), &mut buffer);

        assert_eq!(buffer.instance_count(), 3);
        assert_eq!(buffer.static_split, 2);
        assert_eq!(buffer.instances[0].x, 0.0);
        assert_eq!(buffer.instances[1].x, 50.0);

        let player = buffer.instances[2];
        assert_eq!(player.texture, 1.0);
        assert_eq!(player.frame_count, 4.0);
        assert_eq!(player.flip_x, 1.0);
        assert!((player.scale - 1.3).abs() < 1e-6);
    }

    #[test]
    fn unknown_textures_are_skipped() {
        let mut scene = Scene::new();
        scene
            .spawn("tile_0_0")
            .with_position(Vec2::ZERO)
            .with_render(RenderComponent::new("tile_missing"));

        let mut buffer = DrawBuffer::new();
        build_draw_buffer(&scene, &registry(), &mut buffer);
        assert_eq!(buffer.instance_count(), 0);
    }
}
