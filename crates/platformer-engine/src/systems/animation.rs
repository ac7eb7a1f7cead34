//! Animation systems: pick each entity's strip from its movement, then
//! advance the frame timers.

use crate::components::animation::AnimationState;
use crate::core::scene::Scene;

/// Running while moving horizontally on the ground, idle otherwise.
pub fn animation_state_for(velocity_x: f32, is_grounded: bool) -> AnimationState {
    if velocity_x != 0.0 && is_grounded {
        AnimationState::Running
    } else {
        AnimationState::Idle
    }
}

/// Update every animated entity that also moves.
/// Entities without a movement record keep their current state.
pub fn update_animation_states(scene: &mut Scene) {
    for (tag, anim) in scene.animations.iter_mut() {
        let Some(movement) = scene.movements.get(tag) else {
            continue;
        };
        let state = animation_state_for(movement.velocity.x, movement.is_grounded);
        anim.set_state(state);
        if anim.current_def().is_none() {
            log::warn!("'{}' has no animation for state {:?}", tag, state);
        }
    }
}

/// Advance all entity animations by `dt` seconds.
pub fn tick_animations(scene: &mut Scene, dt: f32) {
    for anim in scene.animations.values_mut() {
        anim.tick(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::animation::{AnimationComponent, AnimationDef};
    use crate::components::movement::Movement;
    use glam::Vec2;

    fn spawn_player(scene: &mut Scene, movement: Movement) {
        scene
            .spawn("player")
            .with_position(Vec2::ZERO)
            .with_movement(movement)
            .with_animation(
                AnimationComponent::new(1.3)
                    .with_state(AnimationState::Idle, AnimationDef::strip("pink_monster_idle", 4, 0.4))
                    .with_state(AnimationState::Running, AnimationDef::strip("pink_monster_run", 6, 0.1)),
            );
    }

    #[test]
    fn state_rule() {
        assert_eq!(animation_state_for(1.0, true), AnimationState::Running);
        assert_eq!(animation_state_for(-1.0, true), AnimationState::Running);
        assert_eq!(animation_state_for(1.0, false), AnimationState::Idle);
        assert_eq!(animation_state_for(0.0, true), AnimationState::Idle);
    }

    #[test]
    fn grounded_walker_runs() {
        let mut scene = Scene::new();
        let mut movement = Movement::default().with_velocity(Vec2::new(0.5, 0.0));
        movement.is_grounded = true;
        spawn_player(&mut scene, movement);

        update_animation_states(&mut scene);
        assert_eq!(scene.animation("player").unwrap().state, AnimationState::Running);

        scene.movement_mut("player").unwrap().is_grounded = false;
        update_animation_states(&mut scene);
        assert_eq!(scene.animation("player").unwrap().state, AnimationState::Idle);
    }

    #[test]
    fn tick_advances_frames() {
        let mut scene = Scene::new();
        spawn_player(&mut scene, Movement::default());

        tick_animations(&mut scene, 0.45);
        assert_eq!(scene.animation("player").unwrap().current_frame(), Some(1));
    }

    #[test]
    fn entity_without_movement_is_left_alone() {
        let mut scene = Scene::new();
        scene.spawn("flag").with_position(Vec2::ZERO).with_animation(
            AnimationComponent::new(1.0)
                .with_state(AnimationState::Running, AnimationDef::strip("flag_wave", 3, 0.2))
                .with_state(AnimationState::Idle, AnimationDef::strip("flag_still", 1, 1.0)),
        );
        scene.animation_mut("flag").unwrap().set_state(AnimationState::Running);

        update_animation_states(&mut scene);
        assert_eq!(scene.animation("flag").unwrap().state, AnimationState::Running);
    }
}
