use std::collections::HashMap;

use crate::api::types::Tag;
use crate::components::animation::AnimationComponent;
use crate::components::collision::CollisionBox;
use crate::components::movement::Movement;
use crate::components::render::RenderComponent;
use crate::components::Position;
use crate::core::error::{ComponentKind, MissingComponent};

/// Tag-indexed component storage owned by a level.
///
/// Each map is independent; an entity is simply the set of maps holding its
/// tag. Designed for small entity counts (hundreds, not millions).
#[derive(Debug, Default)]
pub struct Scene {
    pub(crate) positions: HashMap<Tag, Position>,
    pub(crate) collisions: HashMap<Tag, CollisionBox>,
    pub(crate) movements: HashMap<Tag, Movement>,
    pub(crate) renders: HashMap<Tag, RenderComponent>,
    pub(crate) animations: HashMap<Tag, AnimationComponent>,
}

/// Inserts components for one tag. Returned by [`Scene::spawn`].
pub struct EntityBuilder<'a> {
    scene: &'a mut Scene,
    tag: Tag,
}

impl EntityBuilder<'_> {
    pub fn with_position(self, position: Position) -> Self {
        self.scene.positions.insert(self.tag.clone(), position);
        self
    }

    pub fn with_collision(self, collision: CollisionBox) -> Self {
        self.scene.collisions.insert(self.tag.clone(), collision);
        self
    }

    pub fn with_movement(self, movement: Movement) -> Self {
        self.scene.movements.insert(self.tag.clone(), movement);
        self
    }

    pub fn with_render(self, render: RenderComponent) -> Self {
        self.scene.renders.insert(self.tag.clone(), render);
        self
    }

    pub fn with_animation(self, animation: AnimationComponent) -> Self {
        self.scene.animations.insert(self.tag.clone(), animation);
        self
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }
}

fn lookup<'a, T>(map: &'a HashMap<Tag, T>, kind: ComponentKind, tag: &str) -> Result<&'a T, MissingComponent> {
    map.get(tag).ok_or_else(|| MissingComponent::new(kind, tag))
}

fn lookup_mut<'a, T>(
    map: &'a mut HashMap<Tag, T>,
    kind: ComponentKind,
    tag: &str,
) -> Result<&'a mut T, MissingComponent> {
    map.get_mut(tag).ok_or_else(|| MissingComponent::new(kind, tag))
}

/// Fetch a component the caller knows must exist. Panics naming the tag and
/// the calling location otherwise.
#[track_caller]
pub(crate) fn component_or_panic<'a, T>(map: &'a HashMap<Tag, T>, kind: ComponentKind, tag: &str) -> &'a T {
    match map.get(tag) {
        Some(component) => component,
        None => panic!(
            "{} at {}",
            MissingComponent::new(kind, tag),
            std::panic::Location::caller()
        ),
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start adding components for `tag`. Existing components are replaced.
    pub fn spawn(&mut self, tag: impl Into<Tag>) -> EntityBuilder<'_> {
        EntityBuilder {
            scene: self,
            tag: tag.into(),
        }
    }

    /// Remove every component stored under `tag`. Returns true if any existed.
    pub fn despawn(&mut self, tag: &str) -> bool {
        let mut removed = self.positions.remove(tag).is_some();
        removed |= self.collisions.remove(tag).is_some();
        removed |= self.movements.remove(tag).is_some();
        removed |= self.renders.remove(tag).is_some();
        removed |= self.animations.remove(tag).is_some();
        removed
    }

    pub fn position(&self, tag: &str) -> Result<&Position, MissingComponent> {
        lookup(&self.positions, ComponentKind::Position, tag)
    }

    pub fn position_mut(&mut self, tag: &str) -> Result<&mut Position, MissingComponent> {
        lookup_mut(&mut self.positions, ComponentKind::Position, tag)
    }

    pub fn collision(&self, tag: &str) -> Result<&CollisionBox, MissingComponent> {
        lookup(&self.collisions, ComponentKind::Collision, tag)
    }

    pub fn movement(&self, tag: &str) -> Result<&Movement, MissingComponent> {
        lookup(&self.movements, ComponentKind::Movement, tag)
    }

    pub fn movement_mut(&mut self, tag: &str) -> Result<&mut Movement, MissingComponent> {
        lookup_mut(&mut self.movements, ComponentKind::Movement, tag)
    }

    pub fn render(&self, tag: &str) -> Result<&RenderComponent, MissingComponent> {
        lookup(&self.renders, ComponentKind::Render, tag)
    }

    pub fn animation(&self, tag: &str) -> Result<&AnimationComponent, MissingComponent> {
        lookup(&self.animations, ComponentKind::Animation, tag)
    }

    pub fn animation_mut(&mut self, tag: &str) -> Result<&mut AnimationComponent, MissingComponent> {
        lookup_mut(&mut self.animations, ComponentKind::Animation, tag)
    }

    /// Check what the physics step relies on: every mover has a
    /// position and a collision box, every collider has a position.
    pub fn validate(&self) -> Result<(), MissingComponent> {
        for tag in self.movers() {
            self.position(&tag)?;
            self.collision(&tag)?;
        }
        for tag in self.collisions.keys() {
            self.position(tag)?;
        }
        Ok(())
    }

    /// Tags with a movement record, sorted so every tick visits them in the
    /// same order.
    pub fn movers(&self) -> Vec<Tag> {
        let mut tags: Vec<Tag> = self.movements.keys().cloned().collect();
        tags.sort();
        tags
    }

    pub fn positions(&self) -> impl Iterator<Item = (&Tag, &Position)> {
        self.positions.iter()
    }

    pub fn renders(&self) -> impl Iterator<Item = (&Tag, &RenderComponent)> {
        self.renders.iter()
    }

    pub fn animations(&self) -> impl Iterator<Item = (&Tag, &AnimationComponent)> {
        self.animations.iter()
    }

    /// Number of distinct tags holding a position.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
        self.collisions.clear();
        self.movements.clear();
        self.renders.clear();
        self.animations.clear();
    }
}
