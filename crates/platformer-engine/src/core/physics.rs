use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::types::Tag;
use crate::components::movement::Movement;
use crate::core::error::ComponentKind;
use crate::core::geometry::{self, Rect};
use crate::core::scene::{component_or_panic, Scene};

/// Downward acceleration in px/s², applied to airborne movers.
pub const GRAVITY: f32 = 300.0;

/// How far (in px) a collider's top edge may sit from a mover's feet and
/// still count as standing on it.
pub const DEFAULT_CONTACT_TOLERANCE: f32 = 0.01;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// What happens to the velocity component along a resolved axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VelocityResponse {
    /// Zero it.
    Stop,
    /// Remove the given fraction of it (e.g. 0.8 keeps 20%).
    Damp(f32),
}

impl VelocityResponse {
    fn apply(self, v: f32) -> f32 {
        match self {
            VelocityResponse::Stop => 0.0,
            VelocityResponse::Damp(factor) => v - v * factor,
        }
    }
}

/// Tunables for [`PhysicsSystem`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub contact_tolerance: f32,
    pub velocity_response: VelocityResponse,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            contact_tolerance: DEFAULT_CONTACT_TOLERANCE,
            velocity_response: VelocityResponse::Stop,
        }
    }
}

/// How a collider reacts to being hit by a mover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Body<'a> {
    Movable(&'a Movement),
    /// No movement record: infinite mass, never pushed.
    Static,
}

impl Body<'_> {
    pub fn mass(&self) -> f32 {
        match self {
            Body::Movable(movement) => movement.mass,
            Body::Static => f32::INFINITY,
        }
    }

    /// Fraction of the MTV the mover takes when it hits this body.
    /// Static bodies push back fully; movable ones split by mass. A non-finite
    /// mass counts as immovable on either side.
    pub fn push_share(&self, mover_mass: f32) -> f32 {
        match self {
            Body::Static => 1.0,
            Body::Movable(other) => match (mover_mass.is_finite(), other.mass.is_finite()) {
                (true, false) => 1.0,
                (false, true) => 0.0,
                (false, false) => 0.5,
                (true, true) => {
                    let total = mover_mass + other.mass;
                    if total > 0.0 {
                        other.mass / total
                    } else {
                        0.5
                    }
                }
            },
        }
    }
}

/// A collider found touching or penetrating a mover during the pair scan.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub collider: Tag,
    pub collider_rect: Rect,
    /// MTV at scan time. Zero for resting contacts.
    pub mtv: Vec2,
    pub direction: Vec2,
    /// Fraction of the MTV applied to the mover.
    pub share: f32,
    /// Touching from above without penetrating.
    pub resting: bool,
}

impl Contact {
    /// The collider is beneath the mover and the contact is vertical.
    pub fn grounds(&self) -> bool {
        let vertical = self.resting || self.mtv.y.abs() > self.mtv.x.abs();
        vertical && self.direction.y < 0.0
    }
}

/// A contact resolved during the most recent step.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionPair {
    pub mover: Tag,
    pub collider: Tag,
    /// Displacement actually applied to the mover.
    pub mtv: Vec2,
    pub resting: bool,
}

// ---------------------------------------------------------------------------
// PhysicsSystem
// ---------------------------------------------------------------------------

/// Steps every mover in a [`Scene`]: pair scan, penetration resolution,
/// grounding, velocity integration, position integration.
///
/// Movers are processed one at a time, each fully resolved before the next.
/// There is no iterative solving across movers, so simultaneous multi-body
/// contacts may be resolved inconsistently within one tick.
#[derive(Debug, Default)]
pub struct PhysicsSystem {
    config: PhysicsConfig,
    collision_events: Vec<CollisionPair>,
}

impl PhysicsSystem {
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            config,
            collision_events: Vec::new(),
        }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PhysicsConfig) {
        self.config = config;
    }

    /// Run one tick over every mover. `dt` is the frame time in seconds and
    /// stays constant for the whole tick.
    ///
    /// # Panics
    /// If a mover lacks a position or collision box, or a collider lacks a
    /// position. Call [`Scene::validate`] after spawning to catch this early.
    pub fn step(&mut self, scene: &mut Scene, dt: f32) {
        self.collision_events.clear();
        for tag in scene.movers() {
            self.step_mover(scene, &tag, dt);
        }
    }

    /// Contacts resolved during the most recent [`step`](Self::step).
    pub fn collisions(&self) -> &[CollisionPair] {
        &self.collision_events
    }

    fn step_mover(&mut self, scene: &mut Scene, tag: &Tag, dt: f32) {
        let contacts = find_contacts(scene, tag, self.config.contact_tolerance);
        let collision = *component_or_panic(&scene.collisions, ComponentKind::Collision, tag);

        let Some(movement) = scene.movements.get_mut(tag.as_str()) else {
            return;
        };
        let Some(position) = scene.positions.get_mut(tag.as_str()) else {
            return;
        };

        movement.is_grounded = contacts.iter().any(Contact::grounds);

        let applied = resolve_contacts(
            position,
            collision.rect(*position),
            movement,
            &contacts,
            self.config.velocity_response,
        );
        for (contact, mtv) in contacts.iter().zip(applied) {
            self.collision_events.push(CollisionPair {
                mover: tag.clone(),
                collider: contact.collider.clone(),
                mtv,
                resting: contact.resting,
            });
        }

        integrate_velocity(movement, self.config.gravity, dt);
        integrate_position(position, movement);
    }
}

// ---------------------------------------------------------------------------
// Tick stages
// ---------------------------------------------------------------------------

/// Scan every other collider against the mover `tag`.
///
/// Contacts come back deepest penetration first, resting contacts last.
///
/// # Panics
/// If the mover lacks a position or collision box, or a collider lacks a
/// position.
#[track_caller]
pub fn find_contacts(scene: &Scene, tag: &str, contact_tolerance: f32) -> Vec<Contact> {
    let position = *component_or_panic(&scene.positions, ComponentKind::Position, tag);
    let mover_box = component_or_panic(&scene.collisions, ComponentKind::Collision, tag);
    let mover_mass = scene.movements.get(tag).map_or(f32::INFINITY, |m| m.mass);
    let mover_rect = mover_box.rect(position);

    let mut colliders: Vec<(&Tag, _)> = scene.collisions.iter().filter(|(t, _)| t.as_str() != tag).collect();
    colliders.sort_by(|a, b| a.0.cmp(b.0));

    let mut contacts = Vec::new();
    for (collider_tag, collider_box) in colliders {
        let collider_pos = *component_or_panic(&scene.positions, ComponentKind::Position, collider_tag);
        let collider_rect = collider_box.rect(collider_pos);
        let body = match scene.movements.get(collider_tag.as_str()) {
            Some(movement) => Body::Movable(movement),
            None => Body::Static,
        };

        let overlap = geometry::overlap(&mover_rect, &collider_rect);
        if overlap != Vec2::ZERO {
            let direction = geometry::resolution_direction(&mover_rect, &collider_rect);
            contacts.push(Contact {
                collider: collider_tag.clone(),
                collider_rect,
                mtv: geometry::minimum_translation_vector(overlap, direction),
                direction,
                share: body.push_share(mover_mass),
                resting: false,
            });
            continue;
        }

        let gap = geometry::vertical_gap(&mover_rect, &collider_rect);
        if geometry::horizontal_overlap(&mover_rect, &collider_rect) > 0.0 && gap.abs() <= contact_tolerance {
            let direction = geometry::resolution_direction(&mover_rect, &collider_rect);
            contacts.push(Contact {
                collider: collider_tag.clone(),
                collider_rect,
                mtv: Vec2::ZERO,
                direction: Vec2::new(direction.x, -1.0),
                share: body.push_share(mover_mass),
                resting: true,
            });
        }
    }

    // A corner clipped on a neighbouring tile must not push the mover
    // sideways before the tile it is landing on lifts it.
    let depth = |contact: &Contact| {
        let overlap = geometry::overlap(&mover_rect, &contact.collider_rect);
        overlap.x * overlap.y
    };
    contacts.sort_by(|a, b| depth(b).total_cmp(&depth(a)));
    contacts
}

/// Push the mover out of each penetrating contact in turn and kill its motion
/// along the resolved axis. Returns the displacement applied per contact.
///
/// The MTV is recomputed from the mover's current rectangle, so a contact
/// already cleared by an earlier push is skipped.
pub fn resolve_contacts(
    position: &mut Vec2,
    mut mover_rect: Rect,
    movement: &mut Movement,
    contacts: &[Contact],
    response: VelocityResponse,
) -> Vec<Vec2> {
    let mut applied = Vec::with_capacity(contacts.len());
    for contact in contacts {
        if contact.resting {
            if movement.velocity.y > 0.0 {
                movement.velocity.y = response.apply(movement.velocity.y);
            }
            applied.push(Vec2::ZERO);
            continue;
        }

        let Some(mtv) = geometry::resolve_penetration(&mover_rect, &contact.collider_rect) else {
            applied.push(Vec2::ZERO);
            continue;
        };
        let push = mtv * contact.share;
        *position += push;
        mover_rect = mover_rect.translated(push);

        if mtv.x != 0.0 {
            movement.velocity.x = response.apply(movement.velocity.x);
            movement.acceleration.x = 0.0;
        }
        if mtv.y != 0.0 {
            movement.velocity.y = response.apply(movement.velocity.y);
            movement.acceleration.y = 0.0;
        }
        applied.push(push);
    }
    applied
}

/// Apply input acceleration, gravity, drag and friction for one tick.
/// Vertical first, then horizontal.
pub fn integrate_velocity(movement: &mut Movement, gravity: f32, dt: f32) {
    update_velocity_y(movement, gravity, dt);
    update_velocity_x(movement, dt);
}

/// Velocity is already per-tick, so it is added unscaled.
pub fn integrate_position(position: &mut Vec2, movement: &Movement) {
    *position += movement.velocity;
}

fn update_velocity_y(movement: &mut Movement, gravity: f32, dt: f32) {
    // Up is negative y: a positive jump acceleration lifts the mover.
    movement.velocity.y -= movement.acceleration.y * dt;

    if !movement.is_grounded {
        movement.velocity.y += gravity * dt;
        // Drag is a flat fraction per tick, deliberately not scaled by dt.
        movement.velocity.y -= movement.velocity.y * movement.drag;
    }
}

fn update_velocity_x(movement: &mut Movement, dt: f32) {
    movement.velocity.x += movement.acceleration.x * dt;
    movement.velocity.x -= movement.velocity.x * movement.drag;

    if movement.is_grounded {
        let friction = movement.friction_coefficient * dt;
        if movement.velocity.x > 0.0 {
            movement.velocity.x = (movement.velocity.x - friction).max(0.0);
        } else if movement.velocity.x < 0.0 {
            movement.velocity.x = (movement.velocity.x + friction).min(0.0);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
