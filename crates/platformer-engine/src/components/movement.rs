use glam::Vec2;

/// Kinematic state and material of a moving entity.
///
/// `velocity` is in pixels per tick; it already carries `dt` from force
/// application, so the physics step adds it to the position unscaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Movement {
    pub velocity: Vec2,
    /// Per-frame intent written by the scene (px/s² on x, jump impulse on y).
    /// Not accumulated: the scene rewrites it every frame.
    pub acceleration: Vec2,
    pub mass: f32,
    pub walk_force: f32,
    pub jump_force: f32,
    /// Deceleration applied while grounded, in px/tick per second.
    pub friction_coefficient: f32,
    /// Fraction of velocity removed once per tick.
    pub drag: f32,
    /// Recomputed by the physics step every tick. Never set it by hand.
    pub is_grounded: bool,
    pub is_facing_right: bool,
}

impl Default for Movement {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            mass: 10.0,
            walk_force: 325.0,
            jump_force: 225.0,
            friction_coefficient: 10.0,
            drag: 0.05,
            is_grounded: false,
            is_facing_right: true,
        }
    }
}

impl Movement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_walk_force(mut self, force: f32) -> Self {
        self.walk_force = force;
        self
    }

    pub fn with_jump_force(mut self, force: f32) -> Self {
        self.jump_force = force;
        self
    }

    pub fn with_friction(mut self, friction_coefficient: f32) -> Self {
        self.friction_coefficient = friction_coefficient;
        self
    }

    pub fn with_drag(mut self, drag: f32) -> Self {
        self.drag = drag;
        self
    }

    /// Horizontal acceleration produced by walking (a = F / m).
    pub fn walk_acceleration(&self) -> f32 {
        self.walk_force / self.mass
    }
}
