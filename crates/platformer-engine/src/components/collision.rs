use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::geometry::{compute_collision_box, Rect};

/// Hitbox of an entity, relative to its position.
///
/// The box spans `position + offset` to `position + offset + (width, height)`.
/// The offset lets the hitbox be narrower than the drawn sprite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionBox {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub offset: Vec2,
}

impl CollisionBox {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            offset: Vec2::ZERO,
        }
    }

    /// Square box, as used for tiles.
    pub fn square(size: f32) -> Self {
        Self::new(size, size)
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// World-space rectangle for an entity at `position`.
    pub fn rect(&self, position: Vec2) -> Rect {
        compute_collision_box(position, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_box_has_no_offset() {
        let b = CollisionBox::square(50.0);
        assert_eq!(b.rect(Vec2::new(100.0, 400.0)), Rect::new(100.0, 400.0, 50.0, 50.0));
    }
}
