//! Axis-aligned rectangle math used by the collision engine.
//!
//! Screen space: x grows right, y grows down. A rectangle's origin is its
//! top-left corner.

use glam::Vec2;

use crate::components::collision::CollisionBox;

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.w, self.y + self.h)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn translated(&self, by: Vec2) -> Self {
        Self {
            x: self.x + by.x,
            y: self.y + by.y,
            ..*self
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.x + self.w && point.y >= self.y && point.y < self.y + self.h
    }
}

/// Collision rectangle of an entity: `position + offset`, sized by the box.
pub fn compute_collision_box(position: Vec2, collision: &CollisionBox) -> Rect {
    Rect {
        x: position.x + collision.offset.x,
        y: position.y + collision.offset.y,
        w: collision.width,
        h: collision.height,
    }
}

/// Penetration depth of two rectangles on each axis, by center distance.
///
/// Returns `Vec2::ZERO` when the rectangles do not intersect. Edges that only
/// touch also produce the zero sentinel.
pub fn overlap(a: &Rect, b: &Rect) -> Vec2 {
    let distance = (a.center() - b.center()).abs();
    let overlap = (a.size() + b.size()) / 2.0 - distance;
    if overlap.x <= 0.0 || overlap.y <= 0.0 {
        return Vec2::ZERO;
    }
    overlap
}

/// Per-axis sign pushing the mover away from the collider.
///
/// -1 when the mover's origin is left of (or above) the collider's, +1 otherwise.
pub fn resolution_direction(mover: &Rect, collider: &Rect) -> Vec2 {
    Vec2::new(
        if mover.x < collider.x { -1.0 } else { 1.0 },
        if mover.y < collider.y { -1.0 } else { 1.0 },
    )
}

/// Push along the axis of least penetration. Ties resolve vertically.
pub fn minimum_translation_vector(overlap: Vec2, direction: Vec2) -> Vec2 {
    if overlap.x < overlap.y {
        Vec2::new(overlap.x * direction.x, 0.0)
    } else {
        Vec2::new(0.0, overlap.y * direction.y)
    }
}

/// MTV separating `mover` from `collider`, or `None` if they do not intersect.
pub fn resolve_penetration(mover: &Rect, collider: &Rect) -> Option<Vec2> {
    let overlap = overlap(mover, collider);
    if overlap == Vec2::ZERO {
        return None;
    }
    let direction = resolution_direction(mover, collider);
    Some(minimum_translation_vector(overlap, direction))
}

/// Width of the shared x-interval of two rectangles (negative when apart).
pub fn horizontal_overlap(a: &Rect, b: &Rect) -> f32 {
    (a.x + a.w).min(b.x + b.w) - a.x.max(b.x)
}

/// Distance from the bottom edge of `upper` down to the top edge of `lower`.
/// Zero when they touch, negative when they interpenetrate.
pub fn vertical_gap(upper: &Rect, lower: &Rect) -> f32 {
    lower.y - (upper.y + upper.h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn collision_box_applies_offset() {
        let collision = CollisionBox::new(20.0, 40.0).with_offset(Vec2::new(10.0, 0.0));
        let rect = compute_collision_box(Vec2::new(100.0, 50.0), &collision);
        assert_eq!(rect, Rect::new(110.0, 50.0, 20.0, 40.0));
    }

    #[test]
    fn separated_rects_have_zero_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let cases = [
            Rect::new(20.0, 0.0, 10.0, 10.0),
            Rect::new(-30.0, 0.0, 10.0, 10.0),
            Rect::new(0.0, 11.0, 10.0, 10.0),
            Rect::new(50.0, 50.0, 5.0, 5.0),
        ];
        for b in cases {
            assert_eq!(overlap(&a, &b), Vec2::ZERO, "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn touching_edges_are_not_overlapping() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert_eq!(overlap(&a, &b), Vec2::ZERO);
    }

    #[test]
    fn overlap_uses_center_distance() {
        let a = Rect::new(0.0, 0.0, 40.0, 40.0);
        let b = Rect::new(20.0, 0.0, 40.0, 40.0);
        let o = overlap(&a, &b);
        assert!(approx(o.x, 20.0));
        assert!(approx(o.y, 40.0));
    }

    #[test]
    fn mtv_picks_shallower_axis() {
        let a = Rect::new(0.0, 0.0, 40.0, 40.0);
        let b = Rect::new(20.0, 0.0, 40.0, 40.0);
        let mtv = resolve_penetration(&a, &b).unwrap();
        assert_eq!(mtv, Vec2::new(-20.0, 0.0));

        let ground = Rect::new(0.0, 35.0, 100.0, 50.0);
        let mtv = resolve_penetration(&a, &ground).unwrap();
        assert_eq!(mtv, Vec2::new(0.0, -5.0));
    }

    #[test]
    fn mtv_tie_resolves_vertically() {
        let mtv = minimum_translation_vector(Vec2::new(3.0, 3.0), Vec2::new(1.0, -1.0));
        assert_eq!(mtv, Vec2::new(0.0, -3.0));
    }

    #[test]
    fn applying_mtv_clears_overlap_on_resolved_axis() {
        let collider = Rect::new(30.0, 30.0, 50.0, 50.0);
        let movers = [
            Rect::new(10.0, 40.0, 25.0, 25.0),
            Rect::new(70.0, 40.0, 25.0, 25.0),
            Rect::new(40.0, 10.0, 25.0, 25.0),
            Rect::new(40.0, 70.0, 25.0, 25.0),
        ];
        for mover in movers {
            let mtv = resolve_penetration(&mover, &collider).unwrap();
            let moved = mover.translated(mtv);
            assert_eq!(overlap(&moved, &collider), Vec2::ZERO, "mover {:?}", mover);
            assert!(resolve_penetration(&moved, &collider).is_none());
        }
    }

    #[test]
    fn direction_follows_origins() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, -5.0, 10.0, 10.0);
        assert_eq!(resolution_direction(&a, &b), Vec2::new(-1.0, 1.0));
        assert_eq!(resolution_direction(&b, &a), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn gap_and_horizontal_overlap() {
        let upper = Rect::new(0.0, 0.0, 20.0, 40.0);
        let lower = Rect::new(10.0, 40.0, 50.0, 50.0);
        assert_eq!(vertical_gap(&upper, &lower), 0.0);
        assert_eq!(horizontal_overlap(&upper, &lower), 10.0);
        assert!(horizontal_overlap(&upper, &Rect::new(30.0, 40.0, 5.0, 5.0)) < 0.0);
    }
}
