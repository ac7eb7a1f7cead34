pub mod animation;
pub mod collision;
pub mod movement;
pub mod render;
pub mod tilemap;

/// Top-left anchor of an entity in pixels (y grows down).
pub type Position = glam::Vec2;
