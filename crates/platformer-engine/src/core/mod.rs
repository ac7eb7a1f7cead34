pub mod error;
pub mod geometry;
pub mod physics;
pub mod scene;
pub mod time;
