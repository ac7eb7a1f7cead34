pub mod animation;
pub mod render;

pub use animation::{tick_animations, update_animation_states};
pub use render::build_draw_buffer;
