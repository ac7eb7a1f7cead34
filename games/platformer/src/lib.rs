use wasm_bindgen::prelude::*;

pub mod game;
pub mod level;

pub use game::Platformer;

platformer_web::export_game!(Platformer, "platformer");
