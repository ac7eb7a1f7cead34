use wasm_bindgen::prelude::*;

mod game;
use game::LevelEditorGame;

platformer_web::export_game!(LevelEditorGame, "level-editor");
