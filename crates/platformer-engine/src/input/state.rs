//! Polled view of the input queue.
//!
//! Held keys stay set until their `KeyUp`; presses and clicks are edges that
//! stay set until a tick consumes them with [`InputState::clear_edges`].

use std::collections::HashSet;

use glam::Vec2;

use super::keys;
use super::queue::InputEvent;

#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<u32>,
    toggle_pressed: bool,
    mouse_clicked: bool,
    mouse_down: bool,
    mouse_position: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a frame's worth of events into the state.
    pub fn apply(&mut self, events: &[InputEvent]) {
        for event in events {
            match *event {
                InputEvent::KeyDown { key_code } => {
                    // Auto-repeat sends KeyDown again while held; only the first counts.
                    let newly_pressed = self.held.insert(key_code);
                    if newly_pressed && key_code == keys::E {
                        self.toggle_pressed = true;
                    }
                }
                InputEvent::KeyUp { key_code } => {
                    self.held.remove(&key_code);
                }
                InputEvent::PointerDown { x, y } => {
                    self.mouse_position = Vec2::new(x, y);
                    self.mouse_down = true;
                    self.mouse_clicked = true;
                }
                InputEvent::PointerUp { x, y } => {
                    self.mouse_position = Vec2::new(x, y);
                    self.mouse_down = false;
                }
                InputEvent::PointerMove { x, y } => {
                    self.mouse_position = Vec2::new(x, y);
                }
            }
        }
    }

    /// Forget presses and clicks once a tick has seen them.
    pub fn clear_edges(&mut self) {
        self.toggle_pressed = false;
        self.mouse_clicked = false;
    }

    pub fn is_key_held(&self, key_code: u32) -> bool {
        self.held.contains(&key_code)
    }

    pub fn is_left(&self) -> bool {
        self.is_key_held(keys::LEFT)
    }

    pub fn is_right(&self) -> bool {
        self.is_key_held(keys::RIGHT)
    }

    pub fn is_jump(&self) -> bool {
        self.is_key_held(keys::SPACE)
    }

    /// E went down since the last consumed tick.
    pub fn toggle_pressed(&self) -> bool {
        self.toggle_pressed
    }

    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// A click began since the last consumed tick.
    pub fn mouse_clicked(&self) -> bool {
        self.mouse_clicked
    }

    pub fn is_mouse_down(&self) -> bool {
        self.mouse_down
    }
}
