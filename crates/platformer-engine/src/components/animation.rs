//! Sprite-strip animation keyed by a small movement-driven state.
//!
//! Each state owns a texture whose frames are laid out horizontally.

use std::collections::HashMap;

/// Which strip an entity is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Running,
}

/// One horizontal sprite strip.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDef {
    pub texture_name: String,
    pub frame_count: u32,
    /// Seconds each frame stays on screen.
    pub frame_duration: f32,
}

impl AnimationDef {
    pub fn strip(texture_name: impl Into<String>, frame_count: u32, frame_duration: f32) -> Self {
        Self {
            texture_name: texture_name.into(),
            frame_count,
            frame_duration,
        }
    }

    pub fn total_duration(&self) -> f32 {
        self.frame_duration * self.frame_count as f32
    }
}

/// Animation state for an entity.
#[derive(Debug, Clone)]
pub struct AnimationComponent {
    pub defs: HashMap<AnimationState, AnimationDef>,
    pub state: AnimationState,
    pub frame_index: u32,
    pub frame_timer: f32,
    /// Draw scale relative to the texture's frame size.
    pub scale: f32,
}

impl Default for AnimationComponent {
    fn default() -> Self {
        Self {
            defs: HashMap::new(),
            state: AnimationState::Idle,
            frame_index: 0,
            frame_timer: 0.0,
            scale: 1.0,
        }
    }
}

impl AnimationComponent {
    pub fn new(scale: f32) -> Self {
        Self {
            scale,
            ..Default::default()
        }
    }

    pub fn with_state(mut self, state: AnimationState, def: AnimationDef) -> Self {
        self.defs.insert(state, def);
        self
    }

    pub fn insert(&mut self, state: AnimationState, def: AnimationDef) {
        self.defs.insert(state, def);
    }

    /// Switch strips. The frame counter restarts only when the state changes.
    pub fn set_state(&mut self, state: AnimationState) {
        if self.state != state {
            self.state = state;
            self.frame_index = 0;
            self.frame_timer = 0.0;
        }
    }

    pub fn current_def(&self) -> Option<&AnimationDef> {
        self.defs.get(&self.state)
    }

    /// Current frame index within the active strip.
    pub fn current_frame(&self) -> Option<u32> {
        self.current_def().map(|def| self.frame_index.min(def.frame_count.saturating_sub(1)))
    }

    /// Advance by `dt` seconds, looping. Returns true if the frame changed.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(def) = self.defs.get(&self.state) else {
            return false;
        };
        if def.frame_count == 0 || def.frame_duration <= 0.0 {
            return false;
        }

        self.frame_timer += dt;
        let mut changed = false;
        while self.frame_timer >= def.frame_duration {
            self.frame_timer -= def.frame_duration;
            self.frame_index = (self.frame_index + 1) % def.frame_count;
            changed = true;
        }
        changed
    }
}
