pub mod queue;
pub mod state;

pub use queue::{InputEvent, InputQueue};
pub use state::InputState;

/// Browser `keyCode` values the games listen for.
pub mod keys {
    pub const SPACE: u32 = 32;
    pub const LEFT: u32 = 37;
    pub const RIGHT: u32 = 39;
    pub const E: u32 = 69;
}
