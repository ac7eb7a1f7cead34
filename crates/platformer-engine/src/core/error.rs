use std::fmt;

use crate::api::types::Tag;

/// Which per-entity record a lookup was after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Position,
    Collision,
    Movement,
    Render,
    Animation,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentKind::Position => "position",
            ComponentKind::Collision => "collision",
            ComponentKind::Movement => "movement",
            ComponentKind::Render => "render",
            ComponentKind::Animation => "animation",
        };
        f.write_str(name)
    }
}

/// A tag was looked up in a component map that has no entry for it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} component with tag '{tag}' not found")]
pub struct MissingComponent {
    pub kind: ComponentKind,
    pub tag: Tag,
}

impl MissingComponent {
    pub fn new(kind: ComponentKind, tag: impl Into<Tag>) -> Self {
        Self { kind, tag: tag.into() }
    }
}

/// Failures while reading or materialising a level document.
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("malformed level json, reason='{0}'")]
    Json(#[from] serde_json::Error),

    #[error("tile ({x}, {y}) is outside the {width}x{height} tile map")]
    TileOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Failures while reading a [`GameConfig`](crate::api::game::GameConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed config json, reason='{0}'")]
    Json(#[from] serde_json::Error),

    #[error("fixed_dt must be positive, got {0}")]
    InvalidTimestep(f32),

    #[error("tile_size must be positive, got {0}")]
    InvalidTileSize(f32),
}
