use serde::{Deserialize, Serialize};

/// Asset manifest listing every texture a game uses.
/// Loaded from a JSON file at runtime; the host page decodes the images.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    pub textures: Vec<TextureDescriptor>,
}

/// Describes a single texture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Lookup name (e.g., "tile_winter_ice"). Names starting with `tile_`
    /// are offered in the editor's tile picker.
    pub name: String,
    /// Relative path to the image (e.g., "winter_ground/ice.png").
    pub path: String,
    /// Draw size override in pixels. Defaults to the image's own size.
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    /// Number of horizontal animation frames in the image (default: 1).
    #[serde(default = "default_frames")]
    pub frames: u32,
}

fn default_frames() -> u32 {
    1
}

impl TextureDescriptor {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            width: None,
            height: None,
            frames: 1,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_frames(mut self, frames: u32) -> Self {
        self.frames = frames;
        self
    }
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
