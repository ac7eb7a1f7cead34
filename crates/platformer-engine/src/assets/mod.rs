pub mod manifest;
pub mod registry;

pub use manifest::{AssetManifest, TextureDescriptor};
pub use registry::TextureRegistry;
