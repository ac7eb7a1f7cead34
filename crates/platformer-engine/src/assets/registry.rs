use std::collections::HashMap;

use crate::api::types::TextureId;
use crate::assets::manifest::{AssetManifest, TextureDescriptor};

/// Registry of named textures, built from an AssetManifest.
/// Ids are assigned in manifest order so the host page can index its own
/// image list with them.
#[derive(Debug, Clone, Default)]
pub struct TextureRegistry {
    textures: Vec<TextureDescriptor>,
    by_name: HashMap<String, TextureId>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a parsed AssetManifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let mut registry = Self::new();
        for desc in &manifest.textures {
            registry.insert(desc.clone());
        }
        registry
    }

    /// Register a texture. A name that is already registered keeps its
    /// first descriptor and id.
    pub fn insert(&mut self, desc: TextureDescriptor) -> TextureId {
        if let Some(&id) = self.by_name.get(&desc.name) {
            log::debug!("texture '{}' already registered", desc.name);
            return id;
        }
        let id = TextureId(self.textures.len() as u32);
        self.by_name.insert(desc.name.clone(), id);
        self.textures.push(desc);
        id
    }

    /// Look up a texture id by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<TextureId> {
        self.by_name.get(name).copied()
    }

    pub fn descriptor(&self, id: TextureId) -> Option<&TextureDescriptor> {
        self.textures.get(id.0 as usize)
    }

    pub fn name(&self, id: TextureId) -> Option<&str> {
        self.descriptor(id).map(|d| d.name.as_str())
    }

    /// Frame count of the named texture, 1 for unknown names.
    pub fn frames(&self, name: &str) -> u32 {
        self.get(name)
            .and_then(|id| self.descriptor(id))
            .map_or(1, |d| d.frames.max(1))
    }

    /// Names starting with `prefix`, in manifest order.
    pub fn names_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.textures
            .iter()
            .map(|d| d.name.as_str())
            .filter(move |name| name.starts_with(prefix))
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
