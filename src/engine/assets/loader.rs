// Resource path resolution

use std::path::{Path, PathBuf};

/// Categories of resources, each living in its own directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetType {
    /// Map description text files
    Map,
    /// Tileset textures
    Tileset,
    /// Character sprite sheets
    Sprite,
}

impl AssetType {
    /// Get the default directory for this asset type
    pub fn default_directory(&self) -> &'static str {
        match self {
            AssetType::Map => "Maps",
            AssetType::Tileset => "Tiles",
            AssetType::Sprite => "Sprites",
        }
    }
}

/// Turns a (category, name) pair into something a loader can open
pub trait ResourcePathResolver {
    fn resolve(&self, category: AssetType, name: &str) -> PathBuf;
}

/// Resolves resources below a base directory, one subdirectory per category
#[derive(Debug, Clone)]
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Check if an asset exists
    pub fn exists(&self, asset_type: AssetType, name: &str) -> bool {
        self.resolve(asset_type, name).exists()
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl ResourcePathResolver for AssetLoader {
    fn resolve(&self, category: AssetType, name: &str) -> PathBuf {
        self.base_path
            .join(category.default_directory())
            .join(name)
    }
}
