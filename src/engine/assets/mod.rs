// Asset lookup: where resource files live and how loaded textures are named
//
// Only startup code touches this module. Nothing here runs during a tick.

mod handle;
mod loader;

pub use handle::{AssetHandle, AssetId, TextureAsset, TextureHandle};
pub use loader::{AssetLoader, AssetType, ResourcePathResolver};

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Failed to load asset: {0}")]
    LoadError(String),
}
