// Rendering contract
//
// The world only ever says "draw this texture region at these pixel
// coordinates". Pixel work belongs to whatever implements `Renderer`.

use std::collections::HashMap;
use std::path::Path;

use log::{debug, trace};

use crate::engine::assets::{AssetError, AssetId, TextureHandle};

/// Source rectangle inside a texture, in texels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceClip {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl SourceClip {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

/// Drawing backend used by the world
pub trait Renderer {
    /// Load a texture from disk and return a handle for later draws
    fn load_texture(&mut self, path: &Path) -> Result<TextureHandle, AssetError>;

    /// Draw `clip` of `texture` with its top-left corner at `(dest_x, dest_y)`
    fn draw_texture(&mut self, texture: TextureHandle, dest_x: i32, dest_y: i32, clip: SourceClip);

    fn begin_frame(&mut self);

    fn end_frame(&mut self);
}

/// One recorded draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub texture: TextureHandle,
    pub dest_x: i32,
    pub dest_y: i32,
    pub clip: SourceClip,
}

/// Renderer with no output device
///
/// Hands out texture handles derived from the path, keeps the draw calls
/// of the last completed frame and traces each one. Used by the shell when
/// no GPU backend is wired in, and by tests to observe what the world draws.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    /// Loaded texture paths, by handle ID
    textures: HashMap<AssetId, String>,

    /// Draw calls of the frame in progress
    pending: Vec<DrawCall>,

    /// Draw calls of the last finished frame
    last_frame: Vec<DrawCall>,

    /// Number of finished frames
    frames: u64,

    in_frame: bool,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls recorded between the last `begin_frame`/`end_frame` pair
    pub fn last_frame(&self) -> &[DrawCall] {
        &self.last_frame
    }

    /// Number of completed frames
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Number of distinct textures loaded
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Path a texture handle was loaded from
    pub fn texture_path(&self, texture: TextureHandle) -> Option<&str> {
        self.textures.get(&texture.id()).map(String::as_str)
    }
}

impl Renderer for HeadlessRenderer {
    fn load_texture(&mut self, path: &Path) -> Result<TextureHandle, AssetError> {
        let key = path.to_string_lossy().to_string();
        if key.is_empty() {
            return Err(AssetError::LoadError("empty texture path".to_string()));
        }

        let id = AssetId::from_path(&key);
        if !self.textures.contains_key(&id) {
            debug!("Registered texture {}", key);
            self.textures.insert(id, key);
        }
        Ok(TextureHandle::new(id))
    }

    fn draw_texture(&mut self, texture: TextureHandle, dest_x: i32, dest_y: i32, clip: SourceClip) {
        trace!(
            "draw texture {:#x} at ({}, {}) clip {:?}",
            texture.id().as_u64(),
            dest_x,
            dest_y,
            clip
        );
        self.pending.push(DrawCall {
            texture,
            dest_x,
            dest_y,
            clip,
        });
    }

    fn begin_frame(&mut self) {
        self.pending.clear();
        self.in_frame = true;
    }

    fn end_frame(&mut self) {
        if !self.in_frame {
            return;
        }
        self.in_frame = false;
        self.frames += 1;
        std::mem::swap(&mut self.pending, &mut self.last_frame);
        self.pending.clear();
    }
}
