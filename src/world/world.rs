// World: one tile grid and the characters walking on it

use log::info;

use crate::core::Rect;
use crate::engine::assets::{AssetType, ResourcePathResolver, TextureHandle};
use crate::engine::input::InputSource;
use crate::engine::renderer::Renderer;
use crate::game::characters::CharacterRoster;

use super::config::WorldConfig;
use super::map_loader::{self, MapData};
use super::tile_grid::TileGrid;
use super::tileset::TilesetLayout;
use super::WorldError;

/// Tileset texture plus the layout of tile images inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tileset {
    pub texture: TextureHandle,
    pub layout: TilesetLayout,
}

/// Composition root of the simulation
///
/// Owns the grid and the roster outright. Each tick polls input, then moves
/// every character against the grid in spawn order. Characters only collide
/// with the grid, never with each other.
#[derive(Debug)]
pub struct World {
    grid: TileGrid,
    /// Map codes, row-major, kept for drawing
    codes: Vec<u32>,
    tileset: Option<Tileset>,
    roster: CharacterRoster,
}

impl World {
    /// Build a world from a ready grid; every tile is drawn as code 0
    pub fn new(grid: TileGrid, roster: CharacterRoster) -> Self {
        let codes = vec![0; grid.cells().len()];
        Self {
            grid,
            codes,
            tileset: None,
            roster,
        }
    }

    /// Build a world from parsed map data without loading any textures
    pub fn from_map(
        map: &MapData,
        config: &WorldConfig,
        roster: CharacterRoster,
    ) -> Result<Self, WorldError> {
        let grid = TileGrid::from_map(map, &config.walkability, config.tile_size)?;
        info!(
            "Built {}x{} world ({}x{} px) with {} characters",
            grid.columns(),
            grid.rows(),
            grid.pixel_width(),
            grid.pixel_height(),
            roster.count()
        );

        Ok(Self {
            grid,
            codes: map.codes.clone(),
            tileset: None,
            roster,
        })
    }

    /// Load the configured map and its tileset texture and build the world
    ///
    /// Nothing is returned unless every step succeeds.
    pub fn load(
        resolver: &dyn ResourcePathResolver,
        renderer: &mut dyn Renderer,
        config: &WorldConfig,
        roster: CharacterRoster,
    ) -> Result<Self, WorldError> {
        let map = map_loader::load_named(resolver, &config.map_name)?;
        let texture = renderer.load_texture(&resolver.resolve(AssetType::Tileset, &map.tileset))?;

        let world = Self::from_map(&map, config, roster)?.with_tileset(Tileset {
            texture,
            layout: config.tileset,
        });
        Ok(world)
    }

    pub fn with_tileset(mut self, tileset: Tileset) -> Self {
        self.tileset = Some(tileset);
        self
    }

    /// Advance the simulation by `delta` seconds
    pub fn update(&mut self, delta: f32, input: &mut dyn InputSource) {
        self.roster.apply_input(input);
        self.roster.update(delta, &self.grid);
    }

    /// True if a box at `rect` would overlap a solid or out-of-bounds tile
    pub fn check_collision(&self, rect: &Rect) -> bool {
        self.grid.check_collision(rect)
    }

    /// Draw tiles row by row, then characters in spawn order
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        if let Some(tileset) = &self.tileset {
            let size = self.grid.tile_size() as i32;
            for row in 0..self.grid.rows() {
                for col in 0..self.grid.columns() {
                    let code = self.codes[row * self.grid.columns() + col];
                    // Codes without an image leave the cell undrawn
                    if let Some(clip) = tileset.layout.clip(code) {
                        renderer.draw_texture(
                            tileset.texture,
                            col as i32 * size,
                            row as i32 * size,
                            clip,
                        );
                    }
                }
            }
        }

        self.roster.draw(renderer);
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn roster(&self) -> &CharacterRoster {
        &self.roster
    }

    pub fn tileset(&self) -> Option<&Tileset> {
        self.tileset.as_ref()
    }

    /// Map code of a tile, if inside the grid
    pub fn tile_code(&self, col: i32, row: i32) -> Option<u32> {
        self.grid.tile_index(col, row).map(|index| self.codes[index])
    }

    /// World width in pixels
    pub fn pixel_width(&self) -> u32 {
        self.grid.pixel_width()
    }

    /// World height in pixels
    pub fn pixel_height(&self) -> u32 {
        self.grid.pixel_height()
    }
}
