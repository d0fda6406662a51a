// Tile grid: walkability flags plus tile/pixel geometry

use glam::Vec2;

use crate::core::Rect;
use crate::game::characters::CollisionQuery;

use super::map_loader::MapData;
use super::walkability::WalkabilityTable;
use super::WorldError;

/// Fixed-size grid of walkable/solid tiles
///
/// Cells are stored row-major (`row * columns + col`). The grid never
/// changes after construction, so every query is a pure function of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    /// Pixels per tile edge
    tile_size: u32,
    columns: usize,
    rows: usize,
    cells: Vec<bool>,
}

impl TileGrid {
    /// Build a grid from raw walkability flags
    pub fn new(
        tile_size: u32,
        columns: usize,
        rows: usize,
        cells: Vec<bool>,
    ) -> Result<Self, WorldError> {
        if tile_size == 0 {
            return Err(WorldError::InvalidTileSize(tile_size));
        }
        if columns.checked_mul(rows) != Some(cells.len()) {
            return Err(WorldError::CellCountMismatch {
                columns,
                rows,
                cells: cells.len(),
            });
        }

        Ok(Self {
            tile_size,
            columns,
            rows,
            cells,
        })
    }

    /// Build a grid by classifying every map code with `table`
    pub fn from_map(
        map: &MapData,
        table: &WalkabilityTable,
        tile_size: u32,
    ) -> Result<Self, WorldError> {
        let cells = map.codes.iter().map(|&code| table.is_walkable(code)).collect();
        Self::new(tile_size, map.columns, map.rows, cells)
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Walkability flags, row-major
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// World width in pixels
    pub fn pixel_width(&self) -> u32 {
        self.columns as u32 * self.tile_size
    }

    /// World height in pixels
    pub fn pixel_height(&self) -> u32 {
        self.rows as u32 * self.tile_size
    }

    /// Row-major index of a tile, if it lies inside the grid
    pub fn tile_index(&self, col: i32, row: i32) -> Option<usize> {
        let col = usize::try_from(col).ok()?;
        let row = usize::try_from(row).ok()?;
        (col < self.columns && row < self.rows).then(|| row * self.columns + col)
    }

    /// Tile coordinate containing a pixel coordinate (floored, may be negative)
    pub fn pixel_to_tile(&self, pixel: f32) -> i32 {
        (pixel / self.tile_size as f32).floor() as i32
    }

    /// Top-left pixel of a tile
    pub fn tile_origin(&self, col: i32, row: i32) -> Vec2 {
        let size = self.tile_size as f32;
        Vec2::new(col as f32 * size, row as f32 * size)
    }

    /// Whether a tile can be walked on; anything outside the grid is solid
    pub fn walkable_at(&self, col: i32, row: i32) -> bool {
        self.tile_index(col, row)
            .map(|index| self.cells[index])
            .unwrap_or(false)
    }

    /// Whether a box would overlap a solid or out-of-bounds tile
    ///
    /// The covered tiles are `[floor(x/s), floor((x+w)/s))` by
    /// `[floor(y/s), floor((y+h)/s))`. The upper bound is exclusive, so a box
    /// whose trailing edge sits exactly on a tile boundary does not touch the
    /// next tile. A box smaller than a tile still covers the tile holding its
    /// top-left corner.
    pub fn check_collision(&self, rect: &Rect) -> bool {
        let (col_start, col_end) = self.span(rect.x, rect.w);
        let (row_start, row_end) = self.span(rect.y, rect.h);

        (row_start..row_end)
            .any(|row| (col_start..col_end).any(|col| !self.walkable_at(col, row)))
    }

    fn span(&self, start: f32, extent: f32) -> (i32, i32) {
        let first = self.pixel_to_tile(start);
        let end = self.pixel_to_tile(start + extent).max(first.saturating_add(1));
        (first, end)
    }
}

impl CollisionQuery for TileGrid {
    fn is_blocked(&self, rect: &Rect) -> bool {
        self.check_collision(rect)
    }
}
