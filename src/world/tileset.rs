// Tileset layout: where each tile code's image sits inside the tileset texture

use crate::engine::renderer::SourceClip;

/// Edge of one stock tile, in texels
const STOCK_TILE: u32 = 40;

/// Source rectangles of the stock tileset, indexed by tile code
///
/// Rows are ragged: four tiles on the first row, five on the next two, and
/// the two debug markers share one cell.
pub const STOCK_TILE_CLIPS: [SourceClip; 16] = [
    SourceClip::new(40, 81, STOCK_TILE, STOCK_TILE),
    SourceClip::new(120, 81, STOCK_TILE, STOCK_TILE),
    SourceClip::new(200, 81, STOCK_TILE, STOCK_TILE),
    SourceClip::new(280, 81, STOCK_TILE, STOCK_TILE),
    SourceClip::new(40, 161, STOCK_TILE, STOCK_TILE),
    SourceClip::new(120, 161, STOCK_TILE, STOCK_TILE),
    SourceClip::new(200, 161, STOCK_TILE, STOCK_TILE),
    SourceClip::new(280, 161, STOCK_TILE, STOCK_TILE),
    SourceClip::new(360, 161, STOCK_TILE, STOCK_TILE),
    SourceClip::new(40, 241, STOCK_TILE, STOCK_TILE),
    SourceClip::new(120, 241, STOCK_TILE, STOCK_TILE),
    SourceClip::new(200, 241, STOCK_TILE, STOCK_TILE),
    SourceClip::new(280, 241, STOCK_TILE, STOCK_TILE),
    SourceClip::new(360, 241, STOCK_TILE, STOCK_TILE),
    // Debug markers
    SourceClip::new(40, 321, STOCK_TILE, STOCK_TILE),
    SourceClip::new(40, 321, STOCK_TILE, STOCK_TILE),
];

/// Regular grid of tile images
///
/// Code `n` is at column `n % columns`, row `n / columns`, starting at
/// `(margin_x, margin_y)` with `spacing` texels between neighbouring tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub tile_size: u32,
    pub columns: u32,
    pub spacing: u32,
    pub margin_x: u32,
    pub margin_y: u32,
}

impl GridLayout {
    fn clip(&self, code: u32) -> SourceClip {
        let columns = self.columns.max(1);
        let stride = self.tile_size + self.spacing;
        let col = code % columns;
        let row = code / columns;
        SourceClip::new(
            self.margin_x + col * stride,
            self.margin_y + row * stride,
            self.tile_size,
            self.tile_size,
        )
    }
}

/// How tile codes map to rectangles inside a tileset texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilesetLayout {
    /// Computed from a regular grid; every code has a clip
    Grid(GridLayout),
    /// Looked up per code; codes past the end have no image
    Table(&'static [SourceClip]),
}

impl TilesetLayout {
    /// Packed grid: no margin, no spacing
    pub fn packed(tile_size: u32, columns: u32) -> Self {
        Self::Grid(GridLayout {
            tile_size,
            columns: columns.max(1),
            spacing: 0,
            margin_x: 0,
            margin_y: 0,
        })
    }

    /// The stock tileset shipped with the sample maps
    pub fn stock() -> Self {
        Self::Table(&STOCK_TILE_CLIPS)
    }

    /// Source rectangle for a tile code, if the layout has one
    pub fn clip(&self, code: u32) -> Option<SourceClip> {
        match self {
            Self::Grid(grid) => Some(grid.clip(code)),
            Self::Table(clips) => usize::try_from(code)
                .ok()
                .and_then(|index| clips.get(index))
                .copied(),
        }
    }
}

impl Default for TilesetLayout {
    fn default() -> Self {
        Self::stock()
    }
}
