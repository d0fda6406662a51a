// World: map loading, the tile grid, and the composition root that ticks characters on it

pub mod config;
pub mod map_loader;
pub mod tile_grid;
pub mod tileset;
pub mod walkability;
mod world;

pub use config::WorldConfig;
pub use map_loader::{MapData, MapFormatError};
pub use tile_grid::TileGrid;
pub use tileset::{GridLayout, TilesetLayout};
pub use walkability::WalkabilityTable;
pub use world::{Tileset, World};

use crate::engine::assets::AssetError;
use crate::game::characters::InvalidAnimationConfig;

/// Anything that stops a world from being built
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error(transparent)]
    MapFormat(#[from] MapFormatError),

    #[error("invalid animation config: {0}")]
    InvalidAnimationConfig(#[from] InvalidAnimationConfig),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error("tile size must be positive, got {0}")]
    InvalidTileSize(u32),

    #[error("{columns}x{rows} grid needs {} cells, got {cells}", .columns * .rows)]
    CellCountMismatch {
        columns: usize,
        rows: usize,
        cells: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = WorldError::CellCountMismatch {
            columns: 3,
            rows: 2,
            cells: 5,
        };
        assert_eq!(err.to_string(), "3x2 grid needs 6 cells, got 5");

        let err: WorldError = MapFormatError::MissingField("width").into();
        assert_eq!(err.to_string(), "map is missing its width");
    }
}
