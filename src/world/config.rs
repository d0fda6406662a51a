// World configuration

use super::tileset::TilesetLayout;
use super::walkability::WalkabilityTable;

/// Pixels per tile edge used by the stock maps
pub const DEFAULT_TILE_SIZE: u32 = 40;

/// Map loaded when none is named
pub const DEFAULT_MAP_NAME: &str = "map-01.txt";

/// Everything needed to turn a map file into a world
#[derive(Debug, Clone)]
pub struct WorldConfig {
    /// Pixels per tile edge
    pub tile_size: u32,
    /// Tile code classification
    pub walkability: WalkabilityTable,
    /// Layout of the tileset texture named by the map
    pub tileset: TilesetLayout,
    /// Map resource name, resolved under the maps directory
    pub map_name: String,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            walkability: WalkabilityTable::default(),
            tileset: TilesetLayout::default(),
            map_name: DEFAULT_MAP_NAME.to_string(),
        }
    }
}

impl WorldConfig {
    pub fn with_map(mut self, map_name: &str) -> Self {
        self.map_name = map_name.to_string();
        self
    }

    pub fn with_walkability(mut self, walkability: WalkabilityTable) -> Self {
        self.walkability = walkability;
        self
    }
}
