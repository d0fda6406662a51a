// Tile world: a tile-grid map with animated characters walking on it
//
// - `core`: geometry primitives shared by everything else
// - `engine`: collaborator contracts (clock, input, renderer, resources) and their adapters
// - `world`: map loading, the tile grid, and the world composition root
// - `game`: characters, their movement/animation state machine, and the roster

pub mod core;
pub mod engine;
pub mod game;
pub mod world;
