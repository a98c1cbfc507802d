//! Domain types: tiles, grid cells, modes and configuration

pub mod config;
pub mod tiles;

pub use config::{DomIds, SandboxConfig};
pub use tiles::{GridCoord, PointerButton, SimulationMode, Tile, TileKind, HALF_TILE, TILE_SIZE};
