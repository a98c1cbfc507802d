//! Sandbox controller - tile table, edit mode and the physics world
//!
//! `SandboxCore` holds all state and only orchestrates:
//! - commands/  - pointer routing, tile placement and removal
//! - mode/      - start/stop, static <-> dynamic toggling
//! - init/      - construction and settings
//!
//! The wasm-facing wrapper lives in `facade.rs`; the DOM host in `api/`.

use std::collections::HashMap;

use crate::domain::{GridCoord, SimulationMode, Tile, TileKind};
use crate::physics::{BodyHandle, PhysicsWorld};

#[path = "commands/commands.rs"]
mod commands;
#[path = "mode/mode.rs"]
mod mode;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Sandbox;
pub use init::TileSnapshot;

/// The sandbox state
pub struct SandboxCore {
    physics: PhysicsWorld,
    tiles: HashMap<GridCoord, Tile>,

    // Settings
    tile_kind: TileKind,

    // State
    mode: SimulationMode,
}

impl SandboxCore {
    /// Empty sandbox stepped at 60 Hz
    pub fn new() -> Self {
        init::create_sandbox_core(&crate::domain::SandboxConfig::default())
    }

    pub fn with_config(config: &crate::domain::SandboxConfig) -> Self {
        init::create_sandbox_core(config)
    }

    /// Route a pointer-down at pixel (x, y) with a DOM button id
    pub fn handle_pointer_event(&mut self, x: f32, y: f32, button: i16) {
        commands::handle_pointer_event(self, x, y, button)
    }

    /// Place a tile of the selected kind. Returns false when nothing changed.
    pub fn place_tile(&mut self, coord: GridCoord) -> bool {
        commands::place_tile(self, coord)
    }

    /// Remove the tile at `coord`. Returns false when nothing changed.
    pub fn remove_tile(&mut self, coord: GridCoord) -> bool {
        commands::remove_tile(self, coord)
    }

    pub fn start_simulation(&mut self) -> bool {
        mode::start_simulation(self)
    }

    pub fn stop_simulation(&mut self) -> bool {
        mode::stop_simulation(self)
    }

    /// Advance physics one fixed timestep (runs in both modes)
    pub fn step(&mut self) {
        self.physics.step();
    }

    pub fn set_tile_kind(&mut self, kind: TileKind) -> bool {
        settings::set_tile_kind(self, kind)
    }

    pub fn tile_kind(&self) -> TileKind {
        self.tile_kind
    }

    pub fn mode(&self) -> SimulationMode {
        self.mode
    }

    /// Whether placement, removal and kind selection are currently allowed
    pub fn edits_enabled(&self) -> bool {
        self.mode.is_editing()
    }

    pub fn tile_at(&self, coord: GridCoord) -> Option<&Tile> {
        self.tiles.get(&coord)
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn tiles(&self) -> impl Iterator<Item = (&GridCoord, &Tile)> {
        self.tiles.iter()
    }

    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }

    pub fn body_count(&self) -> usize {
        self.physics.body_count()
    }

    pub fn contains_body(&self, body: BodyHandle) -> bool {
        self.physics.contains(body)
    }

    /// Table contents sorted by coordinate, serialized for the console
    pub fn tiles_json(&self) -> String {
        init::tiles_json(self)
    }
}

impl Default for SandboxCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
