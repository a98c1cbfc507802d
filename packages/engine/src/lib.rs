//! Tilebox Engine - grid tile sandbox in WASM, physics by rapier2d
//!
//! Architecture:
//! - domain/      - Tiles, grid cells, modes, config
//! - physics/     - rapier2d adapter
//! - simulation/  - Controller (tile table + start/stop)
//! - render/      - Shape extraction and canvas drawing
//! - api/         - Browser host (DOM bindings, loops)

pub mod domain;
pub mod error;
pub mod physics;
pub mod simulation;
pub mod render;
pub mod api;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    // A second init() keeps the first logger.
    let _ = console_log::init_with_level(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    });
    log::info!("Tilebox WASM engine initialized");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Bind to the page and start both loops.
///
/// `config_json` is an optional `SandboxConfig` object; omitted fields keep
/// their defaults.
#[wasm_bindgen]
pub fn start_sandbox(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json {
        Some(json) => SandboxConfig::from_json(&json)?,
        None => SandboxConfig::default(),
    };
    let dom = DomBindings::from_window(&config)?;
    let app = SandboxApp::new(dom, &config)?;
    app.run()?;
    Ok(())
}

// Re-export main types
pub use api::{DomBindings, SandboxApp};
pub use domain::{GridCoord, SandboxConfig, SimulationMode, Tile, TileKind, TILE_SIZE};
pub use error::SandboxError;
pub use physics::{BodyHandle, PhysicsWorld};
pub use simulation::{Sandbox, SandboxCore};

// Export tile kind constants for JS
#[wasm_bindgen]
pub fn tile_block() -> u8 { TileKind::Block.index() }
#[wasm_bindgen]
pub fn tile_variable() -> u8 { TileKind::Variable.index() }
#[wasm_bindgen]
pub fn tile_size() -> f32 { TILE_SIZE }
