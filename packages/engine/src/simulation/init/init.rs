use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{GridCoord, SandboxConfig, SimulationMode, TileKind};
use crate::physics::PhysicsWorld;

use super::SandboxCore;

pub(super) fn create_sandbox_core(config: &SandboxConfig) -> SandboxCore {
    SandboxCore {
        physics: PhysicsWorld::new(config.timestep()),
        tiles: HashMap::new(),
        tile_kind: TileKind::default(),
        mode: SimulationMode::Editing,
    }
}

/// One table entry as reported to the console
#[derive(Clone, Debug, Serialize)]
pub struct TileSnapshot {
    pub coord: GridCoord,
    pub kind: TileKind,
    pub x: f32,
    pub y: f32,
    pub is_static: bool,
}

pub(super) fn snapshot(sandbox: &SandboxCore) -> Vec<TileSnapshot> {
    let mut out: Vec<TileSnapshot> = sandbox
        .tiles
        .iter()
        .map(|(coord, tile)| {
            let (x, y) = sandbox.physics.position(tile.body).unwrap_or_default();
            TileSnapshot {
                coord: *coord,
                kind: tile.kind,
                x,
                y,
                is_static: sandbox.physics.is_static(tile.body).unwrap_or(true),
            }
        })
        .collect();
    out.sort_by_key(|t| t.coord);
    out
}

pub(super) fn tiles_json(sandbox: &SandboxCore) -> String {
    match serde_json::to_string(&snapshot(sandbox)) {
        Ok(json) => json,
        Err(err) => {
            log::warn!("tile snapshot failed to serialize: {}", err);
            "[]".to_string()
        }
    }
}
