use log::debug;

use crate::domain::{GridCoord, PointerButton, Tile, TileKind, HALF_TILE, TILE_SIZE};

use super::SandboxCore;

pub(super) fn handle_pointer_event(sandbox: &mut SandboxCore, x: f32, y: f32, button: i16) {
    if sandbox.mode.is_running() {
        return;
    }

    let coord = GridCoord::from_pixel(x, y);

    match PointerButton::from_dom(button) {
        Some(PointerButton::Primary) => {
            place_tile(sandbox, coord);
        }
        Some(PointerButton::Secondary) => {
            remove_tile(sandbox, coord);
        }
        None => {}
    }
}

pub(super) fn place_tile(sandbox: &mut SandboxCore, coord: GridCoord) -> bool {
    if sandbox.mode.is_running() || sandbox.tiles.contains_key(&coord) {
        return false;
    }

    let (cx, cy) = coord.center();
    let kind = sandbox.tile_kind;

    let body = match kind {
        TileKind::Block => sandbox
            .physics
            .spawn_static_rect(cx, cy, TILE_SIZE, TILE_SIZE),
        TileKind::Variable => sandbox.physics.spawn_static_circle(cx, cy, HALF_TILE),
    };

    sandbox.tiles.insert(coord, Tile { body, kind });
    debug!(
        "placed {:?} at ({}, {}); {} tiles",
        kind,
        coord.col,
        coord.row,
        sandbox.tiles.len()
    );
    true
}

pub(super) fn remove_tile(sandbox: &mut SandboxCore, coord: GridCoord) -> bool {
    if sandbox.mode.is_running() {
        return false;
    }

    let Some(tile) = sandbox.tiles.get(&coord).copied() else {
        return false;
    };

    sandbox.physics.remove_body(tile.body);
    sandbox.tiles.remove(&coord);
    debug!(
        "removed tile at ({}, {}); {} tiles",
        coord.col,
        coord.row,
        sandbox.tiles.len()
    );
    true
}
