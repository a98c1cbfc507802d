use log::info;

use crate::domain::SimulationMode;

use super::SandboxCore;

/// Editing -> Running. Variable tiles start falling; blocks stay put.
pub(super) fn start_simulation(sandbox: &mut SandboxCore) -> bool {
    if !sandbox.mode.is_editing() {
        return false;
    }
    sandbox.mode = SimulationMode::Running;

    let mut released = 0usize;
    for tile in sandbox.tiles.values().filter(|t| t.kind.is_variable()) {
        sandbox.physics.set_static(tile.body, false);
        released += 1;
    }

    info!("simulation started; {} variable tiles released", released);
    true
}

/// Running -> Editing. Variable tiles freeze and snap back to their cell.
///
/// The snap target is the cell corner (col * TILE_SIZE, row * TILE_SIZE),
/// not the center used at placement, so restored circles sit half a tile up
/// and left of where they were placed.
pub(super) fn stop_simulation(sandbox: &mut SandboxCore) -> bool {
    if !sandbox.mode.is_running() {
        return false;
    }
    sandbox.mode = SimulationMode::Editing;

    for (coord, tile) in sandbox.tiles.iter().filter(|(_, t)| t.kind.is_variable()) {
        let (x, y) = coord.corner();
        sandbox.physics.set_static(tile.body, true);
        sandbox.physics.set_position(tile.body, x, y);
    }

    info!("simulation stopped; {} tiles restored", sandbox.tiles.len());
    true
}
