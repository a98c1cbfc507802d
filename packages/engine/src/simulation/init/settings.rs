use log::debug;

use crate::domain::TileKind;

use super::SandboxCore;

/// Only honored while editing; the selector is disabled otherwise.
pub(super) fn set_tile_kind(sandbox: &mut SandboxCore, kind: TileKind) -> bool {
    if sandbox.mode.is_running() {
        return false;
    }
    sandbox.tile_kind = kind;
    debug!("tile kind -> {:?}", kind);
    true
}
