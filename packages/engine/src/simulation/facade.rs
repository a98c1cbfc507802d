use wasm_bindgen::prelude::*;

use crate::domain::{GridCoord, SandboxConfig, TileKind};

use super::SandboxCore;

#[wasm_bindgen]
pub struct Sandbox {
    core: SandboxCore,
}

#[wasm_bindgen]
impl Sandbox {
    /// Create an empty sandbox with default settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: SandboxCore::new(),
        }
    }

    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: String) -> Result<Sandbox, JsValue> {
        let config = SandboxConfig::from_json(&json)?;
        Ok(Self {
            core: SandboxCore::with_config(&config),
        })
    }

    /// Pointer-down in canvas pixels; button follows `MouseEvent.button`
    pub fn handle_pointer_event(&mut self, x: f32, y: f32, button: i16) {
        self.core.handle_pointer_event(x, y, button);
    }

    pub fn place_tile(&mut self, col: i32, row: i32) -> bool {
        self.core.place_tile(GridCoord::new(col, row))
    }

    pub fn remove_tile(&mut self, col: i32, row: i32) -> bool {
        self.core.remove_tile(GridCoord::new(col, row))
    }

    /// Select the kind for the next placements. Unknown values are ignored.
    pub fn set_tile_kind(&mut self, kind: i32) -> bool {
        match TileKind::from_index(kind) {
            Some(kind) => self.core.set_tile_kind(kind),
            None => {
                log::warn!("ignoring unknown tile kind {}", kind);
                false
            }
        }
    }

    #[wasm_bindgen(getter)]
    pub fn tile_kind(&self) -> u8 {
        self.core.tile_kind().index()
    }

    pub fn start_simulation(&mut self) -> bool {
        self.core.start_simulation()
    }

    pub fn stop_simulation(&mut self) -> bool {
        self.core.stop_simulation()
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.core.mode().is_running()
    }

    pub fn step(&mut self) {
        self.core.step();
    }

    #[wasm_bindgen(getter)]
    pub fn tile_count(&self) -> usize {
        self.core.tile_count()
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.core.body_count()
    }

    /// Kind index at a cell, or -1 when empty
    pub fn tile_kind_at(&self, col: i32, row: i32) -> i32 {
        self.core
            .tile_at(GridCoord::new(col, row))
            .map(|t| t.kind.index() as i32)
            .unwrap_or(-1)
    }

    /// Occupied cells as a flat `[col0, row0, col1, row1, ...]` array
    pub fn occupied_cells(&self) -> js_sys::Int32Array {
        let mut cells: Vec<GridCoord> = self.core.tiles().map(|(c, _)| *c).collect();
        cells.sort();
        let flat: Vec<i32> = cells.iter().flat_map(|c| [c.col, c.row]).collect();
        js_sys::Int32Array::from(flat.as_slice())
    }

    pub fn tiles_json(&self) -> String {
        self.core.tiles_json()
    }
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Sandbox {
    pub fn core(&self) -> &SandboxCore {
        &self.core
    }
}
