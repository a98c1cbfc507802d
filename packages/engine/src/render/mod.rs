//! Render - turns the physics world into canvas draw calls
//!
//! `extract` is plain data and runs natively; `canvas` talks to the browser.

mod canvas;
mod extract;

pub use canvas::CanvasRenderer;
pub use extract::{extract_shapes, Palette, RenderShape};
