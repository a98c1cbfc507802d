use crate::domain::{SandboxConfig, TileKind};
use crate::physics::BodyShape;
use crate::simulation::SandboxCore;

/// Fill colors per tile kind
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub background: String,
    pub block: String,
    pub variable: String,
}

impl Palette {
    pub fn from_config(config: &SandboxConfig) -> Self {
        Self {
            background: config.background.clone(),
            block: config.block_color.clone(),
            variable: config.variable_color.clone(),
        }
    }

    pub fn fill_for(&self, kind: TileKind) -> &str {
        match kind {
            TileKind::Block => &self.block,
            TileKind::Variable => &self.variable,
        }
    }
}

/// One body ready to draw, centered at (x, y)
#[derive(Clone, Debug, PartialEq)]
pub struct RenderShape {
    pub shape: BodyShape,
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub kind: TileKind,
}

/// Snapshot every tile's body. Order is stable: sorted by grid coordinate.
pub fn extract_shapes(sandbox: &SandboxCore) -> Vec<RenderShape> {
    let mut tiles: Vec<_> = sandbox.tiles().collect();
    tiles.sort_by_key(|(coord, _)| **coord);

    tiles
        .into_iter()
        .filter_map(|(_, tile)| {
            let view = sandbox.physics().view(tile.body)?;
            Some(RenderShape {
                shape: view.shape,
                x: view.x,
                y: view.y,
                angle: view.angle,
                kind: tile.kind,
            })
        })
        .collect()
}
