use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::physics::BodyShape;

use super::extract::{Palette, RenderShape};

/// Solid-fill renderer over a 2D canvas context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    palette: Palette,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, width: u32, height: u32, palette: Palette) -> Self {
        Self {
            ctx,
            width: width as f64,
            height: height as f64,
            palette,
        }
    }

    /// Clear to the background color and draw every shape
    pub fn draw(&self, shapes: &[RenderShape]) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(&self.palette.background);
        ctx.fill_rect(0.0, 0.0, self.width, self.height);

        for shape in shapes {
            ctx.set_fill_style_str(self.palette.fill_for(shape.kind));
            ctx.save();
            ctx.translate(shape.x as f64, shape.y as f64)?;
            ctx.rotate(shape.angle as f64)?;
            match shape.shape {
                BodyShape::Rect { width, height } => {
                    let (w, h) = (width as f64, height as f64);
                    ctx.fill_rect(-w / 2.0, -h / 2.0, w, h);
                }
                BodyShape::Circle { radius } => {
                    ctx.begin_path();
                    ctx.arc(0.0, 0.0, radius as f64, 0.0, TAU)?;
                    ctx.fill();
                }
            }
            ctx.restore();
        }
        Ok(())
    }
}
