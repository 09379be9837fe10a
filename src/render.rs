use crate::core::DrawOp;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

const SPARKLE_FILL: &str = "#fff";

/// Thin wrapper around the 2D context of the confetti canvas.
pub struct Painter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Painter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext(2d): {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    /// Drawing on a canvas that left the document is a silent no-op.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.canvas.is_connected()
    }

    pub fn paint(&self, ops: &[DrawOp]) {
        if !self.is_live() {
            return;
        }
        for op in ops {
            self.paint_one(op);
        }
    }

    fn paint_one(&self, op: &DrawOp) {
        let ctx = &self.ctx;
        match op {
            DrawOp::Clear { width, height } => {
                ctx.clear_rect(0.0, 0.0, *width as f64, *height as f64);
            }
            DrawOp::Confetti {
                center,
                rotation,
                size,
                aspect,
                color,
            } => {
                let s = *size as f64;
                ctx.save();
                _ = ctx.translate(center.x as f64, center.y as f64);
                _ = ctx.rotate(*rotation as f64);
                ctx.set_fill_style_str(&color.css());
                ctx.fill_rect(-s / 2.0, -s / 2.0, s, s * *aspect as f64);
                ctx.restore();
            }
            DrawOp::Sparkle { center, radius } => {
                ctx.set_fill_style_str(SPARKLE_FILL);
                ctx.begin_path();
                _ = ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU);
                ctx.fill();
            }
        }
    }
}
