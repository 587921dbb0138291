//! Coin surface backed by a 2D canvas overlay

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::{CircleLayer, coin_layers};
use crate::anim::{CoinDropState, CoinSurface};

/// Class that makes the overlay visible
const ACTIVE_CLASS: &str = "active";

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap the canvas with id `canvas_id`, if present and 2D-capable
    pub fn from_element_id(canvas_id: &str) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let canvas: HtmlCanvasElement = document.get_element_by_id(canvas_id)?.dyn_into().ok()?;
        let ctx: CanvasRenderingContext2d =
            canvas.get_context("2d").ok()??.dyn_into().ok()?;
        Some(Self { canvas, ctx })
    }

    fn draw_layer(&self, layer: &CircleLayer) {
        self.ctx.set_shadow_blur(layer.glow);
        if layer.glow > 0.0 {
            self.ctx.set_shadow_color(super::shapes::COIN_GOLD);
        }
        self.ctx.begin_path();
        if self
            .ctx
            .arc(0.0, 0.0, layer.radius, 0.0, std::f64::consts::TAU)
            .is_err()
        {
            return;
        }
        if let Some(fill) = layer.fill {
            self.ctx.set_fill_style_str(fill);
            self.ctx.fill();
        }
        if let Some((color, width)) = layer.stroke {
            self.ctx.set_stroke_style_str(color);
            self.ctx.set_line_width(width);
            self.ctx.stroke();
        }
    }
}

impl CoinSurface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }

    fn show(&mut self) {
        let _ = self.canvas.class_list().add_1(ACTIVE_CLASS);
    }

    fn hide(&mut self) {
        let _ = self.canvas.class_list().remove_1(ACTIVE_CLASS);
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn draw_coin(&mut self, coin: &CoinDropState) {
        self.ctx.save();
        if self.ctx.translate(coin.x, coin.y).is_ok()
            && self.ctx.rotate(coin.rotation_radians()).is_ok()
        {
            for layer in coin_layers(coin.size).iter() {
                self.draw_layer(layer);
            }
        }
        self.ctx.restore();
    }
}
