//! Canvas2D painter
//!
//! Rasterizes a [`Scene`] onto an `HtmlCanvasElement`. Field units map 1:1
//! to canvas pixels.

use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::scene::*;

pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
    backdrop: Backdrop,
    /// `setLineDash` argument for the guide path
    guide_dash: JsValue,
    no_dash: JsValue,
}

impl CanvasPainter {
    pub fn new(canvas: &HtmlCanvasElement, backdrop: Backdrop) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D canvas unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let guide_dash = js_sys::Array::of2(&JsValue::from_f64(5.0), &JsValue::from_f64(5.0));
        Ok(Self {
            ctx,
            backdrop,
            guide_dash: guide_dash.into(),
            no_dash: js_sys::Array::new().into(),
        })
    }

    /// Draw one full frame
    pub fn paint(&self, scene: &Scene) -> Result<(), JsValue> {
        self.background(scene.size)?;
        self.path(&scene.guide, LINE_GUIDE, 2.0, &self.guide_dash, 0.0)?;
        self.path(&scene.lit, LINE_LIT, 3.0, &self.no_dash, 10.0)?;
        for star in &scene.stars {
            self.star(star)?;
        }
        if let Some(ship) = &scene.ship {
            self.ship(ship);
        }
        Ok(())
    }

    fn background(&self, size: Vec2) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);

        ctx.set_fill_style_str(STAR_IDLE);
        for dust in &self.backdrop.dust {
            ctx.set_global_alpha(dust.alpha as f64);
            ctx.begin_path();
            ctx.arc(dust.pos.x as f64, dust.pos.y as f64, dust.radius as f64, 0.0, TAU)?;
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);
        Ok(())
    }

    fn path(&self, points: &[Vec2], color: &str, width: f64, dash: &JsValue, glow: f64) -> Result<(), JsValue> {
        let [first, rest @ ..] = points else {
            return Ok(());
        };
        if rest.is_empty() {
            return Ok(());
        }

        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.set_stroke_style_str(color);
        ctx.set_line_dash(dash)?;
        ctx.set_line_width(width);
        ctx.set_shadow_blur(glow);
        ctx.set_shadow_color(color);
        ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            ctx.line_to(p.x as f64, p.y as f64);
        }
        ctx.stroke();
        ctx.set_shadow_blur(0.0);
        ctx.set_line_dash(&self.no_dash)?;
        Ok(())
    }

    fn star(&self, star: &StarSprite) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let color = star.style.color();
        ctx.begin_path();
        ctx.set_fill_style_str(color);
        if star.style.glows() {
            ctx.set_shadow_blur(15.0);
            ctx.set_shadow_color(color);
        }
        ctx.arc(star.pos.x as f64, star.pos.y as f64, STAR_RADIUS as f64, 0.0, TAU)?;
        ctx.fill();
        ctx.set_shadow_blur(0.0);
        Ok(())
    }

    fn ship(&self, ship: &ShipSprite) {
        self.triangle(&ship.hull(), SHIP_COLOR);
        if let Some(flame) = ship.flame() {
            self.triangle(&flame, ENGINE_GLOW);
        }
    }

    fn triangle(&self, points: &[Vec2; 3], color: &str) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(color);
        ctx.begin_path();
        ctx.move_to(points[0].x as f64, points[0].y as f64);
        ctx.line_to(points[1].x as f64, points[1].y as f64);
        ctx.line_to(points[2].x as f64, points[2].y as f64);
        ctx.close_path();
        ctx.fill();
    }
}
