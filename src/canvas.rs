//! `Surface` on top of `CanvasRenderingContext2d`.
//!
//! Drawing happens in CSS pixels; `begin_frame` installs the device pixel
//! ratio as the base transform and clears the canvas.

use crate::constants::FONT_FAMILY;
use crate::dom;
use glam::Vec2;
use holo_core::{Gradient, Paint, Rgba, Surface, TextAlign};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    css: Vec2,
    dpr: f64,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let mut surface = Self {
            canvas,
            ctx,
            css: Vec2::ONE,
            dpr: 1.0,
        };
        surface.resize();
        Ok(surface)
    }

    /// Match the backing store to the layout size; returns the CSS size.
    pub fn resize(&mut self) -> Vec2 {
        let (css, dpr) = dom::sync_canvas_backing_size(&self.canvas);
        self.css = css;
        self.dpr = dpr;
        css
    }

    pub fn css_size(&self) -> Vec2 {
        self.css
    }

    pub fn begin_frame(&mut self) {
        let d = self.dpr;
        _ = self.ctx.set_transform(d, 0.0, 0.0, d, 0.0, 0.0);
        self.ctx
            .clear_rect(0.0, 0.0, self.css.x as f64, self.css.y as f64);
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_shadow_blur(0.0);
    }

    fn gradient(&self, g: &Gradient) -> Option<web::CanvasGradient> {
        let grad = match g {
            Gradient::Linear { from, to, .. } => self.ctx.create_linear_gradient(
                from.x as f64,
                from.y as f64,
                to.x as f64,
                to.y as f64,
            ),
            Gradient::Radial {
                center,
                inner_radius,
                outer_radius,
                ..
            } => self
                .ctx
                .create_radial_gradient(
                    center.x as f64,
                    center.y as f64,
                    inner_radius.max(0.0) as f64,
                    center.x as f64,
                    center.y as f64,
                    outer_radius.max(0.0) as f64,
                )
                .ok()?,
        };
        for stop in g.stops() {
            _ = grad.add_color_stop(stop.offset, &stop.color.to_css());
        }
        Some(grad)
    }

    fn stroke_paint(&self, paint: &Paint) {
        match paint {
            Paint::Solid(c) => self.ctx.set_stroke_style_str(&c.to_css()),
            Paint::Gradient(g) => {
                if let Some(grad) = self.gradient(g) {
                    self.ctx.set_stroke_style_canvas_gradient(&grad);
                }
            }
        }
    }

    fn fill_paint(&self, paint: &Paint) {
        match paint {
            Paint::Solid(c) => self.ctx.set_fill_style_str(&c.to_css()),
            Paint::Gradient(g) => {
                if let Some(grad) = self.gradient(g) {
                    self.ctx.set_fill_style_canvas_gradient(&grad);
                }
            }
        }
    }
}

impl Surface for CanvasSurface {
    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        _ = self.ctx.translate(offset.x as f64, offset.y as f64);
    }

    fn scale(&mut self, factor: f32) {
        _ = self.ctx.scale(factor as f64, factor as f64);
    }

    fn rotate(&mut self, radians: f32) {
        _ = self.ctx.rotate(radians as f64);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
    }

    fn set_line_width(&mut self, width: f32) {
        self.ctx.set_line_width(width as f64);
    }

    fn set_line_dash(&mut self, dash: &[f32]) {
        let segments: js_sys::Array = dash.iter().map(|&d| JsValue::from_f64(d as f64)).collect();
        _ = self.ctx.set_line_dash(&segments);
    }

    fn set_glow(&mut self, blur: f32, color: Rgba) {
        self.ctx.set_shadow_blur(blur.max(0.0) as f64);
        if blur > 0.0 {
            self.ctx.set_shadow_color(&color.to_css());
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, paint: &Paint) {
        self.stroke_paint(paint);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn stroke_polyline(&mut self, points: &[Vec2], closed: bool, color: Rgba) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        if closed {
            self.ctx.close_path();
        }
        self.ctx.stroke();
    }

    fn stroke_ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.begin_path();
        _ = self.ctx.ellipse(
            center.x as f64,
            center.y as f64,
            radii.x.max(0.0) as f64,
            radii.y.max(0.0) as f64,
            rotation as f64,
            0.0,
            TAU,
        );
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint) {
        self.fill_paint(paint);
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_text(&mut self, text: &str, at: Vec2, size_px: f32, align: TextAlign, color: Rgba) {
        self.ctx.set_font(&format!("{}px {}", size_px, FONT_FAMILY));
        self.ctx.set_text_align(match align {
            TextAlign::Start => "start",
            TextAlign::Center => "center",
        });
        self.ctx.set_fill_style_str(&color.to_css());
        _ = self.ctx.fill_text(text, at.x as f64, at.y as f64);
    }
}
