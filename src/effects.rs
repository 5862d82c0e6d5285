use crate::core::{rgba_css, RippleField, SolarWind, RIPPLE_LINE_WIDTH, RIPPLE_RGB};
use std::f64::consts::TAU;
use web_sys as web;

/// A full-viewport Canvas 2D layer drawn in CSS px.
pub struct EffectLayer {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
}

impl EffectLayer {
    /// Clears the backing store and maps CSS px onto it.
    pub fn clear(&self, dpr: f64) {
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }

    /// Size in CSS px.
    pub fn css_size(&self, dpr: f64) -> [f32; 2] {
        let dpr = dpr.max(0.01);
        [
            (self.canvas.width() as f64 / dpr) as f32,
            (self.canvas.height() as f64 / dpr) as f32,
        ]
    }

    fn circle(&self, x: f32, y: f32, r: f32) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(x as f64, y as f64, r.max(0.0) as f64, 0.0, TAU);
    }
}

pub fn draw_ripples(layer: &EffectLayer, field: &RippleField, dpr: f64) {
    layer.clear(dpr);
    layer.ctx.set_line_width(RIPPLE_LINE_WIDTH);
    for r in &field.ripples {
        layer.circle(r.x, r.y, r.radius);
        layer.ctx.set_stroke_style_str(&rgba_css(RIPPLE_RGB, r.opacity));
        layer.ctx.stroke();
    }
}

pub fn draw_solar_wind(layer: &EffectLayer, wind: &SolarWind, dpr: f64) {
    layer.clear(dpr);
    let ctx = &layer.ctx;
    for p in &wind.particles {
        let n = p.trail.len().max(1) as f32;
        for (i, t) in p.trail.iter().enumerate() {
            let a = (i as f32 / n) * p.opacity * 0.3;
            layer.circle(t.pos.x, t.pos.y, p.size * 0.5);
            ctx.set_fill_style_str(&rgba_css(p.color, a));
            ctx.fill();
        }

        // Glow
        layer.circle(p.pos.x, p.pos.y, p.size);
        match ctx.create_radial_gradient(
            p.pos.x as f64,
            p.pos.y as f64,
            0.0,
            p.pos.x as f64,
            p.pos.y as f64,
            (p.size * 3.0) as f64,
        ) {
            Ok(g) => {
                _ = g.add_color_stop(0.0, &rgba_css(p.color, p.opacity));
                _ = g.add_color_stop(0.5, &rgba_css(p.color, p.opacity * 0.3));
                _ = g.add_color_stop(1.0, &rgba_css(p.color, 0.0));
                ctx.set_fill_style_canvas_gradient(&g);
            }
            Err(_) => ctx.set_fill_style_str(&rgba_css(p.color, p.opacity)),
        }
        ctx.fill();

        // Core
        layer.circle(p.pos.x, p.pos.y, p.size * 0.3);
        ctx.set_fill_style_str(&rgba_css(p.color, (p.opacity * 1.5).min(1.0)));
        ctx.fill();
    }
}
