use crate::constants::MAX_FRAME_DT_SEC;
use crate::core::{pack_markers, GlobeUniforms, PathSegment};
use crate::dom;
use crate::effects::{self, EffectLayer};
use crate::render;
use crate::state::SharedDashboard;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub dash: SharedDashboard,
    pub globe_canvas: web::HtmlCanvasElement,
    pub waves: Option<EffectLayer>,
    pub wind: Option<EffectLayer>,
    pub gpu: Option<render::GpuState<'a>>,
    pub plate_segments: Vec<PathSegment>,
    pub uploaded_version: Option<u64>,
    pub last_instant: Instant,
    pub time_sec: f32,
}

impl<'a> FrameContext<'a> {
    /// One animation frame. Returns false once the dashboard is stopped.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        self.time_sec += dt_sec;

        let dpr = dom::device_pixel_ratio();
        let mut d = self.dash.borrow_mut();
        if d.poll.is_stopped() {
            drop(d);
            self.clear_layers(dpr);
            return false;
        }

        // Seismic ripples
        if let Some(layer) = &self.waves {
            d.viewport = layer.css_size(dpr);
            d.ripples.step(dt_sec);
            effects::draw_ripples(layer, &d.ripples, dpr);
        }

        // Solar wind
        if let Some(layer) = &self.wind {
            let [w, h] = layer.css_size(dpr);
            d.wind.resize(w, h);
            d.wind.step(dt_sec);
            effects::draw_solar_wind(layer, &d.wind, dpr);
        }

        // Globe
        let w = self.globe_canvas.width();
        let h = self.globe_canvas.height();
        d.view.center_px = Vec2::new(w as f32 * 0.5, h as f32 * 0.5);
        d.view.radius_px = d.config.globe_radius_css() * dpr as f32;
        if let Some(g) = &mut self.gpu {
            if self.uploaded_version != Some(d.markers_version) {
                g.upload_markers(&pack_markers(&d.markers, d.selected));
                self.uploaded_version = Some(d.markers_version);
            }
            let uniforms = GlobeUniforms::new(
                &d.view,
                [w as f32, h as f32],
                self.time_sec,
                d.markers.len(),
                &self.plate_segments,
                d.config.show_plates,
            );
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&uniforms) {
                log::error!("render error: {:?}", e);
            }
        }
        true
    }

    fn clear_layers(&self, dpr: f64) {
        for layer in [&self.waves, &self.wind].into_iter().flatten() {
            layer.clear(dpr);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx_tick.borrow_mut().frame() {
            log::info!("[frame] loop ended");
            // Not rescheduled; the closure stays parked in `tick`.
            return;
        }
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
