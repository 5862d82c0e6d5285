#![cfg(target_arch = "wasm32")]
use crate::core::{path_segments, DashboardConfig, TECTONIC_PLATES};
use crate::effects::EffectLayer;
use crate::state::App;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod effects;
mod events;
mod fetch;
mod frame;
mod panels;
mod render;
mod schedule;
mod state;

use constants::*;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn wire_canvas_resize(canvases: Vec<web::HtmlCanvasElement>) {
    for c in &canvases {
        dom::sync_canvas_backing_size(c);
    }
    let resize_closure = Closure::wrap(Box::new(move || {
        for c in &canvases {
            dom::sync_canvas_backing_size(c);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn effect_layer(document: &web::Document, id: &str) -> Option<EffectLayer> {
    let canvas = match dom::canvas_by_id(document, id) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("[init] {:?}; effect skipped", e);
            return None;
        }
    };
    match dom::context_2d(&canvas) {
        Ok(ctx) => Some(EffectLayer { canvas, ctx }),
        Err(e) => {
            log::warn!("[init] #{} {:?}", id, e);
            None
        }
    }
}

fn read_config(window: &web::Window) -> DashboardConfig {
    let query = window.location().search().unwrap_or_default();
    let (config, issues) = DashboardConfig::from_query(&query);
    for issue in &issues {
        log::warn!("[config] {}", issue);
    }
    config
}

fn init_panels(app: &App) {
    let d = app.dash.borrow();
    panels::render_legend();
    panels::set_min_magnitude_label(d.config.min_magnitude);
    panels::set_globe_size_label(d.config.globe_size);
    panels::set_plates_checked(d.config.show_plates);
    panels::set_play_label(d.config.playing);
    panels::render_stats(&d.stats);
    panels::show_details(None);
    panels::hide_tooltip();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("seismo-sphere starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Clears both timers and ends the animation loop.
#[wasm_bindgen]
pub fn stop() {
    APP.with(|slot| {
        if let Some(app) = slot.borrow_mut().take() {
            app.stop();
        }
    });
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = read_config(&window);
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let app = App::new(config, seed);

    let globe_canvas = dom::canvas_by_id(&document, GLOBE_CANVAS_ID)?;
    let waves = effect_layer(&document, WAVE_CANVAS_ID);
    let wind = effect_layer(&document, WIND_CANVAS_ID);
    let mut canvases = vec![globe_canvas.clone()];
    canvases.extend(waves.iter().map(|l| l.canvas.clone()));
    canvases.extend(wind.iter().map(|l| l.canvas.clone()));
    wire_canvas_resize(canvases);

    init_panels(&app);
    events::wire_controls(&document, &app);
    events::wire_global_keydown(&app);
    events::wire_pointer_handlers(&app, &globe_canvas);

    // Data first; the globe renders as soon as the device is ready.
    app.restart_polling();
    app.schedule.borrow_mut().start_ripples(&app);
    APP.with(|slot| *slot.borrow_mut() = Some(app.clone()));

    let gpu = frame::init_gpu(&globe_canvas).await;
    let plate_segments = path_segments(TECTONIC_PLATES);
    log::info!(
        "[init] gpu={} plate segments={}",
        gpu.is_some(),
        plate_segments.len()
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        dash: app.dash.clone(),
        globe_canvas,
        waves,
        wind,
        gpu,
        plate_segments,
        uploaded_version: None,
        last_instant: Instant::now(),
        time_sec: 0.0,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
