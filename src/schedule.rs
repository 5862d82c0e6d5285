use crate::core::RIPPLE_SPAWN_INTERVAL_MS;
use crate::state::App;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A `setInterval` registration; dropping it clears the timer.
pub struct Interval {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn start(period_ms: i32, mut f: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let closure = Closure::wrap(Box::new(move || f()) as Box<dyn FnMut()>);
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms,
            )
            .map_err(|e| anyhow::anyhow!("setInterval error: {:?}", e))?;
        Ok(Self {
            handle,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.handle);
        }
    }
}

/// The two periodic timers: feed refresh and ripple spawning.
#[derive(Default)]
pub struct Schedule {
    refresh: Option<Interval>,
    ripples: Option<Interval>,
}

impl Schedule {
    /// Replaces the refresh timer; only armed while playing and never after
    /// teardown.
    pub fn restart_refresh(&mut self, app: &App) {
        self.refresh = None;
        let (armed, period_ms) = {
            let d = app.dash.borrow();
            (d.poll.may_arm_timer(&d.config), d.config.refresh_interval_ms)
        };
        if !armed {
            return;
        }
        let app_tick = app.clone();
        self.refresh = match Interval::start(period_ms, move || app_tick.refresh()) {
            Ok(i) => Some(i),
            Err(e) => {
                log::error!("[schedule] refresh timer: {:?}", e);
                None
            }
        };
    }

    pub fn start_ripples(&mut self, app: &App) {
        let dash = app.dash.clone();
        self.ripples = match Interval::start(RIPPLE_SPAWN_INTERVAL_MS, move || {
            dash.borrow_mut().spawn_ripple();
        }) {
            Ok(i) => Some(i),
            Err(e) => {
                log::error!("[schedule] ripple timer: {:?}", e);
                None
            }
        };
    }

    pub fn clear(&mut self) {
        self.refresh = None;
        self.ripples = None;
    }
}
