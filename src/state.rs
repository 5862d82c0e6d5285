use crate::core::{DashboardConfig, FeedStats, GlobeView, Marker, PollState, RippleField, SolarWind};
use crate::fetch;
use crate::panels;
use crate::schedule::Schedule;
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// Everything the view shows. Single-threaded; shared through `Rc<RefCell<_>>`.
pub struct Dashboard {
    pub config: DashboardConfig,
    pub markers: Vec<Marker>,
    pub stats: FeedStats,
    pub poll: PollState,
    pub selected: Option<usize>,
    /// Bumped whenever markers or selection change so the GPU copy is refreshed.
    pub markers_version: u64,
    pub view: GlobeView,
    pub ripples: RippleField,
    pub wind: SolarWind,
    /// Effect canvas size in CSS px.
    pub viewport: [f32; 2],
    pub rng: StdRng,
}

pub type SharedDashboard = Rc<RefCell<Dashboard>>;

impl Dashboard {
    pub fn new(config: DashboardConfig, seed: u64) -> Self {
        Self {
            config,
            markers: Vec::new(),
            stats: FeedStats::default(),
            poll: PollState::default(),
            selected: None,
            markers_version: 0,
            view: GlobeView::default(),
            ripples: RippleField::default(),
            wind: SolarWind::new(1.0, 1.0, seed ^ 0x5EED),
            viewport: [1.0, 1.0],
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Wholesale replacement; the selection refers to the old set.
    pub fn replace_markers(&mut self, markers: Vec<Marker>) {
        self.stats = FeedStats::from_markers(&markers);
        self.markers = markers;
        self.selected = None;
        self.markers_version += 1;
    }

    pub fn selected_marker(&self) -> Option<&Marker> {
        self.selected.and_then(|i| self.markers.get(i))
    }

    pub fn spawn_ripple(&mut self) -> bool {
        if !self.config.playing {
            return false;
        }
        let [w, h] = self.viewport;
        let Self {
            ripples,
            rng,
            markers,
            ..
        } = self;
        ripples.spawn_random(rng, markers, w, h)
    }
}

/// Handle passed to event and timer closures.
#[derive(Clone)]
pub struct App {
    pub dash: SharedDashboard,
    pub schedule: Rc<RefCell<Schedule>>,
}

impl App {
    pub fn new(config: DashboardConfig, seed: u64) -> Self {
        Self {
            dash: Rc::new(RefCell::new(Dashboard::new(config, seed))),
            schedule: Rc::new(RefCell::new(Schedule::default())),
        }
    }

    /// Fetch, filter and replace the marker set. Failures log and leave zero
    /// markers. Responses are filtered at the threshold current when they
    /// land; the loading indicator clears after the last one in flight.
    pub fn refresh(&self) {
        let dash = self.dash.clone();
        let url = {
            let mut d = dash.borrow_mut();
            if d.poll.is_loading() {
                log::info!("[feed] refresh requested while a fetch is in flight");
            }
            if !d.poll.begin() {
                return;
            }
            d.config.feed_url.clone()
        };
        panels::show_loading(true);
        spawn_local(async move {
            let features = match fetch::fetch_feed(&url).await {
                Ok(collection) => collection.features,
                Err(e) => {
                    log::error!("[feed] failed to fetch earthquake data: {:?}", e);
                    Vec::new()
                }
            };
            let mut guard = dash.borrow_mut();
            let d = &mut *guard;
            let Some(markers) = d.poll.complete(&d.config, &features) else {
                return;
            };
            log::info!(
                "[feed] {} of {} events at M>={:.1}",
                markers.len(),
                features.len(),
                d.config.min_magnitude
            );
            d.replace_markers(markers);
            if !d.poll.is_loading() {
                panels::show_loading(false);
            }
            panels::render_stats(&d.stats);
            panels::show_details(None);
            panels::hide_tooltip();
        });
    }

    /// Refetches and (re)arms the refresh timer, as any play-state change does.
    pub fn restart_polling(&self) {
        self.refresh();
        self.schedule.borrow_mut().restart_refresh(self);
    }

    pub fn toggle_play(&self) {
        let playing = {
            let mut d = self.dash.borrow_mut();
            if d.poll.is_stopped() {
                return;
            }
            d.config.playing = !d.config.playing;
            d.config.playing
        };
        log::info!("[play] playing={}", playing);
        panels::set_play_label(playing);
        self.restart_polling();
    }

    pub fn set_min_magnitude(&self, value: f64) {
        let applied = {
            let mut d = self.dash.borrow_mut();
            if d.poll.is_stopped() {
                return;
            }
            d.config.set_min_magnitude(value);
            d.config.min_magnitude
        };
        panels::set_min_magnitude_label(applied);
        self.restart_polling();
    }

    pub fn set_globe_size(&self, value: f32) {
        let applied = {
            let mut d = self.dash.borrow_mut();
            d.config.set_globe_size(value);
            d.config.globe_size
        };
        panels::set_globe_size_label(applied);
    }

    pub fn set_show_plates(&self, show: bool) {
        self.dash.borrow_mut().config.show_plates = show;
        panels::set_plates_checked(show);
    }

    pub fn toggle_plates(&self) {
        let show = !self.dash.borrow().config.show_plates;
        self.set_show_plates(show);
    }

    pub fn select(&self, index: Option<usize>) {
        let mut d = self.dash.borrow_mut();
        let index = index.filter(|&i| i < d.markers.len());
        if d.selected != index {
            d.selected = index;
            d.markers_version += 1;
        }
        panels::show_details(d.selected_marker());
    }

    /// Turns the globe so the selected marker faces the viewer.
    pub fn center_on_selected(&self) {
        let mut d = self.dash.borrow_mut();
        let Some((lat, lng)) = d.selected_marker().map(|m| (m.lat, m.lng)) else {
            return;
        };
        d.view.center_on(lat, lng);
    }

    /// Tear down: clear both timers and end the animation loop.
    pub fn stop(&self) {
        self.schedule.borrow_mut().clear();
        let mut d = self.dash.borrow_mut();
        d.poll.stop();
        d.ripples.clear();
        d.wind.clear();
        log::info!("[app] stopped");
    }
}
