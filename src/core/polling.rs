use super::config::DashboardConfig;
use super::feed::Feature;
use super::marker::{derive_markers, Marker};

/// Bookkeeping for feed requests. Overlapping requests are allowed; the
/// loading indicator stays up until the last one settles, and nothing is
/// applied or re-armed once the dashboard is stopped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PollState {
    in_flight: u32,
    stopped: bool,
}

impl PollState {
    /// Registers a request. `false` after `stop`.
    pub fn begin(&mut self) -> bool {
        if self.stopped {
            return false;
        }
        self.in_flight += 1;
        true
    }

    /// Settles one request and derives markers at the threshold configured
    /// now, not when the request was issued. `None` once stopped.
    pub fn complete(
        &mut self,
        config: &DashboardConfig,
        features: &[Feature],
    ) -> Option<Vec<Marker>> {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.stopped {
            return None;
        }
        Some(derive_markers(features, config.min_magnitude))
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn in_flight(&self) -> u32 {
        self.in_flight
    }

    /// Whether the periodic refresh timer may be armed.
    pub fn may_arm_timer(&self, config: &DashboardConfig) -> bool {
        config.playing && !self.stopped
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}
