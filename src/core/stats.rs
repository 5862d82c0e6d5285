use super::constants::*;
use super::marker::Marker;

/// Numbers shown in the live statistics panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedStats {
    pub total: usize,
    pub largest_magnitude: Option<f64>,
    pub shallow: usize,
    pub deep: usize,
    pub strong: usize,
}

impl FeedStats {
    pub fn from_markers(markers: &[Marker]) -> Self {
        let largest_magnitude = markers
            .iter()
            .map(|m| m.magnitude)
            .fold(None, |acc: Option<f64>, m| Some(acc.map_or(m, |a| a.max(m))));
        Self {
            total: markers.len(),
            largest_magnitude,
            shallow: markers
                .iter()
                .filter(|m| m.depth < SHALLOW_DEPTH_LIMIT_KM)
                .count(),
            // The panel counts strictly deeper than the limit.
            deep: markers
                .iter()
                .filter(|m| m.depth > DEEP_DEPTH_LIMIT_KM)
                .count(),
            strong: markers
                .iter()
                .filter(|m| m.magnitude > AURORA_STRONG_MAGNITUDE)
                .count(),
        }
    }

    pub fn largest_magnitude_text(&self) -> String {
        match self.largest_magnitude {
            Some(m) => format!("{:.1}", m),
            None => "N/A".to_string(),
        }
    }

    /// 0..1; `None` when there are no events and the aurora keeps its defaults.
    pub fn aurora_intensity(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some((self.strong as f64 / AURORA_SATURATION_COUNT).min(1.0))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuroraLevels {
    pub primary_opacity: f64,
    pub primary_brightness: f64,
    pub secondary_opacity: f64,
    pub tertiary_opacity: f64,
}

impl AuroraLevels {
    pub fn for_intensity(intensity: f64) -> Self {
        let i = intensity.clamp(0.0, 1.0);
        Self {
            primary_opacity: 0.6 + i * 0.4,
            primary_brightness: 1.0 + i * 0.5,
            secondary_opacity: 0.5 + i * 0.3,
            tertiary_opacity: 0.4 + i * 0.2,
        }
    }
}
