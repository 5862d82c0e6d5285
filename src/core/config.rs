use super::constants::*;
use thiserror::Error;
use url::form_urlencoded;

/// Runtime dashboard settings. Defaults come from `constants.rs`; the page
/// URL query (`?minmag=4.5&size=350&plates=0`) may override them.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    pub feed_url: String,
    pub refresh_interval_ms: i32,
    pub min_magnitude: f64,
    pub globe_size: f32,
    pub show_plates: bool,
    pub playing: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            feed_url: USGS_FEED_URL.to_string(),
            refresh_interval_ms: REFRESH_INTERVAL_MS,
            min_magnitude: DEFAULT_MIN_MAGNITUDE,
            globe_size: DEFAULT_GLOBE_SIZE,
            show_plates: true,
            playing: true,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigIssue {
    #[error("unknown query parameter `{0}`")]
    UnknownKey(String),
    #[error("`{key}` expects {expected}, got `{value}`")]
    BadValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}

impl DashboardConfig {
    pub fn from_query(query: &str) -> (Self, Vec<ConfigIssue>) {
        let mut cfg = Self::default();
        let issues = cfg.apply_query(query);
        (cfg, issues)
    }

    /// Applies form-encoded `key=value` pairs; bad entries are reported and
    /// skipped.
    pub fn apply_query(&mut self, query: &str) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let query = query.strip_prefix('?').unwrap_or(query);
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let (key, value) = (key.as_ref(), value.as_ref());
            let bad = |expected: &'static str| ConfigIssue::BadValue {
                key: key.to_string(),
                value: value.to_string(),
                expected,
            };
            match key {
                "minmag" => match value.parse::<f64>() {
                    Ok(v) if v.is_finite() => self.set_min_magnitude(v),
                    _ => issues.push(bad("a number")),
                },
                "size" => match value.parse::<f32>() {
                    Ok(v) if v.is_finite() => self.set_globe_size(v),
                    _ => issues.push(bad("a number")),
                },
                "plates" => match parse_flag(value) {
                    Some(v) => self.show_plates = v,
                    None => issues.push(bad("0/1 or true/false")),
                },
                "play" => match parse_flag(value) {
                    Some(v) => self.playing = v,
                    None => issues.push(bad("0/1 or true/false")),
                },
                "refresh" => match value.parse::<i32>() {
                    Ok(secs) if secs > 0 && secs <= i32::MAX / 1000 => {
                        self.refresh_interval_ms = secs * 1000
                    }
                    _ => issues.push(bad("a positive number of seconds")),
                },
                "feed" => {
                    if value.starts_with("https://") || value.starts_with("http://") {
                        self.feed_url = value.to_string();
                    } else {
                        issues.push(bad("an http(s) URL"));
                    }
                }
                other => issues.push(ConfigIssue::UnknownKey(other.to_string())),
            }
        }
        issues
    }

    pub fn set_min_magnitude(&mut self, v: f64) {
        self.min_magnitude = v.clamp(MIN_MAGNITUDE_FLOOR, MIN_MAGNITUDE_CEIL);
    }

    pub fn set_globe_size(&mut self, v: f32) {
        self.globe_size = v.clamp(GLOBE_SIZE_MIN, GLOBE_SIZE_MAX);
    }

    /// Globe radius in CSS px.
    pub fn globe_radius_css(&self) -> f32 {
        self.globe_size * GLOBE_RADIUS_PER_SIZE
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
