use super::constants::*;
use super::feed::Feature;
use chrono::{TimeZone, Utc};
use fnv::FnvHashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepthBucket {
    Shallow,
    Mid,
    Deep,
}

impl DepthBucket {
    pub fn hex(self) -> &'static str {
        match self {
            DepthBucket::Shallow => SHALLOW_HEX,
            DepthBucket::Mid => MID_HEX,
            DepthBucket::Deep => DEEP_HEX,
        }
    }

    /// Linear RGB in 0..1, decoded from the hex palette.
    pub fn rgb(self) -> [f32; 3] {
        hex_to_rgb(self.hex()).unwrap_or([1.0, 1.0, 1.0])
    }

    pub fn label(self) -> &'static str {
        match self {
            DepthBucket::Shallow => "Shallow (<70km)",
            DepthBucket::Mid => "Mid-depth (70-300km)",
            DepthBucket::Deep => "Deep (>300km)",
        }
    }
}

#[inline]
pub fn depth_bucket(depth_km: f64) -> DepthBucket {
    if depth_km < SHALLOW_DEPTH_LIMIT_KM {
        DepthBucket::Shallow
    } else if depth_km < DEEP_DEPTH_LIMIT_KM {
        DepthBucket::Mid
    } else {
        DepthBucket::Deep
    }
}

/// Angular marker radius in degrees.
#[inline]
pub fn magnitude_size(magnitude: f64) -> f64 {
    (magnitude * SIZE_PER_MAGNITUDE).clamp(MARKER_SIZE_MIN, MARKER_SIZE_MAX)
}

pub fn hex_to_rgb(hex: &str) -> Option<[f32; 3]> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .ok()
            .map(|v| v as f32 / 255.0)
    };
    Some([channel(0)?, channel(2)?, channel(4)?])
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub depth: f64,
    pub magnitude: f64,
    pub place: String,
    pub time: i64,
    pub url: Option<String>,
    pub bucket: DepthBucket,
    pub size: f64,
}

impl Marker {
    /// Builds a marker from a feed feature; `None` when a required field is
    /// missing or not finite.
    pub fn from_feature(feature: &Feature) -> Option<Self> {
        let magnitude = feature.properties.mag?;
        let (lng, lat, depth) = feature.geometry.as_ref()?.lng_lat_depth()?;
        if ![magnitude, lng, lat, depth].iter().all(|v| v.is_finite()) {
            return None;
        }
        Some(Self {
            id: feature.id.clone(),
            lat,
            lng,
            depth,
            magnitude,
            place: feature.properties.place.clone().unwrap_or_default(),
            time: feature.properties.time.unwrap_or(0),
            url: feature.properties.url.clone(),
            bucket: depth_bucket(depth),
            size: magnitude_size(magnitude),
        })
    }

    pub fn color_hex(&self) -> &'static str {
        self.bucket.hex()
    }

    /// Hover label: magnitude, place, depth and UTC time, one per line.
    pub fn label_lines(&self) -> [String; 4] {
        [
            format!("M{}", self.magnitude),
            self.place.clone(),
            format!("Depth: {}km", self.depth),
            format_event_time(self.time),
        ]
    }

    pub fn coordinates_text(&self) -> String {
        format!("{:.3}°, {:.3}°", self.lat, self.lng)
    }
}

pub fn format_event_time(epoch_ms: i64) -> String {
    match Utc.timestamp_millis_opt(epoch_ms).single() {
        Some(t) => t.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => "unknown time".to_string(),
    }
}

/// Keeps features with `magnitude >= min_magnitude`, in feed order.
/// Repeated ids keep their first occurrence.
pub fn derive_markers(features: &[Feature], min_magnitude: f64) -> Vec<Marker> {
    let mut seen = FnvHashSet::default();
    features
        .iter()
        .filter_map(Marker::from_feature)
        .filter(|m| m.magnitude >= min_magnitude)
        .filter(|m| seen.insert(m.id.clone()))
        .collect()
}

/// CSS `rgba(r, g, b, a)` with alpha clamped to 0..1.
pub fn rgba_css(rgb: [u8; 3], alpha: f32) -> String {
    format!(
        "rgba({}, {}, {}, {:.3})",
        rgb[0],
        rgb[1],
        rgb[2],
        alpha.clamp(0.0, 1.0)
    )
}
