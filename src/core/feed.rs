use serde::Deserialize;
use thiserror::Error;

// Subset of the USGS GeoJSON summary feed the dashboard reads.
// Unknown fields are ignored. Nulls inside a feature are kept as `None` so
// one broken event never fails the whole collection.

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed request failed with HTTP status {0}")]
    Status(u16),
    #[error("feed body is not valid GeoJSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Feature {
    pub id: String,
    pub properties: Properties,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub mag: Option<f64>,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub coordinates: Vec<Option<f64>>,
}

impl Geometry {
    /// `[lng, lat, depth]` when all three are present and non-null.
    pub fn lng_lat_depth(&self) -> Option<(f64, f64, f64)> {
        match self.coordinates.as_slice() {
            [lng, lat, depth, ..] => Some(((*lng)?, (*lat)?, (*depth)?)),
            _ => None,
        }
    }
}

pub fn parse_feed(body: &str) -> Result<FeatureCollection, FeedError> {
    Ok(serde_json::from_str(body)?)
}
