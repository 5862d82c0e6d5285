// Host-side tests for marker derivation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod seismo {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod feed {
        include!("../src/core/feed.rs");
    }
    pub mod marker {
        include!("../src/core/marker.rs");
    }
}

use seismo::constants::*;
use seismo::feed::*;
use seismo::marker::*;

fn feature(id: &str, mag: Option<f64>, coords: &[f64]) -> Feature {
    Feature {
        id: id.to_string(),
        properties: Properties {
            mag,
            place: Some(format!("near {}", id)),
            time: Some(0),
            url: None,
        },
        geometry: Some(Geometry {
            coordinates: coords.iter().copied().map(Some).collect(),
        }),
    }
}

#[test]
fn depth_buckets_split_at_70_and_300() {
    assert_eq!(depth_bucket(-3.0), DepthBucket::Shallow);
    assert_eq!(depth_bucket(0.0), DepthBucket::Shallow);
    assert_eq!(depth_bucket(69.9), DepthBucket::Shallow);
    assert_eq!(depth_bucket(70.0), DepthBucket::Mid);
    assert_eq!(depth_bucket(299.9), DepthBucket::Mid);
    assert_eq!(depth_bucket(300.0), DepthBucket::Deep);
    assert_eq!(depth_bucket(650.0), DepthBucket::Deep);
}

#[test]
fn bucket_colors_match_palette() {
    assert_eq!(DepthBucket::Shallow.hex(), "#ef4444");
    assert_eq!(DepthBucket::Mid.hex(), "#f59e0b");
    assert_eq!(DepthBucket::Deep.hex(), "#3b82f6");
    let [r, g, b] = DepthBucket::Deep.rgb();
    assert!((r - 59.0 / 255.0).abs() < 1e-6);
    assert!((g - 130.0 / 255.0).abs() < 1e-6);
    assert!((b - 246.0 / 255.0).abs() < 1e-6);
}

#[test]
fn size_is_clamped_linear_in_magnitude() {
    assert!((magnitude_size(3.0) - 0.9).abs() < 1e-12);
    assert!((magnitude_size(5.0) - 1.5).abs() < 1e-12);
    assert_eq!(magnitude_size(0.1), MARKER_SIZE_MIN);
    assert_eq!(magnitude_size(-1.0), MARKER_SIZE_MIN);
    assert_eq!(magnitude_size(7.0), MARKER_SIZE_MAX);
    assert_eq!(magnitude_size(9.5), MARKER_SIZE_MAX);
}

#[test]
fn hex_to_rgb_rejects_bad_input() {
    assert_eq!(hex_to_rgb("#ff0000"), Some([1.0, 0.0, 0.0]));
    assert_eq!(hex_to_rgb("ff0000"), None);
    assert_eq!(hex_to_rgb("#fff"), None);
    assert_eq!(hex_to_rgb("#gg0000"), None);
}

#[test]
fn marker_from_feature_derives_fields() {
    let m = Marker::from_feature(&feature("a", Some(4.5), &[-117.5, 35.25, 12.0])).unwrap();
    assert_eq!(m.id, "a");
    assert_eq!(m.lat, 35.25);
    assert_eq!(m.lng, -117.5);
    assert_eq!(m.depth, 12.0);
    assert_eq!(m.bucket, DepthBucket::Shallow);
    assert!((m.size - 1.35).abs() < 1e-12);
    assert_eq!(m.color_hex(), SHALLOW_HEX);
}

#[test]
fn marker_from_feature_drops_incomplete_events() {
    assert!(Marker::from_feature(&feature("a", None, &[0.0, 0.0, 10.0])).is_none());
    assert!(Marker::from_feature(&feature("b", Some(3.0), &[0.0, 0.0])).is_none());
    assert!(Marker::from_feature(&feature("c", Some(f64::NAN), &[0.0, 0.0, 10.0])).is_none());
    assert!(Marker::from_feature(&feature("d", Some(3.0), &[f64::INFINITY, 0.0, 10.0])).is_none());
}

#[test]
fn filter_keeps_threshold_and_above_in_feed_order() {
    let features = vec![
        feature("low", Some(2.4), &[0.0, 0.0, 10.0]),
        feature("edge", Some(2.5), &[10.0, 0.0, 10.0]),
        feature("high", Some(6.1), &[20.0, 0.0, 500.0]),
        feature("nomag", None, &[30.0, 0.0, 10.0]),
    ];
    let markers = derive_markers(&features, 2.5);
    let ids: Vec<&str> = markers.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["edge", "high"]);
    assert!(markers.iter().all(|m| m.magnitude >= 2.5));
}

#[test]
fn empty_feed_gives_no_markers() {
    assert!(derive_markers(&[], 1.0).is_empty());
}

#[test]
fn duplicate_ids_keep_first_occurrence() {
    let features = vec![
        feature("dup", Some(3.0), &[0.0, 0.0, 10.0]),
        feature("other", Some(3.0), &[5.0, 5.0, 10.0]),
        feature("dup", Some(5.0), &[9.0, 9.0, 100.0]),
    ];
    let markers = derive_markers(&features, 1.0);
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].id, "dup");
    assert_eq!(markers[0].magnitude, 3.0);
}

#[test]
fn label_lines_show_magnitude_place_depth_and_time() {
    let m = Marker::from_feature(&feature("x", Some(4.5), &[0.0, 0.0, 10.0])).unwrap();
    let lines = m.label_lines();
    assert_eq!(lines[0], "M4.5");
    assert_eq!(lines[1], "near x");
    assert_eq!(lines[2], "Depth: 10km");
    assert_eq!(lines[3], "1970-01-01 00:00:00 UTC");
}

#[test]
fn event_time_formats_in_utc() {
    assert_eq!(format_event_time(1_700_000_000_000), "2023-11-14 22:13:20 UTC");
    assert_eq!(format_event_time(i64::MAX), "unknown time");
}

#[test]
fn coordinates_text_uses_three_decimals() {
    let m = Marker::from_feature(&feature("x", Some(3.0), &[-117.5, 35.1234, 5.0])).unwrap();
    assert_eq!(m.coordinates_text(), "35.123°, -117.500°");
}

#[test]
fn rgba_css_clamps_alpha() {
    assert_eq!(rgba_css([239, 68, 68], 0.5), "rgba(239, 68, 68, 0.500)");
    assert_eq!(rgba_css([1, 2, 3], 1.5), "rgba(1, 2, 3, 1.000)");
    assert_eq!(rgba_css([1, 2, 3], -0.2), "rgba(1, 2, 3, 0.000)");
}

#[test]
fn broken_features_are_dropped_one_at_a_time() {
    let body = r#"{"type":"FeatureCollection","features":[
      {"id":"good","properties":{"mag":3.2,"place":"ok","time":0},
       "geometry":{"type":"Point","coordinates":[10.0,20.0,5.0]}},
      {"id":"nulldepth","properties":{"mag":4.0},
       "geometry":{"type":"Point","coordinates":[1.0,2.0,null]}},
      {"id":"nogeom","properties":{"mag":5.0},"geometry":null},
      {"id":"missinggeom","properties":{"mag":5.5}}
    ]}"#;
    let fc = parse_feed(body).unwrap();
    assert_eq!(fc.features.len(), 4);
    let markers = derive_markers(&fc.features, 1.0);
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].id, "good");
}
