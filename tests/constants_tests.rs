// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn slider_defaults_sit_inside_their_ranges() {
    assert!(MIN_MAGNITUDE_FLOOR <= DEFAULT_MIN_MAGNITUDE);
    assert!(DEFAULT_MIN_MAGNITUDE <= MIN_MAGNITUDE_CEIL);
    assert!(GLOBE_SIZE_MIN <= DEFAULT_GLOBE_SIZE);
    assert!(DEFAULT_GLOBE_SIZE <= GLOBE_SIZE_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn depth_and_size_bounds_are_ordered() {
    assert!(0.0 < SHALLOW_DEPTH_LIMIT_KM);
    assert!(SHALLOW_DEPTH_LIMIT_KM < DEEP_DEPTH_LIMIT_KM);
    assert!(MARKER_SIZE_MIN < MARKER_SIZE_MAX);
    assert!(SIZE_PER_MAGNITUDE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_are_positive() {
    assert!(REFRESH_INTERVAL_MS > RIPPLE_SPAWN_INTERVAL_MS);
    assert!(RIPPLE_SPAWN_INTERVAL_MS > 0);
    assert!(REFERENCE_FPS > 0.0);
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC < 1.0);
    assert!(PLATE_DASH_PERIOD_MS > 0.0);
}

#[test]
fn plate_dash_keeps_two_to_one() {
    assert_eq!(PLATE_DASH_DEG, 2.0 * PLATE_GAP_DEG);
}

#[test]
fn default_globe_radius_matches_default_view() {
    assert_eq!(DEFAULT_GLOBE_SIZE * GLOBE_RADIUS_PER_SIZE, 225.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn uniform_array_holds_every_plate_segment() {
    // Two vec4 per segment in a 64-entry uniform array.
    assert!(MAX_PLATE_SEGMENTS * 2 <= 64);
    assert!(SOLAR_TRAIL_LEN > 0 && SOLAR_TRAIL_LEN <= 32);
}

#[test]
fn palettes_are_distinct() {
    for (i, a) in SOLAR_PALETTE.iter().enumerate() {
        for b in &SOLAR_PALETTE[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_ne!(SHALLOW_HEX, MID_HEX);
    assert_ne!(MID_HEX, DEEP_HEX);
}

#[test]
fn element_ids_are_unique() {
    let ids = [
        GLOBE_CANVAS_ID,
        WAVE_CANVAS_ID,
        WIND_CANVAS_ID,
        MIN_MAGNITUDE_INPUT_ID,
        MIN_MAGNITUDE_LABEL_ID,
        GLOBE_SIZE_INPUT_ID,
        GLOBE_SIZE_LABEL_ID,
        PLATES_TOGGLE_ID,
        REFRESH_BUTTON_ID,
        PLAY_TOGGLE_ID,
        CONTROL_PANEL_ID,
        EVENT_BADGE_ID,
        STAT_TOTAL_ID,
        STAT_LARGEST_ID,
        STAT_SHALLOW_ID,
        STAT_DEEP_ID,
        LOADING_ID,
        TOOLTIP_ID,
        DETAILS_ID,
        DETAILS_CLOSE_ID,
        AURORA_PRIMARY_ID,
        AURORA_SECONDARY_ID,
        AURORA_TERTIARY_ID,
    ];
    let mut sorted = ids.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len());
    assert!(ids.iter().all(|id| !id.is_empty() && !id.contains(' ')));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pointer_tuning_is_sane() {
    assert!(CLICK_SLOP_PX > 0.0);
    assert!(PICK_TOLERANCE_DEG >= 0.0);
    assert!(TOOLTIP_OFFSET_PX > 0.0);
}

#[test]
fn magnitude_slider_moves_in_tenths() {
    let steps = (MIN_MAGNITUDE_CEIL - MIN_MAGNITUDE_FLOOR) / MIN_MAGNITUDE_SLIDER_STEP;
    assert!((steps - steps.round()).abs() < 1e-9);
    let default_steps = (DEFAULT_MIN_MAGNITUDE - MIN_MAGNITUDE_FLOOR) / MIN_MAGNITUDE_SLIDER_STEP;
    assert!((default_steps - default_steps.round()).abs() < 1e-9);

    let html = include_str!("../index.html");
    let start = html.find(&format!("id=\"{}\"", MIN_MAGNITUDE_INPUT_ID)).unwrap();
    let tag = &html[start..start + html[start..].find('>').unwrap()];
    assert!(tag.contains(&format!("step=\"{}\"", MIN_MAGNITUDE_SLIDER_STEP)));
}
