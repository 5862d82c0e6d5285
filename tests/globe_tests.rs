// Host-side tests for globe orientation, projection and picking.
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
    pub mod globe {
        include!("../src/core/globe.rs");
    }
}

use glam::{Vec2, Vec3};
use seismo::globe::*;
use seismo::marker::*;

fn view_at(lat: f64, lng: f64) -> GlobeView {
    let mut v = GlobeView {
        center_px: Vec2::new(400.0, 300.0),
        radius_px: 200.0,
        ..GlobeView::default()
    };
    v.center_on(lat, lng);
    v
}

fn marker_at(lat: f64, lng: f64, magnitude: f64) -> Marker {
    Marker {
        id: format!("{},{}", lat, lng),
        lat,
        lng,
        depth: 10.0,
        magnitude,
        place: String::new(),
        time: 0,
        url: None,
        bucket: depth_bucket(10.0),
        size: magnitude_size(magnitude),
    }
}

#[test]
fn unit_vectors_follow_axis_convention() {
    assert!(lat_lng_to_unit(0.0, 0.0).abs_diff_eq(Vec3::Z, 1e-6));
    assert!(lat_lng_to_unit(90.0, 0.0).abs_diff_eq(Vec3::Y, 1e-6));
    assert!(lat_lng_to_unit(0.0, 90.0).abs_diff_eq(Vec3::X, 1e-6));
}

#[test]
fn lat_lng_round_trip() {
    for &(lat, lng) in &[(35.0, -120.0), (-33.9, 151.2), (64.1, -21.9), (0.0, 179.0)] {
        let (la, ln) = unit_to_lat_lng(lat_lng_to_unit(lat, lng));
        assert!((la - lat).abs() < 1e-3, "lat {} vs {}", la, lat);
        assert!((ln - lng).abs() < 1e-3, "lng {} vs {}", ln, lng);
    }
}

#[test]
fn angular_distance_between_axes() {
    assert!((angular_distance_deg(Vec3::X, Vec3::Y) - 90.0).abs() < 1e-4);
    assert!(angular_distance_deg(Vec3::Z, Vec3::Z).abs() < 1e-3);
}

#[test]
fn centred_point_projects_to_screen_centre() {
    let view = view_at(35.0, -120.0);
    let px = view.project(35.0, -120.0).unwrap();
    assert!(px.abs_diff_eq(view.center_px, 1e-3), "{:?}", px);
}

#[test]
fn far_side_does_not_project() {
    let view = view_at(0.0, 0.0);
    assert!(view.project(0.0, 180.0).is_none());
    assert!(view.project(0.0, 30.0).is_some());
}

#[test]
fn north_appears_above_centre() {
    let view = view_at(0.0, 0.0);
    let px = view.project(30.0, 0.0).unwrap();
    assert!(px.y < view.center_px.y);
    assert!((px.x - view.center_px.x).abs() < 1e-3);
}

#[test]
fn unproject_inverts_project() {
    let view = view_at(20.0, 40.0);
    let px = view.project(25.0, 50.0).unwrap();
    let (lat, lng) = view.unproject(px).unwrap();
    assert!((lat - 25.0).abs() < 1e-2, "lat {}", lat);
    assert!((lng - 50.0).abs() < 1e-2, "lng {}", lng);
}

#[test]
fn unproject_misses_outside_disc() {
    let view = view_at(0.0, 0.0);
    let outside = view.center_px + Vec2::new(view.radius_px * 1.5, 0.0);
    assert!(view.unproject(outside).is_none());
}

#[test]
fn pitch_is_clamped() {
    let mut view = GlobeView::default();
    view.set_pitch(3.0);
    assert!((view.pitch - 85f32.to_radians()).abs() < 1e-6);
    view.set_pitch(-3.0);
    assert!((view.pitch + 85f32.to_radians()).abs() < 1e-6);
}

#[test]
fn drag_rotates_by_pixels_over_radius() {
    let mut view = GlobeView {
        radius_px: 100.0,
        ..GlobeView::default()
    };
    view.drag_by(Vec2::new(100.0, 0.0));
    assert!((view.yaw - 1.0).abs() < 1e-6);
    assert_eq!(view.pitch, 0.0);
}

#[test]
fn pick_hits_marker_under_pointer() {
    let view = view_at(0.0, 0.0);
    let markers = vec![marker_at(0.0, 0.0, 4.0), marker_at(30.0, 30.0, 4.0)];
    assert_eq!(view.pick(view.center_px, &markers, 0.5), Some(0));

    let px = view.project(30.0, 30.0).unwrap();
    assert_eq!(view.pick(px, &markers, 0.5), Some(1));

    let empty = view.project(-40.0, -20.0).unwrap();
    assert_eq!(view.pick(empty, &markers, 0.5), None);
}

#[test]
fn nearest_marker_prefers_closest_overlap() {
    let markers = vec![marker_at(0.0, 0.0, 6.0), marker_at(0.0, 1.0, 6.0)];
    assert_eq!(nearest_marker(&markers, 0.0, 0.9, 0.0), Some(1));
    assert_eq!(nearest_marker(&markers, 0.0, 0.1, 0.0), Some(0));
    assert_eq!(nearest_marker(&markers, 10.0, 10.0, 0.0), None);
    assert_eq!(nearest_marker(&[], 0.0, 0.0, 5.0), None);
}

#[test]
fn ray_sphere_hits_and_misses() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0).unwrap();
    assert!((t - 3.0).abs() < 1e-5);
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(5.0, 0.0, 5.0), 2.0).is_none());
    assert!(ray_sphere(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
}
