// Host-side tests for dashboard configuration and URL overrides.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod seismo {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
}

use seismo::config::*;
use seismo::constants::*;

#[test]
fn defaults_follow_constants() {
    let cfg = DashboardConfig::default();
    assert_eq!(cfg.feed_url, USGS_FEED_URL);
    assert_eq!(cfg.refresh_interval_ms, 300_000);
    assert_eq!(cfg.min_magnitude, 2.5);
    assert_eq!(cfg.globe_size, 300.0);
    assert!(cfg.show_plates);
    assert!(cfg.playing);
    assert_eq!(cfg.globe_radius_css(), 225.0);
}

#[test]
fn empty_queries_keep_defaults() {
    for q in ["", "?", "?&&"] {
        let (cfg, issues) = DashboardConfig::from_query(q);
        assert_eq!(cfg, DashboardConfig::default());
        assert!(issues.is_empty(), "{:?}", issues);
    }
}

#[test]
fn query_overrides_apply() {
    let (cfg, issues) =
        DashboardConfig::from_query("?minmag=4.5&size=350&plates=0&play=false&refresh=60");
    assert!(issues.is_empty(), "{:?}", issues);
    assert_eq!(cfg.min_magnitude, 4.5);
    assert_eq!(cfg.globe_size, 350.0);
    assert!(!cfg.show_plates);
    assert!(!cfg.playing);
    assert_eq!(cfg.refresh_interval_ms, 60_000);
}

#[test]
fn slider_values_are_clamped() {
    let (cfg, _) = DashboardConfig::from_query("minmag=9&size=50");
    assert_eq!(cfg.min_magnitude, MIN_MAGNITUDE_CEIL);
    assert_eq!(cfg.globe_size, GLOBE_SIZE_MIN);

    let mut cfg = DashboardConfig::default();
    cfg.set_min_magnitude(0.2);
    assert_eq!(cfg.min_magnitude, MIN_MAGNITUDE_FLOOR);
    cfg.set_globe_size(1000.0);
    assert_eq!(cfg.globe_size, GLOBE_SIZE_MAX);
}

#[test]
fn bad_values_are_reported_and_skipped() {
    let (cfg, issues) = DashboardConfig::from_query("minmag=abc&plates=maybe&refresh=0&size=NaN");
    assert_eq!(cfg, DashboardConfig::default());
    assert_eq!(issues.len(), 4);
    assert_eq!(
        issues[0],
        ConfigIssue::BadValue {
            key: "minmag".into(),
            value: "abc".into(),
            expected: "a number",
        }
    );
    assert_eq!(
        issues[0].to_string(),
        "`minmag` expects a number, got `abc`"
    );
}

#[test]
fn unknown_keys_are_reported() {
    let (_, issues) = DashboardConfig::from_query("theme=dark&minmag=3");
    assert_eq!(issues, vec![ConfigIssue::UnknownKey("theme".into())]);
    assert_eq!(issues[0].to_string(), "unknown query parameter `theme`");
}

#[test]
fn feed_url_is_percent_decoded() {
    let (cfg, issues) =
        DashboardConfig::from_query("feed=https%3A%2F%2Fexample.com%2Fsignificant_week.geojson");
    assert!(issues.is_empty());
    assert_eq!(cfg.feed_url, "https://example.com/significant_week.geojson");
}

#[test]
fn feed_url_must_be_http() {
    let (cfg, issues) = DashboardConfig::from_query("feed=ftp%3A%2F%2Fexample.com%2Fx");
    assert_eq!(cfg.feed_url, USGS_FEED_URL);
    assert_eq!(issues.len(), 1);
}

#[test]
fn flags_accept_common_spellings() {
    for on in ["1", "true", "on", "yes"] {
        let (cfg, issues) = DashboardConfig::from_query(&format!("play=0&play={}", on));
        assert!(issues.is_empty());
        assert!(cfg.playing);
    }
    for off in ["0", "false", "off", "no"] {
        let (cfg, _) = DashboardConfig::from_query(&format!("plates={}", off));
        assert!(!cfg.show_plates);
    }
}

#[test]
fn malformed_escapes_stay_literal() {
    let (cfg, issues) = DashboardConfig::from_query("feed=https://example.com/a%+1b");
    assert!(issues.is_empty());
    assert_eq!(cfg.feed_url, "https://example.com/a% 1b");
}

#[test]
fn plus_decodes_to_space_in_values() {
    let (cfg, issues) = DashboardConfig::from_query("feed=https://example.com/q?x=a+b");
    assert!(issues.is_empty());
    assert_eq!(cfg.feed_url, "https://example.com/q?x=a b");
}
