use crate::constants::*;
use crate::core::{AuroraLevels, DepthBucket, FeedStats, Marker, MIN_MAGNITUDE_SLIDER_STEP};
use crate::dom;
use web_sys as web;

// Writers skip elements missing from the page.

pub fn render_stats(stats: &FeedStats) {
    let Some(doc) = dom::window_document() else {
        return;
    };
    dom::set_text(&doc, EVENT_BADGE_ID, &format!("{} Active Events", stats.total));
    dom::set_text(&doc, STAT_TOTAL_ID, &stats.total.to_string());
    dom::set_text(&doc, STAT_LARGEST_ID, &stats.largest_magnitude_text());
    dom::set_text(&doc, STAT_SHALLOW_ID, &stats.shallow.to_string());
    dom::set_text(&doc, STAT_DEEP_ID, &stats.deep.to_string());
    apply_aurora(&doc, stats.aurora_intensity().map(AuroraLevels::for_intensity));
}

/// `None` restores the stylesheet defaults.
fn apply_aurora(doc: &web::Document, levels: Option<AuroraLevels>) {
    let layers = match levels {
        Some(l) => [
            (
                AURORA_PRIMARY_ID,
                Some(format!(
                    "opacity:{:.3};filter:brightness({:.3})",
                    l.primary_opacity, l.primary_brightness
                )),
            ),
            (
                AURORA_SECONDARY_ID,
                Some(format!("opacity:{:.3}", l.secondary_opacity)),
            ),
            (
                AURORA_TERTIARY_ID,
                Some(format!("opacity:{:.3}", l.tertiary_opacity)),
            ),
        ],
        None => [
            (AURORA_PRIMARY_ID, None),
            (AURORA_SECONDARY_ID, None),
            (AURORA_TERTIARY_ID, None),
        ],
    };
    for (id, style) in layers {
        if let Some(el) = doc.get_element_by_id(id) {
            match style {
                Some(s) => {
                    _ = el.set_attribute("style", &s);
                }
                None => {
                    _ = el.remove_attribute("style");
                }
            }
        }
    }
}

pub fn render_legend() {
    let Some(doc) = dom::window_document() else {
        return;
    };
    for (id, bucket) in [
        ("legend-shallow", DepthBucket::Shallow),
        ("legend-mid", DepthBucket::Mid),
        ("legend-deep", DepthBucket::Deep),
    ] {
        dom::set_text(&doc, id, bucket.label());
        if let Some(swatch) = doc.get_element_by_id(&format!("{}-swatch", id)) {
            _ = swatch.set_attribute("style", &format!("background:{}", bucket.hex()));
        }
    }
}

pub fn show_loading(loading: bool) {
    let Some(doc) = dom::window_document() else {
        return;
    };
    dom::set_visible(&doc, LOADING_ID, loading);
    if let Some(button) = doc.get_element_by_id(REFRESH_BUTTON_ID) {
        if loading {
            _ = button.set_attribute("disabled", "");
        } else {
            _ = button.remove_attribute("disabled");
        }
    }
}

pub fn show_details(marker: Option<&Marker>) {
    let Some(doc) = dom::window_document() else {
        return;
    };
    let Some(m) = marker else {
        dom::set_visible(&doc, DETAILS_ID, false);
        return;
    };
    dom::set_text(&doc, "details-magnitude", &format!("Magnitude {}", m.magnitude));
    dom::set_text(&doc, "details-place", &m.place);
    dom::set_text(&doc, "details-depth", &format!("{}km", m.depth));
    dom::set_text(&doc, "details-time", &crate::core::format_event_time(m.time));
    dom::set_text(&doc, "details-coords", &m.coordinates_text());
    if let Some(link) = doc.get_element_by_id("details-link") {
        match &m.url {
            Some(url) => {
                _ = link.set_attribute("href", url);
                _ = link.remove_attribute("hidden");
            }
            None => {
                _ = link.set_attribute("hidden", "");
            }
        }
    }
    if let Some(swatch) = doc.get_element_by_id("details-swatch") {
        _ = swatch.set_attribute("style", &format!("background:{}", m.color_hex()));
    }
    dom::set_visible(&doc, DETAILS_ID, true);
}

/// Tooltip next to the pointer (CSS px, viewport coordinates).
pub fn show_tooltip(marker: &Marker, client_x: f64, client_y: f64) {
    let Some(doc) = dom::window_document() else {
        return;
    };
    if let Some(el) = doc.get_element_by_id(TOOLTIP_ID) {
        el.set_text_content(Some(&marker.label_lines().join("\n")));
        _ = el.set_attribute(
            "style",
            &format!(
                "left:{:.0}px;top:{:.0}px",
                client_x + TOOLTIP_OFFSET_PX,
                client_y + TOOLTIP_OFFSET_PX
            ),
        );
        _ = el.class_list().remove_1("hidden");
    }
}

pub fn hide_tooltip() {
    if let Some(doc) = dom::window_document() {
        dom::set_visible(&doc, TOOLTIP_ID, false);
    }
}

pub fn set_play_label(playing: bool) {
    if let Some(doc) = dom::window_document() {
        dom::set_text(&doc, PLAY_TOGGLE_ID, if playing { "Pause" } else { "Play" });
    }
}

pub fn set_min_magnitude_label(value: f64) {
    if let Some(doc) = dom::window_document() {
        dom::set_text(&doc, MIN_MAGNITUDE_LABEL_ID, &format!("{:.1}", value));
        if let Some(input) = dom::input_by_id(&doc, MIN_MAGNITUDE_INPUT_ID) {
            input.set_step(&MIN_MAGNITUDE_SLIDER_STEP.to_string());
            input.set_value(&format!("{:.1}", value));
        }
    }
}

pub fn set_globe_size_label(value: f32) {
    if let Some(doc) = dom::window_document() {
        dom::set_text(&doc, GLOBE_SIZE_LABEL_ID, &format!("{:.0}px", value));
        if let Some(input) = dom::input_by_id(&doc, GLOBE_SIZE_INPUT_ID) {
            input.set_value(&format!("{:.0}", value));
        }
    }
}

pub fn set_plates_checked(show: bool) {
    if let Some(doc) = dom::window_document() {
        if let Some(input) = dom::input_by_id(&doc, PLATES_TOGGLE_ID) {
            input.set_checked(show);
        }
    }
}

#[inline]
pub fn toggle_control_panel(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(CONTROL_PANEL_ID) {
        _ = el.class_list().toggle("hidden");
    }
}
