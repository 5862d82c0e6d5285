use crate::constants::*;
use crate::dom;
use crate::state::App;
use web_sys as web;

/// Sliders, toggles and buttons in the control panel and details card.
pub fn wire_controls(document: &web::Document, app: &App) {
    let a = app.clone();
    dom::add_input_listener(document, MIN_MAGNITUDE_INPUT_ID, move |input| {
        match input.value().parse::<f64>() {
            Ok(v) => a.set_min_magnitude(v),
            Err(_) => log::warn!("[controls] bad magnitude {:?}", input.value()),
        }
    });

    let a = app.clone();
    dom::add_input_listener(document, GLOBE_SIZE_INPUT_ID, move |input| {
        if let Ok(v) = input.value().parse::<f32>() {
            a.set_globe_size(v);
        }
    });

    let a = app.clone();
    dom::add_input_listener(document, PLATES_TOGGLE_ID, move |input| {
        a.set_show_plates(input.checked());
    });

    let a = app.clone();
    dom::add_click_listener(document, REFRESH_BUTTON_ID, move || a.refresh());

    let a = app.clone();
    dom::add_click_listener(document, PLAY_TOGGLE_ID, move || a.toggle_play());

    let a = app.clone();
    dom::add_click_listener(document, DETAILS_CLOSE_ID, move || a.select(None));
}
