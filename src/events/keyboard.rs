use crate::core::{command_for_key, KeyCommand, MIN_MAGNITUDE_KEY_STEP};
use crate::panels;
use crate::state::App;
use wasm_bindgen::JsCast;
use web_sys as web;

fn typing_in_form_field(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        .is_some()
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &App) {
    if typing_in_form_field(ev) || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(command) = command_for_key(&ev.key()) else {
        return;
    };
    log::info!("[keys] {:?}", command);
    match command {
        KeyCommand::TogglePlay => {
            app.toggle_play();
            ev.prevent_default();
        }
        KeyCommand::Refresh => app.refresh(),
        KeyCommand::TogglePlates => app.toggle_plates(),
        KeyCommand::ToggleControls => {
            if let Some(doc) = crate::dom::window_document() {
                panels::toggle_control_panel(&doc);
            }
        }
        KeyCommand::ClearSelection => app.select(None),
        KeyCommand::CenterSelection => app.center_on_selected(),
        KeyCommand::RaiseMinMagnitude | KeyCommand::LowerMinMagnitude => {
            let step = if command == KeyCommand::RaiseMinMagnitude {
                MIN_MAGNITUDE_KEY_STEP
            } else {
                -MIN_MAGNITUDE_KEY_STEP
            };
            let current = app.dash.borrow().config.min_magnitude;
            app.set_min_magnitude(current + step);
            ev.prevent_default();
        }
    }
}

pub fn wire_global_keydown(app: &App) {
    if let Some(window) = web::window() {
        let app = app.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &app);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
