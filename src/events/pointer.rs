use crate::constants::{CLICK_SLOP_PX, PICK_TOLERANCE_DEG};
use crate::panels;
use crate::state::App;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Press state for telling a drag (rotate) from a click (select).
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub down: bool,
    pub dragging: bool,
    pub start: Vec2,
    pub last: Vec2,
}

impl PointerState {
    fn press(&mut self, pos: Vec2) {
        *self = Self {
            down: true,
            dragging: false,
            start: pos,
            last: pos,
        };
    }

    /// Movement since the previous event, once travel has exceeded the click slop.
    fn drag_delta(&mut self, pos: Vec2) -> Option<Vec2> {
        if !self.down {
            return None;
        }
        if !self.dragging && pos.distance(self.start) > CLICK_SLOP_PX {
            self.dragging = true;
        }
        let delta = pos - self.last;
        self.last = pos;
        self.dragging.then_some(delta)
    }
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

pub fn wire_pointer_handlers(app: &App, canvas: &web::HtmlCanvasElement) {
    let state = Rc::new(RefCell::new(PointerState::default()));
    wire_pointerdown(canvas, state.clone());
    wire_pointermove(app, canvas, state.clone());
    wire_pointerup(app, canvas, state);
}

fn wire_pointerdown(canvas: &web::HtmlCanvasElement, state: Rc<RefCell<PointerState>>) {
    let canvas_c = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = pointer_canvas_px(&ev, &canvas_c);
        state.borrow_mut().press(pos);
        _ = canvas_c.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(app: &App, canvas: &web::HtmlCanvasElement, state: Rc<RefCell<PointerState>>) {
    let app = app.clone();
    let canvas_c = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = pointer_canvas_px(&ev, &canvas_c);
        let mut d = app.dash.borrow_mut();
        if let Some(delta) = state.borrow_mut().drag_delta(pos) {
            d.view.drag_by(delta);
            panels::hide_tooltip();
            return;
        }
        let hovered = d.view.pick(pos, &d.markers, PICK_TOLERANCE_DEG);
        _ = canvas_c
            .class_list()
            .toggle_with_force("hovering", hovered.is_some());
        match hovered.and_then(|i| d.markers.get(i)) {
            Some(m) => panels::show_tooltip(m, ev.client_x() as f64, ev.client_y() as f64),
            None => panels::hide_tooltip(),
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(app: &App, canvas: &web::HtmlCanvasElement, state: Rc<RefCell<PointerState>>) {
    let app = app.clone();
    let canvas_c = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let was_click = {
            let mut s = state.borrow_mut();
            let click = s.down && !s.dragging;
            s.down = false;
            s.dragging = false;
            click
        };
        if was_click {
            let pos = pointer_canvas_px(&ev, &canvas_c);
            let picked = {
                let d = app.dash.borrow();
                d.view.pick(pos, &d.markers, PICK_TOLERANCE_DEG)
            };
            if let Some(i) = picked {
                log::info!("[click] select marker {}", i);
            }
            app.select(picked);
        }
        _ = canvas_c.release_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    closure.forget();
}
