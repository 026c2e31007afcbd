//! DOM wiring: numeric input fields, the reset button, and mouse handlers.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, HtmlInputElement, MouseEvent};

use shape_core::gesture::ShapeModel;

use crate::canvas::draw;
use crate::schedule_redraw;
use crate::state::State;
use crate::utils::{event_canvas_coords, log};

/// Wire one numeric field: seed it from state, then on input parse and apply.
/// `apply` returns the stored value when the field should reflect clamping,
/// or `None` for fields stored raw.
fn wire_field(
    doc: &Document,
    id: &'static str,
    state: Rc<RefCell<State>>,
    init: f64,
    apply: impl Fn(&mut ShapeModel, f64) -> Option<f64> + 'static,
) -> Result<(), JsValue> {
    let input: HtmlInputElement = doc
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("input #{id} not found")))?
        .dyn_into()?;
    input.set_value(&(init as i64).to_string());

    let input_read = input.clone();
    let oninput = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        // Malformed text is ignored; the numeric field is the only guard.
        if let Ok(v) = input_read.value().parse::<i32>() {
            let mut s = state.borrow_mut();
            if let Some(stored) = apply(&mut s.model, f64::from(v))
                && stored != f64::from(v)
            {
                // Reflect the clamped value back so the field matches state.
                input_read.set_value(&(stored as i64).to_string());
            }
            draw(&s);
        }
    }));
    input.set_oninput(Some(oninput.as_ref().unchecked_ref()));
    oninput.forget();
    Ok(())
}

fn set_field(doc: &Document, id: &str, v: f64) {
    if let Some(el) = doc.get_element_by_id(id)
        && let Ok(input) = el.dyn_into::<HtmlInputElement>()
    {
        input.set_value(&(v.round() as i64).to_string());
    }
}

/// Push the current offsets into the squareX/squareY fields, keeping the
/// two-way binding honest while the square is dragged.
pub fn sync_offset_fields(s: &State) {
    set_field(&s.document, "squareX", s.model.square.offset_x);
    set_field(&s.document, "squareY", s.model.square.offset_y);
}

fn sync_all_fields(s: &State) {
    set_field(&s.document, "circleRadius", s.model.circle.radius);
    set_field(&s.document, "squareSize", s.model.square.size);
    sync_offset_fields(s);
}

pub fn attach_ui(state: Rc<RefCell<State>>) -> Result<(), JsValue> {
    let doc = state.borrow().document.clone();
    let model = state.borrow().model;

    wire_field(
        &doc,
        "circleRadius",
        state.clone(),
        model.circle.radius,
        |m, v| {
            m.set_radius(v);
            None
        },
    )?;
    wire_field(
        &doc,
        "squareSize",
        state.clone(),
        model.square.size,
        |m, v| {
            m.set_square_size(v);
            None
        },
    )?;
    wire_field(&doc, "squareX", state.clone(), model.square.offset_x, |m, v| {
        Some(m.set_square_x(v))
    })?;
    wire_field(&doc, "squareY", state.clone(), model.square.offset_y, |m, v| {
        Some(m.set_square_y(v))
    })?;

    // Reset button (restore mount defaults)
    if let Some(btn) = doc.get_element_by_id("reset") {
        let btn: HtmlElement = btn.dyn_into()?;
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let mut s = st.borrow_mut();
            s.model = ShapeModel::default();
            if let Some(handle) = s.raf_handle.take() {
                let _ = s.window.cancel_animation_frame(handle);
            }
            sync_all_fields(&s);
            draw(&s);
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    // Mouse events
    {
        let st = state.clone();
        let mousedown = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let mut s = st.borrow_mut();
            let (x, y) = event_canvas_coords(&e, &s.canvas);
            let cx = s.canvas.width() as f64 / 2.0;
            let cy = s.canvas.height() as f64 / 2.0;
            if s.model.pointer_down(x - cx, y - cy) {
                log("drag start");
            }
        }));
        state
            .borrow()
            .canvas
            .add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref())?;
        mousedown.forget();
    }
    {
        let st = state.clone();
        let mousemove = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let moved = {
                let mut s = st.borrow_mut();
                let (x, y) = event_canvas_coords(&e, &s.canvas);
                let cx = s.canvas.width() as f64 / 2.0;
                let cy = s.canvas.height() as f64 / 2.0;
                s.model.pointer_move(x - cx, y - cy)
            };
            if moved {
                schedule_redraw(&st);
            }
        }));
        state
            .borrow()
            .canvas
            .add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref())?;
        mousemove.forget();
    }
    {
        // On the window, not the canvas, so releasing outside still ends the drag.
        let st = state.clone();
        let mouseup = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |_e: MouseEvent| {
            let mut s = st.borrow_mut();
            if s.model.dragging() {
                log("drag end");
            }
            s.model.pointer_up();
        }));
        state
            .borrow()
            .window
            .add_event_listener_with_callback("mouseup", mouseup.as_ref().unchecked_ref())?;
        mouseup.forget();
    }

    Ok(())
}
