//! Browser entry point for the shape canvas widget.
//!
//! A filled disc sits at the canvas midpoint with a draggable square clamped
//! to stay inside it. Four numeric fields are two-way bound to the model.
//! While dragging, redraws are coalesced to one per display-refresh tick.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

mod canvas;
mod constants;
mod state;
mod ui;
mod utils;

use canvas::draw;
use shape_core::gesture::ShapeModel;
use state::{REDRAW, STATE, State};

fn init_canvas(
    document: &Document,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let cv = document
        .get_element_by_id("cv")
        .ok_or_else(|| JsValue::from_str("canvas #cv not found"))?
        .dyn_into::<HtmlCanvasElement>()?;
    let ctx = cv
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2D context not available"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    Ok((cv, ctx))
}

/// Schedule one redraw on the next display-refresh tick. Any pending request
/// is canceled first, so at most one redraw is outstanding during fast
/// pointer movement.
pub(crate) fn schedule_redraw(state: &Rc<RefCell<State>>) {
    let mut s = state.borrow_mut();
    if let Some(handle) = s.raf_handle.take() {
        let _ = s.window.cancel_animation_frame(handle);
    }
    REDRAW.with(|slot| {
        if let Some(cb) = slot.borrow().as_ref()
            && let Ok(handle) = s.window.request_animation_frame(cb.as_ref().unchecked_ref())
        {
            s.raf_handle = Some(handle);
        }
    });
}

/// Install the persistent frame callback. It clears the pending slot, paints
/// once, and pushes the dragged offsets back into their input fields.
fn install_redraw() {
    let cb = Closure::<dyn FnMut(f64)>::wrap(Box::new(move |_ts: f64| {
        STATE.with(|st| {
            if let Some(st_rc) = st.borrow().as_ref() {
                let mut s = st_rc.borrow_mut();
                s.raf_handle = None;
                draw(&s);
                ui::sync_offset_fields(&s);
            }
        });
    }));
    REDRAW.with(|slot| slot.replace(Some(cb)));
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let (canvas, ctx) = init_canvas(&document)?;

    let state = Rc::new(RefCell::new(State {
        window,
        document,
        canvas,
        ctx,
        model: ShapeModel::default(),
        raf_handle: None,
    }));
    STATE.with(|st| st.replace(Some(state.clone())));
    install_redraw();
    ui::attach_ui(state.clone())?;
    draw(&state.borrow());
    Ok(())
}
