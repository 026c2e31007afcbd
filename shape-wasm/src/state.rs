use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use shape_core::gesture::ShapeModel;

/// Global application state stored behind an `Rc<RefCell<_>>` so it can be
/// shared across the WASM callbacks.
pub struct State {
    pub window: Window,
    pub document: Document,
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
    pub model: ShapeModel,
    /// Outstanding animation-frame handle. At most one redraw is pending;
    /// scheduling cancels and replaces it.
    pub raf_handle: Option<i32>,
}

/// Thread local storage for the single runtime state instance.
thread_local! {
    pub static STATE: RefCell<Option<Rc<RefCell<State>>>> = const { RefCell::new(None) };
    /// The persistent frame callback driving coalesced redraws.
    pub static REDRAW: RefCell<Option<Closure<dyn FnMut(f64)>>> = const { RefCell::new(None) };
}
