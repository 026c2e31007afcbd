use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::constants::{DISC_FILL, SQUARE_FILL};
use crate::state::State;

// Non-deprecated helper to set the canvas fill style via property assignment.
fn set_fill_style(ctx: &CanvasRenderingContext2d, color: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("fillStyle"),
        &JsValue::from_str(color),
    );
}

/// Clear the surface, then paint the filled disc at the canvas midpoint and
/// the filled square at center + offset, anchored at its top-left corner.
/// Output depends only on the model, so repeated calls with unchanged state
/// paint identical frames.
pub fn draw(state: &State) {
    let width = state.canvas.width() as f64;
    let height = state.canvas.height() as f64;
    let cx = width / 2.0;
    let cy = height / 2.0;
    state.ctx.clear_rect(0.0, 0.0, width, height);

    state.ctx.begin_path();
    let _ = state
        .ctx
        .arc(cx, cy, state.model.circle.radius, 0.0, std::f64::consts::TAU);
    set_fill_style(&state.ctx, DISC_FILL);
    state.ctx.fill();

    let sq = state.model.square;
    set_fill_style(&state.ctx, SQUARE_FILL);
    state.ctx.fill_rect(
        cx + sq.offset_x - sq.size / 2.0,
        cy + sq.offset_y - sq.size / 2.0,
        sq.size,
        sq.size,
    );
}
