//! Geometry and gesture logic for the shape canvas.
//!
//! This crate has no web dependencies so the widget behavior can be tested
//! natively. The wasm front-end owns the DOM and delegates every state
//! mutation to [`gesture::ShapeModel`].

pub mod geometry;
pub mod gesture;
