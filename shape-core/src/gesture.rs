//! The widget model and its drag gesture state machine.
//!
//! All pointer coordinates here are relative to the disc center; the wasm
//! layer translates canvas pixel coordinates before calling in.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::geometry::{CircleSpec, SquareSpec, clamp_offset, max_offset, within_reach};

/// Gesture being tracked between pointer-down and pointer-up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The square is tracking the pointer. The grab point is the offset
    /// between the pointer and the square's position at press time, so the
    /// square does not jump under the cursor.
    Dragging { grab_x: f64, grab_y: f64 },
}

/// The full widget state: disc, square, and the active gesture.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShapeModel {
    pub circle: CircleSpec,
    pub square: SquareSpec,
    pub drag: DragState,
}

impl ShapeModel {
    /// Store a new disc radius. The stored square offset is deliberately not
    /// re-clamped; the square may sit outside the disc until the next offset
    /// edit or drag.
    pub fn set_radius(&mut self, v: f64) {
        self.circle.radius = v;
    }

    /// Store a new square size, with the same no-re-clamp caveat as
    /// [`ShapeModel::set_radius`].
    pub fn set_square_size(&mut self, v: f64) {
        self.square.size = v;
    }

    /// Clamp and store the horizontal offset. Returns the stored value so
    /// the caller can reflect it back into the input field.
    pub fn set_square_x(&mut self, v: f64) -> f64 {
        let m = max_offset(self.circle, self.square);
        self.square.offset_x = clamp_offset(v, m);
        self.square.offset_x
    }

    /// Clamp and store the vertical offset. Returns the stored value.
    pub fn set_square_y(&mut self, v: f64) -> f64 {
        let m = max_offset(self.circle, self.square);
        self.square.offset_y = clamp_offset(v, m);
        self.square.offset_y
    }

    /// Pointer press at `(dx, dy)`. Starts a drag when the press lands
    /// within reach of the center, recording the grab point. Returns whether
    /// a drag began.
    pub fn pointer_down(&mut self, dx: f64, dy: f64) -> bool {
        let m = max_offset(self.circle, self.square);
        if !within_reach(dx, dy, m) {
            return false;
        }
        self.drag = DragState::Dragging {
            grab_x: dx - self.square.offset_x,
            grab_y: dy - self.square.offset_y,
        };
        true
    }

    /// Pointer move at `(dx, dy)`. While a drag is active and the pointer
    /// stays within reach, the square follows the pointer minus the grab
    /// point, clamped into the disc. Returns whether the square moved and a
    /// redraw should be scheduled.
    pub fn pointer_move(&mut self, dx: f64, dy: f64) -> bool {
        let DragState::Dragging { grab_x, grab_y } = self.drag else {
            return false;
        };
        let m = max_offset(self.circle, self.square);
        if !within_reach(dx, dy, m) {
            return false;
        }
        self.square.offset_x = clamp_offset(dx - grab_x, m);
        self.square.offset_y = clamp_offset(dy - grab_y, m);
        true
    }

    /// Pointer release; ends any active gesture.
    pub fn pointer_up(&mut self) {
        self.drag = DragState::Idle;
    }

    pub fn dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }
}
