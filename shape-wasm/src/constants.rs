/// Application-wide drawing constants. Geometry defaults (radius, square
/// size, mount offsets) live in `shape_core::geometry`.
pub const DISC_FILL: &str = "lightgray";
/// Fill color of the draggable square.
pub const SQUARE_FILL: &str = "blue";
