//! Disc/square geometry: the shape specs, the offset clamp, and the reach
//! test that gates drag gestures.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// Disc radius at widget mount (logical canvas units).
pub const DEFAULT_RADIUS: f64 = 100.0;
/// Square side length at widget mount.
pub const DEFAULT_SQUARE_SIZE: f64 = 50.0;
/// Square offset from the disc center at widget mount, both axes.
pub const DEFAULT_SQUARE_OFFSET: f64 = 25.0;

/// The disc boundary. The center is derived from the canvas dimensions at
/// draw time and never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleSpec {
    pub radius: f64,
}

impl Default for CircleSpec {
    fn default() -> Self {
        CircleSpec {
            radius: DEFAULT_RADIUS,
        }
    }
}

/// The draggable square. Offsets are measured from the disc center; the
/// square is painted anchored at `offset - size / 2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SquareSpec {
    pub size: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for SquareSpec {
    fn default() -> Self {
        SquareSpec {
            size: DEFAULT_SQUARE_SIZE,
            offset_x: DEFAULT_SQUARE_OFFSET,
            offset_y: DEFAULT_SQUARE_OFFSET,
        }
    }
}

/// Largest center offset that keeps the square's bounding box inside the
/// disc. Negative when the square is wider than the disc.
pub fn max_offset(circle: CircleSpec, square: SquareSpec) -> f64 {
    circle.radius - square.size / 2.0
}

/// Clamp one offset component into `[-max_off, max_off]`.
///
/// Written as a min/max composition rather than `f64::clamp` so a degenerate
/// range (`max_off < 0`) resolves to `max_off` instead of panicking.
pub fn clamp_offset(v: f64, max_off: f64) -> f64 {
    max_off.min((-max_off).max(v))
}

/// Whether a point at `(dx, dy)` relative to the disc center is close enough
/// for the square to be centered there.
pub fn within_reach(dx: f64, dy: f64, max_off: f64) -> bool {
    (dx * dx + dy * dy).sqrt() <= max_off
}
