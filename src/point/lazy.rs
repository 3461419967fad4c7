//! Factory functions living next to [`Point`](super::Point).
//!
//! The product keeps its construction helpers in its own namespace rather
//! than on a separate factory type; compare [`PointFactory`](super::PointFactory).

use super::Point;

/// Same as [`Point::new_cartesian_point`].
pub fn new_cartesian_point(x: f64, y: f64) -> Point {
    Point::cartesian(x, y)
}
