//! The point value type and its factory methods.

use std::fmt;

use log::warn;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::coordinate::CoordinateSystem;
use crate::error::{FactoryError, Result};

static ORIGIN2: Lazy<Point> = Lazy::new(|| Point::cartesian(0.0, 0.0));

/// An immutable point in the plane.
///
/// # Example
///
/// ```rust
/// use factory_patterns::{CoordinateSystem, Point};
///
/// let p1 = Point::new(2.0, 3.0, CoordinateSystem::Cartesian);
/// let origin = Point::origin();
/// let p2 = factory_patterns::point::lazy::new_cartesian_point(1.0, 2.0);
///
/// assert_eq!((p1.x(), p1.y()), (2.0, 3.0));
/// assert_eq!(origin, Point::cartesian(0.0, 0.0));
/// assert_eq!(p2.to_string(), "(1, 2)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Builds a point, reading `a` and `b` according to `system`.
    ///
    /// For [`CoordinateSystem::Cartesian`], `a` is x and `b` is y.
    /// For [`CoordinateSystem::Polar`], `a` is the radius and `b` the angle in radians.
    pub fn new(a: f64, b: f64, system: CoordinateSystem) -> Self {
        match system {
            CoordinateSystem::Polar => Self {
                x: a * b.cos(),
                y: a * b.sin(),
            },
            CoordinateSystem::Cartesian => Self { x: a, y: b },
        }
    }

    /// Builds a point with the default coordinate system.
    pub fn cartesian(x: f64, y: f64) -> Self {
        Self::new(x, y, CoordinateSystem::default())
    }

    /// A freshly constructed point at (0, 0).
    pub fn origin() -> Self {
        Self::cartesian(0.0, 0.0)
    }

    /// The shared point at (0, 0).
    ///
    /// Unlike [`Point::origin`], every call returns the same instance,
    /// initialized once on first access.
    pub fn origin2() -> &'static Point {
        &ORIGIN2
    }

    pub fn new_cartesian_point(x: f64, y: f64) -> Self {
        Self::cartesian(x, y)
    }

    /// Polar counterpart of [`Point::new_cartesian_point`].
    ///
    /// Not implemented: always returns [`FactoryError::Unimplemented`].
    /// Use [`Point::new`] with [`CoordinateSystem::Polar`] instead.
    pub fn new_polar_point(rho: f64, theta: f64) -> Result<Self> {
        warn!("Point::new_polar_point({rho}, {theta}) called but has no implementation");
        Err(FactoryError::Unimplemented {
            operation: "Point::new_polar_point",
        })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `(radius, angle)` with the angle in `(-π, π]`.
    pub fn to_polar(&self) -> (f64, f64) {
        (self.x.hypot(self.y), self.y.atan2(self.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
