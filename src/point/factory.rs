//! Factory type kept outside the product.

use super::Point;

/// Builds points from the outside, relying only on the public constructors.
///
/// Takes single-precision inputs and widens them to `f64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointFactory;

impl PointFactory {
    pub fn new_cartesian_point(x: f32, y: f32) -> Point {
        Point::cartesian(f64::from(x), f64::from(y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_factory_widens() {
        let p = PointFactory::new_cartesian_point(1.5, -0.25);
        assert_eq!(p, Point::cartesian(1.5, -0.25));
    }
}
