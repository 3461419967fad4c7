//! Point construction through named factories.
//!
//! This module provides:
//!
//! - [`Point`]: A 2D value type with several equivalent construction paths
//! - [`CoordinateSystem`]: Selector deciding how two raw numbers are read
//! - [`lazy`]: A factory namespace nested alongside the product type
//! - [`PointFactory`]: A factory type kept outside the product
//!
//! Every path ends up in [`Point::new`]; they differ only in how the
//! intent is spelled at the call site.

mod coordinate;
mod factory;
pub mod lazy;
#[allow(clippy::module_inception)]
mod point;

pub use coordinate::CoordinateSystem;
pub use factory::PointFactory;
pub use point::Point;
