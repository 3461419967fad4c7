//! # Factory Patterns
//!
//! Small demonstrations of the Factory pattern.
//!
//! ## Points
//!
//! [`Point`] can be built from Cartesian or polar coordinates through a
//! constructor taking a [`CoordinateSystem`] selector, through named
//! factory methods, through a factory namespace nested next to the type
//! ([`point::lazy`]) and through an external [`PointFactory`].
//!
//! ```rust
//! use factory_patterns::{CoordinateSystem, Point};
//!
//! let p = Point::new(2.0, 0.0, CoordinateSystem::Polar);
//! assert_eq!(p, Point::new_cartesian_point(2.0, 0.0));
//! assert!(std::ptr::eq(Point::origin2(), Point::origin2()));
//! ```
//!
//! ## Themes
//!
//! [`TrackingThemeFactory`] remembers every theme it produced without
//! keeping it alive. [`ReplaceableThemeFactory`] hands out [`ThemeSlot`]s
//! whose theme it can later swap for every holder at once.
//!
//! ```rust
//! use factory_patterns::{ReplaceableThemeFactory, TrackingThemeFactory};
//!
//! let mut factory = TrackingThemeFactory::new();
//! let theme = factory.create_theme(true);
//! let theme2 = factory.create_theme(false);
//! assert_eq!(factory.info(), "Dark theme\nLight theme\n");
//!
//! let mut factory2 = ReplaceableThemeFactory::new();
//! let magic_theme = factory2.create_theme(true);
//! assert_eq!(magic_theme.get().background_color(), "dark gray");
//! factory2.replace_theme(false);
//! assert_eq!(magic_theme.get().background_color(), "white");
//! # drop((theme, theme2));
//! ```
//!
//! Both factories are single-threaded: handles are `Rc`-based and the
//! factories only hold `Weak` references.

pub mod demo;
mod error;
pub mod point;
mod registry;
mod slot;
pub mod theme;

pub use error::{FactoryError, Result};
pub use point::{CoordinateSystem, Point, PointFactory};
pub use registry::WeakRegistry;
pub use slot::{Slot, WeakSlot};
pub use theme::{
    set_theme_detector, DarkTheme, LightTheme, ReplaceableThemeFactory, Theme, ThemeKind,
    ThemeSlot, TrackingThemeFactory,
};
