//! Themes and the factories that hand them out.
//!
//! This module provides:
//!
//! - [`Theme`]: The two-color contract shared by [`LightTheme`] and [`DarkTheme`]
//! - [`ThemeKind`]: Light or dark tag, with OS-backed detection
//! - [`TrackingThemeFactory`]: Remembers every theme it built, without owning them
//! - [`ReplaceableThemeFactory`]: Hands out [`ThemeSlot`]s it can rewrite in bulk
//!
//! Both factories keep only weak references. A theme or slot dropped by
//! every caller disappears from the factory's view.

mod kind;
mod replaceable;
#[allow(clippy::module_inception)]
mod theme;
mod tracking;

pub use kind::{set_theme_detector, ThemeKind};
pub use replaceable::{ReplaceableThemeFactory, ThemeSlot};
pub use theme::{DarkTheme, LightTheme, Theme};
pub use tracking::TrackingThemeFactory;
