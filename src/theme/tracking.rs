//! Factory that keeps a weak record of every theme it builds.

use std::fmt::Write as _;
use std::rc::Rc;

use log::debug;

use super::kind::ThemeKind;
use super::theme::{build_theme, Theme};
use crate::registry::WeakRegistry;

/// Builds themes and remembers them for reporting.
///
/// The factory holds only weak references, so it never keeps a theme alive.
///
/// # Example
///
/// ```rust
/// use factory_patterns::TrackingThemeFactory;
///
/// let mut factory = TrackingThemeFactory::new();
/// let theme = factory.create_theme(true);
/// let theme2 = factory.create_theme(false);
/// assert_eq!(factory.info(), "Dark theme\nLight theme\n");
///
/// drop(theme);
/// assert_eq!(factory.info(), "Light theme\n");
/// # drop(theme2);
/// ```
#[derive(Debug, Default)]
pub struct TrackingThemeFactory {
    themes: WeakRegistry<dyn Theme>,
}

impl TrackingThemeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dark or light theme and records it.
    pub fn create_theme(&mut self, dark: bool) -> Rc<dyn Theme> {
        let kind = ThemeKind::from_dark(dark);
        let theme = build_theme(kind);
        self.themes.register(&theme);
        debug!("tracking factory created {kind} theme (#{})", self.themes.len());
        theme
    }

    /// Builds a theme of the kind reported by [`ThemeKind::detect`].
    pub fn create_preferred_theme(&mut self) -> Rc<dyn Theme> {
        self.create_theme(ThemeKind::detect().is_dark())
    }

    /// One line per theme still alive, in creation order.
    ///
    /// Each line reads `Dark theme` or `Light theme` and ends with `\n`.
    /// Themes dropped by every owner are left out.
    pub fn info(&self) -> String {
        let mut report = String::new();
        for theme in self.themes.live() {
            // Writing to a String cannot fail.
            let _ = writeln!(report, "{} theme", theme.kind().label());
        }
        report
    }

    /// Number of tracked themes still alive.
    pub fn live_count(&self) -> usize {
        self.themes.live_count()
    }

    /// Number of records held, including dropped themes not yet pruned.
    pub fn tracked_count(&self) -> usize {
        self.themes.len()
    }

    /// Forgets themes that have been dropped, returning how many were removed.
    pub fn prune(&mut self) -> usize {
        self.themes.prune()
    }
}
