//! The theme contract and its two variants.

use std::fmt;
use std::rc::Rc;

use console::{Color, Style};
use log::warn;

use super::kind::ThemeKind;

/// A pair of display colors.
///
/// Implemented by [`LightTheme`] and [`DarkTheme`]. Consumers receive themes
/// from a factory as `Rc<dyn Theme>` and never name the concrete type.
pub trait Theme: fmt::Debug {
    fn kind(&self) -> ThemeKind;

    /// Foreground color name.
    fn text_color(&self) -> &'static str;

    /// Background color name.
    fn background_color(&self) -> &'static str;

    /// A terminal style painting text in this theme's colors.
    ///
    /// Known names are `black`, `white` and `dark gray`. Any other name is
    /// painted white and logged as a warning.
    fn style(&self) -> Style {
        Style::new()
            .fg(terminal_color(self.text_color()))
            .bg(terminal_color(self.background_color()))
    }
}

/// Black text on white.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LightTheme;

impl Theme for LightTheme {
    fn kind(&self) -> ThemeKind {
        ThemeKind::Light
    }

    fn text_color(&self) -> &'static str {
        "black"
    }

    fn background_color(&self) -> &'static str {
        "white"
    }
}

/// White text on dark gray.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DarkTheme;

impl Theme for DarkTheme {
    fn kind(&self) -> ThemeKind {
        ThemeKind::Dark
    }

    fn text_color(&self) -> &'static str {
        "white"
    }

    fn background_color(&self) -> &'static str {
        "dark gray"
    }
}

pub(crate) fn build_theme(kind: ThemeKind) -> Rc<dyn Theme> {
    match kind {
        ThemeKind::Dark => Rc::new(DarkTheme),
        ThemeKind::Light => Rc::new(LightTheme),
    }
}

fn terminal_color(name: &str) -> Color {
    match name {
        "black" => Color::Black,
        "white" => Color::White,
        // xterm-256 grey
        "dark gray" => Color::Color256(238),
        other => {
            warn!("no terminal color for `{other}`, falling back to white");
            Color::White
        }
    }
}
