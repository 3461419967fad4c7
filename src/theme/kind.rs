//! Light/dark tag and preferred-kind detection.

use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::FactoryError;

/// Which of the two theme variants to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Light,
    Dark,
}

impl ThemeKind {
    /// Maps the factories' `dark` flag to a kind.
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemeKind::Dark
        } else {
            ThemeKind::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeKind::Dark)
    }

    /// Capitalized name used in factory reports.
    pub fn label(&self) -> &'static str {
        match self {
            ThemeKind::Light => "Light",
            ThemeKind::Dark => "Dark",
        }
    }

    /// The kind the user prefers, as reported by the current detector.
    ///
    /// Defaults to the OS color mode; see [`set_theme_detector`].
    pub fn detect() -> Self {
        let detector = THEME_DETECTOR
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        (*detector)()
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeKind::Light => f.write_str("light"),
            ThemeKind::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for ThemeKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeKind::Light),
            "dark" => Ok(ThemeKind::Dark),
            _ => Err(FactoryError::UnknownThemeKind(s.to_string())),
        }
    }
}

type ThemeDetector = fn() -> ThemeKind;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector behind [`ThemeKind::detect`].
///
/// This is useful for testing or when you want to force a specific kind.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

fn os_theme_detector() -> ThemeKind {
    match detect_os_theme() {
        OsThemeMode::Dark => ThemeKind::Dark,
        OsThemeMode::Light => ThemeKind::Light,
    }
}
