//! Demonstration programs writing to any [`Write`] sink.
//!
//! The `factory-demo` binary passes stdout; tests pass a `Vec<u8>`.

use std::io::{self, Write};

use crate::point::{lazy, CoordinateSystem, Point, PointFactory};
use crate::theme::{ReplaceableThemeFactory, Theme, ThemeKind, TrackingThemeFactory};

/// Runs the theme factory demonstration.
///
/// Prints the tracking factory's report followed by a blank line, then the
/// background color of a replaceable slot before and after replacement:
///
/// ```text
/// Dark theme
/// Light theme
///
/// dark gray
/// white
/// ```
pub fn run_themes<W: Write>(out: &mut W) -> io::Result<()> {
    let mut factory = TrackingThemeFactory::new();
    let _theme = factory.create_theme(true);
    let _theme2 = factory.create_theme(false);
    writeln!(out, "{}", factory.info())?;

    let mut factory2 = ReplaceableThemeFactory::new();
    let magic_theme = factory2.create_theme(true);
    writeln!(out, "{}", magic_theme.get().background_color())?;
    factory2.replace_theme(false);
    writeln!(out, "{}", magic_theme.get().background_color())?;
    Ok(())
}

/// Runs the point construction demonstration for `(a, b)` read per `system`.
pub fn run_point<W: Write>(out: &mut W, a: f64, b: f64, system: CoordinateSystem) -> io::Result<()> {
    let p1 = Point::new(a, b, system);
    let origin = Point::origin();
    let p2 = lazy::new_cartesian_point(1.0, 2.0);
    let p3 = PointFactory::new_cartesian_point(3.0, 4.0);

    writeln!(out, "{system} ({a}, {b}) -> {p1}")?;
    writeln!(out, "origin -> {origin}")?;
    writeln!(out, "lazy::new_cartesian_point(1, 2) -> {p2}")?;
    writeln!(out, "PointFactory::new_cartesian_point(3, 4) -> {p3}")?;
    match Point::new_polar_point(a, b) {
        Ok(p) => writeln!(out, "new_polar_point -> {p}")?,
        Err(err) => writeln!(out, "new_polar_point -> {err}")?,
    }
    Ok(())
}

/// Prints one line showing a theme's colors, styled for the terminal.
///
/// Styling follows `console`'s color detection, so piped output is plain.
pub fn run_swatch<W: Write>(out: &mut W, kind: ThemeKind) -> io::Result<()> {
    let mut factory = TrackingThemeFactory::new();
    let theme = factory.create_theme(kind.is_dark());
    let label = format!(
        " {} theme: {} on {} ",
        theme.kind().label(),
        theme.text_color(),
        theme.background_color()
    );
    writeln!(out, "{}", theme.style().apply_to(label))
}
