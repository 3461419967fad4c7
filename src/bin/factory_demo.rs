//! Command-line runner for the factory demonstrations.

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use factory_patterns::{demo, CoordinateSystem, ThemeKind};

#[derive(Parser, Debug)]
#[command(name = "factory-demo", about = "Factory pattern demonstrations")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tracking and replaceable theme factories
    Themes,

    /// Build points through the various factories
    Point {
        /// x for cartesian, radius for polar
        #[arg(allow_hyphen_values = true)]
        a: f64,

        /// y for cartesian, angle in radians for polar
        #[arg(allow_hyphen_values = true)]
        b: f64,

        /// How to read A and B (`cartesian` or `polar`)
        #[arg(long, short = 's', default_value = "cartesian")]
        system: CoordinateSystem,
    },

    /// Show a theme's colors in the terminal
    Swatch {
        /// `light` or `dark`; follows the OS color mode when omitted
        #[arg(long, short = 'k')]
        kind: Option<ThemeKind>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut out = io::stdout().lock();

    match cli.command.unwrap_or(Command::Themes) {
        Command::Themes => {
            info!("running theme factory demo");
            demo::run_themes(&mut out)?;
        }
        Command::Point { a, b, system } => {
            info!("running point demo with {system} ({a}, {b})");
            demo::run_point(&mut out, a, b, system)?;
        }
        Command::Swatch { kind } => {
            let kind = kind.unwrap_or_else(ThemeKind::detect);
            info!("showing {kind} swatch");
            demo::run_swatch(&mut out, kind)?;
        }
    }

    Ok(())
}
