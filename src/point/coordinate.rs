//! Coordinate system selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FactoryError;

/// How the two numeric arguments of [`Point::new`](super::Point::new) are read.
///
/// `Cartesian` reads them as `(x, y)`; `Polar` as `(radius, angle)` with
/// the angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateSystem {
    #[default]
    Cartesian,
    Polar,
}

impl CoordinateSystem {
    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            CoordinateSystem::Cartesian => "cartesian",
            CoordinateSystem::Polar => "polar",
        }
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoordinateSystem {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cartesian" => Ok(CoordinateSystem::Cartesian),
            "polar" => Ok(CoordinateSystem::Polar),
            _ => Err(FactoryError::UnknownCoordinateSystem(s.to_string())),
        }
    }
}
