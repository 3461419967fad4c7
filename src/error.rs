//! Error type shared by the factories.

use thiserror::Error;

/// Errors produced by the factory demonstrations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    /// A factory entry point exists but has no implementation.
    #[error("factory `{operation}` is declared but not implemented")]
    Unimplemented { operation: &'static str },

    /// A coordinate system name could not be parsed.
    #[error("unknown coordinate system `{0}` (expected `cartesian` or `polar`)")]
    UnknownCoordinateSystem(String),

    /// A theme kind name could not be parsed.
    #[error("unknown theme kind `{0}` (expected `light` or `dark`)")]
    UnknownThemeKind(String),
}

pub type Result<T> = std::result::Result<T, FactoryError>;
