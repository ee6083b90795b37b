//! Error type shared by the unit and model layers.

use thiserror::Error;

/// Kind of physical quantity an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuantityKind {
    Length,
    Weight,
    Volume,
    Density,
}

impl std::fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuantityKind::Length => write!(f, "length"),
            QuantityKind::Weight => write!(f, "weight"),
            QuantityKind::Volume => write!(f, "volume"),
            QuantityKind::Density => write!(f, "density"),
        }
    }
}

/// Errors raised while building quantities and cuboids.
///
/// Over-capacity packages are not an error: a negative remaining volume is a
/// valid value and is returned as such.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicalError {
    /// The unit symbol does not name a unit of the expected kind.
    #[error("unknown {kind} unit: '{symbol}'")]
    UnknownUnit { kind: QuantityKind, symbol: String },

    /// The magnitude is not a number.
    #[error("invalid {kind} magnitude: '{input}'")]
    InvalidMagnitude { kind: QuantityKind, input: String },
}

impl PhysicalError {
    pub(crate) fn unknown_unit(kind: QuantityKind, symbol: impl Into<String>) -> Self {
        PhysicalError::UnknownUnit {
            kind,
            symbol: symbol.into(),
        }
    }

    pub(crate) fn invalid_magnitude(kind: QuantityKind, input: impl Into<String>) -> Self {
        PhysicalError::InvalidMagnitude {
            kind,
            input: input.into(),
        }
    }
}
