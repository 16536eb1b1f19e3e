// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when geometry cannot be used for placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// A size (viewport or extent) is non-finite or has a negative component.
    InvalidGeometry {
        /// Which input was rejected.
        what: &'static str,
    },
    /// A proposed position has a non-finite coordinate.
    NonFinitePoint,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeometry { what } => {
                write!(f, "{what} must be finite and non-negative")
            }
            Self::NonFinitePoint => f.write_str("proposed position is not finite"),
        }
    }
}

impl core::error::Error for GeometryError {}
