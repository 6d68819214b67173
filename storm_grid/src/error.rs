// Copyright 2025 the Storm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Errors reported by grid configuration and snapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A snap or grid-line request was made while the cell size is `0`.
    ///
    /// This happens before any initialization, or after deriving the cell
    /// size from a `0 x 0` screen.
    UninitializedGrid,
    /// A cell size of zero or less was passed to a setter.
    ///
    /// The previous cell size is kept.
    InvalidGridSize(i32),
    /// A snap input coordinate was NaN or infinite.
    NonFiniteCoordinate,
    /// The snapped coordinate does not fit in an `i32`.
    OutOfRange,
    /// A screen dimension was negative.
    InvalidScreenSize {
        /// Requested screen width.
        width: i64,
        /// Requested screen height.
        height: i64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UninitializedGrid => f.write_str("grid cell size is not initialized"),
            Self::InvalidGridSize(size) => {
                write!(f, "grid cell size must be positive, got {size}")
            }
            Self::NonFiniteCoordinate => f.write_str("coordinate is not a finite number"),
            Self::OutOfRange => f.write_str("snapped coordinate is outside the i32 range"),
            Self::InvalidScreenSize { width, height } => {
                write!(f, "screen size must be non-negative, got {width}x{height}")
            }
        }
    }
}

impl core::error::Error for GridError {}
