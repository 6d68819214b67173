// Copyright 2025 the Storm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{Point, Rect};

use crate::config::GridConfig;
use crate::error::GridError;
use crate::lines::GridLines;

/// An integer point on the grid lattice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridPoint {
    /// Horizontal lattice coordinate; a multiple of the cell size.
    pub x: i32,
    /// Vertical lattice coordinate; a multiple of the cell size.
    pub y: i32,
}

impl GridPoint {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<GridPoint> for Point {
    fn from(pt: GridPoint) -> Self {
        Self::new(f64::from(pt.x), f64::from(pt.y))
    }
}

impl From<GridPoint> for (i32, i32) {
    fn from(pt: GridPoint) -> Self {
        (pt.x, pt.y)
    }
}

/// Projects points onto the square lattice of a [`GridConfig`].
///
/// Each axis is snapped independently to the nearest multiple of the cell
/// size. Exact half-cell offsets round **away from zero**: with a cell size
/// of `50`, `25.0` snaps to `50` and `-25.0` snaps to `-50`.
///
/// The zoom factor of the config is not consulted.
///
/// ```rust
/// use storm_grid::{GridConfig, GridPoint};
///
/// let mut config = GridConfig::new();
/// config.set_cell_size(50).unwrap();
///
/// let snapper = config.snapper();
/// assert_eq!(snapper.snap_to_grid(24.9, 0.0), Ok(GridPoint::new(0, 0)));
/// assert_eq!(snapper.snap_to_grid(25.0, 74.0), Ok(GridPoint::new(50, 50)));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GridSnapper<'a> {
    config: &'a GridConfig,
}

impl<'a> GridSnapper<'a> {
    /// Creates a snapper reading `config`.
    #[must_use]
    pub const fn new(config: &'a GridConfig) -> Self {
        Self { config }
    }

    /// Snaps a single coordinate to the nearest multiple of the cell size.
    pub fn snap_axis(&self, value: f64) -> Result<i32, GridError> {
        let cell = f64::from(self.cell_size()?);
        if !value.is_finite() {
            return Err(GridError::NonFiniteCoordinate);
        }
        // `round` yields an integral quotient, so the product is an exact
        // multiple of `cell` whenever it fits in `i32`.
        let snapped = (value / cell).round() * cell;
        if !(f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&snapped) {
            return Err(GridError::OutOfRange);
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "integral and range checked above"
        )]
        let snapped = snapped as i32;
        Ok(snapped)
    }

    /// Snaps `(x, y)` to the nearest lattice intersection.
    ///
    /// Fails with [`GridError::UninitializedGrid`] when the cell size is `0`,
    /// [`GridError::NonFiniteCoordinate`] for NaN or infinite input, and
    /// [`GridError::OutOfRange`] when a snapped coordinate does not fit in an
    /// `i32`.
    pub fn snap_to_grid(&self, x: f64, y: f64) -> Result<GridPoint, GridError> {
        Ok(GridPoint {
            x: self.snap_axis(x)?,
            y: self.snap_axis(y)?,
        })
    }

    /// Snaps a [`Point`] to the nearest lattice intersection.
    pub fn snap_point(&self, pt: Point) -> Result<GridPoint, GridError> {
        self.snap_to_grid(pt.x, pt.y)
    }

    /// Moves `rect` so that its center lies on the nearest lattice
    /// intersection. The size is unchanged.
    pub fn snap_rect_center(&self, rect: Rect) -> Result<Rect, GridError> {
        let center = rect.center();
        let snapped = Point::from(self.snap_point(center)?);
        Ok(rect + (snapped - center))
    }

    /// Returns the lattice coordinates from `0` through `extent` inclusive.
    ///
    /// Hosts use this to place grid lines across a canvas of the given width
    /// or height.
    pub fn grid_lines(&self, extent: u32) -> Result<GridLines, GridError> {
        Ok(GridLines::new(self.cell_size()?, extent))
    }

    fn cell_size(&self) -> Result<u32, GridError> {
        match self.config.cell_size() {
            0 => Err(GridError::UninitializedGrid),
            cell => Ok(cell),
        }
    }
}
