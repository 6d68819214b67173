// Copyright 2025 the Storm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

use crate::config::GridConfig;
use crate::error::GridError;
use crate::lines::GridLines;
use crate::snap::GridPoint;

/// Cell size installed by [`CanvasEngine::init`].
pub const DEFAULT_GRID_SIZE: u32 = 50;

/// Host-facing grid state for a single canvas.
///
/// The engine owns one [`GridConfig`] and exposes the operations a canvas UI
/// calls: initialization, snapping, and grid size / zoom accessors. A new
/// engine is uninitialized until [`CanvasEngine::init`],
/// [`CanvasEngine::init_with_screen_size`] or
/// [`CanvasEngine::set_grid_size`] is called.
///
/// ```rust
/// use storm_grid::{CanvasEngine, GridPoint};
///
/// let mut engine = CanvasEngine::new();
/// engine.init();
/// assert_eq!(engine.grid_size(), 50);
/// assert_eq!(engine.snap_to_grid(130.0, 20.0), Ok(GridPoint::new(150, 0)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CanvasEngine {
    grid: GridConfig,
}

impl CanvasEngine {
    /// Creates an uninitialized engine.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            grid: GridConfig::new(),
        }
    }

    /// Resets grid state and installs [`DEFAULT_GRID_SIZE`].
    ///
    /// The zoom factor returns to `1.0`.
    pub fn init(&mut self) {
        self.grid = GridConfig::with_cell_size(DEFAULT_GRID_SIZE);
        log::debug!("grid reset to default cell size {DEFAULT_GRID_SIZE}");
    }

    /// Resets grid state and derives the cell size from the screen size.
    ///
    /// See [`GridConfig::derive_from_screen_size`].
    pub fn init_with_screen_size(&mut self, screen_width: u32, screen_height: u32) {
        self.grid = GridConfig::new();
        self.grid.derive_from_screen_size(screen_width, screen_height);
    }

    /// Snaps `(x, y)` to the nearest grid intersection.
    ///
    /// See [`GridSnapper::snap_to_grid`](crate::GridSnapper::snap_to_grid).
    pub fn snap_to_grid(&self, x: f64, y: f64) -> Result<GridPoint, GridError> {
        self.grid.snapper().snap_to_grid(x, y)
    }

    /// Recenters `rect` on the nearest grid intersection, keeping its size.
    pub fn snap_rect_center(&self, rect: Rect) -> Result<Rect, GridError> {
        self.grid.snapper().snap_rect_center(rect)
    }

    /// Returns grid line positions from `0` through `extent`.
    pub fn grid_lines(&self, extent: u32) -> Result<GridLines, GridError> {
        self.grid.snapper().grid_lines(extent)
    }

    /// Sets the grid cell size, rejecting zero or negative values.
    pub fn set_grid_size(&mut self, size: i32) -> Result<(), GridError> {
        self.grid.set_cell_size(size)
    }

    /// Returns the grid cell size; `0` means uninitialized.
    #[must_use]
    pub fn grid_size(&self) -> u32 {
        self.grid.cell_size()
    }

    /// Stores the zoom factor.
    ///
    /// Zoom is informational for the host: snapping always operates on the
    /// unzoomed lattice.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.grid.set_zoom_factor(zoom);
    }

    /// Returns the stored zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.grid.zoom_factor()
    }

    /// Returns the underlying grid configuration.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.grid
    }
}
