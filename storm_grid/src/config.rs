// Copyright 2025 the Storm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::GridError;
use crate::snap::GridSnapper;

/// Tunable grid parameters: the lattice cell size and a zoom factor.
///
/// A freshly created config is *uninitialized*: its cell size is `0`, and
/// snapping against it fails with [`GridError::UninitializedGrid`]. The cell
/// size becomes usable once it is set explicitly with
/// [`GridConfig::set_cell_size`] or derived with
/// [`GridConfig::derive_from_screen_size`].
///
/// The zoom factor is stored for the host but is not consulted when snapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    cell_size: u32,
    zoom_factor: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GridConfig {
    /// Creates an uninitialized config with a zoom factor of `1.0`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell_size: 0,
            zoom_factor: 1.0,
        }
    }

    /// Creates a config with the given cell size and a zoom factor of `1.0`.
    ///
    /// A `cell_size` of `0` yields an uninitialized config.
    #[must_use]
    pub const fn with_cell_size(cell_size: u32) -> Self {
        Self {
            cell_size,
            zoom_factor: 1.0,
        }
    }

    /// Sets the cell size to the larger of the two screen dimensions.
    ///
    /// The value is taken verbatim: there is no minimum, and `(0, 0)` leaves
    /// the config uninitialized.
    pub fn derive_from_screen_size(&mut self, width: u32, height: u32) {
        self.cell_size = width.max(height);
        log::debug!(
            "derived grid cell size {} from {width}x{height} screen",
            self.cell_size
        );
    }

    /// Sets the cell size.
    ///
    /// Zero and negative sizes are rejected with
    /// [`GridError::InvalidGridSize`] and the current size is kept.
    pub fn set_cell_size(&mut self, size: i32) -> Result<(), GridError> {
        match u32::try_from(size) {
            Ok(size) if size > 0 => {
                self.cell_size = size;
                Ok(())
            }
            _ => {
                log::warn!("rejected grid cell size {size}");
                Err(GridError::InvalidGridSize(size))
            }
        }
    }

    /// Returns the current cell size; `0` means uninitialized.
    #[must_use]
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Returns `true` once a positive cell size is set.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.cell_size > 0
    }

    /// Stores the zoom factor. No validation is performed.
    pub fn set_zoom_factor(&mut self, zoom: f64) {
        self.zoom_factor = zoom;
    }

    /// Returns the stored zoom factor.
    #[must_use]
    pub const fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// Returns a snapper reading this config.
    #[must_use]
    pub const fn snapper(&self) -> GridSnapper<'_> {
        GridSnapper::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::GridConfig;
    use crate::GridError;

    #[test]
    fn new_config_is_uninitialized_with_unit_zoom() {
        let config = GridConfig::new();
        assert_eq!(config.cell_size(), 0);
        assert!(!config.is_initialized());
        assert_eq!(config.zoom_factor(), 1.0);
        assert_eq!(config, GridConfig::default());
    }

    #[test]
    fn derive_takes_larger_dimension() {
        let mut config = GridConfig::new();
        for (w, h) in [(800, 600), (600, 800), (0, 0), (0, 7), (1, 1), (u32::MAX, 3)] {
            config.derive_from_screen_size(w, h);
            assert_eq!(config.cell_size(), w.max(h), "derive({w}, {h})");
        }
    }

    #[test]
    fn derive_from_empty_screen_leaves_grid_uninitialized() {
        let mut config = GridConfig::new();
        config.set_cell_size(25).unwrap();
        config.derive_from_screen_size(0, 0);
        assert!(!config.is_initialized());
    }

    #[test]
    fn set_cell_size_rejects_non_positive_and_keeps_previous() {
        let mut config = GridConfig::new();
        config.set_cell_size(40).unwrap();

        assert_eq!(config.set_cell_size(0), Err(GridError::InvalidGridSize(0)));
        assert_eq!(
            config.set_cell_size(-5),
            Err(GridError::InvalidGridSize(-5))
        );
        assert_eq!(config.cell_size(), 40);
    }

    #[test]
    fn zoom_is_stored_unvalidated() {
        let mut config = GridConfig::new();
        config.set_zoom_factor(2.0);
        assert_eq!(config.zoom_factor(), 2.0);
        config.set_zoom_factor(-0.5);
        assert_eq!(config.zoom_factor(), -0.5);
    }
}
