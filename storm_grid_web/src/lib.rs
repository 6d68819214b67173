// Copyright 2025 the Storm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser binding for Storm Grid.
//!
//! When targeting `wasm32`, this crate exports a `CanvasEngine` class to
//! JavaScript through `wasm-bindgen`. It wraps [`storm_grid::CanvasEngine`]
//! and uses the method names a canvas front end calls:
//!
//! ```js
//! const engine = new CanvasEngine();
//! engine.init();                        // 50px cells
//! engine.initWithScreenSize(800, 600);  // cell size = max(800, 600)
//! const { x, y } = engine.snapToGrid(event.offsetX, event.offsetY);
//! engine.setGridSize(25);
//! engine.getGridSize();
//! engine.setZoom(2.0);
//! engine.getZoom();
//! engine.gridLines(canvas.width);       // Uint32Array of line positions
//! engine.snapRectCenter(x, y, w, h);    // { x, y, width, height }
//! ```
//!
//! Errors from the core (for example, snapping before initialization) are
//! thrown as JavaScript `Error` values carrying the error message.
//!
//! On other targets only the host-value conversion helpers are compiled, so
//! the crate can stay in the workspace.

#![no_std]

#[cfg(target_arch = "wasm32")]
extern crate alloc;

use storm_grid::GridError;

#[cfg(target_arch = "wasm32")]
use alloc::{string::ToString, vec::Vec};
#[cfg(target_arch = "wasm32")]
use js_sys::{Object, Reflect};
#[cfg(target_arch = "wasm32")]
use kurbo::Rect;
#[cfg(target_arch = "wasm32")]
use storm_grid::GridPoint;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Converts screen dimensions received from the host into the core's
/// unsigned representation.
///
/// Negative dimensions are rejected with [`GridError::InvalidScreenSize`].
pub fn screen_size_from_host(width: i32, height: i32) -> Result<(u32, u32), GridError> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => {
            log::warn!("rejected screen size {width}x{height}");
            Err(GridError::InvalidScreenSize {
                width: i64::from(width),
                height: i64::from(height),
            })
        }
    }
}

/// Converts a canvas extent received from the host; negative extents are
/// treated as an empty canvas.
#[must_use]
pub fn extent_from_host(extent: i32) -> u32 {
    u32::try_from(extent).unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn to_js_error(err: GridError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

#[cfg(target_arch = "wasm32")]
fn set_field(obj: &Object, key: &str, value: JsValue) -> Result<(), JsValue> {
    Reflect::set(obj, &JsValue::from_str(key), &value)?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn point_to_js(pt: GridPoint) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    set_field(&obj, "x", JsValue::from(pt.x))?;
    set_field(&obj, "y", JsValue::from(pt.y))?;
    Ok(obj.into())
}

#[cfg(target_arch = "wasm32")]
fn rect_to_js(rect: Rect) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    set_field(&obj, "x", JsValue::from(rect.x0))?;
    set_field(&obj, "y", JsValue::from(rect.y0))?;
    set_field(&obj, "width", JsValue::from(rect.width()))?;
    set_field(&obj, "height", JsValue::from(rect.height()))?;
    Ok(obj.into())
}

/// Grid engine exported to JavaScript (only available on `wasm32`).
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct CanvasEngine {
    inner: storm_grid::CanvasEngine,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl CanvasEngine {
    /// Creates an uninitialized engine.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the grid to the default cell size.
    pub fn init(&mut self) {
        self.inner.init();
    }

    /// Resets the grid, using the larger screen dimension as the cell size.
    #[wasm_bindgen(js_name = initWithScreenSize)]
    pub fn init_with_screen_size(
        &mut self,
        screen_width: i32,
        screen_height: i32,
    ) -> Result<(), JsValue> {
        let (w, h) = screen_size_from_host(screen_width, screen_height).map_err(to_js_error)?;
        self.inner.init_with_screen_size(w, h);
        Ok(())
    }

    /// Snaps a canvas position; returns `{ x, y }`.
    #[wasm_bindgen(js_name = snapToGrid)]
    pub fn snap_to_grid(&self, x: f64, y: f64) -> Result<JsValue, JsValue> {
        let pt = self.inner.snap_to_grid(x, y).map_err(to_js_error)?;
        point_to_js(pt)
    }

    /// Recenters a rectangle on the grid; returns `{ x, y, width, height }`.
    #[wasm_bindgen(js_name = snapRectCenter)]
    pub fn snap_rect_center(
        &self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<JsValue, JsValue> {
        let rect = Rect::new(x, y, x + width, y + height);
        let snapped = self.inner.snap_rect_center(rect).map_err(to_js_error)?;
        rect_to_js(snapped)
    }

    /// Returns grid line positions from `0` through `extent`.
    #[wasm_bindgen(js_name = gridLines)]
    pub fn grid_lines(&self, extent: i32) -> Result<Vec<u32>, JsValue> {
        let lines = self
            .inner
            .grid_lines(extent_from_host(extent))
            .map_err(to_js_error)?;
        Ok(lines.collect())
    }

    /// Sets the grid cell size; throws for zero or negative sizes.
    #[wasm_bindgen(js_name = setGridSize)]
    pub fn set_grid_size(&mut self, size: i32) -> Result<(), JsValue> {
        self.inner.set_grid_size(size).map_err(to_js_error)
    }

    /// Returns the grid cell size; `0` means uninitialized.
    #[wasm_bindgen(js_name = getGridSize)]
    pub fn grid_size(&self) -> u32 {
        self.inner.grid_size()
    }

    /// Stores the zoom factor. Snapping ignores it.
    #[wasm_bindgen(js_name = setZoom)]
    pub fn set_zoom(&mut self, zoom: f64) {
        self.inner.set_zoom(zoom);
    }

    /// Returns the stored zoom factor.
    #[wasm_bindgen(js_name = getZoom)]
    pub fn zoom(&self) -> f64 {
        self.inner.zoom()
    }
}

#[cfg(test)]
mod tests {
    use storm_grid::{CanvasEngine, GridError};

    use super::{extent_from_host, screen_size_from_host};

    #[test]
    fn screen_size_passes_non_negative_through() {
        assert_eq!(screen_size_from_host(800, 600), Ok((800, 600)));
        assert_eq!(screen_size_from_host(0, 0), Ok((0, 0)));
    }

    #[test]
    fn screen_size_rejects_negative_dimensions() {
        assert_eq!(
            screen_size_from_host(-1, 600),
            Err(GridError::InvalidScreenSize {
                width: -1,
                height: 600
            })
        );
        assert!(screen_size_from_host(800, i32::MIN).is_err());
    }

    #[test]
    fn negative_extent_is_empty_canvas() {
        assert_eq!(extent_from_host(-20), 0);
        assert_eq!(extent_from_host(640), 640);
    }

    #[test]
    fn host_screen_size_drives_engine() {
        let mut engine = CanvasEngine::new();
        let (w, h) = screen_size_from_host(1280, 720).unwrap();
        engine.init_with_screen_size(w, h);
        assert_eq!(engine.grid_size(), 1280);

        let lines = engine.grid_lines(extent_from_host(-1)).unwrap();
        assert_eq!(lines.len(), 1);
    }
}
