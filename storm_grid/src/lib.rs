// Copyright 2025 the Storm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Storm Grid: snap-to-grid primitives for 2D canvases.
//!
//! This crate provides a small, headless model of a square snapping lattice.
//! It focuses on:
//! - Grid configuration: the lattice cell size and a stored zoom factor.
//! - Snapping: projecting a pointer position onto the nearest lattice
//!   intersection.
//! - Grid lines: lattice positions a host can draw across a canvas.
//!
//! It does **not** render, handle input, or own any UI state. Callers are
//! expected to:
//! - Convert pointer events into canvas coordinates.
//! - Call [`CanvasEngine::snap_to_grid`] (or [`GridSnapper`] directly) and
//!   use the returned [`GridPoint`].
//! - Bind the engine to their host environment (see `storm_grid_web` for a
//!   browser binding).
//!
//! ## Minimal example
//!
//! ```rust
//! use storm_grid::{CanvasEngine, GridError, GridPoint};
//!
//! let mut engine = CanvasEngine::new();
//!
//! // Nothing is snapped until the grid has a size.
//! assert_eq!(engine.snap_to_grid(10.0, 10.0), Err(GridError::UninitializedGrid));
//!
//! // Derive the cell size from an 800x600 screen: the larger side wins.
//! engine.init_with_screen_size(800, 600);
//! assert_eq!(engine.grid_size(), 800);
//!
//! // Or pick one explicitly.
//! engine.set_grid_size(25)?;
//! assert_eq!(engine.snap_to_grid(37.6, -12.6)?, GridPoint::new(50, -25));
//! # Ok::<(), GridError>(())
//! ```
//!
//! ## Rounding
//!
//! Each axis snaps independently to the nearest multiple of the cell size.
//! A coordinate exactly halfway between two lines rounds **away from zero**.
//!
//! ## Zoom
//!
//! The zoom factor is stored and returned to the host but is not consulted
//! by snapping: snapping always happens on the unzoomed lattice.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod engine;
mod error;
mod lines;
mod snap;

pub use config::GridConfig;
pub use engine::{CanvasEngine, DEFAULT_GRID_SIZE};
pub use error::GridError;
pub use lines::GridLines;
pub use snap::{GridPoint, GridSnapper};
