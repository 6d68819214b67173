// Copyright 2025 the Storm Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::iter::FusedIterator;

/// Iterator over grid line positions `0, cell, 2 * cell, ...` up to an extent.
///
/// Created by [`GridSnapper::grid_lines`](crate::GridSnapper::grid_lines).
/// The extent itself is included when it is a multiple of the cell size.
#[derive(Clone, Debug)]
pub struct GridLines {
    next: u64,
    step: u64,
    extent: u64,
}

impl GridLines {
    pub(crate) fn new(cell_size: u32, extent: u32) -> Self {
        debug_assert!(cell_size > 0, "grid lines need a positive cell size");
        Self {
            next: 0,
            step: u64::from(cell_size),
            extent: u64::from(extent),
        }
    }

    fn remaining(&self) -> usize {
        if self.next > self.extent {
            return 0;
        }
        let count = (self.extent - self.next) / self.step + 1;
        usize::try_from(count).unwrap_or(usize::MAX)
    }
}

impl Iterator for GridLines {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.next > self.extent {
            return None;
        }
        let pos = u32::try_from(self.next).ok()?;
        self.next += self.step;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for GridLines {}

impl FusedIterator for GridLines {}
