// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Column selection
//!
//! The editor doesn't decide for itself which column to mark; it asks
//! a selector.  Two are provided: the bluest column, and a uniformly
//! random one driven by whatever generator the caller hands over.

use crate::pixelgrid::PixelGrid;
use rand::Rng;
use std::cmp::Reverse;

/// This trait defines how a column gets picked out of a grid.  It's a
/// primitive interface, just enough to make room for more heuristics
/// and for tests that need to know the answer in advance.
pub trait ColumnSelector {
    /// Given a grid, name a column in `[0, width)`.
    fn select_column(&mut self, grid: &PixelGrid) -> u32;
}

/// Picks the column with the greatest total blue.  Ties go to the
/// leftmost contender.
#[derive(Debug, Default, Copy, Clone)]
pub struct BluestColumn;

impl ColumnSelector for BluestColumn {
    fn select_column(&mut self, grid: &PixelGrid) -> u32 {
        grid.blue_sums()
            .into_iter()
            .enumerate()
            .max_by_key(|&(x, sum)| (sum, Reverse(x)))
            .map_or(0, |(x, _)| x as u32)
    }
}

/// Picks any column, all equally likely.
#[derive(Debug)]
pub struct RandomColumn<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomColumn<R> {
    pub fn new(rng: R) -> Self {
        RandomColumn { rng }
    }
}

impl<R: Rng> ColumnSelector for RandomColumn<R> {
    fn select_column(&mut self, grid: &PixelGrid) -> u32 {
        self.rng.gen_range(0..grid.width())
    }
}
