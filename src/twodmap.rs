// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Two-dimensional map
//!
//! An addressable two-dimensional field holding one of the several
//! kinds of value this crate needs: a `Color` for the pixel grid, an
//! `f64` for the energy and brightness maps.  Storage is column-major,
//! so a column is a contiguous slice and removing or inserting a
//! column is a single splice.  Every edit returns a fresh map.

use crate::cq;
use itertools::iproduct;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoDimensionalMap<P: Copy> {
    width: u32,
    height: u32,
    data: Vec<P>,
}

impl<P: Copy> TwoDimensionalMap<P> {
    /// Define a new (abstract) map.  The content type must implement
    /// the Default trait.
    pub fn new(width: u32, height: u32) -> Self
    where
        P: Default,
    {
        TwoDimensionalMap {
            width,
            height,
            data: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Build a map by asking `f` for the value at every address.
    /// Addresses are visited column by column.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> P,
    {
        TwoDimensionalMap {
            width,
            height,
            data: iproduct!(0..width, 0..height).map(|(x, y)| f(x, y)).collect(),
        }
    }

    /// Wrap an already column-major buffer.  The caller vouches for
    /// `data.len() == width * height`.
    pub(crate) fn from_column_major(width: u32, height: u32, data: Vec<P>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        TwoDimensionalMap { width, height, data }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // is the transpose of the variant used in image.rs.  A y past the
    // bottom would silently land in the next column, hence the check.
    fn get_index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "({}, {}) is outside a {}x{} map",
            x,
            y,
            self.width,
            self.height
        );
        (x as usize) * (self.height as usize) + (y as usize)
    }

    fn column_start(&self, x: u32) -> usize {
        (x as usize) * (self.height as usize)
    }

    /// The x'th column, top to bottom.
    pub fn column(&self, x: u32) -> &[P] {
        let start = self.column_start(x);
        &self.data[start..start + self.height as usize]
    }

    /// The y'th row, left to right.  Rows are not contiguous, so this
    /// one has to be gathered.
    pub fn row(&self, y: u32) -> Vec<P> {
        (0..self.width).map(|x| self[(x, y)]).collect()
    }

    /// Every column, left to right.
    pub fn columns(&self) -> impl Iterator<Item = &[P]> {
        self.data.chunks(self.height as usize)
    }

    /// The raw column-major values.
    pub fn values(&self) -> &[P] {
        &self.data
    }

    /// A copy of this map without the x'th column; everything to the
    /// right shifts left by one.
    pub fn without_column(&self, x: u32) -> Self {
        let start = self.column_start(x);
        let mut data = self.data.clone();
        data.drain(start..start + self.height as usize);
        TwoDimensionalMap {
            width: self.width - 1,
            height: self.height,
            data,
        }
    }

    /// A copy of this map with `column` spliced in before the x'th
    /// column.  `x == width` appends.
    pub fn with_column(&self, x: u32, column: &[P]) -> Self {
        debug_assert_eq!(column.len(), self.height as usize);
        let start = self.column_start(x);
        let mut data = Vec::with_capacity(self.data.len() + column.len());
        data.extend_from_slice(&self.data[..start]);
        data.extend_from_slice(column);
        data.extend_from_slice(&self.data[start..]);
        TwoDimensionalMap {
            width: self.width + 1,
            height: self.height,
            data,
        }
    }

    /// A copy of this map with `column` written over the x'th column.
    pub fn with_column_replaced(&self, x: u32, column: &[P]) -> Self {
        debug_assert_eq!(column.len(), self.height as usize);
        let start = self.column_start(x);
        let mut data = self.data.clone();
        data[start..start + column.len()].copy_from_slice(column);
        TwoDimensionalMap {
            width: self.width,
            height: self.height,
            data,
        }
    }

    /// A copy of this map without the y'th row; everything below
    /// shifts up by one.
    pub fn without_row(&self, y: u32) -> Self {
        TwoDimensionalMap::from_fn(self.width, self.height - 1, |x, ty| {
            self[(x, cq!(ty < y, ty, ty + 1))]
        })
    }

    /// A copy of this map with `row` spliced in before the y'th row.
    /// `y == height` appends.
    pub fn with_row(&self, y: u32, row: &[P]) -> Self {
        debug_assert_eq!(row.len(), self.width as usize);
        TwoDimensionalMap::from_fn(self.width, self.height + 1, |x, ty| {
            cq!(
                ty == y,
                row[x as usize],
                self[(x, cq!(ty < y, ty, ty - 1))]
            )
        })
    }

    /// A copy of this map with a single cell changed.
    pub fn with_cell(&self, x: u32, y: u32, value: P) -> Self {
        let mut copy = self.clone();
        copy[(x, y)] = value;
        copy
    }

    /// Apply `f` to every cell, producing a map of the same shape.
    pub fn map<Q, F>(&self, f: F) -> TwoDimensionalMap<Q>
    where
        Q: Copy,
        F: Fn(P) -> Q,
    {
        TwoDimensionalMap {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|p| f(*p)).collect(),
        }
    }
}

impl<P: Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}
