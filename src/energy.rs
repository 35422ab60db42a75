// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given a grid, calculate the edge strength at every pixel.  The
//! brightness of a pixel is the mean of its three channels, and the
//! energy is the length of the gradient measured by a Sobel-style
//! kernel over the 3x3 neighborhood:
//!
//! ```text
//! H(x,y) = [B(x−1,y−1) + 2B(x−1,y) + B(x−1,y+1)]
//!        − [B(x+1,y−1) + 2B(x+1,y) + B(x+1,y+1)]
//! V(x,y) = [B(x−1,y+1) + 2B(x,y+1) + B(x+1,y+1)]
//!        − [B(x−1,y−1) + 2B(x,y−1) + B(x+1,y−1)]
//! e(x,y) = √(H² + V²)
//! ```
//!
//! Samples that fall off the grid are pulled back to the nearest edge
//! pixel, so a border pixel just sees its own edge repeated.
//!
//! Nothing in the editor consumes this yet; column selection works on
//! raw blue totals.  It's here as a capability in its own right.

use crate::errors::GridError;
use crate::pixelgrid::PixelGrid;
use crate::twodmap::TwoDimensionalMap;
use log::trace;
use num_traits::clamp;

/// Same shape as the grid it came from; every cell is non-negative.
pub type EnergyMap = TwoDimensionalMap<f64>;

// Offset and weight of the three samples along one side of the
// kernel.  The middle sample counts twice.
const SIDE: [(i64, f64); 3] = [(-1, 1.0), (0, 2.0), (1, 1.0)];

/// Anything that can answer "how bright is it at (x, y)" for any
/// coordinates at all, including ones off the edge.
pub trait BrightnessField {
    fn sample(&self, x: i64, y: i64) -> f64;
}

impl BrightnessField for PixelGrid {
    fn sample(&self, x: i64, y: i64) -> f64 {
        self.brightness_at(x, y)
    }
}

// The precomputed variant, so the whole-map pass converts each pixel
// to a brightness once instead of eighteen times.
impl BrightnessField for TwoDimensionalMap<f64> {
    fn sample(&self, x: i64, y: i64) -> f64 {
        let x = clamp(x, 0, i64::from(self.width()) - 1);
        let y = clamp(y, 0, i64::from(self.height()) - 1);
        self[(x as u32, y as u32)]
    }
}

fn column_side<B: BrightnessField + ?Sized>(field: &B, x: i64, y: i64) -> f64 {
    SIDE.iter().map(|(dy, w)| w * field.sample(x, y + dy)).sum()
}

fn row_side<B: BrightnessField + ?Sized>(field: &B, x: i64, y: i64) -> f64 {
    SIDE.iter().map(|(dx, w)| w * field.sample(x + dx, y)).sum()
}

fn horizontal<B: BrightnessField + ?Sized>(field: &B, x: i64, y: i64) -> f64 {
    column_side(field, x - 1, y) - column_side(field, x + 1, y)
}

fn vertical<B: BrightnessField + ?Sized>(field: &B, x: i64, y: i64) -> f64 {
    row_side(field, x, y + 1) - row_side(field, x, y - 1)
}

fn energy_of<B: BrightnessField + ?Sized>(field: &B, x: i64, y: i64) -> f64 {
    horizontal(field, x, y).hypot(vertical(field, x, y))
}

/// The left-minus-right gradient at a single pixel.
pub fn horizontal_energy_at(grid: &PixelGrid, x: u32, y: u32) -> Result<f64, GridError> {
    grid.color_at(x, y)?;
    Ok(horizontal(grid, x.into(), y.into()))
}

/// The below-minus-above gradient at a single pixel.
pub fn vertical_energy_at(grid: &PixelGrid, x: u32, y: u32) -> Result<f64, GridError> {
    grid.color_at(x, y)?;
    Ok(vertical(grid, x.into(), y.into()))
}

/// The energy of a single pixel.
pub fn energy_at(grid: &PixelGrid, x: u32, y: u32) -> Result<f64, GridError> {
    grid.color_at(x, y)?;
    Ok(energy_of(grid, x.into(), y.into()))
}

/// Compute the energy of every pixel in a grid.  Each pixel depends
/// only on its neighbors' brightness, never on another pixel's energy,
/// so the work splits any way we like.
pub fn calculate_energy(grid: &PixelGrid) -> EnergyMap {
    let (width, height) = (grid.width(), grid.height());
    trace!("calculating energy for a {}x{} grid", width, height);
    let brightness = grid.pixels().map(|c| c.brightness());
    fill_energy(&brightness)
}

#[cfg(not(feature = "threaded"))]
fn fill_energy(brightness: &TwoDimensionalMap<f64>) -> EnergyMap {
    EnergyMap::from_fn(brightness.width(), brightness.height(), |x, y| {
        energy_of(brightness, x.into(), y.into())
    })
}

// The map is column-major, so handing each worker a band of whole
// columns is just chunks_mut over the output buffer; no worker can
// touch another's cells and nothing unsafe is needed.
#[cfg(feature = "threaded")]
fn fill_energy(brightness: &TwoDimensionalMap<f64>) -> EnergyMap {
    let (width, height) = (
        brightness.width() as usize,
        brightness.height() as usize,
    );
    let workers = num_cpus::get().max(1);
    let band = (width + workers - 1) / workers;
    let mut energy = vec![0.0; width * height];

    let outcome = crossbeam::scope(|s| {
        for (band_index, cells) in energy.chunks_mut(band * height).enumerate() {
            s.spawn(move |_| {
                let first = band_index * band;
                for (i, cell) in cells.iter_mut().enumerate() {
                    let (x, y) = (first + i / height, i % height);
                    *cell = energy_of(brightness, x as i64, y as i64);
                }
            });
        }
    });
    if let Err(panic) = outcome {
        std::panic::resume_unwind(panic);
    }
    trace!("energy filled by {} workers", (width + band - 1) / band);
    EnergyMap::from_column_major(brightness.width(), brightness.height(), energy)
}
