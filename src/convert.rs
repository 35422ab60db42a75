// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Moving between grids and ImageRS buffers
//!
//! Decoding and encoding files is ImageRS's business.  This is just
//! the hand-off: a decoded RGB buffer in, a grid out, and the reverse,
//! plus a greyscale rendering of an energy map for looking at.

use crate::color::Color;
use crate::energy::EnergyMap;
use crate::errors::GridError;
use crate::pixelgrid::PixelGrid;
use crate::twodmap::TwoDimensionalMap;
use image::{GrayImage, Luma, RgbImage};
use num_traits::{clamp, NumCast};

/// Copy a decoded RGB buffer into a grid.  Fails only if the buffer is
/// empty in either dimension.
pub fn grid_from_image(image: &RgbImage) -> Result<PixelGrid, GridError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(GridError::InvalidShape(format!(
            "a {}x{} image has no pixels",
            width, height
        )));
    }
    Ok(PixelGrid::from_map(TwoDimensionalMap::from_fn(
        width,
        height,
        |x, y| Color::from(*image.get_pixel(x, y)),
    )))
}

/// Copy a grid out into an RGB buffer, ready for encoding.
pub fn grid_to_image(grid: &PixelGrid) -> RgbImage {
    RgbImage::from_fn(grid.width(), grid.height(), |x, y| grid[(x, y)].into())
}

/// Render an energy map as greyscale, scaled so the most energetic
/// pixel is white.  A map with no energy anywhere comes out black.
pub fn energy_to_image(energy: &EnergyMap) -> GrayImage {
    let factor = energy.values().iter().cloned().fold(0.0_f64, f64::max);
    GrayImage::from_fn(energy.width(), energy.height(), |x, y| {
        let scaled = if factor > 0.0 {
            energy[(x, y)] * 255.0 / factor
        } else {
            0.0
        };
        let level = <u8 as NumCast>::from(clamp(scaled.round(), 0.0, 255.0)).unwrap_or(0);
        Luma([level])
    })
}
