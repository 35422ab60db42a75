//! Small red/blue test images shared by the unit tests.

use crate::color::{Color, BLUE, RED};
use crate::pixelgrid::PixelGrid;

// Six 3x3 images, one string per row, 'B' for blue and 'R' for red.
const IMAGES: [[&str; 3]; 6] = [
    ["BBR", "RBR", "RRR"],
    ["BRB", "RRB", "RRR"],
    ["BBR", "BRR", "RRR"],
    ["RBB", "RRB", "RRR"],
    ["BRB", "BRR", "RRR"],
    ["RBB", "RBR", "RRR"],
];

/// The bluest column of each image above, in order.
pub const BLUEST: [u32; 6] = [1, 2, 0, 2, 0, 1];

pub fn rows_of(pattern: &[&str]) -> Vec<Vec<Color>> {
    pattern
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| if c == 'B' { BLUE } else { RED })
                .collect()
        })
        .collect()
}

pub fn grid_of(pattern: &[&str]) -> PixelGrid {
    PixelGrid::from_rows(&rows_of(pattern)).unwrap()
}

pub fn image(index: usize) -> PixelGrid {
    grid_of(&IMAGES[index])
}
