// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The immutable pixel grid
//!
//! The origin is the top-left pixel; (x, y) is x pixels to the right
//! of it and y pixels below it.  A column is listed top to bottom, a
//! row left to right, and the grid can be built from (or viewed as)
//! either a list of columns or a list of rows.  Every edit hands back
//! a new grid and leaves this one untouched.

use crate::color::Color;
use crate::energy::{calculate_energy, EnergyMap};
use crate::errors::GridError;
use crate::transpose::transpose;
use crate::twodmap::TwoDimensionalMap;
use itertools::Itertools;
use num_traits::clamp;
use std::fmt;
use std::ops::Index;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: TwoDimensionalMap<Color>,
}

// The shape rules are the same for columns and rows; only the names
// in the complaint change.
fn check_rectangular(lines: &[Vec<Color>], kind: &str) -> Result<usize, GridError> {
    let first = lines
        .first()
        .ok_or_else(|| GridError::InvalidShape(format!("no {}s", kind)))?;
    let length = first.len();
    if length == 0 {
        return Err(GridError::InvalidShape(format!("{} 0 is empty", kind)));
    }
    if let Some((index, line)) = lines.iter().find_position(|line| line.len() != length) {
        return Err(GridError::InvalidShape(format!(
            "{} {} has {} pixels but {} 0 has {}",
            kind,
            index,
            line.len(),
            kind,
            length
        )));
    }
    Ok(length)
}

impl PixelGrid {
    /// Build a grid from a list of columns, left to right.
    pub fn from_columns(columns: &[Vec<Color>]) -> Result<Self, GridError> {
        let height = check_rectangular(columns, "column")?;
        let data = columns.iter().flatten().copied().collect();
        Ok(PixelGrid {
            pixels: TwoDimensionalMap::from_column_major(columns.len() as u32, height as u32, data),
        })
    }

    /// Build a grid from a list of rows, top to bottom.
    pub fn from_rows(rows: &[Vec<Color>]) -> Result<Self, GridError> {
        // A zero-length row would vanish in the transpose, so the rows
        // get checked on their own terms first.
        check_rectangular(rows, "row")?;
        PixelGrid::from_columns(&transpose(rows))
    }

    pub(crate) fn from_map(pixels: TwoDimensionalMap<Color>) -> Self {
        PixelGrid { pixels }
    }

    pub(crate) fn pixels(&self) -> &TwoDimensionalMap<Color> {
        &self.pixels
    }

    /// The number of columns.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// The number of rows.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn check_column(&self, x: u32) -> Result<(), GridError> {
        if x < self.width() {
            Ok(())
        } else {
            Err(GridError::ColumnOutOfRange {
                x,
                width: self.width(),
            })
        }
    }

    fn check_row(&self, y: u32) -> Result<(), GridError> {
        if y < self.height() {
            Ok(())
        } else {
            Err(GridError::RowOutOfRange {
                y,
                height: self.height(),
            })
        }
    }

    fn check_length(expected: u32, found: usize) -> Result<(), GridError> {
        if found == expected as usize {
            Ok(())
        } else {
            Err(GridError::LengthMismatch {
                expected: expected as usize,
                found,
            })
        }
    }

    pub fn color_at(&self, x: u32, y: u32) -> Result<Color, GridError> {
        self.check_column(x)?;
        self.check_row(y)?;
        Ok(self.pixels[(x, y)])
    }

    /// A new grid with the pixel at (x, y) set to `color`.
    pub fn with_pixel_at(&self, x: u32, y: u32, color: Color) -> Result<Self, GridError> {
        self.check_column(x)?;
        self.check_row(y)?;
        Ok(PixelGrid::from_map(self.pixels.with_cell(x, y, color)))
    }

    /// The x'th column, top to bottom.
    pub fn column(&self, x: u32) -> Result<&[Color], GridError> {
        self.check_column(x)?;
        Ok(self.pixels.column(x))
    }

    /// The y'th row, left to right.
    pub fn row(&self, y: u32) -> Result<Vec<Color>, GridError> {
        self.check_row(y)?;
        Ok(self.pixels.row(y))
    }

    pub fn columns(&self) -> Vec<Vec<Color>> {
        self.pixels.columns().map(<[Color]>::to_vec).collect()
    }

    pub fn rows(&self) -> Vec<Vec<Color>> {
        (0..self.height()).map(|y| self.pixels.row(y)).collect()
    }

    /// A new grid without the x'th column.  A grid may not lose its
    /// last column.
    pub fn with_column_removed(&self, x: u32) -> Result<Self, GridError> {
        self.check_column(x)?;
        if self.width() == 1 {
            return Err(GridError::InvalidShape(
                "removing the only column would leave an empty grid".to_string(),
            ));
        }
        Ok(PixelGrid::from_map(self.pixels.without_column(x)))
    }

    /// A new grid with `column` inserted before the x'th column; with
    /// `x == width` it goes after the rightmost one.
    pub fn with_column_inserted(&self, x: u32, column: &[Color]) -> Result<Self, GridError> {
        if x > self.width() {
            return Err(GridError::ColumnOutOfRange {
                x,
                width: self.width(),
            });
        }
        PixelGrid::check_length(self.height(), column.len())?;
        Ok(PixelGrid::from_map(self.pixels.with_column(x, column)))
    }

    /// A new grid with the x'th column overwritten by `column`.
    pub fn with_column_replaced(&self, x: u32, column: &[Color]) -> Result<Self, GridError> {
        self.check_column(x)?;
        PixelGrid::check_length(self.height(), column.len())?;
        Ok(PixelGrid::from_map(self.pixels.with_column_replaced(x, column)))
    }

    /// A new grid without the y'th row.  A grid may not lose its last
    /// row.
    pub fn with_row_removed(&self, y: u32) -> Result<Self, GridError> {
        self.check_row(y)?;
        if self.height() == 1 {
            return Err(GridError::InvalidShape(
                "removing the only row would leave an empty grid".to_string(),
            ));
        }
        Ok(PixelGrid::from_map(self.pixels.without_row(y)))
    }

    /// A new grid with `row` inserted before the y'th row; with
    /// `y == height` it goes below the bottom one.
    pub fn with_row_inserted(&self, y: u32, row: &[Color]) -> Result<Self, GridError> {
        if y > self.height() {
            return Err(GridError::RowOutOfRange {
                y,
                height: self.height(),
            });
        }
        PixelGrid::check_length(self.width(), row.len())?;
        Ok(PixelGrid::from_map(self.pixels.with_row(y, row)))
    }

    /// Brightness at (x, y), where coordinates off the edge are pulled
    /// back to the nearest edge pixel.  Never fails.
    pub fn brightness_at(&self, x: i64, y: i64) -> f64 {
        let x = clamp(x, 0, i64::from(self.width()) - 1);
        let y = clamp(y, 0, i64::from(self.height()) - 1);
        self.pixels[(x as u32, y as u32)].brightness()
    }

    /// The total of the blue channel in each column, left to right.
    pub fn blue_sums(&self) -> Vec<u64> {
        self.pixels
            .columns()
            .map(|column| column.iter().map(|c| u64::from(c.blue)).sum())
            .collect()
    }

    /// The gradient energy of every pixel.
    pub fn energy_map(&self) -> EnergyMap {
        calculate_energy(self)
    }
}

impl Index<(u32, u32)> for PixelGrid {
    type Output = Color;

    /// Panicking addressing, for when the coordinates are known good.
    fn index(&self, (x, y): (u32, u32)) -> &Color {
        &self.pixels[(x, y)]
    }
}

impl fmt::Display for PixelGrid {
    /// One line per row, each a bracketed list of (r, g, b) triples.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let lines = self
            .rows()
            .iter()
            .map(|row| format!("[{}]", row.iter().join(", ")))
            .join("\n");
        f.write_str(&lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLUE, GREEN, RED};
    use crate::fixtures::{grid_of, image, rows_of};

    #[test]
    fn rows_and_columns_agree() {
        let grid = image(0);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.row(0).unwrap(), vec![BLUE, BLUE, RED]);
        assert_eq!(grid.column(0).unwrap(), &[BLUE, RED, RED]);
        assert_eq!(grid.color_at(1, 1).unwrap(), BLUE);
        assert_eq!(grid[(2, 0)], RED);
        for x in 0..3 {
            for y in 0..3 {
                assert_eq!(grid.columns()[x][y], grid.rows()[y][x]);
            }
        }
    }

    #[test]
    fn round_trips_through_both_views() {
        let grid = image(4);
        assert_eq!(PixelGrid::from_rows(&grid.rows()).unwrap(), grid);
        assert_eq!(PixelGrid::from_columns(&grid.columns()).unwrap(), grid);
        let rows = rows_of(&["BR", "RR", "RB"]);
        assert_eq!(
            PixelGrid::from_rows(&rows).unwrap(),
            PixelGrid::from_columns(&transpose(&rows)).unwrap()
        );
    }

    #[test]
    fn rejects_bad_shapes() {
        let is_shape_error = |r: Result<PixelGrid, GridError>| match r {
            Err(GridError::InvalidShape(_)) => true,
            _ => false,
        };
        assert!(is_shape_error(PixelGrid::from_columns(&[])));
        assert!(is_shape_error(PixelGrid::from_rows(&[])));
        assert!(is_shape_error(PixelGrid::from_columns(&[vec![], vec![]])));
        assert!(is_shape_error(PixelGrid::from_rows(&[vec![RED], vec![]])));
        assert!(is_shape_error(PixelGrid::from_columns(&[
            vec![RED, RED],
            vec![BLUE]
        ])));
        assert!(is_shape_error(PixelGrid::from_rows(&[
            vec![RED],
            vec![BLUE, BLUE]
        ])));
    }

    #[test]
    fn rejects_out_of_range_addresses() {
        let grid = image(0);
        assert_eq!(
            grid.color_at(3, 0),
            Err(GridError::ColumnOutOfRange { x: 3, width: 3 })
        );
        assert_eq!(
            grid.row(5),
            Err(GridError::RowOutOfRange { y: 5, height: 3 })
        );
        assert!(grid.with_pixel_at(0, 3, GREEN).is_err());
        assert!(grid.with_column_removed(3).is_err());
        assert!(grid.with_column_inserted(4, &[RED, RED, RED]).is_err());
        assert_eq!(
            grid.with_column_inserted(0, &[RED]),
            Err(GridError::LengthMismatch {
                expected: 3,
                found: 1
            })
        );
        assert!(grid.with_row_inserted(1, &[RED, RED]).is_err());
    }

    #[test]
    fn removes_columns() {
        let grid = image(0);
        assert_eq!(
            grid.with_column_removed(0).unwrap(),
            grid_of(&["BR", "BR", "RR"])
        );
        assert_eq!(
            grid.with_column_removed(1).unwrap(),
            grid_of(&["BR", "RR", "RR"])
        );
        assert_eq!(
            grid.with_column_removed(2).unwrap(),
            grid_of(&["BB", "RB", "RR"])
        );
    }

    #[test]
    fn keeps_at_least_one_column_and_row() {
        let sliver = grid_of(&["B", "R"]);
        assert!(sliver.with_column_removed(0).is_err());
        let strip = grid_of(&["BR"]);
        assert!(strip.with_row_removed(0).is_err());
    }

    #[test]
    fn inserts_columns_anywhere() {
        let grid = grid_of(&["BR", "RR"]);
        let green = [GREEN, GREEN];
        let left = grid.with_column_inserted(0, &green).unwrap();
        assert_eq!(left.column(0).unwrap(), &green);
        let right = grid.with_column_inserted(2, &green).unwrap();
        assert_eq!(right.width(), 3);
        assert_eq!(right.column(2).unwrap(), &green);
        assert_eq!(right.column(0).unwrap(), grid.column(0).unwrap());
    }

    #[test]
    fn row_edits_mirror_column_edits() {
        let grid = image(1);
        let without = grid.with_row_removed(1).unwrap();
        assert_eq!(without, grid_of(&["BRB", "RRR"]));
        let restored = without
            .with_row_inserted(1, &grid.row(1).unwrap())
            .unwrap();
        assert_eq!(restored, grid);
        let appended = grid.with_row_inserted(3, &[GREEN, GREEN, GREEN]).unwrap();
        assert_eq!(appended.height(), 4);
        assert_eq!(appended.row(3).unwrap(), vec![GREEN, GREEN, GREEN]);
    }

    #[test]
    fn removal_then_insertion_is_identity() {
        let grid = image(5);
        for x in 0..grid.width() {
            let column = grid.column(x).unwrap().to_vec();
            let round_trip = grid
                .with_column_removed(x)
                .and_then(|g| g.with_column_inserted(x, &column))
                .unwrap();
            assert_eq!(round_trip, grid);
        }
    }

    #[test]
    fn single_pixel_edits_are_copies() {
        let grid = image(0);
        let edited = grid.with_pixel_at(2, 2, GREEN).unwrap();
        assert_eq!(edited.color_at(2, 2).unwrap(), GREEN);
        assert_eq!(grid.color_at(2, 2).unwrap(), RED);
        assert_ne!(edited, grid);
        assert_eq!(edited.with_pixel_at(2, 2, RED).unwrap(), grid);
    }

    #[test]
    fn replaces_whole_columns() {
        let grid = image(0);
        let painted = grid.with_column_replaced(1, &[GREEN; 3]).unwrap();
        assert_eq!(painted.column(1).unwrap(), &[GREEN; 3]);
        assert_eq!(painted.column(0).unwrap(), grid.column(0).unwrap());
    }

    #[test]
    fn brightness_clamps_to_the_edges() {
        let grid = PixelGrid::from_rows(&[vec![Color::new(30, 30, 30), Color::new(90, 90, 90)]])
            .unwrap();
        assert_eq!(grid.brightness_at(-4, -1), 30.0);
        assert_eq!(grid.brightness_at(1, 0), 90.0);
        assert_eq!(grid.brightness_at(7, 7), 90.0);
    }

    #[test]
    fn sums_blue_per_column() {
        assert_eq!(image(0).blue_sums(), vec![255, 510, 0]);
    }

    #[test]
    fn displays_row_by_row() {
        let grid = grid_of(&["BR", "RR"]);
        assert_eq!(
            grid.to_string(),
            "[(0, 0, 255), (255, 0, 0)]\n[(255, 0, 0), (255, 0, 0)]"
        );
    }
}
