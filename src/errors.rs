// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The two error families: malformed grids and misused sessions.
//!
//! Every one of these means the caller broke a precondition.  None of
//! them is transient, so nothing here is worth retrying.

use failure::Fail;

#[derive(Debug, Clone, PartialEq, Eq, Fail)]
pub enum GridError {
    #[fail(display = "invalid grid shape: {}", _0)]
    InvalidShape(String),

    #[fail(display = "column {} is outside a grid {} wide", x, width)]
    ColumnOutOfRange { x: u32, width: u32 },

    #[fail(display = "row {} is outside a grid {} tall", y, height)]
    RowOutOfRange { y: u32, height: u32 },

    #[fail(display = "expected {} pixels, found {}", expected, found)]
    LengthMismatch { expected: usize, found: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Fail)]
pub enum EditError {
    #[fail(display = "no column is highlighted")]
    NotHighlighted,

    #[fail(display = "there is nothing to undo")]
    NothingToUndo,

    #[fail(display = "{}", _0)]
    Grid(#[cause] GridError),
}

impl From<GridError> for EditError {
    fn from(err: GridError) -> Self {
        EditError::Grid(err)
    }
}
