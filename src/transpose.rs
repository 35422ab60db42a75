// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Nested-sequence flipper
//!
//! Maps a list of rows to a list of columns, and vice versa: the i'th
//! line of the input becomes the i'th element of every output line.
//! This is the relationship between the two views of a grid, and it's
//! how a grid built from rows is reduced to one built from columns.

/// Flip a matrix over its diagonal.
///
/// Ragged input is tolerated: the result has as many lines as the
/// longest input line, and a short input line simply contributes
/// nothing to the output lines past its end.  Callers that need a
/// rectangle (the grid constructors) validate before or after.
pub fn transpose<T: Clone>(matrix: &[Vec<T>]) -> Vec<Vec<T>> {
    let longest = matrix.iter().map(Vec::len).max().unwrap_or(0);
    let mut flipped: Vec<Vec<T>> = (0..longest)
        .map(|_| Vec::with_capacity(matrix.len()))
        .collect();
    for line in matrix {
        for (i, item) in line.iter().enumerate() {
            flipped[i].push(item.clone());
        }
    }
    flipped
}
