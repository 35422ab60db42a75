// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Edit session - highlight, delete, undo
//!
//! A session is a log of grid snapshots on top of the image it was
//! opened with.  Every user-visible edit is a transaction over that
//! log: highlighting a column opens one and pushes the painted grid,
//! and deleting the highlighted column pushes the narrowed grid into
//! that same transaction and commits it.  Undo drops the most recent
//! transaction whole, whether that's one snapshot (a highlight that
//! was never acted on) or two (a highlight and the deletion that
//! consumed it).

use crate::color::{Color, BLUE, RED};
use crate::errors::EditError;
use crate::pixelgrid::PixelGrid;
use crate::selector::{BluestColumn, ColumnSelector, RandomColumn};
use log::debug;
use rand::Rng;

/// The color painted over the bluest column.
pub const BLUEST_HIGHLIGHT: Color = BLUE;

/// The color painted over a randomly chosen column.
pub const RANDOM_HIGHLIGHT: Color = RED;

/// A grid, and which of its columns (if any) is painted over and
/// waiting to be deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    grid: PixelGrid,
    highlighted: Option<u32>,
}

impl EditState {
    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn highlighted_column(&self) -> Option<u32> {
        self.highlighted
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted.is_some()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Transaction {
    // Length of the log when the transaction opened; undo truncates
    // back to here.
    start: usize,
    committed: bool,
}

#[derive(Debug, Clone)]
pub struct EditSession {
    original: EditState,
    log: Vec<EditState>,
    transactions: Vec<Transaction>,
}

impl EditSession {
    /// Open a session on `grid`.  Nothing is highlighted and there is
    /// nothing to undo.
    pub fn new(grid: PixelGrid) -> Self {
        EditSession {
            original: EditState {
                grid,
                highlighted: None,
            },
            log: Vec::new(),
            transactions: Vec::new(),
        }
    }

    fn top(&self) -> &EditState {
        self.log.last().unwrap_or(&self.original)
    }

    /// The image as it currently stands, highlight included.
    pub fn current_image(&self) -> &PixelGrid {
        &self.top().grid
    }

    pub fn is_highlighted(&self) -> bool {
        self.top().is_highlighted()
    }

    pub fn highlighted_column_index(&self) -> Option<u32> {
        self.top().highlighted
    }

    /// True once anything at all has been done, committed or not.
    pub fn is_edited(&self) -> bool {
        !self.log.is_empty()
    }

    /// The number of snapshots, the original image included.
    pub fn depth(&self) -> usize {
        self.log.len() + 1
    }

    /// The column `highlight_bluest_column` would pick right now.
    pub fn bluest_column_index(&self) -> u32 {
        BluestColumn.select_column(self.current_image())
    }

    /// Paint every pixel of column x with `color` and mark it as the
    /// column to delete.  The column's old contents survive only in
    /// the snapshot underneath.
    pub fn highlight_column(&mut self, x: u32, color: Color) -> Result<(), EditError> {
        let current = self.current_image();
        let stripe = vec![color; current.height() as usize];
        let grid = current.with_column_replaced(x, &stripe)?;
        debug!("highlighting column {} of {} with {}", x, grid.width(), color);
        self.transactions.push(Transaction {
            start: self.log.len(),
            committed: false,
        });
        self.log.push(EditState {
            grid,
            highlighted: Some(x),
        });
        Ok(())
    }

    /// Let `selector` choose the column, then highlight it.  Returns
    /// the chosen column.
    pub fn highlight_with<S>(&mut self, selector: &mut S, color: Color) -> Result<u32, EditError>
    where
        S: ColumnSelector + ?Sized,
    {
        let x = selector.select_column(self.current_image());
        self.highlight_column(x, color)?;
        Ok(x)
    }

    /// Highlight, in blue, the column with the most blue in it.  The
    /// leftmost wins a tie.
    pub fn highlight_bluest_column(&mut self) -> Result<u32, EditError> {
        self.highlight_with(&mut BluestColumn, BLUEST_HIGHLIGHT)
    }

    /// Highlight, in red, a column chosen uniformly by `rng`.
    pub fn highlight_random_column<R>(&mut self, rng: &mut R) -> Result<u32, EditError>
    where
        R: Rng + ?Sized,
    {
        self.highlight_with(&mut RandomColumn::new(rng), RANDOM_HIGHLIGHT)
    }

    /// Remove the highlighted column, committing the edit the
    /// highlight began.
    pub fn delete_highlighted_column(&mut self) -> Result<(), EditError> {
        let top = self.top();
        let x = top.highlighted.ok_or(EditError::NotHighlighted)?;
        let grid = top.grid.with_column_removed(x)?;
        debug!("deleting column {}, {} columns remain", x, grid.width());
        self.log.push(EditState {
            grid,
            highlighted: None,
        });
        if let Some(open) = self.transactions.last_mut() {
            open.committed = true;
        }
        Ok(())
    }

    /// Step back one user-visible edit: a pending highlight is simply
    /// cancelled, a deletion is reversed along with its highlight.
    pub fn undo(&mut self) -> Result<(), EditError> {
        let last = self.transactions.pop().ok_or(EditError::NothingToUndo)?;
        debug!(
            "undoing {} ({} snapshots)",
            if last.committed { "deletion" } else { "highlight" },
            self.log.len() - last.start
        );
        self.log.truncate(last.start);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::GREEN;
    use crate::errors::GridError;
    use crate::fixtures::{grid_of, image};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn starts_clean() {
        let session = EditSession::new(image(0));
        assert_eq!(session.current_image(), &image(0));
        assert!(!session.is_highlighted());
        assert!(!session.is_edited());
        assert_eq!(session.highlighted_column_index(), None);
        assert_eq!(session.depth(), 1);
    }

    #[test]
    fn highlighting_paints_one_column() {
        let mut session = EditSession::new(image(0));
        session.highlight_column(1, GREEN).unwrap();
        assert!(session.is_highlighted());
        assert!(session.is_edited());
        assert_eq!(session.highlighted_column_index(), Some(1));
        let painted = session.current_image();
        assert_eq!(painted.column(1).unwrap(), &[GREEN; 3]);
        assert_eq!(painted.column(0).unwrap(), image(0).column(0).unwrap());
        assert_eq!(painted.column(2).unwrap(), image(0).column(2).unwrap());
    }

    #[test]
    fn deletes_the_highlighted_column() {
        let expectations = [
            (0, ["BR", "BR", "RR"]),
            (1, ["BR", "RR", "RR"]),
            (2, ["BB", "RB", "RR"]),
        ];
        for (x, expected) in expectations.iter() {
            let mut session = EditSession::new(image(0));
            session.highlight_column(*x, GREEN).unwrap();
            session.delete_highlighted_column().unwrap();
            assert_eq!(session.current_image(), &grid_of(expected));
            assert!(!session.is_highlighted());
        }
    }

    #[test]
    fn undoing_a_deletion_undoes_its_highlight_too() {
        let mut session = EditSession::new(image(0));
        session.highlight_column(1, GREEN).unwrap();
        session.delete_highlighted_column().unwrap();
        assert_eq!(session.depth(), 3);
        session.undo().unwrap();
        assert_eq!(session.current_image(), &image(0));
        assert!(!session.is_edited());
        assert_eq!(session.depth(), 1);
    }

    #[test]
    fn undoing_a_highlight_pops_once() {
        let mut session = EditSession::new(image(0));
        session.highlight_column(1, GREEN).unwrap();
        session.undo().unwrap();
        assert_eq!(session.current_image(), &image(0));
        assert!(!session.is_edited());
    }

    #[test]
    fn undoes_several_edits_in_order() {
        let mut session = EditSession::new(image(3));
        session.highlight_column(0, GREEN).unwrap();
        session.delete_highlighted_column().unwrap();
        let after_first = session.current_image().clone();
        session.highlight_column(1, GREEN).unwrap();
        session.delete_highlighted_column().unwrap();
        session.highlight_column(0, GREEN).unwrap();
        assert_eq!(session.current_image().width(), 1);

        session.undo().unwrap();
        assert_eq!(session.current_image().width(), 1);
        assert!(!session.is_highlighted());
        session.undo().unwrap();
        assert_eq!(session.current_image(), &after_first);
        session.undo().unwrap();
        assert_eq!(session.current_image(), &image(3));
        assert_eq!(session.undo(), Err(EditError::NothingToUndo));
    }

    #[test]
    fn rehighlighting_stacks_and_unwinds_one_at_a_time() {
        let mut session = EditSession::new(image(0));
        session.highlight_column(0, GREEN).unwrap();
        let first = session.current_image().clone();
        session.highlight_column(2, GREEN).unwrap();
        assert_eq!(session.highlighted_column_index(), Some(2));
        session.undo().unwrap();
        assert_eq!(session.current_image(), &first);
        assert_eq!(session.highlighted_column_index(), Some(0));
        session.undo().unwrap();
        assert_eq!(session.current_image(), &image(0));
    }

    #[test]
    fn refuses_contract_violations() {
        let mut session = EditSession::new(image(0));
        assert_eq!(
            session.delete_highlighted_column(),
            Err(EditError::NotHighlighted)
        );
        assert_eq!(session.undo(), Err(EditError::NothingToUndo));
        assert_eq!(
            session.highlight_column(3, GREEN),
            Err(EditError::Grid(GridError::ColumnOutOfRange { x: 3, width: 3 }))
        );
        assert!(!session.is_edited());
    }

    #[test]
    fn will_not_delete_the_last_column() {
        let mut session = EditSession::new(grid_of(&["B", "R"]));
        session.highlight_column(0, GREEN).unwrap();
        assert!(session.delete_highlighted_column().is_err());
        assert!(session.is_highlighted());
        assert_eq!(session.depth(), 2);
    }

    #[test]
    fn bluest_column_end_to_end() {
        let original =
            PixelGrid::from_columns(&[vec![BLUE; 3], vec![BLUE; 3], vec![RED; 3]]).unwrap();
        let mut session = EditSession::new(original.clone());
        assert_eq!(session.bluest_column_index(), 0);
        assert_eq!(session.highlight_bluest_column().unwrap(), 0);
        assert_eq!(session.current_image().column(0).unwrap(), &[BLUEST_HIGHLIGHT; 3]);
        session.delete_highlighted_column().unwrap();
        assert_eq!(session.current_image().width(), 2);
        assert_eq!(
            session.current_image(),
            &original.with_column_removed(0).unwrap()
        );
    }

    #[test]
    fn random_highlights_follow_the_generator() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = EditSession::new(image(2));
        let x = session.highlight_random_column(&mut rng).unwrap();
        assert!(x < 3);
        assert_eq!(session.highlighted_column_index(), Some(x));
        assert_eq!(session.current_image().column(x).unwrap(), &[RANDOM_HIGHLIGHT; 3]);

        let mut again = EditSession::new(image(2));
        let y = again
            .highlight_random_column(&mut StdRng::seed_from_u64(3))
            .unwrap();
        assert_eq!(x, y);
    }

    #[test]
    fn custom_selectors_plug_in() {
        struct Rightmost;
        impl ColumnSelector for Rightmost {
            fn select_column(&mut self, grid: &PixelGrid) -> u32 {
                grid.width() - 1
            }
        }
        let mut session = EditSession::new(image(1));
        assert_eq!(session.highlight_with(&mut Rightmost, GREEN).unwrap(), 2);
    }
}
