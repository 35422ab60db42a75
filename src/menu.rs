// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Which operations to offer the user, and when.
//!
//! The session only refuses what would break it; deciding what's
//! worth showing is up to the front end, and lives here so it can be
//! tested without a terminal.

use crate::session::EditSession;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuOption {
    HighlightBluest,
    HighlightRandom,
    DeleteHighlighted,
    Undo,
    Quit,
}

impl MenuOption {
    /// What the user types to choose this option.
    pub fn key(self) -> &'static str {
        match self {
            MenuOption::HighlightBluest => "b",
            MenuOption::HighlightRandom => "r",
            MenuOption::DeleteHighlighted => "d",
            MenuOption::Undo => "u",
            MenuOption::Quit => "q",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MenuOption::HighlightBluest => "highlight the bluest column",
            MenuOption::HighlightRandom => "highlight a random column",
            MenuOption::DeleteHighlighted => "delete the highlighted column",
            MenuOption::Undo => "undo",
            MenuOption::Quit => "quit",
        }
    }
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}) {}", self.key(), self.description())
    }
}

/// A highlighted column can be deleted as long as one would be left
/// over; otherwise a new column can be highlighted.  Undo shows up once
/// there's something to undo, and quit is always there.
pub fn offered_options(session: &EditSession) -> Vec<MenuOption> {
    let mut options = Vec::with_capacity(4);
    if session.is_highlighted() && session.current_image().width() > 1 {
        options.push(MenuOption::DeleteHighlighted);
    } else {
        options.push(MenuOption::HighlightBluest);
        options.push(MenuOption::HighlightRandom);
    }
    if session.is_edited() {
        options.push(MenuOption::Undo);
    }
    options.push(MenuOption::Quit);
    options
}

/// Match what the user typed against the options on offer.
pub fn choose(options: &[MenuOption], input: &str) -> Option<MenuOption> {
    let input = input.trim();
    options
        .iter()
        .copied()
        .find(|option| option.key().eq_ignore_ascii_case(input))
}
