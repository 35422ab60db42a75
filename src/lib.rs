// #![deny(missing_docs)]

//! Shrink an image one column at a time: pick a column, paint it so
//! it can be seen, delete it or change your mind, and undo as far back
//! as you like.

mod ternary;

pub mod color;
pub use color::Color;

pub mod errors;
pub use errors::{EditError, GridError};

pub mod transpose;
pub use transpose::transpose;

pub mod twodmap;
pub use twodmap::TwoDimensionalMap;

pub mod pixelgrid;
pub use pixelgrid::PixelGrid;

pub mod energy;
pub use energy::{calculate_energy, EnergyMap};

pub mod selector;
pub use selector::{BluestColumn, ColumnSelector, RandomColumn};

pub mod session;
pub use session::{EditSession, EditState};

pub mod menu;
pub use menu::{offered_options, MenuOption};

pub mod convert;
pub use convert::{energy_to_image, grid_from_image, grid_to_image};

#[cfg(test)]
mod fixtures;
