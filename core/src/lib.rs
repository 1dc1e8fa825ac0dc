//! Minesweeper field simulation.
//!
//! A [`Field`] is an immutable snapshot: every move borrows the current one and returns the next,
//! leaving the original intact. Game-over conditions are derived from the snapshot itself, see
//! [`Field::state`].
#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use field::*;
pub use generator::*;
pub use grid::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod field;
mod generator;
mod grid;
mod neighbors;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// `(width, height)`
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Clamps dimensions to at least one cell and the mine count to what fits outside the first
    /// reveal and its neighbors, wherever that first reveal lands.
    pub fn new((width, height): Coord2, mines: CellCount) -> Self {
        let width = width.clamp(1, Coord::MAX);
        let height = height.clamp(1, Coord::MAX);
        // fewest neighbors any cell has: a corner, or the end of a single row or column
        let min_neighbors = match (width, height) {
            (1, 1) => 0,
            (1, _) | (_, 1) => 1,
            _ => 3,
        };
        let mines = mines.max(1).min(mult(width, height) - 1 - min_neighbors);
        Self::new_unchecked((width, height), mines)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn empty_field(&self) -> Result<Field> {
        Field::reset(self.size.0, self.size.1)
    }
}
