use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Lifecycle of a field. Always derived from the cells, never stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldState {
    /// No mines placed yet.
    Empty,
    Active,
    /// A mine was detonated.
    Busted,
    /// No safe cell is left hidden.
    Cleared,
}

impl FieldState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Busted | Self::Cleared)
    }
}

/// Snapshot of the whole board.
///
/// Cells are stored row-major in a `(height, width)` array so iteration order matches address
/// order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Field {
    grid: Grid,
    cells: Array2<Cell>,
    mines: Option<CellCount>,
}

impl Field {
    pub(crate) fn empty(grid: Grid) -> Self {
        Self {
            grid,
            cells: Array2::default((grid.height(), grid.width()).to_nd_index()),
            mines: None,
        }
    }

    /// Builds an already populated field with mines at exactly the given addresses.
    ///
    /// Duplicated addresses are only counted once.
    pub fn from_mine_addresses(width: Coord, height: Coord, mines: &[Address]) -> Result<Self> {
        let mut field = Self::empty(Grid::new(width, height)?);

        for &address in mines {
            let address = field.grid.validate(address)?;
            field.cell_mut(address).set_content(Content::Mine);
        }
        field.fill_counts();

        Ok(field)
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn width(&self) -> Coord {
        self.grid.width()
    }

    pub fn height(&self) -> Coord {
        self.grid.height()
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> CellCount {
        self.grid.len()
    }

    pub fn cell(&self, address: Address) -> Result<Cell> {
        let address = self.grid.validate(address)?;
        Ok(self[address])
    }

    /// Cells in address order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Number of mines placed, `None` until the field is populated.
    pub fn mine_count(&self) -> Option<CellCount> {
        self.mines
    }

    pub fn flagged_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.visibility() == Visibility::Flagged)
            .count()
    }

    /// Mines minus planted flags, can go negative when the player over-flags.
    pub fn mines_left(&self) -> Option<isize> {
        self.mines
            .map(|mines| mines as isize - self.flagged_count() as isize)
    }

    pub fn is_populated(&self) -> bool {
        self.mines.is_some()
    }

    pub fn is_busted(&self) -> bool {
        self.cells
            .iter()
            .any(|cell| cell.content() == Content::DetonatedMine)
    }

    /// True once no safe cell is left hidden. A safe cell under a flag does not count as hidden.
    pub fn is_cleared(&self) -> bool {
        self.is_populated()
            && !self.is_busted()
            && self.cells.iter().all(|cell| {
                cell.content() == Content::Mine || cell.visibility() != Visibility::Hidden
            })
    }

    pub fn state(&self) -> FieldState {
        if !self.is_populated() {
            FieldState::Empty
        } else if self.is_busted() {
            FieldState::Busted
        } else if self.is_cleared() {
            FieldState::Cleared
        } else {
            FieldState::Active
        }
    }

    pub(crate) fn cell_mut(&mut self, address: Address) -> &mut Cell {
        &mut self.cells[self.grid.to_2d(address).to_nd_index()]
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> + '_ {
        self.cells.iter_mut()
    }

    /// Recomputes the content of every non-mine cell and records the mine total.
    pub(crate) fn fill_counts(&mut self) {
        let mut mines = 0;
        for address in self.grid.addresses() {
            if self[address].content() == Content::Mine {
                mines += 1;
                continue;
            }
            let content = Content::from_mined_neighbors(self.mined_neighbor_count(address));
            self.cell_mut(address).set_content(content);
        }
        self.mines = Some(mines);
    }
}

impl Index<Address> for Field {
    type Output = Cell;

    fn index(&self, address: Address) -> &Self::Output {
        &self.cells[self.grid.to_2d(address).to_nd_index()]
    }
}
