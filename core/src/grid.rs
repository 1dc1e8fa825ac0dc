use core::ops::Range;
use serde::Serialize;
use smallvec::SmallVec;

use crate::*;

/// Neighbor addresses of a single cell. Never more than eight.
pub type Neighbors = SmallVec<[Address; 8]>;

/// Dimensions of a field and the mapping between linear addresses and `(row, col)` coordinates.
///
/// Addresses are row-major: `address = row * width + col`. Conversions do not check bounds, use
/// [`Grid::validate`] on untrusted input first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Grid {
    width: Coord,
    height: Coord,
}

impl Grid {
    pub fn new(width: Coord, height: Coord) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidSize);
        }
        Ok(Self { width, height })
    }

    pub const fn width(self) -> Coord {
        self.width
    }

    pub const fn height(self) -> Coord {
        self.height
    }

    /// `(width, height)`
    pub const fn size(self) -> Coord2 {
        (self.width, self.height)
    }

    #[allow(clippy::len_without_is_empty)]
    pub const fn len(self) -> CellCount {
        mult(self.width, self.height)
    }

    pub fn addresses(self) -> Range<Address> {
        0..self.len()
    }

    pub const fn contains(self, address: Address) -> bool {
        address < self.len()
    }

    pub fn validate(self, address: Address) -> Result<Address> {
        if self.contains(address) {
            Ok(address)
        } else {
            Err(GameError::InvalidAddress)
        }
    }

    pub const fn to_2d(self, address: Address) -> Coord2 {
        let width = self.width as Address;
        ((address / width) as Coord, (address % width) as Coord)
    }

    pub const fn to_1d(self, (row, col): Coord2) -> Address {
        row as Address * self.width as Address + col as Address
    }

    pub fn iter_neighbors(self, address: Address) -> NeighborIter {
        NeighborIter::new(self, self.to_2d(address))
    }

    pub fn neighbors(self, address: Address) -> Neighbors {
        self.iter_neighbors(address).collect()
    }
}

/// Offsets as `(row, col)`, row-offset major.
const DISPLACEMENTS: [(i16, i16); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains inside `grid`.
fn apply_delta(coords: Coord2, delta: (i16, i16), grid: Grid) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= grid.height {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= grid.width {
        return None;
    }

    Some((next_row, next_col))
}

#[derive(Debug)]
pub struct NeighborIter {
    grid: Grid,
    center: Coord2,
    index: u8,
}

impl NeighborIter {
    fn new(grid: Grid, center: Coord2) -> Self {
        Self {
            grid,
            center,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Address;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.grid);
            self.index += 1;

            if let Some(coords) = next_item {
                return Some(self.grid.to_1d(coords));
            }
        }
    }
}
