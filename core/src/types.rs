/// Single coordinate axis used for field width, height, rows and columns.
pub type Coord = u16;

/// Linear, row-major cell index: `row * width + col`.
pub type Address = usize;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = usize;

/// Pair of coordinates: `(row, col)` for a position, `(width, height)` for a size.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}
