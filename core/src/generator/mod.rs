use alloc::vec::Vec;

use crate::*;
pub use random::*;

mod random;

/// Source of mine positions for [`Field::populate`].
///
/// Implementations must return exactly `count` distinct addresses taken from `eligible`; the
/// engine rejects anything else with [`GameError::InvalidPlacement`].
pub trait MinePlacer {
    fn place(&mut self, eligible: &[Address], count: CellCount) -> Vec<Address>;
}
