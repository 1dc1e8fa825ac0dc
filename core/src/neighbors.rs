use crate::*;

impl Field {
    pub fn neighbors(&self, address: Address) -> Neighbors {
        self.grid().neighbors(address)
    }

    /// Mines around `address`, whether flagged or not.
    pub fn mined_neighbor_count(&self, address: Address) -> u8 {
        self.count_neighbors_by(address, |cell| cell.content() == Content::Mine)
    }

    pub fn flagged_neighbor_count(&self, address: Address) -> u8 {
        self.count_neighbors_by(address, |cell| cell.visibility() == Visibility::Flagged)
    }

    /// Whether flood-fill may continue past `address`: no neighbor is a mine the player has not
    /// flagged.
    pub fn can_flood_fill(&self, address: Address) -> bool {
        !self.grid().iter_neighbors(address).any(|pos| {
            let cell = self[pos];
            cell.content() == Content::Mine && cell.visibility() != Visibility::Flagged
        })
    }

    /// Whether the player has flagged as many neighbors as there are mines around `address`.
    ///
    /// The flags themselves may still be on the wrong cells.
    pub fn can_chord_reveal(&self, address: Address) -> bool {
        self.mined_neighbor_count(address) == self.flagged_neighbor_count(address)
    }

    fn count_neighbors_by(&self, address: Address, criteria: impl Fn(Cell) -> bool) -> u8 {
        // at most 8 neighbors
        self.grid()
            .iter_neighbors(address)
            .filter(|&pos| criteria(self[pos]))
            .count() as u8
    }
}
