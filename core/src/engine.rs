use alloc::{vec, vec::Vec};

use crate::*;

impl Field {
    /// Fresh field with every cell hidden and no mines placed.
    pub fn reset(width: Coord, height: Coord) -> Result<Self> {
        let grid = Grid::new(width, height)?;
        log::debug!("Reset field to {}x{}", width, height);
        Ok(Self::empty(grid))
    }

    /// Places `mine_count` mines anywhere except on `first` and its neighbors, then numbers every
    /// other cell.
    ///
    /// Flags planted before this call are kept.
    pub fn populate(
        &self,
        first: Address,
        mine_count: CellCount,
        placer: &mut impl MinePlacer,
    ) -> Result<Self> {
        let first = self.grid().validate(first)?;
        if self.is_populated() {
            return Err(GameError::AlreadyPopulated);
        }

        let safe_area = self.neighbors(first);
        let eligible: Vec<Address> = self
            .grid()
            .addresses()
            .filter(|&address| address != first && !safe_area.contains(&address))
            .collect();
        if mine_count > eligible.len() {
            return Err(GameError::TooManyMines);
        }

        let mines = placer.place(&eligible, mine_count);
        if mines.len() != mine_count {
            log::warn!(
                "Mine placer returned {} mines, requested {}",
                mines.len(),
                mine_count
            );
            return Err(GameError::InvalidPlacement);
        }

        let mut next = self.clone();
        for address in mines {
            // eligible is sorted, it was collected from an ascending range
            if eligible.binary_search(&address).is_err() {
                log::warn!("Mine placer picked ineligible address {}", address);
                return Err(GameError::InvalidPlacement);
            }
            let cell = next.cell_mut(address);
            if cell.content() == Content::Mine {
                log::warn!("Mine placer picked address {} twice", address);
                return Err(GameError::InvalidPlacement);
            }
            cell.set_content(Content::Mine);
        }
        next.fill_counts();

        log::debug!(
            "Populated {}x{} field with {} mines, first reveal at {:?}",
            self.width(),
            self.height(),
            mine_count,
            self.grid().to_2d(first)
        );
        Ok(next)
    }

    /// First move of a game: populate around `first`, then reveal it.
    ///
    /// A flagged `first` is rejected, since the reveal would otherwise leave it closed.
    pub fn start(
        &self,
        first: Address,
        mine_count: CellCount,
        placer: &mut impl MinePlacer,
    ) -> Result<Self> {
        let first = self.grid().validate(first)?;
        if self[first].visibility() == Visibility::Flagged {
            return Err(GameError::Flagged);
        }
        self.populate(first, mine_count, placer)?.reveal_cell(first)
    }

    /// Reveals `address` and keeps opening hidden safe neighbors of every revealed cell that has
    /// no unflagged mine around it.
    pub fn reveal_flood_fill(&self, address: Address) -> Result<Self> {
        let address = self.grid().validate(address)?;
        self.check_playable()?;

        if self[address].content() == Content::Mine {
            return Err(GameError::MinedCell);
        }

        let mut next = self.clone();
        next.flood_fill(address);
        Ok(next)
    }

    /// Opens a hidden cell, busting the field if it holds a mine.
    ///
    /// Flagged and already revealed cells are left as they are.
    pub fn reveal_cell(&self, address: Address) -> Result<Self> {
        use Content::*;
        use Visibility::*;

        let address = self.grid().validate(address)?;
        self.check_playable()?;

        let cell = self[address];
        let mut next = self.clone();
        match (cell.content(), cell.visibility()) {
            (_, Flagged | Revealed) => {
                log::trace!("Ignoring reveal of {:?} cell at {}", cell.visibility(), address);
            }
            (Mine, Hidden) => next.detonate(address),
            (_, Hidden) => next.flood_fill(address),
        }
        Ok(next)
    }

    pub fn toggle_flag(&self, address: Address) -> Result<Self> {
        use Visibility::*;

        let address = self.grid().validate(address)?;
        self.check_not_finished()?;

        let mut next = self.clone();
        let cell = next.cell_mut(address);
        match cell.visibility() {
            Hidden => cell.set_visibility(Flagged),
            Flagged => cell.set_visibility(Hidden),
            Revealed => return Err(GameError::AlreadyRevealed),
        }
        Ok(next)
    }

    /// Opens the neighbors of a revealed cell.
    ///
    /// Without any unflagged mine around, this is a flood-fill from `address`. Otherwise, if the
    /// flag count matches the mine count, the flags are wrong somewhere and every neighbor is
    /// forced open, busting the field. In any other case nothing changes.
    pub fn chord_reveal(&self, address: Address) -> Result<Self> {
        let address = self.grid().validate(address)?;
        self.check_playable()?;

        if self[address].visibility() != Visibility::Revealed {
            return Err(GameError::NotRevealed);
        }

        let mut next = self.clone();
        if self.can_flood_fill(address) {
            next.flood_fill(address);
        } else if self.can_chord_reveal(address) {
            next.chord_detonate(address);
        } else {
            log::trace!("Chord at {} has nothing to open", address);
        }
        Ok(next)
    }

    /// Flags every mine that is still hidden. Meant for a cleared field.
    pub fn mark_remaining_mines(&self) -> Result<Self> {
        self.check_populated()?;
        if self.is_busted() {
            return Err(GameError::AlreadyEnded);
        }

        let mut next = self.clone();
        let mut marked = 0;
        for cell in next.cells_mut() {
            if cell.content() == Content::Mine && cell.visibility() == Visibility::Hidden {
                cell.set_visibility(Visibility::Flagged);
                marked += 1;
            }
        }
        log::debug!("Marked {} remaining mines", marked);
        Ok(next)
    }

    fn flood_fill(&mut self, start: Address) {
        self.cell_mut(start).set_visibility(Visibility::Revealed);

        let mut to_visit = vec![start];
        while let Some(address) = to_visit.pop() {
            if !self.can_flood_fill(address) {
                continue;
            }

            for pos in self.grid().iter_neighbors(address) {
                let cell = self[pos];
                if cell.content() != Content::Mine && cell.visibility() == Visibility::Hidden {
                    self.cell_mut(pos).set_visibility(Visibility::Revealed);
                    log::trace!("Flood opened cell at {}, content: {:?}", pos, cell.content());
                    to_visit.push(pos);
                }
            }
        }
    }

    fn detonate(&mut self, address: Address) {
        *self.cell_mut(address) = Cell::new(Content::DetonatedMine, Visibility::Revealed);
        log::debug!("Mine detonated at {:?}", self.grid().to_2d(address));
        self.reveal_after_bust();
    }

    fn chord_detonate(&mut self, address: Address) {
        use Content::*;
        use Visibility::*;

        for pos in self.grid().iter_neighbors(address) {
            let cell = self.cell_mut(pos);
            match (cell.content(), cell.visibility()) {
                (Mine, Hidden) => cell.set_content(DetonatedMine),
                (Mine, _) => {}
                (_, Flagged) => cell.set_content(MisflaggedEmpty),
                _ => {}
            }
            cell.set_visibility(Revealed);
        }
        log::debug!("Chord at {:?} hit misplaced flags", self.grid().to_2d(address));
        self.reveal_after_bust();
    }

    /// Shows every unflagged mine and exposes every flag planted on a safe cell.
    fn reveal_after_bust(&mut self) {
        use Content::*;
        use Visibility::*;

        for cell in self.cells_mut() {
            match (cell.content(), cell.visibility()) {
                (Mine, Hidden) => cell.set_visibility(Revealed),
                (Mine, _) => {}
                (_, Flagged) => *cell = Cell::new(MisflaggedEmpty, Revealed),
                _ => {}
            }
        }
    }

    fn check_populated(&self) -> Result<()> {
        if self.is_populated() {
            Ok(())
        } else {
            Err(GameError::NotPopulated)
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state().is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }

    fn check_playable(&self) -> Result<()> {
        self.check_populated()?;
        self.check_not_finished()
    }
}
