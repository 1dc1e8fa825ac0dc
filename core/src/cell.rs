use serde::{Deserialize, Serialize};

/// What a cell holds. Fixed once mines are placed, except for the two rewrites applied when the
/// field is busted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Content {
    /// No adjacent mines, or mines not placed yet.
    #[default]
    Empty,
    /// Number of adjacent mines, always in `1..=8`.
    Count(u8),
    Mine,
    /// A mine that ended the game.
    DetonatedMine,
    /// A flag that was planted on a cell without a mine.
    MisflaggedEmpty,
}

impl Content {
    pub const fn from_mined_neighbors(count: u8) -> Self {
        match count {
            0 => Self::Empty,
            count => Self::Count(count),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Hidden,
    Flagged,
    Revealed,
}

/// Canonical state of a single cell as seen by the presentation layer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    content: Content,
    visibility: Visibility,
}

impl Cell {
    pub const fn new(content: Content, visibility: Visibility) -> Self {
        Self {
            content,
            visibility,
        }
    }

    pub const fn content(self) -> Content {
        self.content
    }

    pub const fn visibility(self) -> Visibility {
        self.visibility
    }

    pub(crate) fn set_content(&mut self, content: Content) {
        self.content = content;
    }

    pub(crate) fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }
}
