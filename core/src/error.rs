use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Field dimensions must be non-zero")]
    InvalidSize,
    #[error("Invalid address")]
    InvalidAddress,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Field already has mines placed")]
    AlreadyPopulated,
    #[error("Field has no mines placed yet")]
    NotPopulated,
    #[error("Cell is already revealed")]
    AlreadyRevealed,
    #[error("Cell is not revealed")]
    NotRevealed,
    #[error("Cell is flagged")]
    Flagged,
    #[error("Cell contains a mine")]
    MinedCell,
    #[error("Mine placement is not a distinct subset of the eligible cells")]
    InvalidPlacement,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
