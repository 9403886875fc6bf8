use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Coordinates outside the board")]
    OutOfBounds,
    #[error("Too many mines, at least one cell must stay clear")]
    TooManyMines,
}

pub type Result<T> = std::result::Result<T, BoardError>;
