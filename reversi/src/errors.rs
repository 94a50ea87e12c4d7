use crate::{Coordinate, Disc};

/// The error type for [`Coordinate::new()`](crate::Coordinate::new).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoordinateOutOfBounds {
    pub x: u8,
    pub y: u8,
}

impl std::error::Error for CoordinateOutOfBounds {}

impl std::fmt::Display for CoordinateOutOfBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Coordinate ({}, {}) lies outside of the {}x{} board",
            self.x,
            self.y,
            crate::BOARD_SIZE,
            crate::BOARD_SIZE
        )
    }
}

/// The error type for the [`FromStr`](std::str::FromStr) instance of [`Coordinate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordinateFromStrErr {
    WrongLength,
    InvalidColumn(char),
    InvalidRow(char),
}

impl std::error::Error for CoordinateFromStrErr {}

impl std::fmt::Display for CoordinateFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordinateFromStrErr::WrongLength => {
                write!(f, "A coordinate consists of exactly two characters, like 'c4'")
            }
            CoordinateFromStrErr::InvalidColumn(c) => {
                write!(f, "'{}' is not a column, expected a letter from 'a' to 'h'", c)
            }
            CoordinateFromStrErr::InvalidRow(c) => {
                write!(f, "'{}' is not a row, expected a digit from '1' to '8'", c)
            }
        }
    }
}

/// The error type for [`Game::play()`](crate::Game::play).
///
/// The game on which `play()` was called is left as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    GameFinished,
    Occupied { coord: Coordinate, disc: Disc },
    NoDiscsFlipped { coord: Coordinate },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::GameFinished => write!(f, "The game is already finished"),
            IllegalMove::Occupied { coord, disc } => {
                write!(f, "Field {} is already occupied by a {} disc", coord, disc)
            }
            IllegalMove::NoDiscsFlipped { coord } => write!(
                f,
                "A disc on field {} would not enclose any of the opponent's discs",
                coord
            ),
        }
    }
}

/// The error type for [`Game::from_parts()`](crate::Game::from_parts).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidCurrentPlayer;

impl std::error::Error for InvalidCurrentPlayer {}

impl std::fmt::Display for InvalidCurrentPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The player to move must be black or white, not empty")
    }
}

/// The error type for the [`FromStr`](std::str::FromStr) instance of [`Board`](crate::Board).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardFromStrErr {
    WrongNumberOfRows(usize),
    WrongRowLength { row: usize, len: usize },
    InvalidCell { row: usize, col: usize, found: char },
}

impl std::error::Error for BoardFromStrErr {}

impl std::fmt::Display for BoardFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardFromStrErr::WrongNumberOfRows(n) => {
                write!(f, "Expected {} rows, got {}", crate::BOARD_SIZE, n)
            }
            BoardFromStrErr::WrongRowLength { row, len } => write!(
                f,
                "Row {} has {} fields, expected {}",
                row + 1,
                len,
                crate::BOARD_SIZE
            ),
            BoardFromStrErr::InvalidCell { row, col, found } => write!(
                f,
                "Unexpected character '{}' in row {}, column {}",
                found,
                row + 1,
                col + 1
            ),
        }
    }
}
