//! Errors and warnings returned by functions related to this crate.

use std::{error, fmt};

/// Error type returned by crate's constructors when a game can't be
/// configured. None of these are recoverable by the game itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Board width or height is zero.
    ZeroGridSize {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// Board doesn't fit into the coordinates system.
    GridTooLarge {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// Snake would have no parts.
    EmptySnake,

    /// Initial snake doesn't fit horizontally into the board.
    SnakeTooLong {
        /// Requested snake length.
        length: usize,
        /// Board width.
        width: usize,
    },

    /// Tick interval is zero.
    ZeroInterval,

    /// Parsed snapshot has a different amount of cells than its size says.
    MalformedSnapshot {
        /// Amount of cells found.
        cells: usize,
        /// Declared size as (width, height).
        size: (usize, usize),
    },

    /// Memory game needs an even, non-zero amount of cards.
    OddCardCount(usize),

    /// Memory game has less card faces than pairs.
    NotEnoughFaces {
        /// Amount of pairs on the table.
        pairs: usize,
        /// Amount of available faces.
        faces: usize,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroGridSize { width, height } => {
                write!(f, "grid size {}x{} has no cells", width, height)
            }
            Self::GridTooLarge { width, height } => {
                write!(f, "grid size {}x{} is too large", width, height)
            }
            Self::EmptySnake => write!(f, "snake must have at least one part"),
            Self::SnakeTooLong { length, width } => write!(f,
                "snake of length {} doesn't fit into a grid of width {}", length, width),
            Self::ZeroInterval => write!(f, "tick interval must be non-zero"),
            Self::MalformedSnapshot { cells, size } => write!(f,
                "snapshot of size {}x{} can't hold {} cells", size.0, size.1, cells),
            Self::OddCardCount(count) => {
                write!(f, "card count must be even and non-zero, got {}", count)
            }
            Self::NotEnoughFaces { pairs, faces } => write!(f,
                "{} pairs need at least as many card faces, got {}", pairs, faces),
        }
    }
}

impl error::Error for GameError {}

/// Non-fatal condition the host may want to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameWarning {
    /// No free cell was found for the food, so the board has no food.
    NoFreeCell,
}

impl fmt::Display for GameWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFreeCell => write!(f, "no free cell left for the food"),
        }
    }
}
